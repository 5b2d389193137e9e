use std::io::{self, Write};

use anyhow::Result;
use cinedex_core::CinedexError;
use cinedex_core::error::ErrorPayload;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn failure_payload(operation: &str, err: &anyhow::Error) -> ErrorPayload {
    match err.downcast_ref::<CinedexError>() {
        Some(core_err) => {
            let mut payload = core_err.to_payload(operation);
            payload.message = format!("{err:#}");
            payload
        }
        None => CinedexError::Internal(format!("{err:#}")).to_payload(operation),
    }
}

pub(super) fn print_failure(payload: &ErrorPayload) {
    let mut stderr = io::stderr().lock();
    // stderr is the last resort; nothing to do if it is gone.
    let _ = serde_json::to_writer_pretty(&mut stderr, payload);
    let _ = writeln!(stderr);
}
