mod movie;
mod search;
mod view;

pub use movie::MovieRecord;
pub use search::SearchCriteria;
pub use view::{BrowseView, SearchResponse};
