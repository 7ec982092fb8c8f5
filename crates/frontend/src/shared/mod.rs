pub mod escape;
pub mod paging;
pub mod query;
pub mod scroll;
