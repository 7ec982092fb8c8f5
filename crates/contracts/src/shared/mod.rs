pub mod error;
pub mod selection;

pub use error::StoreError;
pub use selection::CategorySelection;
