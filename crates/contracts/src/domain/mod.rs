pub mod category;
pub mod product;
pub mod variant;

pub use category::Category;
pub use product::Product;
pub use variant::ProductVariant;
