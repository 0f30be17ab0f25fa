pub mod product;
pub mod listing;

pub use product::{final_price, Product, ProductDraft, ProductError, ProductStatus};
pub use listing::{paginate, search_products, Page, ProductQuery};
