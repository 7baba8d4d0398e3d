//! Product catalog module.
//!
//! Read models returned by the backend, the create/update payload, form
//! validation, and catalog filtering. Pure logic only (no IO, no HTTP).

pub mod filter;
pub mod form;
pub mod product;

pub use filter::ProductFilter;
pub use form::{ProductForm, accepts_quantity_input};
pub use product::{
    Product, ProductAuthor, ProductCategory, ProductRequest, StockStatus, DEFAULT_PRODUCT_TYPE,
    DEFAULT_UNIT,
};
