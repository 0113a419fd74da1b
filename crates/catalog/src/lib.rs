//! `zentro-catalog` — the external catalog's product model and client-side
//! search over a fetched product list.
//!
//! The catalog service owns product data; this crate never mutates it. What
//! lives here is the read-side logic the storefront runs locally: filtering,
//! sorting, pagination, and facet extraction for the filter bar.

pub mod product;
pub mod search;

pub use product::Product;
pub use search::{
    brands, categories, max_price, search, PageRequest, ProductFilter, ProductPage, SortOrder,
};
