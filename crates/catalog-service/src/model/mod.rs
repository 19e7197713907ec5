//! Plain data types: the product record, its listing filter and pagination.

pub mod filter;
pub mod pagination;
pub mod product;

pub use filter::*;
pub use pagination::*;
pub use product::*;
