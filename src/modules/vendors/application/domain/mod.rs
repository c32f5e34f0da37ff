pub mod entities;
pub mod filter;

pub use entities::*;
pub use filter::{VendorFilter, VendorListQuery, VendorSort, VendorSortField};
