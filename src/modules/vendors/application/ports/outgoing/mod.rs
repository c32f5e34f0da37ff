pub mod vendor_lookup;
pub mod vendor_query;
pub mod vendor_repository;

pub use vendor_lookup::{VendorLookup, VendorLookupError};
pub use vendor_query::{VendorQuery, VendorQueryError};
pub use vendor_repository::{VendorRepository, VendorRepositoryError};
