pub mod inquiry_query;
pub mod inquiry_repository;

pub use inquiry_query::{InquiryQuery, InquiryQueryError};
pub use inquiry_repository::{InquiryRepository, InquiryRepositoryError};
