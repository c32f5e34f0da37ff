pub mod entities;
pub mod filter;

pub use entities::*;
pub use filter::{InquiryFilter, InquiryListQuery, InquirySort, InquirySortField};
