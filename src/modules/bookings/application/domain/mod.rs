pub mod entities;
pub mod filter;
pub mod payment;

pub use entities::*;
pub use filter::{BookingFilter, BookingListQuery, BookingSort, BookingSortField};
pub use payment::PaymentState;
