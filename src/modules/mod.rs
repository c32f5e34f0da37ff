pub mod admin;
pub mod auth;
pub mod bookings;
pub mod email;
pub mod favorites;
pub mod ideas;
pub mod inquiries;
pub mod planning;
pub mod portfolio;
pub mod reviews;
pub mod vendors;
