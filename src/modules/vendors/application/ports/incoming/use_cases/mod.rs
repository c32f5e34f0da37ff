pub mod browse_vendors;
pub mod create_vendor;
pub mod manage_vendor;

pub use browse_vendors::{
    FeaturedVendorsUseCase, GetMyVendorUseCase, GetVendorUseCase, ListVendorsUseCase,
};
pub use create_vendor::CreateVendorUseCase;
pub use manage_vendor::{DeleteVendorUseCase, UpdateVendorUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VendorError {
    #[error("Vendor not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("User already has a vendor profile")]
    AlreadyExists,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
