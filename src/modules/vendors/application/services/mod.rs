pub mod browse_vendors;
pub mod create_vendor;
pub mod manage_vendor;

pub use browse_vendors::{
    FeaturedVendorsService, GetMyVendorService, GetVendorService, ListVendorsService,
};
pub use create_vendor::CreateVendorService;
pub use manage_vendor::{DeleteVendorService, UpdateVendorService};
