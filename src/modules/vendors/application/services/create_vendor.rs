use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::{Actor, Role};
use crate::modules::vendors::application::domain::{NewVendor, Vendor, VendorProfile};
use crate::modules::vendors::application::ports::incoming::use_cases::{
    CreateVendorUseCase, VendorError,
};
use crate::modules::vendors::application::ports::outgoing::{
    VendorRepository, VendorRepositoryError,
};

pub struct CreateVendorService<R>
where
    R: VendorRepository,
{
    repository: R,
}

impl<R> CreateVendorService<R>
where
    R: VendorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateVendorUseCase for CreateVendorService<R>
where
    R: VendorRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, profile: VendorProfile) -> Result<Vendor, VendorError> {
        if actor.role != Role::Vendor {
            return Err(VendorError::Forbidden(
                "Only vendor accounts can create a vendor profile".into(),
            ));
        }

        let new_vendor =
            NewVendor::from_profile(actor.user_id.value(), profile).map_err(VendorError::Validation)?;

        let vendor = self.repository.create(new_vendor).await.map_err(|e| match e {
            VendorRepositoryError::AlreadyExists => VendorError::AlreadyExists,
            other => VendorError::Repository(other.to_string()),
        })?;

        info!(vendor_id = %vendor.id, user_id = %vendor.user_id, "Vendor profile created");
        Ok(vendor)
    }
}
