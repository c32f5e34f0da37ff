use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::vendors::application::domain::{Vendor, VendorProfile};
use crate::modules::vendors::application::ports::incoming::use_cases::{
    DeleteVendorUseCase, UpdateVendorUseCase, VendorError,
};
use crate::modules::vendors::application::ports::outgoing::{
    VendorQuery, VendorRepository, VendorRepositoryError,
};

fn repository_error(e: VendorRepositoryError) -> VendorError {
    match e {
        VendorRepositoryError::NotFound => VendorError::NotFound,
        VendorRepositoryError::AlreadyExists => VendorError::AlreadyExists,
        VendorRepositoryError::DatabaseError(msg) => VendorError::Repository(msg),
    }
}

async fn owned_vendor<Q>(query: &Q, actor: Actor, vendor_id: Uuid, action: &str) -> Result<Vendor, VendorError>
where
    Q: VendorQuery,
{
    let vendor = query
        .find_by_id(vendor_id)
        .await
        .map_err(|e| VendorError::Repository(e.to_string()))?
        .ok_or(VendorError::NotFound)?;

    if !vendor.is_owned_by(actor.user_id.value()) {
        return Err(VendorError::Forbidden(format!(
            "You can only {action} your own vendor profile"
        )));
    }
    Ok(vendor)
}

pub struct UpdateVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateVendorUseCase for UpdateVendorService<Q, R>
where
    Q: VendorQuery + Send + Sync,
    R: VendorRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        vendor_id: Uuid,
        profile: VendorProfile,
    ) -> Result<Vendor, VendorError> {
        if profile.is_empty() {
            return Err(VendorError::Validation("No fields to update".into()));
        }
        profile.validate().map_err(VendorError::Validation)?;

        owned_vendor(&self.query, actor, vendor_id, "update").await?;

        let vendor = self
            .repository
            .update_profile(vendor_id, profile)
            .await
            .map_err(repository_error)?;

        info!(vendor_id = %vendor_id, "Vendor profile updated");
        Ok(vendor)
    }
}

pub struct DeleteVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteVendorUseCase for DeleteVendorService<Q, R>
where
    Q: VendorQuery + Send + Sync,
    R: VendorRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, vendor_id: Uuid) -> Result<(), VendorError> {
        owned_vendor(&self.query, actor, vendor_id, "delete").await?;

        self.repository
            .soft_delete(vendor_id)
            .await
            .map_err(repository_error)?;

        info!(vendor_id = %vendor_id, "Vendor profile deactivated");
        Ok(())
    }
}
