use async_trait::async_trait;
use uuid::Uuid;

use super::VendorError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::vendors::application::domain::{Vendor, VendorProfile};

#[async_trait]
pub trait UpdateVendorUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        vendor_id: Uuid,
        profile: VendorProfile,
    ) -> Result<Vendor, VendorError>;
}

#[async_trait]
pub trait DeleteVendorUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, vendor_id: Uuid) -> Result<(), VendorError>;
}
