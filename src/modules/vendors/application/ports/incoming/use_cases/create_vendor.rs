use async_trait::async_trait;

use super::VendorError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::vendors::application::domain::{Vendor, VendorProfile};

#[async_trait]
pub trait CreateVendorUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, profile: VendorProfile) -> Result<Vendor, VendorError>;
}
