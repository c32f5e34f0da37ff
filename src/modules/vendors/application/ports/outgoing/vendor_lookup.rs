use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Actor, Role};
use crate::modules::vendors::application::domain::VendorRef;
use crate::shared::scope::PartyScope;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VendorLookupError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Vendor identity lookups used by bookings, inquiries and reviews.
#[async_trait]
pub trait VendorLookup: Send + Sync {
    /// Active vendor by id, regardless of moderation status.
    async fn find_active(&self, vendor_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError>;

    /// The caller's own active vendor profile.
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError>;

    /// `None` for a vendor account without a profile.
    async fn scope_for(&self, actor: Actor) -> Result<Option<PartyScope>, VendorLookupError> {
        match actor.role {
            Role::Admin | Role::SuperAdmin => Ok(Some(PartyScope::All)),
            Role::Customer => Ok(Some(PartyScope::Customer(actor.user_id.value()))),
            Role::Vendor => Ok(self
                .find_by_owner(actor.user_id.value())
                .await?
                .map(|vendor| PartyScope::Vendor(vendor.id))),
        }
    }
}
