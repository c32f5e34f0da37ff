use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::domain::{
    ContentFilter, ContentSort, UserListFilter, UserSort,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::ideas::application::domain::Idea;
use crate::modules::vendors::application::domain::Vendor;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModerationRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Moderation reads and writes over users, vendors and ideas, regardless of
/// status or publication.
#[async_trait]
pub trait ModerationRepository: Send + Sync {
    async fn find_vendor(&self, vendor_id: Uuid) -> Result<Option<Vendor>, ModerationRepositoryError>;

    /// Persists status, verification, featuring and approval fields only.
    async fn save_vendor(&self, vendor: &Vendor) -> Result<Vendor, ModerationRepositoryError>;

    async fn find_idea(&self, idea_id: Uuid) -> Result<Option<Idea>, ModerationRepositoryError>;

    /// Persists publication and featuring fields only.
    async fn save_idea(&self, idea: &Idea) -> Result<Idea, ModerationRepositoryError>;

    /// Active and deactivated accounts alike.
    async fn list_users(
        &self,
        filter: &UserListFilter,
        sort: UserSort,
        page: PageRequest,
    ) -> Result<PageResult<User>, ModerationRepositoryError>;

    /// Drafts and published ideas alike; soft-deleted ideas are skipped.
    async fn list_ideas(
        &self,
        filter: &ContentFilter,
        sort: ContentSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, ModerationRepositoryError>;
}
