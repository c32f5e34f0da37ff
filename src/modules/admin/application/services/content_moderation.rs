use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::repository_error;
use crate::modules::admin::application::domain::{
    ContentFilter, ContentSort, ContentStatusChange, FeaturedChange, FeaturedItemType,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ListContentUseCase, SetFeaturedUseCase, UpdateContentStatusUseCase,
};
use crate::modules::admin::application::ports::outgoing::ModerationRepository;
use crate::modules::ideas::application::domain::Idea;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListContentService<M>
where
    M: ModerationRepository,
{
    repository: M,
}

impl<M> ListContentService<M>
where
    M: ModerationRepository,
{
    pub fn new(repository: M) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<M> ListContentUseCase for ListContentService<M>
where
    M: ModerationRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: ContentFilter,
        sort: ContentSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, AdminError> {
        self.repository
            .list_ideas(&filter, sort, page)
            .await
            .map_err(|e| AdminError::Repository(e.to_string()))
    }
}

pub struct UpdateContentStatusService<M>
where
    M: ModerationRepository,
{
    repository: M,
}

impl<M> UpdateContentStatusService<M>
where
    M: ModerationRepository,
{
    pub fn new(repository: M) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<M> UpdateContentStatusUseCase for UpdateContentStatusService<M>
where
    M: ModerationRepository + Send + Sync,
{
    async fn execute(&self, idea_id: Uuid, change: ContentStatusChange) -> Result<Idea, AdminError> {
        let mut idea = self
            .repository
            .find_idea(idea_id)
            .await
            .map_err(|e| repository_error(e, AdminError::IdeaNotFound))?
            .ok_or(AdminError::IdeaNotFound)?;

        change.apply(&mut idea, Utc::now());

        let saved = self
            .repository
            .save_idea(&idea)
            .await
            .map_err(|e| repository_error(e, AdminError::IdeaNotFound))?;

        info!(idea_id = %saved.id, is_published = saved.is_published, "Idea status updated");
        Ok(saved)
    }
}

pub struct SetFeaturedService<M>
where
    M: ModerationRepository,
{
    repository: M,
}

impl<M> SetFeaturedService<M>
where
    M: ModerationRepository,
{
    pub fn new(repository: M) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<M> SetFeaturedUseCase for SetFeaturedService<M>
where
    M: ModerationRepository + Send + Sync,
{
    async fn execute(&self, change: FeaturedChange) -> Result<(), AdminError> {
        let now = Utc::now();

        match change.item_type {
            FeaturedItemType::Vendor => {
                let mut vendor = self
                    .repository
                    .find_vendor(change.item_id)
                    .await
                    .map_err(|e| repository_error(e, AdminError::VendorNotFound))?
                    .ok_or(AdminError::VendorNotFound)?;
                change.apply_to_vendor(&mut vendor, now);
                self.repository
                    .save_vendor(&vendor)
                    .await
                    .map_err(|e| repository_error(e, AdminError::VendorNotFound))?;
            }
            FeaturedItemType::Idea => {
                let mut idea = self
                    .repository
                    .find_idea(change.item_id)
                    .await
                    .map_err(|e| repository_error(e, AdminError::IdeaNotFound))?
                    .ok_or(AdminError::IdeaNotFound)?;
                change.apply_to_idea(&mut idea, now);
                self.repository
                    .save_idea(&idea)
                    .await
                    .map_err(|e| repository_error(e, AdminError::IdeaNotFound))?;
            }
        }

        info!(
            item_id = %change.item_id,
            item_type = change.item_type.as_str(),
            is_featured = change.is_featured,
            "Featured status updated"
        );
        Ok(())
    }
}
