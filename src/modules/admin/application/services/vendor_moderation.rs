use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::repository_error;
use crate::modules::admin::application::domain::VendorStatusChange;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ListVendorsForReviewUseCase, UpdateVendorStatusUseCase,
};
use crate::modules::admin::application::ports::outgoing::ModerationRepository;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::email::application::ports::incoming::VendorNotifier;
use crate::modules::vendors::application::domain::{
    Vendor, VendorFilter, VendorSort, VendorStatus,
};
use crate::modules::vendors::application::ports::outgoing::VendorQuery;
use crate::shared::pagination::{PageRequest, PageResult};

// =====================================================
// Review queue
// =====================================================

pub struct ListVendorsForReviewService<V>
where
    V: VendorQuery,
{
    query: V,
}

impl<V> ListVendorsForReviewService<V>
where
    V: VendorQuery,
{
    pub fn new(query: V) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<V> ListVendorsForReviewUseCase for ListVendorsForReviewService<V>
where
    V: VendorQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, AdminError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(|e| AdminError::Repository(e.to_string()))
    }
}

// =====================================================
// Status decisions
// =====================================================

pub struct UpdateVendorStatusService<M, U>
where
    M: ModerationRepository,
    U: UserQuery,
{
    repository: M,
    users: U,
    notifier: Arc<dyn VendorNotifier + Send + Sync>,
}

impl<M, U> UpdateVendorStatusService<M, U>
where
    M: ModerationRepository,
    U: UserQuery,
{
    pub fn new(repository: M, users: U, notifier: Arc<dyn VendorNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            users,
            notifier,
        }
    }

    /// Looks up the owner's address, then sends in the background. Failures are only logged.
    async fn notify(&self, vendor: &Vendor) {
        let owner = match self.users.find_by_id(vendor.user_id).await {
            Ok(Some(owner)) => owner,
            Ok(None) => {
                warn!(vendor_id = %vendor.id, "Vendor owner not found, skipping notification");
                return;
            }
            Err(e) => {
                warn!(vendor_id = %vendor.id, error = %e, "Failed to load vendor owner");
                return;
            }
        };

        let notifier = Arc::clone(&self.notifier);
        let vendor_id = vendor.id;
        let status = vendor.status;
        let business_name = vendor.business_name.clone();
        let reason = vendor.rejection_reason.clone();

        tokio::spawn(async move {
            let sent = match status {
                VendorStatus::Approved => {
                    notifier
                        .send_vendor_approved(&owner.email, &business_name)
                        .await
                }
                _ => {
                    notifier
                        .send_vendor_rejected(&owner.email, &business_name, reason.as_deref())
                        .await
                }
            };
            if let Err(e) = sent {
                warn!(vendor_id = %vendor_id, error = %e, "Failed to send vendor status email");
            }
        });
    }
}

#[async_trait]
impl<M, U> UpdateVendorStatusUseCase for UpdateVendorStatusService<M, U>
where
    M: ModerationRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        admin_id: Uuid,
        vendor_id: Uuid,
        change: VendorStatusChange,
    ) -> Result<Vendor, AdminError> {
        let mut vendor = self
            .repository
            .find_vendor(vendor_id)
            .await
            .map_err(|e| repository_error(e, AdminError::VendorNotFound))?
            .ok_or(AdminError::VendorNotFound)?;

        change.apply(&mut vendor, admin_id, Utc::now());

        let saved = self
            .repository
            .save_vendor(&vendor)
            .await
            .map_err(|e| repository_error(e, AdminError::VendorNotFound))?;

        info!(
            vendor_id = %saved.id,
            admin_id = %admin_id,
            status = saved.status.as_str(),
            "Vendor status updated"
        );

        if change.notifies_vendor() {
            self.notify(&saved).await;
        }

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::services::test_support::InMemoryModeration;
    use crate::modules::auth::application::domain::entities::{Role, User};
    use crate::modules::auth::application::ports::outgoing::UserQueryError;
    use crate::modules::vendors::application::ports::outgoing::VendorQueryError;
    use crate::tests::support::stubs::{sample_user, sample_vendor, RecordingVendorNotifier};
    use std::sync::Mutex;

    struct Owners(Option<User>);

    #[async_trait]
    impl UserQuery for Owners {
        async fn find_by_id(&self, _: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.0.clone())
        }
        async fn find_by_email(&self, _: &str) -> Result<Option<User>, UserQueryError> {
            unimplemented!()
        }
    }

    fn owner(id: Uuid) -> Owners {
        let mut user = sample_user(id, Role::Vendor);
        user.email = "studio@example.com".into();
        Owners(Some(user))
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn decision(status: VendorStatus, reason: Option<&str>) -> VendorStatusChange {
        VendorStatusChange {
            status,
            rejection_reason: reason.map(str::to_string),
            is_verified: None,
            is_featured: None,
        }
    }

    fn pending_vendor(owner_id: Uuid) -> Vendor {
        let mut vendor = sample_vendor(Uuid::new_v4(), owner_id);
        vendor.status = VendorStatus::Pending;
        vendor.approved_at = None;
        vendor
    }

    #[tokio::test]
    async fn approval_is_saved_and_announced() {
        let owner_id = Uuid::new_v4();
        let vendor = pending_vendor(owner_id);
        let store = InMemoryModeration::with_vendor(vendor.clone());
        let notifier = Arc::new(RecordingVendorNotifier::default());
        let service = UpdateVendorStatusService::new(store.clone(), owner(owner_id), notifier.clone());
        let admin = Uuid::new_v4();

        let updated = service
            .execute(admin, vendor.id, decision(VendorStatus::Approved, None))
            .await
            .unwrap();
        settle().await;

        assert_eq!(updated.status, VendorStatus::Approved);
        assert_eq!(store.vendor(vendor.id).approved_by, Some(admin));
        assert_eq!(
            notifier.sent(),
            vec![("studio@example.com".to_string(), "approved".to_string())]
        );
    }

    #[tokio::test]
    async fn rejection_is_announced() {
        let owner_id = Uuid::new_v4();
        let vendor = pending_vendor(owner_id);
        let notifier = Arc::new(RecordingVendorNotifier::default());
        let service = UpdateVendorStatusService::new(
            InMemoryModeration::with_vendor(vendor.clone()),
            owner(owner_id),
            notifier.clone(),
        );

        let updated = service
            .execute(
                Uuid::new_v4(),
                vendor.id,
                decision(VendorStatus::Rejected, Some("Incomplete profile")),
            )
            .await
            .unwrap();
        settle().await;

        assert_eq!(updated.rejection_reason.as_deref(), Some("Incomplete profile"));
        assert_eq!(notifier.sent()[0].1, "rejected");
    }

    #[tokio::test]
    async fn mail_failure_does_not_fail_the_decision() {
        let owner_id = Uuid::new_v4();
        let vendor = pending_vendor(owner_id);
        let service = UpdateVendorStatusService::new(
            InMemoryModeration::with_vendor(vendor.clone()),
            owner(owner_id),
            Arc::new(RecordingVendorNotifier::failing()),
        );

        let result = service
            .execute(Uuid::new_v4(), vendor.id, decision(VendorStatus::Approved, None))
            .await;
        settle().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn suspension_sends_nothing() {
        let owner_id = Uuid::new_v4();
        let vendor = sample_vendor(Uuid::new_v4(), owner_id);
        let notifier = Arc::new(RecordingVendorNotifier::default());
        let service = UpdateVendorStatusService::new(
            InMemoryModeration::with_vendor(vendor.clone()),
            owner(owner_id),
            notifier.clone(),
        );

        service
            .execute(Uuid::new_v4(), vendor.id, decision(VendorStatus::Suspended, None))
            .await
            .unwrap();
        settle().await;

        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_owner_skips_mail() {
        let vendor = pending_vendor(Uuid::new_v4());
        let notifier = Arc::new(RecordingVendorNotifier::default());
        let service = UpdateVendorStatusService::new(
            InMemoryModeration::with_vendor(vendor.clone()),
            Owners(None),
            notifier.clone(),
        );

        let result = service
            .execute(Uuid::new_v4(), vendor.id, decision(VendorStatus::Approved, None))
            .await;
        settle().await;

        assert!(result.is_ok());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_vendor() {
        let service = UpdateVendorStatusService::new(
            Arc::new(InMemoryModeration::default()),
            Owners(None),
            Arc::new(RecordingVendorNotifier::default()),
        );

        assert_eq!(
            service
                .execute(Uuid::new_v4(), Uuid::new_v4(), decision(VendorStatus::Approved, None))
                .await
                .unwrap_err(),
            AdminError::VendorNotFound
        );
    }

    // =====================================================
    // Review queue
    // =====================================================

    #[derive(Default)]
    struct RecordingVendorQuery {
        seen: Mutex<Option<VendorFilter>>,
    }

    #[async_trait]
    impl VendorQuery for RecordingVendorQuery {
        async fn find_by_id(&self, _: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
            unimplemented!()
        }
        async fn find_by_owner(&self, _: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
            unimplemented!()
        }
        async fn list(
            &self,
            filter: VendorFilter,
            _: VendorSort,
            page: PageRequest,
        ) -> Result<PageResult<Vendor>, VendorQueryError> {
            *self.seen.lock().unwrap() = Some(filter);
            let vendors = vec![pending_vendor(Uuid::new_v4())];
            Ok(PageResult::new(vendors, page, 1))
        }
        async fn featured(&self, _: u64) -> Result<Vec<Vendor>, VendorQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn review_queue_passes_status_through() {
        let service = ListVendorsForReviewService::new(RecordingVendorQuery::default());
        let filter = VendorFilter {
            status: Some(VendorStatus::Suspended),
            ..Default::default()
        };

        let page = service
            .execute(filter.clone(), VendorSort::default(), PageRequest::new(None, None))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(service.query.seen.lock().unwrap().clone(), Some(filter));
    }
}
