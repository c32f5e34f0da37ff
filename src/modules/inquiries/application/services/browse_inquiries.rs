use async_trait::async_trait;
use uuid::Uuid;

use super::{caller_scope, visible_inquiry};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryFilter, InquirySort};
use crate::modules::inquiries::application::ports::incoming::use_cases::{
    GetInquiryUseCase, InquiryError, ListInquiriesUseCase, RecentInquiriesUseCase,
    UnreadCountUseCase,
};
use crate::modules::inquiries::application::ports::outgoing::InquiryQuery;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::pagination::{PageRequest, PageResult};

fn query_error(e: impl ToString) -> InquiryError {
    InquiryError::Repository(e.to_string())
}

// ============================================================================
// List
// ============================================================================

pub struct ListInquiriesService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> ListInquiriesService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> ListInquiriesUseCase for ListInquiriesService<Q, L>
where
    Q: InquiryQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        filter: InquiryFilter,
        sort: InquirySort,
        page: PageRequest,
    ) -> Result<PageResult<Inquiry>, InquiryError> {
        let scope = caller_scope(&self.vendors, actor)
            .await?
            .ok_or(InquiryError::VendorNotFound)?;

        self.query
            .list(scope, filter, sort, page)
            .await
            .map_err(query_error)
    }
}

// ============================================================================
// Get
// ============================================================================

pub struct GetInquiryService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> GetInquiryService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> GetInquiryUseCase for GetInquiryService<Q, L>
where
    Q: InquiryQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<Inquiry, InquiryError> {
        visible_inquiry(&self.query, &self.vendors, actor, inquiry_id).await
    }
}

// ============================================================================
// Unread count
// ============================================================================

pub struct UnreadCountService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> UnreadCountService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> UnreadCountUseCase for UnreadCountService<Q, L>
where
    Q: InquiryQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor) -> Result<u64, InquiryError> {
        let Some(scope) = caller_scope(&self.vendors, actor).await? else {
            return Ok(0);
        };

        self.query
            .unread_count(scope, actor.user_id.value())
            .await
            .map_err(query_error)
    }
}

// ============================================================================
// Recent
// ============================================================================

pub struct RecentInquiriesService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> RecentInquiriesService<Q, L>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> RecentInquiriesUseCase for RecentInquiriesService<Q, L>
where
    Q: InquiryQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, limit: u64) -> Result<Vec<Inquiry>, InquiryError> {
        let Some(scope) = caller_scope(&self.vendors, actor).await? else {
            return Ok(vec![]);
        };

        self.query
            .recent(scope, limit.clamp(1, 50))
            .await
            .map_err(query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::inquiries::application::domain::MessageRequest;
    use crate::modules::inquiries::application::services::test_support::InMemoryInquiries;
    use crate::shared::scope::PartyScope;
    use crate::tests::support::stubs::{sample_inquiry, StubVendorLookup};
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    struct Fixture {
        customer: Uuid,
        vendor_owner: Uuid,
        vendor_id: Uuid,
        inquiry: Inquiry,
        store: Arc<InMemoryInquiries>,
    }

    fn fixture() -> Fixture {
        let customer = Uuid::new_v4();
        let vendor_owner = Uuid::new_v4();
        let vendor_id = Uuid::new_v4();
        let inquiry = sample_inquiry(Uuid::new_v4(), customer, vendor_id);
        let other = sample_inquiry(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        Fixture {
            customer,
            vendor_owner,
            vendor_id,
            store: Arc::new(InMemoryInquiries::with(vec![inquiry.clone(), other])),
            inquiry,
        }
    }

    // =====================================================
    // Scoping
    // =====================================================

    #[tokio::test]
    async fn vendor_lists_business_inquiries() {
        let f = fixture();
        let service = ListInquiriesService::new(
            f.store.clone(),
            StubVendorLookup::owned(f.vendor_id, f.vendor_owner),
        );

        let page = service
            .execute(
                Actor::new(f.vendor_owner, Role::Vendor),
                InquiryFilter::default(),
                InquirySort::default(),
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, f.inquiry.id);
        assert_eq!(
            *f.store.last_scope.lock().unwrap(),
            Some(PartyScope::Vendor(f.vendor_id))
        );
    }

    #[tokio::test]
    async fn vendor_without_profile_cannot_list() {
        let f = fixture();
        let service = ListInquiriesService::new(f.store.clone(), StubVendorLookup::default());

        assert_eq!(
            service
                .execute(
                    Actor::new(Uuid::new_v4(), Role::Vendor),
                    InquiryFilter::default(),
                    InquirySort::default(),
                    PageRequest::default(),
                )
                .await
                .unwrap_err(),
            InquiryError::VendorNotFound
        );
    }

    #[tokio::test]
    async fn stranger_cannot_view() {
        let f = fixture();
        let service = GetInquiryService::new(
            f.store.clone(),
            StubVendorLookup::owned(f.vendor_id, f.vendor_owner),
        );

        assert!(matches!(
            service
                .execute(Actor::new(Uuid::new_v4(), Role::Customer), f.inquiry.id)
                .await,
            Err(InquiryError::Forbidden(_))
        ));
        assert!(service
            .execute(Actor::new(f.customer, Role::Customer), f.inquiry.id)
            .await
            .is_ok());
    }

    // =====================================================
    // Unread / recent
    // =====================================================

    #[tokio::test]
    async fn unread_counts_only_messages_from_the_other_party() {
        let f = fixture();
        let service = UnreadCountService::new(
            f.store.clone(),
            StubVendorLookup::owned(f.vendor_id, f.vendor_owner),
        );

        // the opening message is the customer's own
        assert_eq!(
            service
                .execute(Actor::new(f.customer, Role::Customer))
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            service
                .execute(Actor::new(f.vendor_owner, Role::Vendor))
                .await
                .unwrap(),
            1
        );

        let mut replied = f.inquiry.clone();
        replied
            .add_message(
                f.vendor_owner,
                MessageRequest {
                    message: "We are available".into(),
                    attachments: vec![],
                },
                Utc::now(),
            )
            .unwrap();
        f.store.rows.lock().unwrap()[0].0 = replied;

        assert_eq!(
            service
                .execute(Actor::new(f.customer, Role::Customer))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn vendor_without_profile_has_nothing_unread() {
        let f = fixture();
        let service = UnreadCountService::new(f.store.clone(), StubVendorLookup::default());

        assert_eq!(
            service
                .execute(Actor::new(Uuid::new_v4(), Role::Vendor))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn recent_is_newest_activity_first() {
        let customer = Uuid::new_v4();
        let vendor_id = Uuid::new_v4();
        let mut old = sample_inquiry(Uuid::new_v4(), customer, vendor_id);
        old.last_message_at = Utc::now() - Duration::days(3);
        let fresh = sample_inquiry(Uuid::new_v4(), customer, vendor_id);

        let service = RecentInquiriesService::new(
            Arc::new(InMemoryInquiries::with(vec![old.clone(), fresh.clone()])),
            StubVendorLookup::default(),
        );

        let recent = service
            .execute(Actor::new(customer, Role::Customer), 1)
            .await
            .unwrap();

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, fresh.id);
    }
}
