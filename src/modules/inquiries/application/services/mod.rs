pub mod browse_inquiries;
pub mod create_inquiry;
pub mod manage_inquiry;

pub use browse_inquiries::{
    GetInquiryService, ListInquiriesService, RecentInquiriesService, UnreadCountService,
};
pub use create_inquiry::CreateInquiryService;
pub use manage_inquiry::{
    AddInquiryMessageService, DeleteInquiryService, MarkInquiryReadService,
    UpdateInquiryStatusService,
};

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::Inquiry;
use crate::modules::inquiries::application::ports::incoming::use_cases::InquiryError;
use crate::modules::inquiries::application::ports::outgoing::{
    InquiryQuery, InquiryRepositoryError,
};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::scope::PartyScope;

fn repository_error(e: InquiryRepositoryError) -> InquiryError {
    match e {
        InquiryRepositoryError::NotFound => InquiryError::NotFound,
        other => InquiryError::Repository(other.to_string()),
    }
}

async fn caller_scope<L>(lookup: &L, actor: Actor) -> Result<Option<PartyScope>, InquiryError>
where
    L: VendorLookup,
{
    lookup
        .scope_for(actor)
        .await
        .map_err(|e| InquiryError::Repository(e.to_string()))
}

/// Loads an active inquiry the caller is a party to.
async fn visible_inquiry<Q, L>(
    query: &Q,
    lookup: &L,
    actor: Actor,
    inquiry_id: Uuid,
) -> Result<Inquiry, InquiryError>
where
    Q: InquiryQuery,
    L: VendorLookup,
{
    let inquiry = query
        .find_by_id(inquiry_id)
        .await
        .map_err(|e| InquiryError::Repository(e.to_string()))?
        .ok_or(InquiryError::NotFound)?;

    let allowed = caller_scope(lookup, actor)
        .await?
        .is_some_and(|scope| scope.allows(inquiry.customer_id, inquiry.vendor_id));
    if !allowed {
        return Err(InquiryError::Forbidden(
            "You can only access your own inquiries".into(),
        ));
    }

    Ok(inquiry)
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::inquiries::application::domain::{
        Inquiry, InquiryFilter, InquirySort, NewInquiry,
    };
    use crate::modules::inquiries::application::ports::outgoing::{
        InquiryQuery, InquiryQueryError, InquiryRepository, InquiryRepositoryError,
    };
    use crate::shared::pagination::{PageRequest, PageResult};
    use crate::shared::scope::PartyScope;
    use crate::tests::support::stubs::sample_inquiry;

    #[derive(Default)]
    pub struct InMemoryInquiries {
        pub rows: Mutex<Vec<(Inquiry, bool)>>,
        pub last_scope: Mutex<Option<PartyScope>>,
    }

    impl InMemoryInquiries {
        pub fn with(inquiries: Vec<Inquiry>) -> Self {
            Self {
                rows: Mutex::new(inquiries.into_iter().map(|i| (i, true)).collect()),
                ..Default::default()
            }
        }

        pub fn get(&self, id: Uuid) -> Option<(Inquiry, bool)> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|(i, _)| i.id == id)
                .cloned()
        }

        fn visible(&self, scope: PartyScope) -> Vec<Inquiry> {
            *self.last_scope.lock().unwrap() = Some(scope);
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|(i, active)| *active && scope.allows(i.customer_id, i.vendor_id))
                .map(|(i, _)| i.clone())
                .collect()
        }
    }

    #[async_trait]
    impl InquiryQuery for Arc<InMemoryInquiries> {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Inquiry>, InquiryQueryError> {
            Ok(self.get(id).filter(|(_, active)| *active).map(|(i, _)| i))
        }

        async fn list(
            &self,
            scope: PartyScope,
            filter: InquiryFilter,
            _: InquirySort,
            page: PageRequest,
        ) -> Result<PageResult<Inquiry>, InquiryQueryError> {
            let rows = self
                .visible(scope)
                .into_iter()
                .filter(|i| filter.status.map_or(true, |s| i.status == s))
                .collect();
            Ok(PageResult::from_ordered(rows, page))
        }

        async fn unread_count(
            &self,
            scope: PartyScope,
            reader: Uuid,
        ) -> Result<u64, InquiryQueryError> {
            Ok(self
                .visible(scope)
                .iter()
                .filter(|i| i.has_unread_for(reader))
                .count() as u64)
        }

        async fn recent(
            &self,
            scope: PartyScope,
            limit: u64,
        ) -> Result<Vec<Inquiry>, InquiryQueryError> {
            let mut rows = self.visible(scope);
            rows.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
            rows.truncate(limit as usize);
            Ok(rows)
        }
    }

    #[async_trait]
    impl InquiryRepository for Arc<InMemoryInquiries> {
        async fn create(&self, new: NewInquiry) -> Result<Inquiry, InquiryRepositoryError> {
            let mut inquiry = sample_inquiry(Uuid::new_v4(), new.customer_id, new.vendor_id);
            inquiry.subject = new.subject;
            inquiry.message = new.message;
            inquiry.messages = new.messages;
            inquiry.urgency = new.urgency;
            self.rows.lock().unwrap().push((inquiry.clone(), true));
            Ok(inquiry)
        }

        async fn save(&self, inquiry: &Inquiry) -> Result<Inquiry, InquiryRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|(i, _)| i.id == inquiry.id)
                .ok_or(InquiryRepositoryError::NotFound)?;
            row.0 = inquiry.clone();
            Ok(inquiry.clone())
        }

        async fn soft_delete(&self, id: Uuid) -> Result<(), InquiryRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|(i, _)| i.id == id)
                .ok_or(InquiryRepositoryError::NotFound)?;
            row.1 = false;
            Ok(())
        }
    }
}
