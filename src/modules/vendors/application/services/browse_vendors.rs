use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::vendors::application::domain::{Vendor, VendorFilter, VendorSort};
use crate::modules::vendors::application::ports::incoming::use_cases::{
    FeaturedVendorsUseCase, GetMyVendorUseCase, GetVendorUseCase, ListVendorsUseCase, VendorError,
};
use crate::modules::vendors::application::ports::outgoing::{VendorQuery, VendorRepository};
use crate::shared::pagination::{PageRequest, PageResult};

fn query_error(e: impl ToString) -> VendorError {
    VendorError::Repository(e.to_string())
}

// ============================================================================
// List
// ============================================================================

pub struct ListVendorsService<Q>
where
    Q: VendorQuery,
{
    query: Q,
}

impl<Q> ListVendorsService<Q>
where
    Q: VendorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVendorsUseCase for ListVendorsService<Q>
where
    Q: VendorQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, VendorError> {
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(VendorError::Validation(
                    "min_price cannot exceed max_price".into(),
                ));
            }
        }

        self.query.list(filter, sort, page).await.map_err(query_error)
    }
}

// ============================================================================
// Get (public)
// ============================================================================

pub struct GetVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetVendorService<Q, R>
where
    Q: VendorQuery,
    R: VendorRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetVendorUseCase for GetVendorService<Q, R>
where
    Q: VendorQuery + Send + Sync,
    R: VendorRepository + Send + Sync,
{
    async fn execute(&self, vendor_id: Uuid) -> Result<Vendor, VendorError> {
        let mut vendor = self
            .query
            .find_by_id(vendor_id)
            .await
            .map_err(query_error)?
            .ok_or(VendorError::NotFound)?;

        match self.repository.increment_view_count(vendor_id).await {
            Ok(()) => vendor.view_count += 1,
            Err(e) => warn!(vendor_id = %vendor_id, error = %e, "Failed to count vendor view"),
        }

        Ok(vendor)
    }
}

// ============================================================================
// Get own profile
// ============================================================================

pub struct GetMyVendorService<Q>
where
    Q: VendorQuery,
{
    query: Q,
}

impl<Q> GetMyVendorService<Q>
where
    Q: VendorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyVendorUseCase for GetMyVendorService<Q>
where
    Q: VendorQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vendor, VendorError> {
        self.query
            .find_by_owner(user_id)
            .await
            .map_err(query_error)?
            .ok_or(VendorError::NotFound)
    }
}

// ============================================================================
// Featured
// ============================================================================

pub struct FeaturedVendorsService<Q>
where
    Q: VendorQuery,
{
    query: Q,
}

impl<Q> FeaturedVendorsService<Q>
where
    Q: VendorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FeaturedVendorsUseCase for FeaturedVendorsService<Q>
where
    Q: VendorQuery + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<Vendor>, VendorError> {
        self.query
            .featured(limit.clamp(1, 50))
            .await
            .map_err(query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vendors::application::domain::{NewVendor, VendorProfile};
    use crate::modules::vendors::application::ports::outgoing::{
        VendorQueryError, VendorRepositoryError,
    };
    use crate::tests::support::stubs::sample_vendor;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockVendorQuery {
        vendor: Option<Vendor>,
        featured_limit: Mutex<Option<u64>>,
    }

    #[async_trait]
    impl VendorQuery for MockVendorQuery {
        async fn find_by_id(&self, _: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
            Ok(self.vendor.clone())
        }

        async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
            Ok(self.vendor.clone().filter(|v| v.user_id == user_id))
        }

        async fn list(
            &self,
            _: VendorFilter,
            _: VendorSort,
            page: PageRequest,
        ) -> Result<PageResult<Vendor>, VendorQueryError> {
            Ok(PageResult::new(self.vendor.clone().into_iter().collect(), page, 1))
        }

        async fn featured(&self, limit: u64) -> Result<Vec<Vendor>, VendorQueryError> {
            *self.featured_limit.lock().unwrap() = Some(limit);
            Ok(vec![])
        }
    }

    struct CountingRepository {
        fail: bool,
        views: Mutex<u32>,
    }

    #[async_trait]
    impl VendorRepository for CountingRepository {
        async fn create(&self, _: NewVendor) -> Result<Vendor, VendorRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _: Uuid,
            _: VendorProfile,
        ) -> Result<Vendor, VendorRepositoryError> {
            unimplemented!()
        }

        async fn soft_delete(&self, _: Uuid) -> Result<(), VendorRepositoryError> {
            unimplemented!()
        }

        async fn increment_view_count(&self, _: Uuid) -> Result<(), VendorRepositoryError> {
            if self.fail {
                return Err(VendorRepositoryError::DatabaseError("timeout".into()));
            }
            *self.views.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn get_counts_the_view() {
        let vendor = sample_vendor(Uuid::new_v4(), Uuid::new_v4());
        let before = vendor.view_count;
        let service = GetVendorService::new(
            MockVendorQuery {
                vendor: Some(vendor.clone()),
                ..Default::default()
            },
            CountingRepository {
                fail: false,
                views: Mutex::new(0),
            },
        );

        let fetched = service.execute(vendor.id).await.unwrap();

        assert_eq!(fetched.view_count, before + 1);
        assert_eq!(*service.repository.views.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn get_survives_view_counter_failure() {
        let vendor = sample_vendor(Uuid::new_v4(), Uuid::new_v4());
        let service = GetVendorService::new(
            MockVendorQuery {
                vendor: Some(vendor.clone()),
                ..Default::default()
            },
            CountingRepository {
                fail: true,
                views: Mutex::new(0),
            },
        );

        assert_eq!(service.execute(vendor.id).await.unwrap().view_count, vendor.view_count);
    }

    #[tokio::test]
    async fn get_missing_vendor() {
        let service = GetVendorService::new(
            MockVendorQuery::default(),
            CountingRepository {
                fail: false,
                views: Mutex::new(0),
            },
        );

        assert_eq!(
            service.execute(Uuid::new_v4()).await.unwrap_err(),
            VendorError::NotFound
        );
    }

    #[tokio::test]
    async fn get_mine_without_profile() {
        let service = GetMyVendorService::new(MockVendorQuery::default());
        assert_eq!(
            service.execute(Uuid::new_v4()).await.unwrap_err(),
            VendorError::NotFound
        );
    }

    #[tokio::test]
    async fn list_rejects_inverted_price_filter() {
        let service = ListVendorsService::new(MockVendorQuery::default());
        let filter = VendorFilter {
            min_price: Some(500.0),
            max_price: Some(100.0),
            ..Default::default()
        };

        assert!(matches!(
            service
                .execute(filter, VendorSort::default(), PageRequest::default())
                .await,
            Err(VendorError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn featured_limit_is_clamped() {
        let service = FeaturedVendorsService::new(MockVendorQuery::default());

        service.execute(0).await.unwrap();
        assert_eq!(*service.query.featured_limit.lock().unwrap(), Some(1));

        service.execute(500).await.unwrap();
        assert_eq!(*service.query.featured_limit.lock().unwrap(), Some(50));
    }
}
