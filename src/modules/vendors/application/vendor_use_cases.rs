use std::sync::Arc;

use crate::modules::vendors::application::ports::incoming::use_cases::{
    CreateVendorUseCase, DeleteVendorUseCase, FeaturedVendorsUseCase, GetMyVendorUseCase,
    GetVendorUseCase, ListVendorsUseCase, UpdateVendorUseCase,
};

#[derive(Clone)]
pub struct VendorUseCases {
    pub create: Arc<dyn CreateVendorUseCase + Send + Sync>,
    pub list: Arc<dyn ListVendorsUseCase + Send + Sync>,
    pub get: Arc<dyn GetVendorUseCase + Send + Sync>,
    pub get_mine: Arc<dyn GetMyVendorUseCase + Send + Sync>,
    pub featured: Arc<dyn FeaturedVendorsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateVendorUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteVendorUseCase + Send + Sync>,
}
