use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, GetProfileUseCase, LoginUserUseCase, RefreshTokenUseCase,
    RegisterUserUseCase, SuperAdminLoginUseCase, UpdateProfileUseCase, VerifyEmailUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub verify_email: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub super_admin_login: Arc<dyn SuperAdminLoginUseCase + Send + Sync>,
}
