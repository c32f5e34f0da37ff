pub mod change_password;
pub mod login_user;
pub mod profile;
pub mod refresh_token;
pub mod register_user;
pub mod super_admin_login;
pub mod verify_email;

pub use change_password::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase};
pub use login_user::{AuthSession, LoginError, LoginUserUseCase};
pub use profile::{
    GetProfileUseCase, ProfileError, UpdateProfileUseCase,
};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase, RefreshedToken};
pub use register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
pub use super_admin_login::{
    SuperAdminInfo, SuperAdminLoginError, SuperAdminLoginUseCase, SuperAdminSession,
};
pub use verify_email::{VerifyEmailError, VerifyEmailUseCase};
