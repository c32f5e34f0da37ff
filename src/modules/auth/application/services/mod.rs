pub mod change_password;
pub mod login_user;
pub mod profile;
pub mod refresh_token;
pub mod register_user;
pub mod super_admin;
pub mod verify_email;

pub use change_password::ChangePasswordService;
pub use login_user::LoginUserService;
pub use profile::{GetProfileService, UpdateProfileService};
pub use refresh_token::RefreshTokenService;
pub use register_user::RegisterUserService;
pub use super_admin::{SeedError, SuperAdminLoginService, SuperAdminSeeder};
pub use verify_email::VerifyEmailService;
