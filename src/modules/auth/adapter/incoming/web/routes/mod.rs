pub mod change_password;
pub mod login_user;
pub mod profile;
pub mod refresh_token;
pub mod register_user;
pub mod super_admin_login;
pub mod verify_email;

pub use change_password::*;
pub use login_user::*;
pub use profile::*;
pub use refresh_token::*;
pub use register_user::*;
pub use super_admin_login::*;
pub use verify_email::*;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user_handler)
        .service(login_user_handler)
        .service(refresh_token_handler)
        .service(verify_email_handler)
        .service(get_profile_handler)
        .service(update_profile_handler)
        .service(change_password_handler)
        .service(super_admin_login_handler);
}
