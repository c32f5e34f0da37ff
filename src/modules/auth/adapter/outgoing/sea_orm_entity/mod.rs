pub mod super_admins;
pub mod users;
