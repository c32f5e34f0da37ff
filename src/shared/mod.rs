pub mod api;
pub mod db;
pub mod pagination;
pub mod scope;
pub mod validation;
