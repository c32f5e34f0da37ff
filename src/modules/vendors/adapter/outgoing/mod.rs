pub mod sea_orm_entity;
pub mod vendor_query_postgres;
pub mod vendor_repository_postgres;

pub use vendor_query_postgres::VendorQueryPostgres;
pub use vendor_repository_postgres::VendorRepositoryPostgres;
