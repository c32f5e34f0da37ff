pub mod favorite_query_postgres;
pub mod favorite_repository_postgres;
pub mod sea_orm_entity;

pub use favorite_query_postgres::FavoriteQueryPostgres;
pub use favorite_repository_postgres::FavoriteRepositoryPostgres;
