pub mod idea_query;
pub mod idea_repository;

pub use idea_query::{IdeaQuery, IdeaQueryError};
pub use idea_repository::{IdeaRepository, IdeaRepositoryError};
