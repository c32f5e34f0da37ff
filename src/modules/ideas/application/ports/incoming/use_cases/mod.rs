pub mod browse_ideas;
pub mod create_idea;
pub mod engagement;
pub mod manage_idea;

pub use browse_ideas::{GetIdeaUseCase, ListIdeasUseCase, RelatedIdeasUseCase, TrendingIdeasUseCase};
pub use create_idea::CreateIdeaUseCase;
pub use engagement::{LikeIdeaUseCase, ShareIdeaUseCase};
pub use manage_idea::{DeleteIdeaUseCase, UpdateIdeaUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdeaError {
    #[error("Idea not found")]
    NotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
