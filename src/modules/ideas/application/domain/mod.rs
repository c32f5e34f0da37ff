pub mod entities;
pub mod filter;
pub mod trending;

pub use entities::*;
pub use filter::{IdeaFilter, IdeaListQuery, IdeaSort, IdeaSortBy};
pub use trending::{rank_by_trending, rank_by_trending_ascending, trending_score, TrendingIdea};
