pub mod browse_ideas;
pub mod create_idea;
pub mod engagement;
pub mod manage_idea;

pub use browse_ideas::{GetIdeaService, ListIdeasService, RelatedIdeasService, TrendingIdeasService};
pub use create_idea::CreateIdeaService;
pub use engagement::{LikeIdeaService, ShareIdeaService};
pub use manage_idea::{DeleteIdeaService, UpdateIdeaService};

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::ideas::application::domain::Idea;
use crate::modules::ideas::application::ports::incoming::use_cases::IdeaError;
use crate::modules::ideas::application::ports::outgoing::{IdeaQuery, IdeaRepositoryError};

pub const DEFAULT_TRENDING_LIMIT: u64 = 10;
pub const DEFAULT_RELATED_LIMIT: u64 = 5;
const MAX_FEED_LIMIT: u64 = 50;

fn feed_limit(limit: u64) -> u64 {
    limit.clamp(1, MAX_FEED_LIMIT)
}

fn repository_error(e: IdeaRepositoryError) -> IdeaError {
    match e {
        IdeaRepositoryError::NotFound => IdeaError::NotFound,
        other => IdeaError::Repository(other.to_string()),
    }
}

fn query_error(e: impl ToString) -> IdeaError {
    IdeaError::Repository(e.to_string())
}

/// The active idea, provided the caller wrote it or is an admin.
async fn editable_idea<Q: IdeaQuery>(
    query: &Q,
    actor: Actor,
    idea_id: Uuid,
    action: &str,
) -> Result<Idea, IdeaError> {
    let idea = query
        .find_by_id(idea_id)
        .await
        .map_err(query_error)?
        .ok_or(IdeaError::NotFound)?;

    if idea.author_id != actor.user_id.value() && !actor.is_admin() {
        return Err(IdeaError::Forbidden(format!(
            "You can only {action} your own ideas"
        )));
    }
    Ok(idea)
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::ideas::application::domain::{Idea, IdeaFilter, IdeaSort, NewIdea};
    use crate::modules::ideas::application::ports::outgoing::{
        IdeaQuery, IdeaQueryError, IdeaRepository, IdeaRepositoryError,
    };
    use crate::shared::pagination::{PageRequest, PageResult};
    use crate::tests::support::stubs::sample_idea;

    /// Rows in insertion order with their active flag.
    #[derive(Default)]
    pub struct InMemoryIdeas {
        pub rows: Mutex<Vec<(Idea, bool)>>,
    }

    impl InMemoryIdeas {
        pub fn with(ideas: Vec<Idea>) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(ideas.into_iter().map(|i| (i, true)).collect()),
            })
        }

        pub fn get(&self, id: Uuid) -> Option<(Idea, bool)> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|(i, _)| i.id == id)
                .cloned()
        }

        fn published(&self) -> Vec<Idea> {
            let mut ideas: Vec<Idea> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|(i, active)| *active && i.is_published)
                .map(|(i, _)| i.clone())
                .collect();
            ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            ideas
        }

        fn update<T>(
            &self,
            id: Uuid,
            f: impl FnOnce(&mut Idea) -> T,
        ) -> Result<T, IdeaRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let (idea, _) = rows
                .iter_mut()
                .find(|(i, active)| *active && i.id == id)
                .ok_or(IdeaRepositoryError::NotFound)?;
            Ok(f(idea))
        }
    }

    #[async_trait]
    impl IdeaQuery for Arc<InMemoryIdeas> {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Idea>, IdeaQueryError> {
            Ok(self.get(id).filter(|(_, active)| *active).map(|(i, _)| i))
        }

        async fn list(
            &self,
            filter: IdeaFilter,
            _: IdeaSort,
            page: PageRequest,
        ) -> Result<PageResult<Idea>, IdeaQueryError> {
            let ideas = self.all_matching(filter).await?;
            Ok(PageResult::from_ordered(ideas, page))
        }

        async fn all_matching(&self, filter: IdeaFilter) -> Result<Vec<Idea>, IdeaQueryError> {
            Ok(self
                .published()
                .into_iter()
                .filter(|i| filter.category.map_or(true, |c| c == i.category))
                .filter(|i| filter.idea_type.map_or(true, |t| t == i.idea_type))
                .collect())
        }

        async fn newest_published(&self, limit: u64) -> Result<Vec<Idea>, IdeaQueryError> {
            Ok(self.published().into_iter().take(limit as usize).collect())
        }

        async fn related(&self, idea: &Idea, limit: u64) -> Result<Vec<Idea>, IdeaQueryError> {
            let mut related: Vec<Idea> = self
                .published()
                .into_iter()
                .filter(|i| i.id != idea.id)
                .filter(|i| {
                    i.category == idea.category
                        || i.idea_type == idea.idea_type
                        || i.tags.iter().any(|t| idea.tags.contains(t))
                })
                .collect();
            related.sort_by(|a, b| {
                b.view_count
                    .cmp(&a.view_count)
                    .then(b.like_count.cmp(&a.like_count))
            });
            related.truncate(limit as usize);
            Ok(related)
        }
    }

    #[async_trait]
    impl IdeaRepository for Arc<InMemoryIdeas> {
        async fn create(&self, new: NewIdea) -> Result<Idea, IdeaRepositoryError> {
            let mut idea = sample_idea(Uuid::new_v4(), new.author_id);
            idea.title = new.title;
            idea.author_name = new.author_name;
            idea.author_role = new.author_role;
            idea.category = new.category;
            idea.idea_type = new.idea_type;
            idea.tags = new.tags;
            idea.is_published = false;
            idea.published_at = None;
            self.rows.lock().unwrap().push((idea.clone(), true));
            Ok(idea)
        }

        async fn save(&self, idea: &Idea) -> Result<Idea, IdeaRepositoryError> {
            let saved = idea.clone();
            self.update(idea.id, |row| *row = saved.clone())?;
            Ok(saved)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<(), IdeaRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|(i, active)| *active && i.id == id)
                .ok_or(IdeaRepositoryError::NotFound)?;
            row.1 = false;
            Ok(())
        }

        async fn increment_views(&self, id: Uuid) -> Result<(), IdeaRepositoryError> {
            self.update(id, |idea| idea.view_count += 1)
        }

        async fn adjust_likes(&self, id: Uuid, liked: bool) -> Result<i32, IdeaRepositoryError> {
            self.update(id, |idea| {
                idea.like_count = if liked {
                    idea.like_count + 1
                } else {
                    (idea.like_count - 1).max(0)
                };
                idea.like_count
            })
        }

        async fn increment_shares(&self, id: Uuid) -> Result<i32, IdeaRepositoryError> {
            self.update(id, |idea| {
                idea.share_count += 1;
                idea.share_count
            })
        }
    }
}
