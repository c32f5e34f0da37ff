use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::non_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdeaType {
    BlogPost,
    Gallery,
    UserStory,
    Tutorial,
    Trend,
}

impl IdeaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaType::BlogPost => "blog_post",
            IdeaType::Gallery => "gallery",
            IdeaType::UserStory => "user_story",
            IdeaType::Tutorial => "tutorial",
            IdeaType::Trend => "trend",
        }
    }
}

impl FromStr for IdeaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog_post" => Ok(IdeaType::BlogPost),
            "gallery" => Ok(IdeaType::Gallery),
            "user_story" => Ok(IdeaType::UserStory),
            "tutorial" => Ok(IdeaType::Tutorial),
            "trend" => Ok(IdeaType::Trend),
            other => Err(format!("unknown idea type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdeaCategory {
    Decoration,
    Fashion,
    Food,
    Photography,
    Venue,
    Planning,
    Budget,
    Traditions,
    Travel,
    Health,
    Other,
}

impl IdeaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaCategory::Decoration => "decoration",
            IdeaCategory::Fashion => "fashion",
            IdeaCategory::Food => "food",
            IdeaCategory::Photography => "photography",
            IdeaCategory::Venue => "venue",
            IdeaCategory::Planning => "planning",
            IdeaCategory::Budget => "budget",
            IdeaCategory::Traditions => "traditions",
            IdeaCategory::Travel => "travel",
            IdeaCategory::Health => "health",
            IdeaCategory::Other => "other",
        }
    }
}

impl fmt::Display for IdeaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decoration" => Ok(IdeaCategory::Decoration),
            "fashion" => Ok(IdeaCategory::Fashion),
            "food" => Ok(IdeaCategory::Food),
            "photography" => Ok(IdeaCategory::Photography),
            "venue" => Ok(IdeaCategory::Venue),
            "planning" => Ok(IdeaCategory::Planning),
            "budget" => Ok(IdeaCategory::Budget),
            "traditions" => Ok(IdeaCategory::Traditions),
            "travel" => Ok(IdeaCategory::Travel),
            "health" => Ok(IdeaCategory::Health),
            "other" => Ok(IdeaCategory::Other),
            other => Err(format!("unknown idea category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub idea_type: IdeaType,
    pub category: IdeaCategory,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_role: String,
    pub view_count: i32,
    pub like_count: i32,
    pub share_count: i32,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub is_featured: bool,
    pub featured_at: Option<DateTime<Utc>>,
    /// Minutes.
    pub reading_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trims entries and drops blanks and duplicates, keeping first occurrences.
fn clean_tags(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for tag in values.iter().filter_map(|v| non_blank(v)) {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values.iter().filter_map(|v| non_blank(v)).collect()
}

fn check_reading_time(value: Option<i32>) -> Result<(), String> {
    if value.is_some_and(|m| m < 0) {
        return Err("Reading time cannot be negative".into());
    }
    Ok(())
}

/// Body of `POST /ideas`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct IdeaRequest {
    #[schema(example = "Ten ways to use lotus flowers")]
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub idea_type: IdeaType,
    pub category: IdeaCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
    /// Defaults to the author's account name.
    pub author_name: Option<String>,
    pub reading_time: Option<i32>,
}

/// A validated idea, inserted unpublished.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdea {
    pub author_id: Uuid,
    pub author_name: String,
    pub author_role: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub idea_type: IdeaType,
    pub category: IdeaCategory,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
    pub reading_time: Option<i32>,
}

impl NewIdea {
    pub fn from_request(
        author_id: Uuid,
        account_name: &str,
        author_role: &str,
        request: IdeaRequest,
    ) -> Result<Self, String> {
        let title = non_blank(&request.title).ok_or("Title is required")?;
        let content = non_blank(&request.content).ok_or("Content is required")?;
        check_reading_time(request.reading_time)?;

        let author_name = request
            .author_name
            .as_deref()
            .and_then(non_blank)
            .unwrap_or_else(|| account_name.trim().to_string());

        Ok(Self {
            author_id,
            author_name,
            author_role: author_role.to_string(),
            title,
            content,
            excerpt: request.excerpt.as_deref().and_then(non_blank),
            idea_type: request.idea_type,
            category: request.category,
            tags: clean_tags(request.tags),
            images: clean_list(request.images),
            featured_image: request.featured_image.as_deref().and_then(non_blank),
            video_url: request.video_url.as_deref().and_then(non_blank),
            reading_time: request.reading_time,
        })
    }
}

/// Body of `PUT /ideas/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct IdeaChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub idea_type: Option<IdeaType>,
    pub category: Option<IdeaCategory>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
    pub reading_time: Option<i32>,
    pub is_published: Option<bool>,
}

impl IdeaChanges {
    pub fn is_empty(&self) -> bool {
        self == &IdeaChanges::default()
    }
}

impl Idea {
    /// `published_at` is stamped the first time the idea goes from unpublished to published.
    pub fn apply(&mut self, changes: IdeaChanges, now: DateTime<Utc>) -> Result<(), String> {
        check_reading_time(changes.reading_time)?;

        if let Some(title) = changes.title {
            self.title = non_blank(&title).ok_or("Title cannot be empty")?;
        }
        if let Some(content) = changes.content {
            self.content = non_blank(&content).ok_or("Content cannot be empty")?;
        }
        if let Some(excerpt) = changes.excerpt {
            self.excerpt = non_blank(&excerpt);
        }
        if let Some(idea_type) = changes.idea_type {
            self.idea_type = idea_type;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(tags) = changes.tags {
            self.tags = clean_tags(tags);
        }
        if let Some(images) = changes.images {
            self.images = clean_list(images);
        }
        if let Some(image) = changes.featured_image {
            self.featured_image = non_blank(&image);
        }
        if let Some(url) = changes.video_url {
            self.video_url = non_blank(&url);
        }
        if changes.reading_time.is_some() {
            self.reading_time = changes.reading_time;
        }
        if let Some(publish) = changes.is_published {
            if publish && !self.is_published && self.published_at.is_none() {
                self.published_at = Some(now);
            }
            self.is_published = publish;
        }

        self.updated_at = now;
        Ok(())
    }
}

/// Body of `POST /ideas/{id}/like`.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub is_liked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LikeOutcome {
    #[schema(example = "Idea liked")]
    pub message: String,
    pub like_count: i32,
}
