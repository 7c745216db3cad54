use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::PostCategory;

/// Post实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,

    pub title: String,

    pub author: String,

    pub category: PostCategory,

    /// 草稿不会出现在公开列表和已发布查询中
    #[serde(default)]
    pub draft: bool,

    /// 推荐/公告文章
    #[serde(default)]
    pub broadcast: bool,

    #[serde(rename = "rawContent")]
    pub raw_content: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }
}

/// PostBuilder 用于构建Post，未指定的字段使用默认值
#[derive(Debug, Clone)]
pub struct PostBuilder {
    id: i64,
    title: String,
    author: String,
    category: PostCategory,
    draft: bool,
    broadcast: bool,
    raw_content: String,
    created_at: DateTime<Utc>,
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self {
            id: 123,
            title: "My Post".to_string(),
            author: "Blog Author".to_string(),
            category: PostCategory::Engineering,
            draft: false,
            broadcast: false,
            raw_content: "post body".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl PostBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn category(mut self, category: PostCategory) -> Self {
        self.category = category;
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn broadcast(mut self) -> Self {
        self.broadcast = true;
        self
    }

    pub fn raw_content(mut self, raw_content: impl Into<String>) -> Self {
        self.raw_content = raw_content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            author: self.author,
            category: self.category,
            draft: self.draft,
            broadcast: self.broadcast,
            raw_content: self.raw_content,
            created_at: self.created_at,
        }
    }
}
