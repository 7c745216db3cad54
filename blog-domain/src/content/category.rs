use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// PostCategory 表示文章所属的分类（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostCategory {
    Engineering,
    Releases,
    NewsAndEvents,
}

impl PostCategory {
    pub const ALL: [PostCategory; 3] = [
        PostCategory::Engineering,
        PostCategory::Releases,
        PostCategory::NewsAndEvents,
    ];

    /// 页面上显示的名称
    pub fn display_name(&self) -> &'static str {
        match self {
            PostCategory::Engineering => "Engineering",
            PostCategory::Releases => "Releases",
            PostCategory::NewsAndEvents => "News and Events",
        }
    }

    /// URL中使用的标识
    pub fn slug(&self) -> &'static str {
        match self {
            PostCategory::Engineering => "engineering",
            PostCategory::Releases => "releases",
            PostCategory::NewsAndEvents => "news-and-events",
        }
    }

    /// 持久化时使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Engineering => "ENGINEERING",
            PostCategory::Releases => "RELEASES",
            PostCategory::NewsAndEvents => "NEWS_AND_EVENTS",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown post category: {0}")]
pub struct ParseCategoryError(pub String);

/// 同时接受slug与持久化名称
impl FromStr for PostCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostCategory::ALL
            .into_iter()
            .find(|category| category.slug() == s || category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
