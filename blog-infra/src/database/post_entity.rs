use blog_api::StoreError;
use blog_domain::content::Post;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Post 实体，对应数据库中的posts表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub title: String,

    #[sea_orm(column_type = "String(Some(255))")]
    pub author: String,

    /// PostCategory的持久化名称，例如ENGINEERING
    #[sea_orm(column_type = "String(Some(64))")]
    pub category: String,

    pub draft: bool,

    pub broadcast: bool,

    #[sea_orm(column_type = "Text")]
    pub raw_content: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Post {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = model.category.parse()
            .map_err(|e| StoreError::Corrupted(format!("post {}: {}", model.id, e)))?;

        Ok(Post {
            id: model.id,
            title: model.title,
            author: model.author,
            category,
            draft: model.draft,
            broadcast: model.broadcast,
            raw_content: model.raw_content,
            created_at: model.created_at,
        })
    }
}

impl From<&Post> for Model {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            category: post.category.as_str().to_string(),
            draft: post.draft,
            broadcast: post.broadcast,
            raw_content: post.raw_content.clone(),
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_domain::content::PostCategory;

    #[test]
    fn test_model_round_trip_keeps_category() {
        let post = Post::builder().id(9).category(PostCategory::NewsAndEvents).draft().build();
        let model = Model::from(&post);
        assert_eq!(model.category, "NEWS_AND_EVENTS");
        assert_eq!(Post::try_from(model).unwrap(), post);
    }

    #[test]
    fn test_unknown_category_is_corrupted() {
        let mut model = Model::from(&Post::builder().id(3).build());
        model.category = "GOSSIP".to_string();

        let err = Post::try_from(model).unwrap_err();
        assert!(matches!(err, StoreError::Corrupted(_)));
        assert!(err.to_string().contains("post 3"));
    }
}
