use async_trait::async_trait;
use blog_api::PageRequest;
use blog_domain::content::{Post, PostCategory, PostStore};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use crate::content::{extract_first_paragraph, PaginationInfo};
use crate::error::{BlogError, Result};

/// 列表摘要默认长度（字符数）
pub const DEFAULT_EXCERPT_LENGTH: usize = 500;

/// 列表展示用的文章摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub post: Post,
    pub excerpt: String,
}

/// Blog服务trait，文章只读访问的统一入口
#[async_trait]
pub trait BlogService: Send + Sync {
    /// 根据ID获取文章（包括草稿）
    async fn get_post(&self, id: i64) -> Result<Post>;

    /// 根据ID获取已发布文章
    async fn get_published_post(&self, id: i64) -> Result<Post>;

    /// 最新发布的文章
    async fn most_recent_posts(&self, page: PageRequest) -> Result<Vec<Post>>;

    /// 指定分类下最新发布的文章
    async fn most_recent_posts_in_category(&self, category: PostCategory, page: PageRequest) -> Result<Vec<Post>>;

    /// 最新发布的公告文章
    async fn most_recent_broadcast_posts(&self, page: PageRequest) -> Result<Vec<Post>>;

    /// 所有文章（包括草稿），用于后台管理
    async fn all_posts(&self, page: PageRequest) -> Result<Vec<Post>>;

    /// 分页信息，每次调用都会重新统计文章总数
    async fn pagination_info(&self, page: PageRequest) -> Result<PaginationInfo>;

    /// 最新发布的文章及其摘要，可按分类过滤
    async fn post_summaries(&self, category: Option<PostCategory>, page: PageRequest) -> Result<Vec<PostSummary>>;

    fn extract_first_paragraph(&self, text: &str, max_length: usize) -> String {
        extract_first_paragraph(text, max_length)
    }
}

/// 默认Blog服务实现
pub struct DefaultBlogService<S: PostStore + ?Sized> {
    store: Arc<S>,
    excerpt_length: usize,
}

impl<S: PostStore + ?Sized> DefaultBlogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }

    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }
}

#[async_trait]
impl<S: PostStore + ?Sized> BlogService for DefaultBlogService<S> {
    async fn get_post(&self, id: i64) -> Result<Post> {
        debug!(id, "fetching post");
        self.store.find_by_id(id).await?
            .ok_or_else(|| {
                warn!(id, "post not found");
                BlogError::PostNotFound(id)
            })
    }

    async fn get_published_post(&self, id: i64) -> Result<Post> {
        debug!(id, "fetching published post");
        self.store.find_published_by_id(id).await?
            .ok_or_else(|| {
                warn!(id, "published post not found");
                BlogError::PostNotFound(id)
            })
    }

    async fn most_recent_posts(&self, page: PageRequest) -> Result<Vec<Post>> {
        debug!(page = page.page, size = page.size, "listing most recent posts");
        let result = self.store.find_by_draft_false(page).await?;
        Ok(result.into_items())
    }

    async fn most_recent_posts_in_category(&self, category: PostCategory, page: PageRequest) -> Result<Vec<Post>> {
        debug!(%category, page = page.page, size = page.size, "listing most recent posts in category");
        let result = self.store.find_by_category_and_draft_false(category, page).await?;
        Ok(result.into_items())
    }

    async fn most_recent_broadcast_posts(&self, page: PageRequest) -> Result<Vec<Post>> {
        debug!(page = page.page, size = page.size, "listing most recent broadcast posts");
        let result = self.store.find_by_broadcast_and_draft_false(true, page).await?;
        Ok(result.into_items())
    }

    async fn all_posts(&self, page: PageRequest) -> Result<Vec<Post>> {
        debug!(page = page.page, size = page.size, "listing all posts");
        let result = self.store.find_all(page).await?;
        Ok(result.into_items())
    }

    async fn pagination_info(&self, page: PageRequest) -> Result<PaginationInfo> {
        let total = self.store.count().await?;
        debug!(total, page = page.page, size = page.size, "computing pagination info");
        Ok(PaginationInfo::new(page, total))
    }

    async fn post_summaries(&self, category: Option<PostCategory>, page: PageRequest) -> Result<Vec<PostSummary>> {
        let posts = match category {
            Some(category) => self.most_recent_posts_in_category(category, page).await?,
            None => self.most_recent_posts(page).await?,
        };

        let summaries = posts
            .into_iter()
            .map(|post| {
                let excerpt = extract_first_paragraph(&post.raw_content, self.excerpt_length);
                PostSummary { post, excerpt }
            })
            .collect();
        Ok(summaries)
    }
}
