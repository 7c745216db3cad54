use async_trait::async_trait;
use blog_api::{PageRequest, PageResult, StoreResult};
use blog_domain::content::{Post, PostCategory, PostStore};
use tokio::sync::RwLock;

/// InMemoryPostStore 基于内存的文章存储，用于本地预览和测试
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// 插入文章，ID相同则替换
    pub async fn insert(&self, post: Post) {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|existing| existing.id == post.id) {
            Some(existing) => *existing = post,
            None => posts.push(post),
        }
    }

    async fn find_one<F>(&self, predicate: F) -> Option<Post>
    where
        F: Fn(&Post) -> bool,
    {
        self.posts.read().await.iter().find(|post| predicate(*post)).cloned()
    }

    /// 按创建时间倒序过滤并截取分页窗口
    async fn page<F>(&self, page: PageRequest, predicate: F) -> PageResult<Post>
    where
        F: Fn(&Post) -> bool,
    {
        let posts = self.posts.read().await;
        let mut matching: Vec<&Post> = posts.iter().filter(|post| predicate(*post)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .cloned()
            .collect();

        PageResult::new(items, total, page)
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok(self.find_one(|post| post.id == id).await)
    }

    async fn find_published_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok(self.find_one(|post| post.id == id && !post.draft).await)
    }

    async fn find_by_draft_false(&self, page: PageRequest) -> StoreResult<PageResult<Post>> {
        Ok(self.page(page, |post| !post.draft).await)
    }

    async fn find_by_category_and_draft_false(
        &self,
        category: PostCategory,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>> {
        Ok(self.page(page, |post| post.category == category && !post.draft).await)
    }

    async fn find_by_broadcast_and_draft_false(
        &self,
        broadcast: bool,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>> {
        Ok(self.page(page, |post| post.broadcast == broadcast && !post.draft).await)
    }

    async fn find_all(&self, page: PageRequest) -> StoreResult<PageResult<Post>> {
        Ok(self.page(page, |_| true).await)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.posts.read().await.len() as u64)
    }
}
