use async_trait::async_trait;
use blog_api::{PageRequest, PageResult, StoreResult};
use super::{Post, PostCategory};

/// PostStore trait 定义文章的只读数据访问操作
///
/// 所有列表查询按创建时间倒序（最新在前）返回。草稿过滤必须作为查询条件
/// 交给存储执行，而不是在结果上再过滤。
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>>;

    /// 只匹配非草稿文章
    async fn find_published_by_id(&self, id: i64) -> StoreResult<Option<Post>>;

    async fn find_by_draft_false(&self, page: PageRequest) -> StoreResult<PageResult<Post>>;

    async fn find_by_category_and_draft_false(
        &self,
        category: PostCategory,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>>;

    async fn find_by_broadcast_and_draft_false(
        &self,
        broadcast: bool,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>>;

    /// 包含草稿
    async fn find_all(&self, page: PageRequest) -> StoreResult<PageResult<Post>>;

    /// 文章总数（不做任何过滤）
    async fn count(&self) -> StoreResult<u64>;
}
