use crate::database::post_entity::{Column, Entity as PostEntity};
use async_trait::async_trait;
use blog_api::{PageRequest, PageResult, StoreError, StoreResult};
use blog_domain::content::{Post, PostCategory, PostStore};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;

fn db_error(err: DbErr) -> StoreError {
    match err {
        DbErr::ConnectionAcquire(e) => StoreError::Unavailable(e.to_string()),
        DbErr::Conn(e) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Database(other.to_string()),
    }
}

/// SeaOrmPostStore 使用Sea-ORM实现的文章存储
///
/// 草稿、分类、公告过滤都作为SQL条件执行。
pub struct SeaOrmPostStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPostStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_one(&self, select: Select<PostEntity>) -> StoreResult<Option<Post>> {
        select
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(Post::try_from)
            .transpose()
    }

    async fn fetch_page(&self, select: Select<PostEntity>, page: PageRequest) -> StoreResult<PageResult<Post>> {
        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&*self.db, page.size.max(1) as u64);

        let total = paginator.num_items().await.map_err(db_error)?;
        if page.size == 0 {
            return Ok(PageResult::new(Vec::new(), total, page));
        }

        let items = paginator
            .fetch_page(page.page as u64)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Post::try_from)
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(PageResult::new(items, total, page))
    }

    /// 非草稿文章
    fn published() -> Select<PostEntity> {
        PostEntity::find().filter(Column::Draft.eq(false))
    }
}

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        self.fetch_one(PostEntity::find_by_id(id)).await
    }

    async fn find_published_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        self.fetch_one(PostEntity::find_by_id(id).filter(Column::Draft.eq(false))).await
    }

    async fn find_by_draft_false(&self, page: PageRequest) -> StoreResult<PageResult<Post>> {
        self.fetch_page(Self::published(), page).await
    }

    async fn find_by_category_and_draft_false(
        &self,
        category: PostCategory,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>> {
        let select = Self::published().filter(Column::Category.eq(category.as_str()));
        self.fetch_page(select, page).await
    }

    async fn find_by_broadcast_and_draft_false(
        &self,
        broadcast: bool,
        page: PageRequest,
    ) -> StoreResult<PageResult<Post>> {
        let select = Self::published().filter(Column::Broadcast.eq(broadcast));
        self.fetch_page(select, page).await
    }

    async fn find_all(&self, page: PageRequest) -> StoreResult<PageResult<Post>> {
        self.fetch_page(PostEntity::find(), page).await
    }

    async fn count(&self) -> StoreResult<u64> {
        PostEntity::find().count(&*self.db).await.map_err(db_error)
    }
}
