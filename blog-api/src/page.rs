use serde::{Deserialize, Serialize};

/// 博客列表默认每页文章数
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// PageRequest 表示对有序结果集的一个分页窗口
///
/// `page` 从0开始计数；展示给读者的页码从1开始，由上层自行换算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// 根据博客页码（从1开始）构建请求，使用默认页大小
    ///
    /// 页码0与1都视为第一页。
    pub fn blog_posts(page: u32) -> Self {
        Self::blog_page(page, DEFAULT_PAGE_SIZE)
    }

    /// 与 [`PageRequest::blog_posts`] 相同，但使用指定的页大小
    pub fn blog_page(page: u32, size: u32) -> Self {
        Self::new(page.saturating_sub(1), size)
    }

    /// 当前窗口跳过的条目数
    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// PageResult 包含一页查询结果以及匹配条目总数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }

    /// 只保留本页条目
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_posts_request_is_zero_based() {
        let request = PageRequest::blog_posts(1);
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);

        assert_eq!(PageRequest::blog_posts(3).page, 2);
        assert_eq!(PageRequest::blog_posts(0).page, 0);
    }

    #[test]
    fn test_blog_page_keeps_size() {
        assert_eq!(PageRequest::blog_page(1, 3), PageRequest::new(0, 3));
        assert_eq!(PageRequest::blog_page(5, 25), PageRequest::new(4, 25));
        assert_eq!(PageRequest::blog_page(0, 7), PageRequest::new(0, 7));
        assert_eq!(PageRequest::blog_page(3, DEFAULT_PAGE_SIZE), PageRequest::blog_posts(3));
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(4, 25).offset(), 100);
    }

    #[test]
    fn test_page_result() {
        let result = PageResult::new(vec![1, 2, 3], 42, PageRequest::new(2, 3));
        assert_eq!(result.total, 42);
        assert_eq!(result.page, 2);
        assert_eq!(result.size, 3);
        assert_eq!(result.into_items(), vec![1, 2, 3]);
    }
}
