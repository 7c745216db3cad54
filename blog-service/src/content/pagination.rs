use blog_api::PageRequest;
use serde::Serialize;

/// PaginationInfo 供页面展示的分页信息
///
/// `current_page`从1开始，而PageRequest的页码从0开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    #[serde(rename = "currentPage")]
    current_page: u64,
    #[serde(rename = "totalPages")]
    total_pages: u64,
}

impl PaginationInfo {
    /// 即使没有任何条目，总页数也至少为1
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        let total_pages = match request.size {
            0 => 1,
            size => total_items.div_ceil(size as u64).max(1),
        };

        Self {
            current_page: request.page as u64 + 1,
            total_pages,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
