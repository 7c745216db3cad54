use blog_api::PageRequest;
use blog_domain::content::PostCategory;
use blog_service::{BlogService, Result};

/// 首页请求：博客页码（从1开始）与可选的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontPageRequest {
    pub page: u32,
    pub category: Option<PostCategory>,
}

impl Default for FrontPageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
        }
    }
}

/// 渲染一页文章列表，包括摘要和分页信息
pub async fn render<S: BlogService + ?Sized>(
    service: &S,
    request: FrontPageRequest,
    page_size: u32,
) -> Result<String> {
    let page = PageRequest::blog_page(request.page, page_size);

    let summaries = service.post_summaries(request.category, page).await?;
    let pagination = service.pagination_info(page).await?;

    let mut out = match request.category {
        Some(category) => format!("== Blog: {} ==\n", category.display_name()),
        None => "== Blog ==\n".to_string(),
    };

    if summaries.is_empty() {
        out.push_str("\nNo posts yet.\n");
    }
    for summary in &summaries {
        let post = &summary.post;
        out.push_str(&format!(
            "\n[{}] {}{} ({}) by {}\n",
            post.created_at.format("%Y-%m-%d"),
            post.title,
            if post.broadcast { " *" } else { "" },
            post.category.display_name(),
            post.author,
        ));
        for line in summary.excerpt.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }

    out.push_str(&format!(
        "\nPage {} of {}\n",
        pagination.current_page(),
        pagination.total_pages(),
    ));
    let current = pagination.current_page();
    if pagination.has_previous() {
        out.push_str(&format!("Previous: {}\n", page_command(current - 1, request.category)));
    }
    if pagination.has_next() {
        out.push_str(&format!("Next: {}\n", page_command(current + 1, request.category)));
    }
    Ok(out)
}

/// 打开指定页的命令行写法，分类页带上分类 slug
fn page_command(page: u64, category: Option<PostCategory>) -> String {
    match category {
        Some(category) => format!("blog {} {}", page, category.slug()),
        None => format!("blog {}", page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_infra::InMemoryPostStore;
    use blog_domain::content::Post;
    use blog_service::DefaultBlogService;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn service(excerpt_length: usize) -> DefaultBlogService<InMemoryPostStore> {
        let day = |d| Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap();
        let store = InMemoryPostStore::with_posts(vec![
            Post::builder()
                .id(1)
                .title("Hello")
                .created_at(day(1))
                .raw_content("First words.\n\nMore words.")
                .build(),
            Post::builder()
                .id(2)
                .title("Secret")
                .draft()
                .created_at(day(2))
                .build(),
            Post::builder()
                .id(3)
                .title("Release 1.0")
                .category(PostCategory::Releases)
                .broadcast()
                .created_at(day(3))
                .raw_content("Shipped it")
                .build(),
        ]);
        DefaultBlogService::new(Arc::new(store)).with_excerpt_length(excerpt_length)
    }

    #[tokio::test]
    async fn test_render_front_page() {
        let out = render(&service(100), FrontPageRequest::default(), 10).await.unwrap();

        assert!(out.starts_with("== Blog ==\n"));
        assert!(out.contains("[2024-03-03] Release 1.0 * (Releases) by Blog Author"));
        assert!(out.contains("    First words.\n"));
        assert!(!out.contains("More words."));
        assert!(!out.contains("Secret"));
        assert!(out.find("Release 1.0").unwrap() < out.find("Hello").unwrap());
        assert!(out.ends_with("Page 1 of 1\n"));
    }

    #[tokio::test]
    async fn test_render_category_page() {
        let request = FrontPageRequest {
            page: 1,
            category: Some(PostCategory::Releases),
        };
        let out = render(&service(4), request, 10).await.unwrap();

        assert!(out.starts_with("== Blog: Releases ==\n"));
        assert!(out.contains("    Ship\n"));
        assert!(!out.contains("Hello"));
    }

    #[tokio::test]
    async fn test_render_empty_page() {
        let request = FrontPageRequest { page: 4, category: None };
        let out = render(&service(100), request, 1).await.unwrap();

        assert!(out.contains("No posts yet."));
        // 总页数按全部文章（含草稿）统计
        assert!(out.ends_with("Page 4 of 3\nPrevious: blog 3\n"));
    }

    #[tokio::test]
    async fn test_render_points_to_next_page() {
        let out = render(&service(100), FrontPageRequest::default(), 1).await.unwrap();

        assert!(out.contains("Release 1.0"));
        assert!(!out.contains("Hello"));
        assert!(out.ends_with("Page 1 of 3\nNext: blog 2\n"));
        assert!(!out.contains("Previous:"));
    }

    #[tokio::test]
    async fn test_render_middle_page_links_both_ways() {
        let request = FrontPageRequest { page: 2, category: None };
        let out = render(&service(100), request, 1).await.unwrap();

        assert!(out.contains("Hello"));
        assert!(!out.contains("Release 1.0"));
        assert!(out.ends_with("Page 2 of 3\nPrevious: blog 1\nNext: blog 3\n"));
    }

    #[tokio::test]
    async fn test_render_category_links_keep_category() {
        let request = FrontPageRequest {
            page: 2,
            category: Some(PostCategory::Releases),
        };
        let out = render(&service(100), request, 1).await.unwrap();

        assert!(out.starts_with("== Blog: Releases ==\n"));
        assert!(out.contains("No posts yet."));
        assert!(out.ends_with("Page 2 of 3\nPrevious: blog 1 releases\nNext: blog 3 releases\n"));
    }

    #[test]
    fn test_page_command() {
        assert_eq!(page_command(2, None), "blog 2");
        assert_eq!(page_command(2, Some(PostCategory::NewsAndEvents)), "blog 2 news-and-events");
    }
}
