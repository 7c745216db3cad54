use crate::front_page::FrontPageRequest;
use blog_domain::content::PostCategory;
use clap::Parser;
use std::str::FromStr;

/// 打印博客首页的命令行工具
#[derive(Debug, Parser)]
#[command(name = "blog")]
#[command(author, version, about = "Print a page of the blog")]
pub struct Cli {
    /// 博客页码，从1开始
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// 分类 slug（engineering、releases、news-and-events）
    #[arg(value_parser = PostCategory::from_str)]
    pub category: Option<PostCategory>,
}

impl From<Cli> for FrontPageRequest {
    fn from(cli: Cli) -> Self {
        Self {
            page: cli.page,
            category: cli.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<FrontPageRequest, clap::Error> {
        Cli::try_parse_from(std::iter::once("blog").chain(args.iter().copied())).map(Into::into)
    }

    #[test]
    fn test_defaults_to_first_page() {
        assert_eq!(parse(&[]).unwrap(), FrontPageRequest::default());
    }

    #[test]
    fn test_page_and_category() {
        let request = parse(&["3", "releases"]).unwrap();
        assert_eq!(request.page, 3);
        assert_eq!(request.category, Some(PostCategory::Releases));

        let request = parse(&["2", "NEWS_AND_EVENTS"]).unwrap();
        assert_eq!(request.category, Some(PostCategory::NewsAndEvents));
    }

    #[test]
    fn test_rejects_bad_page() {
        assert_eq!(parse(&["x"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["0"]).unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_rejects_unknown_category() {
        let err = parse(&["1", "gossip"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unknown post category: gossip"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        let err = parse(&["2", "releases", "junk"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_prints_usage() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let help = err.to_string();
        assert!(help.contains("Usage:"));
        assert!(help.contains("[PAGE]"));
        assert!(help.contains("[CATEGORY]"));
    }
}
