use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::{error::Result, helper::to_date_only, wordpress::WordPressPost};

use super::VuePressPost;

/// 绝对地址形式的 WordPress 上传目录，例如 `https://example.com/blog/wp-content/uploads`
///
/// 主机部分按最短匹配，并且不跨越空白、引号、括号，同一行的多个链接各自替换。
static UPLOADS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s"'()<>\[\]]+?/wp-content/uploads"#)
        .expect("uploads url pattern is valid")
});

/// 将 [`WordPressPost`] 转换为 [`VuePressPost`]
#[derive(Debug, Clone)]
pub struct Converter {
    assets_directory: String,
}

impl Converter {
    pub fn new(assets_directory: impl Into<String>) -> Self {
        Self {
            assets_directory: assets_directory.into(),
        }
    }

    /// 转换一篇文章
    ///
    /// - HTML 正文转换为 Markdown
    /// - 上传目录的绝对地址替换为资源目录
    /// - 日期格式化为 `YYYY-MM-DD`
    /// - 分类和标签按 `,` 拆分，`None` 得到空列表
    pub fn convert(&self, post: &WordPressPost) -> Result<VuePressPost> {
        let markdown = htmd::convert(&post.content)?;
        let content = UPLOADS_URL
            .replace_all(&markdown, NoExpand(&self.assets_directory))
            .into_owned();

        Ok(VuePressPost {
            author: post.author.clone(),
            posted: to_date_only(&post.posted),
            content,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            categories: split_names(post.categories.as_deref()),
            tags: split_names(post.tags.as_deref()),
        })
    }
}

fn split_names(value: Option<&str>) -> Vec<String> {
    value
        .map(|names| names.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}
