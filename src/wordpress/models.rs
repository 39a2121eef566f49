use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::assets::AssetLocator;

/// WordPress 上传目录，相对于安装根目录
const UPLOADS_DIR: &str = "wp-content/uploads";

/// WordPress 文章
///
/// 每篇已发布文章对应一行，内容取自该文章最新的一条修订。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WordPressPost {
    /// 作者显示名
    pub author: String,
    /// 发布时间，数据库中存储的本地时间
    pub posted: NaiveDateTime,
    /// HTML 正文
    pub content: String,
    /// 标题
    pub title: String,
    /// 摘要，可能为空字符串
    pub excerpt: String,
    /// 逗号拼接的分类名，没有分类时为 `None`
    pub categories: Option<String>,
    /// 逗号拼接的标签名，没有标签时为 `None`
    pub tags: Option<String>,
}

impl WordPressPost {
    /// 正文引用的上传文件在本地的路径，按出现顺序排列
    ///
    /// 每个 `/wp-content/uploads/<path>` 映射为 `<base_directory>/wp-content/uploads/<path>`，
    /// 绝对地址和相对地址都会被识别。
    pub fn assets(&self, base_directory: impl AsRef<Path>) -> Vec<PathBuf> {
        AssetLocator::new(
            format!("/{UPLOADS_DIR}/"),
            base_directory.as_ref().join(UPLOADS_DIR),
        )
        .locate(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn post(content: &str) -> WordPressPost {
        WordPressPost {
            author: "Alice".to_string(),
            posted: NaiveDate::from_ymd_opt(2021, 3, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            content: content.to_string(),
            title: "Title".to_string(),
            excerpt: String::new(),
            categories: None,
            tags: None,
        }
    }

    #[test]
    fn test_assets_absolute_and_relative_urls() {
        let post = post(
            r#"
            <img src="https://blog.test/wp-content/uploads/2021/03/pic.png" />
            <a href="/wp-content/uploads/2020/01/doc.pdf">doc</a>
            "#,
        );

        assert_eq!(
            post.assets("/var/www/html"),
            [
                PathBuf::from("/var/www/html/wp-content/uploads/2021/03/pic.png"),
                PathBuf::from("/var/www/html/wp-content/uploads/2020/01/doc.pdf"),
            ]
        );
    }

    #[test]
    fn test_assets_ignores_other_paths() {
        let post = post(r#"<img src="https://cdn.test/images/pic.png" /> wp-content/uploads"#);
        assert!(post.assets("/var/www/html").is_empty());
    }
}
