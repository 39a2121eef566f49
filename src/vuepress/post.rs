use serde::Deserialize;

use crate::error::{Error, Result};

/// VuePress 文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VuePressPost {
    pub author: String,
    /// `YYYY-MM-DD`
    pub posted: String,
    /// Markdown 正文，资源链接已指向资源目录
    pub content: String,
    pub title: String,
    pub excerpt: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    author: String,
    date: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    category: Vec<String>,
    #[serde(default)]
    tag: Vec<String>,
}

impl VuePressPost {
    const DELIM: &str = "---";

    /// 生成带 Front Matter 的文件内容
    ///
    /// ```text
    /// ---
    /// title: Hello World!
    /// author: Alice
    /// date: 2021-03-05
    /// category:
    ///   - News
    /// ---
    ///
    /// <content>
    /// ```
    ///
    /// `excerpt`、`category`、`tag` 为空时整行省略。
    pub fn to_body(&self) -> String {
        let mut body = format!("{}\n", Self::DELIM);
        body += &format!("title: {}\n", yaml_scalar(&self.title));
        body += &format!("author: {}\n", yaml_scalar(&self.author));
        body += &format!("date: {}\n", self.posted);

        if !self.excerpt.is_empty() {
            body += &format!("excerpt: {}\n", yaml_scalar(&self.excerpt));
        }

        push_list(&mut body, "category", &self.categories);
        push_list(&mut body, "tag", &self.tags);

        body += &format!("{}\n\n", Self::DELIM);
        body += &self.content;
        body += "\n";

        body
    }

    /// 解析 [`VuePressPost::to_body`] 生成的文件内容
    pub fn parse(text: &str) -> Result<Self> {
        let (yaml, content) = Self::split_front_matter(text)?;
        let front_matter: FrontMatter = serde_yaml::from_str(yaml)?;

        Ok(Self {
            author: front_matter.author,
            posted: front_matter.date,
            content: content.to_string(),
            title: front_matter.title,
            excerpt: front_matter.excerpt,
            categories: front_matter.category,
            tags: front_matter.tag,
        })
    }

    /// 拆分 Front Matter 与正文，正文去掉前导空行和结尾换行
    fn split_front_matter(text: &str) -> Result<(&str, &str)> {
        let closing = format!("\n{}\n", Self::DELIM);

        let rest = text
            .strip_prefix(Self::DELIM)
            .and_then(|rest| rest.strip_prefix('\n'))
            .ok_or(Error::Custom("Missing required YAML front matter"))?;

        let end = rest.find(&closing).ok_or(Error::Custom(
            "Front matter does not terminate with expected delimiter ---",
        ))?;

        let yaml = &rest[..end];
        let body = &rest[end + closing.len()..];
        let body = body.strip_prefix('\n').unwrap_or(body);
        let body = body.strip_suffix('\n').unwrap_or(body);

        Ok((yaml, body))
    }
}

fn push_list(body: &mut String, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    *body += &format!("{key}:\n");
    for item in items {
        *body += &format!("  - {}\n", yaml_scalar(item));
    }
}

/// YAML 能原样读回时直接输出，否则输出为双引号字符串
fn yaml_scalar(value: &str) -> String {
    match serde_yaml::to_string(value) {
        Ok(plain) if plain.strip_suffix('\n') == Some(value) => value.to_string(),
        _ => serde_json::Value::from(value).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VuePressPost {
        VuePressPost {
            author: "Alice".to_string(),
            posted: "2021-03-05".to_string(),
            content: "# Heading\n\nSome *text*.".to_string(),
            title: "Hello World!".to_string(),
            excerpt: String::new(),
            categories: vec!["News".to_string(), "Tech".to_string()],
            tags: vec![],
        }
    }

    #[test]
    fn test_to_body_layout() {
        let body = sample().to_body();

        assert_eq!(
            body,
            "---\n\
             title: Hello World!\n\
             author: Alice\n\
             date: 2021-03-05\n\
             category:\n  - News\n  - Tech\n\
             ---\n\
             \n\
             # Heading\n\nSome *text*.\n"
        );
    }

    #[test]
    fn test_to_body_excerpt_presence() {
        let mut post = sample();
        assert!(!post.to_body().contains("excerpt:"));

        post.excerpt = "Short summary".to_string();
        let body = post.to_body();
        assert!(body.contains("date: 2021-03-05\nexcerpt: Short summary\ncategory:\n"));
    }

    #[test]
    fn test_to_body_tags_only() {
        let mut post = sample();
        post.categories.clear();
        post.tags = vec!["rust".to_string()];

        let body = post.to_body();
        assert!(!body.contains("category:"));
        assert!(body.contains("tag:\n  - rust\n---\n"));
    }

    #[test]
    fn test_round_trip() {
        let mut post = sample();
        post.excerpt = "An excerpt".to_string();
        post.tags = vec!["a".to_string(), "b c".to_string()];

        let parsed = VuePressPost::parse(&post.to_body()).expect("parse back");
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_round_trip_quotes_yaml_sensitive_values() {
        let post = VuePressPost {
            author: "O'Brien".to_string(),
            posted: "2020-01-01".to_string(),
            content: "body with\n---\nrule".to_string(),
            title: "Rust: the good parts #1".to_string(),
            excerpt: "line one\nline two".to_string(),
            categories: vec!["yes".to_string(), "123".to_string()],
            tags: vec!["- dash".to_string(), " padded ".to_string()],
        };

        let body = post.to_body();
        // 多行摘要必须写在一行内
        assert!(body.lines().any(|l| l.starts_with("excerpt: \"")));

        let parsed = VuePressPost::parse(&body).expect("parse back");
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_parse_missing_front_matter_should_fail() {
        let result = VuePressPost::parse("# No front matter\n");
        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[test]
    fn test_parse_unterminated_front_matter_should_fail() {
        let result = VuePressPost::parse("---\ntitle: x\nauthor: y\n");
        assert!(matches!(result, Err(Error::Custom(_))));
    }
}
