use std::{env, fmt, path::PathBuf};

use crate::error::{Error, Result};

/// 迁移配置
///
/// 核心流程只接收这个结构体，从不直接读取环境变量。
#[derive(Debug, Clone)]
pub struct Config {
    pub wordpress: WordPressOptions,
    pub vuepress: VuePressOptions,
}

/// WordPress 数据库连接与安装目录
#[derive(Clone)]
pub struct WordPressOptions {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// 表名前缀，对应 `wp-config.php` 中的 `$table_prefix`
    pub table_prefix: String,
    /// WordPress 安装根目录，`wp-content/uploads` 位于其下
    pub base_directory: PathBuf,
}

impl fmt::Debug for WordPressOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordPressOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("table_prefix", &self.table_prefix)
            .field("base_directory", &self.base_directory)
            .finish()
    }
}

/// VuePress 站点目录
#[derive(Debug, Clone)]
pub struct VuePressOptions {
    pub base_directory: PathBuf,
    /// 文章目录，相对于 `base_directory`
    pub posts_directory: String,
    /// 资源目录，相对于 `.vuepress/public`
    pub assets_directory: String,
}

impl VuePressOptions {
    pub fn new(
        base_directory: impl Into<PathBuf>,
        posts_directory: impl Into<String>,
        assets_directory: impl AsRef<str>,
    ) -> Self {
        Self {
            base_directory: base_directory.into(),
            posts_directory: posts_directory.into(),
            assets_directory: normalize_dir(assets_directory.as_ref()),
        }
    }
}

/// 统一为 `/` 分隔，并去掉首尾的 `/`
fn normalize_dir(value: &str) -> String {
    value.replace('\\', "/").trim_matches('/').to_string()
}

impl Config {
    const DEFAULT_PORT: u16 = 3306;
    const DEFAULT_TABLE_PREFIX: &str = "wp_";
    const DEFAULT_POSTS_DIRECTORY: &str = "posts";
    const DEFAULT_ASSETS_DIRECTORY: &str = "assets";

    /// 从环境变量加载配置
    ///
    /// 当前目录存在 `.env` 文件时先加载它，已有的环境变量不会被覆盖。
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过 `lookup` 读取每个配置项
    ///
    /// 必填项缺失或为空时返回 [`Error::Config`]，可选项使用默认值。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("`{key}` is required")))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("WORDPRESS_PORT").filter(|v| !v.trim().is_empty()) {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("`WORDPRESS_PORT` is not a valid port: {v}")))?,
            None => Self::DEFAULT_PORT,
        };

        let wordpress = WordPressOptions {
            host: required("WORDPRESS_HOST")?,
            port,
            database: required("WORDPRESS_DATABASE")?,
            user: required("WORDPRESS_USER")?,
            password: required("WORDPRESS_PASSWORD")?,
            table_prefix: optional("WORDPRESS_TABLE_PREFIX", Self::DEFAULT_TABLE_PREFIX),
            base_directory: required("WORDPRESS_BASEDIRECTORY")?.into(),
        };

        let vuepress = VuePressOptions::new(
            required("VUEPRESS_BASEDIRECTORY")?,
            optional("VUEPRESS_POSTSDIRECTORY", Self::DEFAULT_POSTS_DIRECTORY),
            optional("VUEPRESS_ASSETSDIRECTORY", Self::DEFAULT_ASSETS_DIRECTORY),
        );

        Ok(Self {
            wordpress,
            vuepress,
        })
    }
}
