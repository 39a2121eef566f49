use std::path::{Path, PathBuf};

use crate::{config::WordPressOptions, error::Result};

use super::{Db, PostQuery, connect};

/// WordPress 源站
///
/// 持有数据库连接池和安装根目录。
pub struct WordPress {
    db: Db,
    table_prefix: String,
    base_directory: PathBuf,
}

impl WordPress {
    pub fn new(db: Db, table_prefix: impl Into<String>, base_directory: impl Into<PathBuf>) -> Self {
        Self {
            db,
            table_prefix: table_prefix.into(),
            base_directory: base_directory.into(),
        }
    }

    /// 连接数据库并创建 [`WordPress`]
    pub async fn connect(options: &WordPressOptions) -> Result<Self> {
        tracing::info!(
            "Connecting to WordPress database {}@{}:{}/{}",
            options.user,
            options.host,
            options.port,
            options.database
        );
        let db = connect(options).await?;
        Ok(Self::new(
            db,
            &options.table_prefix,
            options.base_directory.clone(),
        ))
    }

    /// 安装根目录，上传文件按它定位，参见 [`WordPressPost::assets`](super::WordPressPost::assets)
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// 关闭连接池
    pub async fn disconnect(&self) {
        tracing::info!("Disconnecting from WordPress database.");
        self.db.close().await;
    }
}

impl PostQuery for WordPress {
    fn db(&self) -> &Db {
        &self.db
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}
