use std::time::Duration;

use sqlx::{
    Executor,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::config::WordPressOptions;

/// 数据库连接池类型
pub type Db = sqlx::MySqlPool;

/// 根据 [`WordPressOptions`] 连接 WordPress 数据库
///
/// 迁移是顺序执行的，连接池配置：
///
/// - 最大连接数 1
/// - 获取连接超时 5 秒
/// - 连接后放宽 `group_concat_max_len`，避免分类、标签被截断
///
/// 连接失败不重试，错误直接返回。
pub async fn connect(options: &WordPressOptions) -> Result<Db, sqlx::Error> {
    let connect_options = MySqlConnectOptions::new()
        .host(&options.host)
        .port(options.port)
        .database(&options.database)
        .username(&options.user)
        .password(&options.password);

    MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET SESSION group_concat_max_len = 1048576")
                    .await?;
                Ok(())
            })
        })
        .connect_with(connect_options)
        .await
}
