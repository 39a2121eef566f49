pub mod assets;
pub mod config;
pub mod error;
pub mod helper;
pub mod migrate;
pub mod vuepress;
pub mod wordpress;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use config::Config;
use error::Result;
use migrate::MigrationSummary;
use wordpress::WordPress;

/// 运行一次完整迁移
///
/// 日志级别由 `WP2VUEPRESS_LOG` 控制，默认 `info`。
/// 无论迁移成功与否，数据库连接都会在返回前关闭。
pub async fn run() -> Result<MigrationSummary> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(
            EnvFilter::try_from_env("WP2VUEPRESS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let wordpress = WordPress::connect(&config.wordpress).await?;
    let result = migrate::migrate(&wordpress, &config).await;
    wordpress.disconnect().await;

    let summary = result?;
    tracing::info!(
        "Migrated {} posts and {} assets",
        summary.posts,
        summary.assets
    );
    Ok(summary)
}
