use std::path::Path;

use crate::{
    assets::copy_files,
    config::{Config, VuePressOptions},
    error::Result,
    vuepress::{Converter, VuePressSite},
    wordpress::{PostQuery, WordPress, WordPressPost},
};

/// 迁移结果统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    /// 写入的文章数
    pub posts: usize,
    /// 拷贝的资源文件数
    pub assets: usize,
}

/// 将所有已发布文章迁移到 VuePress 站点
pub async fn migrate(wordpress: &WordPress, config: &Config) -> Result<MigrationSummary> {
    let posts = wordpress.published_posts().await?;
    tracing::info!("Found {} published posts", posts.len());

    migrate_posts(&posts, wordpress.base_directory(), &config.vuepress).await
}

/// 将已取出的文章写入站点
///
/// 逐篇顺序处理：转换 → 写入文章 → 拷贝资源。
/// 任一步骤失败立即返回，已写入的文件保留。
pub async fn migrate_posts(
    posts: &[WordPressPost],
    wordpress_directory: &Path,
    vuepress: &VuePressOptions,
) -> Result<MigrationSummary> {
    let converter = Converter::new(&vuepress.assets_directory);
    let site = VuePressSite::new(vuepress.clone());

    let mut summary = MigrationSummary::default();
    for wp_post in posts {
        let vp_post = converter.convert(wp_post)?;
        site.add(&vp_post).await?;
        summary.posts += 1;

        summary.assets += copy_files(
            &wp_post.assets(wordpress_directory),
            &site.post_assets(&vp_post),
        )
        .await?;
    }

    Ok(summary)
}
