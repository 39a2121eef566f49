use std::path::PathBuf;

use tokio::fs;

use crate::{assets::AssetLocator, config::VuePressOptions, error::Result, helper::to_slug};

use super::VuePressPost;

/// VuePress 静态资源根目录，相对于站点根目录
const PUBLIC_DIR: &str = ".vuepress/public";

/// 文章文件名
const POST_FILE: &str = "index.md";

/// VuePress 站点
///
/// 负责推导文章路径、写入文章以及计算文章资源在站点中的位置。
pub struct VuePressSite {
    options: VuePressOptions,
    assets: AssetLocator,
}

impl VuePressSite {
    pub fn new(options: VuePressOptions) -> Self {
        // 只认 Markdown 链接目标，外部地址和正文里的目录名不算
        let assets = AssetLocator::new(
            format!("]({}/", options.assets_directory),
            options
                .base_directory
                .join(PUBLIC_DIR)
                .join(&options.assets_directory),
        );

        Self { options, assets }
    }

    /// 文章目录：`<base>/<posts>/<yyyy>/<mm>/<dd>/<slug>`
    ///
    /// 不同文章得到相同目录时，后写入的文章覆盖先写入的。
    pub fn post_directory(&self, post: &VuePressPost) -> PathBuf {
        let mut directory = self
            .options
            .base_directory
            .join(&self.options.posts_directory);
        directory.extend(post.posted.split('-'));

        let slug = to_slug(&post.title);
        if slug.is_empty() {
            tracing::warn!("Title {:?} has no slug, writing into the date directory", post.title);
        } else {
            directory.push(slug);
        }

        directory
    }

    /// 文章文件：`<post_directory>/index.md`
    pub fn post_file(&self, post: &VuePressPost) -> PathBuf {
        self.post_directory(post).join(POST_FILE)
    }

    /// 文章引用的资源在站点中的路径，按出现顺序排列
    ///
    /// 只统计形如 `](<assets>/...)` 的链接目标。
    pub fn post_assets(&self, post: &VuePressPost) -> Vec<PathBuf> {
        self.assets.locate(&post.content)
    }

    /// 写入文章，已存在的文件会被整体替换
    ///
    /// 返回写入的文件路径。
    pub async fn add(&self, post: &VuePressPost) -> Result<PathBuf> {
        let directory = self.post_directory(post);
        fs::create_dir_all(&directory).await?;

        let file = directory.join(POST_FILE);
        tracing::info!("Post: {}", file.display());
        fs::write(&file, post.to_body()).await?;

        Ok(file)
    }
}
