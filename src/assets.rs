use std::path::PathBuf;

use tokio::fs;

use crate::error::{Error, Result};

/// 资源引用扫描器
///
/// 在文本中查找所有以 `prefix` 开头的片段，按出现顺序返回前缀之后的捕获部分。
/// 捕获部分遇到空白、引号、`)`、`<` 或 `>` 结束；空捕获会被跳过，重复引用不去重。
///
/// ```ignore
/// let refs: Vec<_> = scan_asset_refs(r#"<img src="/up/a.png">"#, "/up/").collect();
/// assert_eq!(refs, ["a.png"]);
/// ```
pub fn scan_asset_refs<'a>(content: &'a str, prefix: &'a str) -> AssetRefs<'a> {
    AssetRefs {
        rest: content,
        prefix,
    }
}

/// [`scan_asset_refs`] 返回的迭代器
pub struct AssetRefs<'a> {
    rest: &'a str,
    prefix: &'a str,
}

impl<'a> Iterator for AssetRefs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return None;
        }

        loop {
            let start = self.rest.find(self.prefix)? + self.prefix.len();
            let tail = &self.rest[start..];
            let len = tail.find(is_terminator).unwrap_or(tail.len());

            // 下一次从捕获结束处继续，捕获内部不会再匹配
            self.rest = &tail[len..];
            if len > 0 {
                return Some(&tail[..len]);
            }
        }
    }
}

fn is_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | ')' | '<' | '>')
}

/// 将扫描到的资源引用映射到本地路径
///
/// 源端和目标端各持有一个 [`AssetLocator`]，前缀不同但扫描方式相同，
/// 因此两边得到的路径可以按下标一一对应。
#[derive(Debug, Clone)]
pub struct AssetLocator {
    prefix: String,
    base: PathBuf,
}

impl AssetLocator {
    pub fn new(prefix: impl Into<String>, base: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            base: base.into(),
        }
    }

    /// 按出现顺序返回 `content` 中所有资源的本地路径
    pub fn locate(&self, content: &str) -> Vec<PathBuf> {
        scan_asset_refs(content, &self.prefix)
            .map(|capture| self.base.join(capture.trim_start_matches('/')))
            .collect()
    }
}

/// 按下标成对拷贝资源文件
///
/// 两个列表长度不一致时直接返回 [`Error::AssetMismatch`]，不触碰文件系统。
/// 拷贝严格按顺序进行，任何一个文件失败都会立即返回，剩余文件不再处理。
///
/// 返回拷贝的文件数量。
pub async fn copy_files(source: &[PathBuf], target: &[PathBuf]) -> Result<usize> {
    if source.len() != target.len() {
        return Err(Error::AssetMismatch {
            sources: source.to_vec(),
            targets: target.to_vec(),
        });
    }

    for (from, to) in source.iter().zip(target) {
        if let Some(directory) = to.parent() {
            fs::create_dir_all(directory).await?;
        }

        let filename = from
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        tracing::info!("Copying {}", filename);

        fs::copy(from, to).await?;
    }

    Ok(source.len())
}
