use std::{io, path::PathBuf};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Custom(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// 源资源与目标资源数量不一致，拷贝前即失败
    #[error("Not the same size: {sources:?} != {targets:?}")]
    AssetMismatch {
        sources: Vec<PathBuf>,
        targets: Vec<PathBuf>,
    },
}
