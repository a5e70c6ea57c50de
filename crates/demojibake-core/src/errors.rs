//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 单文件修复过程中的致命错误
/// 不做按文件隔离：任何一个错误都向上传播并中止整次遍历。
#[derive(Debug, Error)]
pub enum RepairError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 仅在 Fail 策略下出现；offset 为首个非法序列的字节偏移
    #[error("invalid utf-8 in {} at byte offset {offset}", path.display())]
    InvalidUtf8 { path: PathBuf, offset: usize },
}
