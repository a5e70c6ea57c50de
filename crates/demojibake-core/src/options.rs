//! 修复选项与统计信息（模块）

/// 非法 UTF-8 字节的处理策略
/// - Drop：静默剔除非法字节序列，不插入占位符（原工具行为，默认）。
/// - Preserve：含非法字节的文件整个跳过，磁盘内容保持原样。
/// - Fail：非法字节视为错误，中止整次运行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBytes {
    Drop,
    Preserve,
    Fail,
}

/// 修复选项
#[derive(Debug, Clone)]
pub struct RepairOptions {
    /// 非法 UTF-8 字节的处理策略；默认 Drop
    pub invalid_bytes: InvalidBytes,
    /// 试运行：只报告将要修复的文件，不回写
    pub dry_run: bool,
    /// 最大文件大小（字节）；超过则跳过
    pub max_file_size: Option<u64>,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            invalid_bytes: InvalidBytes::Drop,
            dry_run: false,
            max_file_size: None,
        }
    }
}

/// 修复统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct RepairStats {
    pub files_scanned: usize,
    pub files_fixed: usize,
    pub files_skipped: usize,
    pub replacements_total: usize,
}
