//! 乱码（mojibake）修复核心库
//!
//! 设计要点：
//! - 固定替换表：双重编码产生的 8 组坏序列 → 正确字符，启动时构建一次，运行期只读。
//! - 先用 Aho-Corasick 在原始字节上预筛，未命中坏序列的文件直接跳过，省去解码与回写。
//! - 严格串行：每个文件完整走完 读取 → 解码 → 替换 → 条件回写，再处理下一个文件。
//! - 逐行报告（Fixed: <path>），遍历按文件名排序，输出顺序稳定可复现。

// 模块划分：表、过滤、预筛、单文件引擎、主流程
mod engine;
mod errors;
mod filter;
mod options;
mod prefilter;
mod repair;
mod table;
mod types;

// 对外暴露的 API
pub use errors::RepairError;
pub use options::{InvalidBytes, RepairOptions, RepairStats};
pub use repair::{repair_and_write, RepairSummary};
pub use types::{write_report_json, FixedFile};
