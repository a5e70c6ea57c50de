//! 公共类型（对外暴露）
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// 单个被修复文件的记录（对应 JSON 报告的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct FixedFile {
    pub path: String,
    pub replacements: usize,
}

/// 将修复记录以 JSON 数组形式写入 `out`（与逐行报告互不干扰）
pub fn write_report_json(out: &mut dyn Write, fixed: &[FixedFile]) -> Result<()> {
    serde_json::to_writer(&mut *out, fixed)?;
    Ok(())
}
