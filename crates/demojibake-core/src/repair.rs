//! 修复主流程（遍历 → 过滤 → 逐文件修复 → 逐行报告）
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::{repair_file, FileOutcome};
use crate::filter::is_candidate;
use crate::options::{RepairOptions, RepairStats};
use crate::prefilter::Prefilter;
use crate::table::builtin_fixes;
use crate::types::FixedFile;

/// 一次完整运行的结果：计数器 + 被修复文件清单（供 JSON 报告）
#[derive(Debug, Default, Clone)]
pub struct RepairSummary {
    pub stats: RepairStats,
    pub fixed: Vec<FixedFile>,
}

/// 遍历 `root` 下的目录树并就地修复乱码，逐行报告写入 `out`
/// 稳定性保证：
/// - 文件级：遍历按文件名排序，确保报告顺序可复现
/// - 文件内：替换严格按表序执行；文件间严格串行
/// 错误处理：任何遍历/读/写错误直接向上传播并中止整次运行（不做按文件隔离）
pub fn repair_and_write(root: &Path, out: &mut dyn Write, opts: &RepairOptions) -> Result<RepairSummary> {
    let fixes = builtin_fixes();
    let prefilter = Prefilter::build(fixes)?;

    let mut summary = RepairSummary::default();

    let mut files: Vec<PathBuf> = vec![];
    // 递归整棵树；不跟随符号链接（walkdir 默认行为，顺带规避了链接环）
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    for path in files {
        let file_name = match path.file_name().and_then(|s| s.to_str()) {
            Some(s) => s,
            None => continue,
        };
        if !is_candidate(file_name) {
            continue;
        }
        if let Some(max) = opts.max_file_size {
            if let Ok(md) = std::fs::metadata(&path) {
                if md.len() > max {
                    continue;
                }
            }
        }

        summary.stats.files_scanned += 1;
        match repair_file(&path, fixes, &prefilter, opts)? {
            FileOutcome::Fixed { replacements } => {
                summary.stats.files_fixed += 1;
                summary.stats.replacements_total += replacements;
                let tag = if opts.dry_run { "Would fix" } else { "Fixed" };
                writeln!(out, "{}: {}", tag, path.display())?;
                summary.fixed.push(FixedFile {
                    path: path.display().to_string(),
                    replacements,
                });
            }
            FileOutcome::SkippedInvalid => summary.stats.files_skipped += 1,
            FileOutcome::Clean => {}
        }
    }

    Ok(summary)
}
