//! 单文件修复引擎（读取 → 解码 → 顺序替换 → 条件回写）
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::errors::RepairError;
use crate::options::{InvalidBytes, RepairOptions};
use crate::prefilter::Prefilter;

/// 单文件修复结果
pub(crate) enum FileOutcome {
    /// 内容无变化（含预筛未命中的快路径）
    Clean,
    /// 发生替换；非试运行时已完成回写
    Fixed { replacements: usize },
    /// Preserve 策略下跳过的非法 UTF-8 文件
    SkippedInvalid,
}

/// 修复单个文件
/// - 比较对象是“解码后的原文本”，不是磁盘原始字节
/// - 回写为整文件覆盖（UTF-8 编码），不保留备份
pub(crate) fn repair_file(
    path: &Path,
    fixes: &[(&str, &str)],
    prefilter: &Prefilter,
    opts: &RepairOptions,
) -> Result<FileOutcome, RepairError> {
    let file = File::open(path).map_err(|e| RepairError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| RepairError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    // 解码。整文件合法 UTF-8 时预筛快路径才可用：
    // 此时解码是恒等变换，字节层未命中即可断定文本层也不会有替换发生。
    let original = match std::str::from_utf8(&buf) {
        Ok(text) => {
            if !prefilter.hits(&buf) {
                return Ok(FileOutcome::Clean);
            }
            text.to_string()
        }
        Err(err) => match opts.invalid_bytes {
            InvalidBytes::Drop => decode_dropping(&buf),
            InvalidBytes::Preserve => return Ok(FileOutcome::SkippedInvalid),
            InvalidBytes::Fail => {
                return Err(RepairError::InvalidUtf8 {
                    path: path.to_path_buf(),
                    offset: err.valid_up_to(),
                })
            }
        },
    };

    let (fixed, replacements) = apply_fixes(&original, fixes);

    // 与解码后的原文本比较；相同则不回写（Drop 模式剔除的字节不计入差异）
    if fixed == original {
        return Ok(FileOutcome::Clean);
    }

    if !opts.dry_run {
        let mut out = File::create(path).map_err(|e| RepairError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        out.write_all(fixed.as_bytes()).map_err(|e| RepairError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(FileOutcome::Fixed { replacements })
}

/// 按表序对文本应用全部替换，返回（结果文本, 替换次数）
/// 每条替换覆盖当前文本中全部不重叠命中（自左向右），随后下一条才开始。
pub(crate) fn apply_fixes(text: &str, fixes: &[(&str, &str)]) -> (String, usize) {
    let mut fixed = text.to_string();
    let mut replacements = 0usize;
    for (bad, good) in fixes {
        let n = fixed.matches(bad).count();
        if n == 0 {
            continue;
        }
        replacements += n;
        fixed = fixed.replace(bad, good);
    }
    (fixed, replacements)
}

/// 按“剔除”策略解码：跳过非法 UTF-8 字节序列，不插入占位符
fn decode_dropping(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(tail) => {
                out.push_str(tail);
                break;
            }
            Err(err) => {
                if let Ok(valid) = std::str::from_utf8(&rest[..err.valid_up_to()]) {
                    out.push_str(valid);
                }
                // error_len 为 None 表示缓冲在多字节序列中途被截断，剩余字节全部剔除
                let skip = match err.error_len() {
                    Some(n) => err.valid_up_to() + n,
                    None => rest.len(),
                };
                if skip >= rest.len() {
                    break;
                }
                rest = &rest[skip..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::builtin_fixes;

    #[test]
    fn apply_fixes_replaces_all_occurrences_per_entry() {
        let (fixed, n) = apply_fixes("Ã¡Ã¡Ã¡", builtin_fixes());
        assert_eq!(fixed, "ááá");
        assert_eq!(n, 3);
    }

    #[test]
    fn apply_fixes_leaves_correct_text_alone() {
        let (fixed, n) = apply_fixes("café résumé ¡hola!", builtin_fixes());
        assert_eq!(fixed, "café résumé ¡hola!");
        assert_eq!(n, 0);
    }

    #[test]
    fn apply_fixes_handles_every_table_entry() {
        let input = "Ã¡ Ã© Ã\u{ad} Ã³ Ãº Ã± Â¡ Â¿";
        let (fixed, n) = apply_fixes(input, builtin_fixes());
        assert_eq!(fixed, "á é í ó ú ñ ¡ ¿");
        assert_eq!(n, 8);
    }

    #[test]
    fn decode_dropping_passes_valid_utf8_through() {
        assert_eq!(decode_dropping("café".as_bytes()), "café");
        assert_eq!(decode_dropping(b""), "");
    }

    #[test]
    fn decode_dropping_strips_invalid_sequences() {
        // 合法片段之间的孤立非法字节被剔除，不出现占位符
        let mut bytes = b"abc".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("dÃ©f".as_bytes());
        assert_eq!(decode_dropping(&bytes), "abcdÃ©f");
    }

    #[test]
    fn decode_dropping_discards_truncated_tail() {
        // 末尾被截断的多字节序列整体剔除
        let mut bytes = "ok".as_bytes().to_vec();
        bytes.push(0xC3);
        assert_eq!(decode_dropping(&bytes), "ok");
    }
}
