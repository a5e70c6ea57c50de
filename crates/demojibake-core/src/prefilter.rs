//! 预筛（Aho-Corasick）
//!
//! 在原始字节上先扫一遍坏序列；未命中的文件不需要解码、替换与回写，直接跳过。
//! 快路径仅对整文件为合法 UTF-8 的情况生效（见 engine.rs）：含非法字节的文件
//! 一律走完整解码路径，避免剔除字节后才拼出的序列躲过自动机。

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use anyhow::{Context, Result};

/// 预筛自动机（按替换表顺序构建，整次运行只构建一次）
pub(crate) struct Prefilter {
    ac: AhoCorasick,
}

impl Prefilter {
    /// 由替换表的键构建自动机
    pub(crate) fn build(fixes: &[(&str, &str)]) -> Result<Self> {
        let patterns: Vec<&[u8]> = fixes.iter().map(|(bad, _)| bad.as_bytes()).collect();
        let ac = AhoCorasickBuilder::new()
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .context("build aho-corasick")?;
        Ok(Self { ac })
    }

    /// 字节缓冲中是否存在任一坏序列
    pub(crate) fn hits(&self, buf: &[u8]) -> bool {
        self.ac.is_match(buf)
    }
}
