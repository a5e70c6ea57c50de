//! 固定替换表（双重编码坏序列 → 正确字符）
//!
//! 表序即应用序：逐条顺序应用，每条先替换完当前文本中的全部不重叠命中，
//! 下一条再在已部分替换的文本上继续。本表各键互不重叠，但实现仍须保持表序语义。

/// 内置替换表（顺序有意义，运行期只读）
/// 第 3 条键的第二个字符是软连字符 U+00AD（不可见），用转义写出避免肉眼混淆。
const FIXES: &[(&str, &str)] = &[
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã\u{ad}", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("Â¡", "¡"),
    ("Â¿", "¿"),
];

/// 取内置替换表
pub(crate) fn builtin_fixes() -> &'static [(&'static str, &'static str)] {
    FIXES
}
