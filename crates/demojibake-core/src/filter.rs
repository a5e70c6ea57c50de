//! 候选文件过滤（扩展名白名单）

/// 扩展名白名单（区分大小写，精确后缀匹配，无任何大小写归一化）
const EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".html", ".css"];

/// 判断文件名是否在修复范围内
pub(crate) fn is_candidate(file_name: &str) -> bool {
    EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}
