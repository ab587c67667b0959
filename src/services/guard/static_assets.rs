use std::collections::HashSet;

use once_cell::sync::Lazy;

/// 가드를 건너뛰는 정적 파일 확장자 (소문자)
static STATIC_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "avif", "css", "js", "map", "txt",
        "xml", "woff", "woff2",
    ]
    .into_iter()
    .collect()
});

/// 경로가 정적 파일 확장자로 끝나는지 확인합니다 (대소문자 무시).
pub fn is_static_asset(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => STATIC_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
