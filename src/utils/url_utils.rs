// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 将相对链接按站点根地址解析为绝对地址
pub fn resolve_link(base_url: &str, link: &str) -> Result<String, ParseError> {
    let base = Url::parse(base_url)?;
    Ok(resolve_url(&base, link)?.to_string())
}

/// 将详情链接解析为绝对地址，仅当结果与站点同源时返回
///
/// 绝对地址或协议相对地址指向其他主机时返回 `None`
pub fn resolve_same_origin(base_url: &str, link: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    let resolved = resolve_url(&base, link).ok()?;
    (resolved.origin() == base.origin()).then(|| resolved.to_string())
}

/// 规范化图片地址
///
/// 协议相对地址（`//host/path`）补全为 https，
/// 绝对地址原样返回，其余按站点根地址解析
pub fn normalize_image_src(base_url: &str, src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    if let Some(rest) = src.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }
    if src.starts_with("http://") || src.starts_with("https://") {
        return Some(src.to_string());
    }
    resolve_link(base_url, src).ok()
}
