// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{DocumentFetcher, FetchRequest};
use crate::utils::url_utils::{normalize_image_src, resolve_same_origin};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

static INFOBOX_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.infobox img").expect("valid infobox selector"));
static FIGURE_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.mw-parser-output figure img").expect("valid figure selector")
});

/// 图片查找特质
///
/// 根据详情链接返回代表性图片地址，找不到时返回空字符串
#[async_trait]
pub trait ImageLookup: Send + Sync {
    async fn resolve(&self, detail_link: &str) -> String;
}

/// 图片解析器
///
/// 抓取实体详情页，优先取信息框中的图片，其次取正文 figure 中的第一张图片
pub struct ImageResolver {
    fetcher: Arc<dyn DocumentFetcher>,
    base_url: String,
    timeout: Duration,
}

impl ImageResolver {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// 从详情页内容中定位图片地址（未规范化）
    pub fn find_image_src(html_content: &str) -> Option<String> {
        let document = Html::parse_document(html_content);
        let img = document
            .select(&INFOBOX_IMAGE_SELECTOR)
            .next()
            .or_else(|| document.select(&FIGURE_IMAGE_SELECTOR).next())?;

        img.value().attr("src").map(str::to_string)
    }
}

#[async_trait]
impl ImageLookup for ImageResolver {
    async fn resolve(&self, detail_link: &str) -> String {
        let Some(url) = resolve_same_origin(&self.base_url, detail_link) else {
            debug!(link = detail_link, base = %self.base_url, "Detail link is not on the site origin, skipping");
            return String::new();
        };

        let request = FetchRequest::get(url, self.timeout);
        let document = match self.fetcher.fetch(&request).await {
            Ok(document) => document,
            Err(_) => return String::new(),
        };

        Self::find_image_src(&document.body)
            .and_then(|src| normalize_image_src(&self.base_url, &src))
            .unwrap_or_default()
    }
}
