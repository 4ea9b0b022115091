// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::entity::GroupedMapping;
use crate::domain::services::grouper::Grouper;
use crate::domain::services::image_resolver::ImageResolver;
use crate::domain::services::table_extractor::TableExtractor;
use crate::engines::traits::{DocumentFetcher, FetchRequest};
use std::sync::Arc;
use tracing::info;

/// 分组服务
///
/// 串联抓取、表格提取、图片解析和分组。每次请求从零开始，
/// 不在请求之间保留任何状态。
#[derive(Clone)]
pub struct GroupingService {
    fetcher: Arc<dyn DocumentFetcher>,
    settings: Arc<Settings>,
}

impl GroupingService {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, settings: Arc<Settings>) -> Self {
        Self { fetcher, settings }
    }

    /// 按列分组
    ///
    /// # 参数
    ///
    /// * `page` - 文章标识，与站点根地址拼接为文档地址
    /// * `column` - 分组列的表头文本
    ///
    /// # 返回值
    ///
    /// 分组映射；主文档抓取失败或没有匹配行时返回空映射
    pub async fn group_by_column(&self, page: &str, column: &str) -> GroupedMapping {
        let url = self.settings.article_url(page);
        let request = FetchRequest::get(url, self.settings.fetch_timeout());

        let document = match self.fetcher.fetch(&request).await {
            Ok(document) => document,
            Err(_) => return GroupedMapping::new(),
        };

        let triples = TableExtractor::extract(&document.body, column);
        let rows = triples.len();

        let resolver = ImageResolver::new(
            self.fetcher.clone(),
            self.settings.wiki.base_url.clone(),
            self.settings.fetch_timeout(),
        );
        let mapping = Grouper::new(self.settings.image_concurrency())
            .group(triples, &resolver)
            .await;

        info!(
            page = page,
            column = column,
            rows = rows,
            groups = mapping.len(),
            "Grouping completed"
        );
        mapping
    }
}
