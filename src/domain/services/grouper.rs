// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entity::{GroupedEntity, GroupedMapping, RowTriple};
use crate::domain::services::image_resolver::ImageLookup;
use futures::stream::{self, StreamExt};

/// 分组器
///
/// 将行三元组按分组值折叠为分组映射
pub struct Grouper {
    concurrency: usize,
}

impl Default for Grouper {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Grouper {
    /// `concurrency` 为图片解析的最大并发数，0 按 1 处理
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    /// 分组
    ///
    /// 每个三元组只解析一次图片，无论扇出到多少个分组值；
    /// 没有详情链接（或链接为空）的行不解析图片。输出顺序与完成顺序无关。
    pub async fn group(&self, triples: Vec<RowTriple>, images: &dyn ImageLookup) -> GroupedMapping {
        let resolved: Vec<(RowTriple, String)> = stream::iter(triples)
            .map(|triple| async move {
                let image = match triple.detail_link.as_deref().map(str::trim) {
                    Some(link) if !link.is_empty() => images.resolve(link).await,
                    _ => String::new(),
                };
                (triple, image)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut mapping = GroupedMapping::new();
        for (triple, image) in &resolved {
            for value in triple.group_values() {
                mapping.push(value, GroupedEntity::new(triple.name.clone(), image.clone()));
            }
        }
        mapping
    }
}

#[cfg(test)]
#[path = "grouper_test.rs"]
mod tests;
