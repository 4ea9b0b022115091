// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entity::RowTriple;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

// Column holding the entity link, regardless of where the group column sits.
const NAME_COLUMN: usize = 0;

static DATA_TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.wikitable").expect("valid data table selector"));
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));
static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("valid header cell selector"));
static DATA_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid data cell selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid link selector"));

/// 表格提取器
///
/// 在文档中定位所有 `wikitable` 数据表，按表头文本（不区分大小写）
/// 匹配分组列，并产出每一行的实体三元组
pub struct TableExtractor;

impl TableExtractor {
    /// 提取行三元组
    ///
    /// # 参数
    ///
    /// * `html_content` - 文档内容
    /// * `group_column` - 分组列的表头文本
    ///
    /// # 返回值
    ///
    /// 按文档顺序排列的行三元组；跨表格不去重
    pub fn extract(html_content: &str, group_column: &str) -> Vec<RowTriple> {
        let document = Html::parse_document(html_content);
        let wanted = group_column.to_lowercase();
        let mut triples = Vec::new();

        for (table_no, table) in document.select(&DATA_TABLE_SELECTOR).enumerate() {
            let mut rows = table.select(&ROW_SELECTOR);
            let Some(header_row) = rows.next() else {
                continue;
            };

            let headers = header_labels(header_row);
            let Some(group_idx) = column_index(&headers, &wanted) else {
                debug!(table = table_no, column = %wanted, "Table has no matching column, skipping");
                continue;
            };

            for row in rows {
                if let Some(triple) = extract_row(row, group_idx) {
                    triples.push(triple);
                }
            }
        }

        triples
    }
}

/// 定位分组列
///
/// 表头已小写并去除空白；存在重复表头时取第一个匹配的位置
pub fn column_index(headers: &[String], wanted: &str) -> Option<usize> {
    headers.iter().position(|h| h == wanted)
}

fn header_labels(header_row: ElementRef<'_>) -> Vec<String> {
    header_row
        .select(&HEADER_CELL_SELECTOR)
        .map(|th| {
            th.text()
                .map(str::trim)
                .collect::<String>()
                .to_lowercase()
        })
        .collect()
}

fn extract_row(row: ElementRef<'_>, group_idx: usize) -> Option<RowTriple> {
    let cells: Vec<ElementRef<'_>> = row.select(&DATA_CELL_SELECTOR).collect();
    if cells.len() <= group_idx.max(NAME_COLUMN) {
        debug!(cells = cells.len(), "Row too short, skipping");
        return None;
    }

    let link = cells[NAME_COLUMN].select(&LINK_SELECTOR).next()?;
    let name = link
        .value()
        .attr("title")
        .map(str::to_string)
        .unwrap_or_else(|| link.text().collect::<String>().trim().to_string());
    if name.is_empty() {
        return None;
    }
    let detail_link = link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string);

    let raw_group = cells[group_idx].text().collect::<Vec<_>>().join(",");

    Some(RowTriple {
        name,
        raw_group,
        detail_link,
    })
}

#[cfg(test)]
#[path = "table_extractor_test.rs"]
mod tests;
