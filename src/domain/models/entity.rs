// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// 表格行三元组
///
/// 由表格提取器产出，包含实体名称、分组列原始文本和详情链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTriple {
    /// 实体名称
    pub name: String,
    /// 分组列原始文本，逗号拼接嵌套元素文本
    pub raw_group: String,
    /// 详情链接，可能是相对路径
    pub detail_link: Option<String>,
}

impl RowTriple {
    pub fn new(
        name: impl Into<String>,
        raw_group: impl Into<String>,
        detail_link: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_group: raw_group.into(),
            detail_link,
        }
    }

    /// 拆分出原子分组值
    ///
    /// 按逗号切分、去除首尾空白并丢弃空片段
    pub fn group_values(&self) -> Vec<&str> {
        self.raw_group
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// 分组中的实体
///
/// `image` 为空字符串表示未找到图片
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GroupedEntity {
    pub name: String,
    pub image: String,
}

impl GroupedEntity {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// 分组映射
///
/// 分组值到实体列表的映射，键按首次出现的顺序保存，
/// 每个分组内的实体按行顺序保存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedMapping {
    groups: Vec<(String, Vec<GroupedEntity>)>,
    index: HashMap<String, usize>,
}

impl GroupedMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将实体追加到指定分组，分组不存在时创建
    pub fn push(&mut self, group: &str, entity: GroupedEntity) {
        match self.index.get(group) {
            Some(&i) => self.groups[i].1.push(entity),
            None => {
                self.index.insert(group.to_string(), self.groups.len());
                self.groups.push((group.to_string(), vec![entity]));
            }
        }
    }

    pub fn get(&self, group: &str) -> Option<&[GroupedEntity]> {
        self.index
            .get(group)
            .map(|&i| self.groups[i].1.as_slice())
    }

    /// 分组键，按插入顺序
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GroupedEntity])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 所有分组中的实体总数（含扇出重复）
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, v)| v.len()).sum()
    }
}

impl Serialize for GroupedMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, entities) in &self.groups {
            map.serialize_entry(key, entities)?;
        }
        map.end()
    }
}
