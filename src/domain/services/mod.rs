// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 表格提取（table_extractor）：定位数据表并按表头匹配分组列
/// - 图片解析（image_resolver）：抓取详情页并定位代表性图片
/// - 分组（grouper）：拆分分组值并折叠为分组映射
/// - 分组服务（grouping_service）：串联以上步骤处理一次请求
pub mod grouper;
pub mod grouping_service;
pub mod image_resolver;
pub mod table_extractor;
