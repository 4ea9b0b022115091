// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：行三元组和分组映射
/// - 服务（services）：表格提取、图片解析、分组及其编排
///
/// 领域层只依赖抓取特质，不依赖具体的网络实现。
pub mod models;
pub mod services;
