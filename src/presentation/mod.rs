// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod handlers;
pub mod routes;
