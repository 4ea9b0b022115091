// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::grouping_service::GroupingService;
use crate::presentation::handlers::group_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 分组服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(service: Arc<GroupingService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let group_routes = Router::new().route(
        "/v1/group",
        get(group_handler::group_query).post(group_handler::group),
    );

    Router::new()
        .merge(public_routes)
        .merge(group_routes)
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
