// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

use crate::application::dto::group_request::{GroupRequestDto, GroupResponseDto};
use crate::domain::services::grouping_service::GroupingService;

/// 按列分组（JSON 请求体）
///
/// 上游抓取失败与没有匹配数据都返回空的 `data`
pub async fn group(
    Extension(service): Extension<Arc<GroupingService>>,
    Json(payload): Json<GroupRequestDto>,
) -> Json<GroupResponseDto> {
    Json(run(&service, payload).await)
}

/// 按列分组（查询参数）
pub async fn group_query(
    Extension(service): Extension<Arc<GroupingService>>,
    Query(payload): Query<GroupRequestDto>,
) -> Json<GroupResponseDto> {
    Json(run(&service, payload).await)
}

async fn run(service: &GroupingService, payload: GroupRequestDto) -> GroupResponseDto {
    let data = service
        .group_by_column(&payload.page, &payload.column)
        .await;

    GroupResponseDto {
        success: true,
        page: payload.page,
        column: payload.column,
        data,
    }
}
