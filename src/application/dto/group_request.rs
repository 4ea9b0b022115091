// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entity::GroupedMapping;
use serde::{Deserialize, Serialize};

/// 分组请求，两个字段都必须存在
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupRequestDto {
    pub page: String,
    pub column: String,
}

#[derive(Debug, Serialize)]
pub struct GroupResponseDto {
    pub success: bool,
    pub page: String,
    pub column: String,
    // Empty when the upstream fetch failed or nothing matched
    pub data: GroupedMapping,
}
