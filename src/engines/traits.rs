// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL 不是合法的绝对地址
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 非 2xx 响应
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    /// 超时
    #[error("Timeout fetching {0}")]
    Timeout(String),
    /// 传输层错误
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// 返回错误对应的HTTP状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 查询参数
    pub query: Vec<(String, String)>,
    /// 请求头
    pub headers: HashMap<String, String>,
    /// 超时时间
    pub timeout: Duration,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            timeout,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// 抓取到的文档
///
/// 只在一次提取调用期间存活
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// 最终响应地址
    pub url: String,
    /// 原始文档内容
    pub body: String,
}

/// 文档抓取特质
///
/// 每次调用恰好一次网络往返，不做重试
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<Document, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
