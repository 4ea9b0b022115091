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

use crate::engines::traits::{Document, DocumentFetcher, FetchError, FetchRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP文档抓取器
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, user_agent, "Failed to build HTTP client, using defaults");
                reqwest::Client::new()
            });

        Self { client }
    }

    async fn send(&self, request: &FetchRequest) -> Result<Document, FetchError> {
        let url = Url::parse(&request.url).map_err(|e| FetchError::InvalidUrl {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        // Build headers
        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(k, v);
            }
        }

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .query(&request.query)
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| classify(e, &request.url))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify(e, &request.url))?;

        debug!(
            url = %final_url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Document fetched"
        );

        Ok(Document {
            url: final_url,
            body,
        })
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new(concat!("wikigroup/", env!("CARGO_PKG_VERSION")))
    }
}

fn classify(error: reqwest::Error, url: &str) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Transport(error)
    }
}

#[async_trait]
impl DocumentFetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Document)` - 2xx 响应的文档
    /// * `Err(FetchError)` - 非法URL、非2xx状态、超时或传输错误
    async fn fetch(&self, request: &FetchRequest) -> Result<Document, FetchError> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            warn!(
                engine = self.name(),
                url = %request.url,
                status = ?e.status(),
                error = %e,
                "Request error"
            );
        }
        result
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
