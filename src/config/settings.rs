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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";
const DEFAULT_ARTICLE_PREFIX: &str = "/wiki/";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; wikigroup/0.1)";

/// 应用程序配置设置
///
/// 包含服务器、Wiki 站点、抓取和分组等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Wiki 站点配置
    pub wiki: WikiSettings,
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 分组配置
    pub grouping: GroupingSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Wiki 站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WikiSettings {
    /// 站点根地址，文章和详情链接都基于它解析
    pub base_url: String,
    /// 文章路径前缀
    pub article_prefix: String,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 分组配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingSettings {
    /// 图片解析的最大并发数，1 表示顺序执行
    pub image_concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            wiki: WikiSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                article_prefix: DEFAULT_ARTICLE_PREFIX.to_string(),
            },
            fetch: FetchSettings {
                timeout_secs: 10,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            grouping: GroupingSettings {
                image_concurrency: 1,
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("wiki.base_url", DEFAULT_BASE_URL)?
            .set_default("wiki.article_prefix", DEFAULT_ARTICLE_PREFIX)?
            .set_default("fetch.timeout_secs", 10)?
            .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
            .set_default("grouping.image_concurrency", 1)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WIKIGROUP").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 使用指定站点地址创建配置，其余字段取默认值
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.wiki.base_url = base_url.into();
        settings
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }

    /// 文章页面的完整地址
    pub fn article_url(&self, page: &str) -> String {
        format!(
            "{}{}{}",
            self.wiki.base_url.trim_end_matches('/'),
            self.wiki.article_prefix,
            page
        )
    }

    /// 图片并发数，0 按 1 处理
    pub fn image_concurrency(&self) -> usize {
        self.grouping.image_concurrency.max(1)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
