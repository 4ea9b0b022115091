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

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use wikigroup::config::settings::Settings;
use wikigroup::domain::services::grouping_service::GroupingService;
use wikigroup::engines::reqwest_engine::ReqwestFetcher;
use wikigroup::engines::traits::DocumentFetcher;
use wikigroup::presentation::routes;
use wikigroup::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting wikigroup...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!(base_url = %settings.wiki.base_url, "Configuration loaded");

    // 3. Initialize fetcher and service
    let fetcher: Arc<dyn DocumentFetcher> = Arc::new(ReqwestFetcher::new(&settings.fetch.user_agent));
    let service = Arc::new(GroupingService::new(fetcher, settings.clone()));

    // 4. Start HTTP server
    let app = routes::routes(service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
