//! 应用入口 - 编排层
//!
//! 负责按配置建立请求通道，并分发到拉黑或拉取黑名单。

use anyhow::Result;
use chromiumoxide::Browser;
use tracing::info;

use crate::browser;
use crate::config::{Command, Config, TransportKind};
use crate::error::AppResult;
use crate::infrastructure::{HttpResponse, HttpTransport, JsExecutor, Transport};
use crate::orchestrator::block_processor::block_all_users;
use crate::services::BlockListService;
use crate::utils::logging::{log_startup, print_blocked_list, print_summary};

/// 按配置选择的请求通道
pub enum SessionTransport {
    /// reqwest 直连
    Http(HttpTransport),
    /// 浏览器标签页，持有 Browser 以保持连接
    Browser {
        _browser: Browser,
        executor: JsExecutor,
    },
}

impl Transport for SessionTransport {
    async fn get(&self, url: &str) -> AppResult<HttpResponse> {
        match self {
            SessionTransport::Http(transport) => transport.get(url).await,
            SessionTransport::Browser { executor, .. } => executor.get(url).await,
        }
    }

    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
        match self {
            SessionTransport::Http(transport) => transport.post_form(url, fields).await,
            SessionTransport::Browser { executor, .. } => executor.post_form(url, fields).await,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    transport: SessionTransport,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let transport = match config.transport {
            TransportKind::Http => SessionTransport::Http(HttpTransport::new(&config)?),
            TransportKind::Browser => {
                let (browser, page) =
                    browser::connect_to_session_page(config.browser_debug_port, &config.base_url)
                        .await?;
                SessionTransport::Browser {
                    _browser: browser,
                    executor: JsExecutor::new(page),
                }
            }
        };

        Ok(Self { config, transport })
    }

    /// 运行命令
    pub async fn run(&self, command: Command) -> Result<()> {
        log_startup(&self.config, command);

        match command {
            Command::Block => {
                info!("🚀 开始处理...");
                let summary = block_all_users(&self.transport, &self.config).await?;
                print_summary(&summary);
            }
            Command::ListBlocked => {
                let users = BlockListService::new(&self.config)
                    .fetch_all(&self.transport)
                    .await;
                print_blocked_list(&users);
            }
        }

        Ok(())
    }
}
