//! 黑名单服务 - 业务能力层
//!
//! 分页拉取当前会话已拉黑的账号。接口每次最多返回 50 个，
//! 用显式循环逐页推进偏移量，直到接口给出 didEndOfList。

use std::collections::BTreeSet;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::infrastructure::Transport;
use crate::models::{BlockListPage, BlockListResponse};

/// 每页请求的记录数
pub const BLOCK_LIST_PAGE_SIZE: usize = 50;

/// 黑名单服务
pub struct BlockListService {
    endpoint: String,
    requests_delay: Duration,
}

impl BlockListService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: format!("{}/v1/user-block-list", config.base_url),
            requests_delay: config.requests_delay,
        }
    }

    /// 拉取从 `from_index` 开始的一页
    pub async fn fetch_page<T: Transport>(&self, transport: &T, from_index: usize) -> AppResult<BlockListPage> {
        let fields = [
            ("fromIndex", from_index.to_string()),
            ("itemCount", BLOCK_LIST_PAGE_SIZE.to_string()),
        ];

        let response = transport.post_form(&self.endpoint, &fields).await?;
        if !response.is_success() {
            return Err(AppError::bad_status(&self.endpoint, response.status));
        }

        let result: BlockListResponse = response.json(&self.endpoint)?;
        if !result.is_success() {
            return Err(AppError::unexpected_status(&self.endpoint, result.status()));
        }
        let data = result.data.ok_or_else(|| ApiError::MissingData {
            endpoint: self.endpoint.clone(),
        })?;

        Ok(BlockListPage {
            usernames: data.users.into_iter().map(|user| user.username).collect(),
            end_of_list: data.did_end_of_list,
            next_offset: from_index + BLOCK_LIST_PAGE_SIZE,
        })
    }

    /// 拉取完整黑名单，去重并按字典序排序
    ///
    /// 任何一页失败都会中止整个拉取。
    pub async fn try_fetch_all<T: Transport>(&self, transport: &T) -> AppResult<Vec<String>> {
        info!("ℹ️ 如果拉黑的账号较多，需要分多轮拉取，请稍候");

        let mut blocked = BTreeSet::new();
        let mut offset = 0;
        loop {
            info!("📋 正在拉取黑名单（第 {} 轮）...", offset / BLOCK_LIST_PAGE_SIZE + 1);
            let page = self.fetch_page(transport, offset).await?;
            blocked.extend(page.usernames);

            if page.end_of_list {
                break;
            }
            offset = page.next_offset;
            sleep(self.requests_delay).await;
        }

        Ok(blocked.into_iter().collect())
    }

    /// 拉取完整黑名单并记录日志，失败时返回空列表
    pub async fn fetch_all<T: Transport>(&self, transport: &T) -> Vec<String> {
        match self.try_fetch_all(transport).await {
            Ok(users) => {
                info!("✅ 共找到 {} 个已拉黑账号: {}", users.len(), users.join(","));
                users
            }
            Err(e) => {
                error!("❌ 拉取黑名单失败: {}", e);
                Vec::new()
            }
        }
    }
}
