//! 单个账号的拉黑流程 - 流程层
//!
//! 流程顺序：
//! 1. 查询 accountId
//! 2. 账号不存在 → NotFound
//! 3. 查到 accountId → 拉黑 → Blocked / Failed
//! 4. 查询失败 → Failed

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::Transport;
use crate::models::{BlockOutcome, Lookup};
use crate::services::{AccountResolver, BlockService};
use crate::workflow::user_ctx::UserCtx;

/// 账号拉黑流程
///
/// - 决定何时查询、何时拉黑
/// - 不持有请求通道
/// - 查询和拉黑的失败在各自的服务中记录，这里只转换成结果
pub struct BlockFlow {
    resolver: AccountResolver,
    block_service: BlockService,
}

impl BlockFlow {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            resolver: AccountResolver::new(config)?,
            block_service: BlockService::new(config),
        })
    }

    pub async fn run<T: Transport>(&self, transport: &T, ctx: &UserCtx) -> BlockOutcome {
        info!("{} 🔍 查询 accountId...", ctx);

        match self.resolver.resolve(transport, &ctx.username).await {
            Some(Lookup::NotFound) => BlockOutcome::NotFound,
            Some(Lookup::Found(account_id)) => {
                if self
                    .block_service
                    .block(transport, &ctx.username, &account_id)
                    .await
                {
                    BlockOutcome::Blocked
                } else {
                    BlockOutcome::Failed
                }
            }
            None => BlockOutcome::Failed,
        }
    }
}
