//! 拉黑服务 - 业务能力层
//!
//! 只负责"对一个账号 ID 发起拉黑"，不关心账号从哪里来

use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::Transport;
use crate::models::{AccountId, BlockResponse};
use crate::utils::truncate_text;

/// 拉黑服务
pub struct BlockService {
    endpoint: String,
}

impl BlockService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: format!("{}/v1/user-block", config.base_url),
        }
    }

    /// 发起拉黑请求
    ///
    /// 不做"已拉黑"的本地判断，结果完全以接口返回的 meta.status 为准。
    pub async fn try_block<T: Transport>(
        &self,
        transport: &T,
        username: &str,
        account_id: &AccountId,
    ) -> AppResult<()> {
        let fields = [
            ("accountId", account_id.to_string()),
            ("_method", "post".to_string()),
        ];
        debug!("拉黑 {} ({})", username, account_id);

        let response = transport.post_form(&self.endpoint, &fields).await?;
        if !response.is_success() {
            return Err(AppError::bad_status(&self.endpoint, response.status));
        }

        let result: BlockResponse = response.json(&self.endpoint)?;
        if result.is_success() {
            Ok(())
        } else {
            debug!("拉黑接口响应: {}", truncate_text(&response.body, 200));
            Err(AppError::unexpected_status(&self.endpoint, result.status()))
        }
    }

    /// 发起拉黑请求并记录日志，返回是否成功
    pub async fn block<T: Transport>(&self, transport: &T, username: &str, account_id: &AccountId) -> bool {
        match self.try_block(transport, username, account_id).await {
            Ok(()) => {
                info!("✅ 账号 {} ({}) 拉黑成功", username, account_id);
                true
            }
            Err(e) => {
                error!("❌ 账号 {} ({}) 拉黑失败: {}", username, account_id, e);
                false
            }
        }
    }
}
