//! 账号解析服务 - 业务能力层
//!
//! 只负责"用户名 → 账号 ID"，不关心拉黑流程

use regex::Regex;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, ResolveError};
use crate::infrastructure::Transport;
use crate::models::{AccountId, Lookup};

/// 主页里 accountId 以转义 JSON 的形式嵌在脚本字符串中，也兼容未转义的写法
const ACCOUNT_ID_PATTERN: &str = r#"\\?"accountId\\?"\s*:\s*\\?"(\d+)\\?""#;

/// 账号解析服务
pub struct AccountResolver {
    base_url: String,
    account_id_pattern: Regex,
}

impl AccountResolver {
    pub fn new(config: &Config) -> AppResult<Self> {
        let account_id_pattern = Regex::new(ACCOUNT_ID_PATTERN).map_err(ResolveError::from)?;
        Ok(Self {
            base_url: config.base_url.clone(),
            account_id_pattern,
        })
    }

    /// 用户主页地址
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/u/{}", self.base_url, urlencoding::encode(username))
    }

    /// 查询用户名对应的账号 ID
    ///
    /// 主页 404 时返回 `Lookup::NotFound`；页面中找不到 accountId 或请求失败时返回错误。
    pub async fn lookup<T: Transport>(&self, transport: &T, username: &str) -> AppResult<Lookup> {
        let url = self.profile_url(username);
        let response = transport.get(&url).await?;

        if response.is_not_found() {
            return Ok(Lookup::NotFound);
        }
        if !response.is_success() {
            return Err(AppError::bad_status(url, response.status));
        }

        match self.extract_account_id(&response.body) {
            Some(account_id) => {
                debug!("{} 的 accountId: {}", username, account_id);
                Ok(Lookup::Found(account_id))
            }
            None => Err(ResolveError::AccountIdMissing {
                username: username.to_string(),
            }
            .into()),
        }
    }

    /// 查询并记录日志，失败时返回 None
    pub async fn resolve<T: Transport>(&self, transport: &T, username: &str) -> Option<Lookup> {
        match self.lookup(transport, username).await {
            Ok(Lookup::NotFound) => {
                warn!("⚠️ 账号 {} 不存在", username);
                Some(Lookup::NotFound)
            }
            Ok(found) => Some(found),
            Err(e) => {
                error!("❌ 获取 {} 的 accountId 失败: {}", username, e);
                None
            }
        }
    }

    /// 从主页 HTML 中提取 accountId
    pub fn extract_account_id(&self, html: &str) -> Option<AccountId> {
        self.account_id_pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| AccountId::new(m.as_str()))
    }
}
