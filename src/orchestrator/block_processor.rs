//! 批量拉黑处理器 - 编排层
//!
//! 逐个处理用户名列表：查询 → 拉黑 → 固定间隔，最后汇总统计。
//! 请求严格串行，单个账号的失败不会中断整个列表。

use std::collections::HashSet;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::Transport;
use crate::models::BlockOutcome;
use crate::utils::logging::log_users_parsed;
use crate::workflow::{BlockFlow, UserCtx};

/// 拉黑汇总
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    /// 拉黑成功数量
    pub blocked: usize,
    /// 不存在的账号
    pub not_found: Vec<String>,
    /// 失败的账号
    pub failed: Vec<String>,
}

impl BlockSummary {
    pub fn record(&mut self, username: &str, outcome: BlockOutcome) {
        match outcome {
            BlockOutcome::Blocked => self.blocked += 1,
            BlockOutcome::NotFound => self.not_found.push(username.to_string()),
            BlockOutcome::Failed => self.failed.push(username.to_string()),
        }
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// 拉黑配置中的所有账号
///
/// 每处理完一个账号都会等待 `requests_delay`，无论结果如何。
/// 同一个用户名在列表中重复出现时只处理第一次。
pub async fn block_all_users<T: Transport>(transport: &T, config: &Config) -> AppResult<BlockSummary> {
    let users = &config.users_to_block;
    let mut summary = BlockSummary::default();

    if users.is_empty() {
        warn!("❌ 待拉黑列表为空，请设置 USERS_TO_BLOCK（逗号分隔的用户名）");
        return Ok(summary);
    }

    log_users_parsed(users);

    let flow = BlockFlow::new(config)?;
    let mut seen = HashSet::new();

    for (idx, username) in users.iter().enumerate() {
        let ctx = UserCtx::new(username.as_str(), idx + 1, users.len());

        if !seen.insert(username.as_str()) {
            warn!("{} 重复的用户名，已跳过", ctx);
            continue;
        }

        let outcome = AssertUnwindSafe(flow.run(transport, &ctx))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                error!("{} ❌ 处理过程中发生意外错误", ctx);
                BlockOutcome::Failed
            });
        summary.record(username, outcome);

        sleep(config.requests_delay).await;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::infrastructure::fake::FakeTransport;
    use crate::infrastructure::HttpResponse;
    use std::time::{Duration, Instant};

    const PROFILE: &str = r#"JSON.parse("{\"accountId\":\"101\"}")"#;
    const BLOCK: &str = "https://9gag.com/v1/user-block";
    const SUCCESS: &str = r#"{"meta":{"status":"Success"}}"#;

    fn config(users: &[&str]) -> Config {
        Config {
            users_to_block: users.iter().map(|u| u.to_string()).collect(),
            requests_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_alice_blocked_bob_not_found() {
        let transport = FakeTransport::new()
            .respond("https://9gag.com/u/alice", 200, PROFILE)
            .respond(BLOCK, 200, SUCCESS)
            .respond("https://9gag.com/u/bob", 404, "");

        let summary = block_all_users(&transport, &config(&["alice", "bob"])).await.unwrap();

        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.not_found_count(), 1);
        assert_eq!(summary.failed_count(), 0);
        assert_eq!(summary.not_found, vec!["bob"]);
    }

    #[tokio::test]
    async fn test_empty_list_makes_no_requests() {
        let transport = FakeTransport::new();
        let summary = block_all_users(&transport, &config(&[])).await.unwrap();
        assert_eq!(summary, BlockSummary::default());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_the_run() {
        let transport = FakeTransport::new()
            .fail("https://9gag.com/u/first", "connection refused")
            .respond("https://9gag.com/u/second", 200, PROFILE)
            .respond(BLOCK, 500, "")
            .respond("https://9gag.com/u/third", 200, PROFILE)
            .respond(BLOCK, 200, SUCCESS);

        let summary = block_all_users(&transport, &config(&["first", "second", "third"]))
            .await
            .unwrap();

        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.failed, vec!["first", "second"]);
        assert!(summary.not_found.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_usernames_blocked_once() {
        let transport = FakeTransport::new()
            .respond("https://9gag.com/u/dup", 200, PROFILE)
            .respond(BLOCK, 200, SUCCESS);

        let summary = block_all_users(&transport, &config(&["dup", "dup"])).await.unwrap();

        assert_eq!(summary.blocked, 1);
        let block_requests = transport
            .requests()
            .into_iter()
            .filter(|r| r.url == BLOCK)
            .count();
        assert_eq!(block_requests, 1);
    }

    #[tokio::test]
    async fn test_delay_applies_after_every_user() {
        let transport = FakeTransport::new()
            .respond("https://9gag.com/u/a", 404, "")
            .respond("https://9gag.com/u/b", 404, "");
        let config = Config {
            requests_delay: Duration::from_millis(30),
            ..config(&["a", "b"])
        };

        let started = Instant::now();
        block_all_users(&transport, &config).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    /// 查询某个用户名时直接 panic 的通道
    struct PanickingTransport {
        inner: FakeTransport,
    }

    impl Transport for PanickingTransport {
        async fn get(&self, url: &str) -> AppResult<HttpResponse> {
            if url.ends_with("/boom") {
                panic!("transport exploded");
            }
            self.inner.get(url).await
        }

        async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
            self.inner.post_form(url, fields).await
        }
    }

    #[tokio::test]
    async fn test_panic_counts_as_failure() {
        let transport = PanickingTransport {
            inner: FakeTransport::new()
                .respond("https://9gag.com/u/calm", 200, PROFILE)
                .respond(BLOCK, 200, SUCCESS),
        };

        let summary = block_all_users(&transport, &config(&["boom", "calm"])).await.unwrap();

        assert_eq!(summary.failed, vec!["boom"]);
        assert_eq!(summary.blocked, 1);
    }
}
