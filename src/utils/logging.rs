/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::config::{Command, Config, TransportKind};
use crate::orchestrator::BlockSummary;

/// 记录程序启动信息
pub fn log_startup(config: &Config, command: Command) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", command_label(command));
    info!("🌐 站点: {}", config.base_url);
    info!(
        "🔌 请求通道: {}",
        match config.transport {
            TransportKind::Http => "HTTP (SESSION_COOKIE)",
            TransportKind::Browser => "浏览器标签页",
        }
    );
    info!("⏱️ 请求间隔: {} ms", config.requests_delay.as_millis());
    info!("{}", "=".repeat(60));
}

fn command_label(command: Command) -> &'static str {
    match command {
        Command::Block => "批量拉黑",
        Command::ListBlocked => "拉取黑名单",
    }
}

/// 记录待处理的账号列表
pub fn log_users_parsed(users: &[String]) {
    info!("📝 共 {} 个账号待拉黑: {}", users.len(), users.join(", "));
}

/// 打印拉黑汇总
pub fn print_summary(summary: &BlockSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 执行汇总");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ {} 个账号已拉黑", summary.blocked);
    if !summary.not_found.is_empty() {
        warn!(
            "⚠️ {} 个账号不存在: {}",
            summary.not_found.len(),
            summary.not_found.join(",")
        );
    }
    if !summary.failed.is_empty() {
        warn!(
            "❌ {} 个失败: {}",
            summary.failed.len(),
            summary.failed.join(",")
        );
    }
    info!("🏁 处理结束");
    info!("{}", "=".repeat(60));
}

/// 打印黑名单
pub fn print_blocked_list(users: &[String]) {
    info!("\n{}", "=".repeat(60));
    info!("📋 黑名单共 {} 个账号", users.len());
    info!("{}", "=".repeat(60));
    for user in users {
        info!("  {}", user);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("账号拉黑失败了", 4), "账号拉黑...");
    }
}
