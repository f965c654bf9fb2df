//! 账号处理上下文
//!
//! 封装"我正在处理列表中的第几个账号"这一信息

use std::fmt::Display;

/// 账号处理上下文
#[derive(Debug, Clone)]
pub struct UserCtx {
    /// 用户名
    pub username: String,

    /// 在列表中的位置（从1开始，仅用于日志显示）
    pub index: usize,

    /// 列表总数
    pub total: usize,
}

impl UserCtx {
    pub fn new(username: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            username: username.into(),
            index,
            total,
        }
    }
}

impl Display for UserCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[账号 {}/{} {}]", self.index, self.total, self.username)
    }
}
