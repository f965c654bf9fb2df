use std::fmt;

/// 账号的内部数字 ID，从用户主页中提取
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 用户名查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// 找到了账号 ID
    Found(AccountId),
    /// 账号不存在（主页返回 404）
    NotFound,
}

/// 单个用户名的拉黑结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// 拉黑成功
    Blocked,
    /// 账号不存在
    NotFound,
    /// 查询或拉黑失败
    Failed,
}
