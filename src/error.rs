use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络传输错误
    #[error("传输错误: {0}")]
    Transport(#[from] TransportError),
    /// API 响应错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 账号解析错误
    #[error("账号解析错误: {0}")]
    Resolve(#[from] ResolveError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 网络传输错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP 请求失败（连接、超时、读取响应体）
    #[error("请求 {url} 失败: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 请求在浏览器或其他通道中失败
    #[error("请求 {url} 失败: {message}")]
    Failed { url: String, message: String },
}

/// API 响应错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 非 2xx 状态码
    #[error("{endpoint} 返回 HTTP {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// JSON 解析失败
    #[error("{endpoint} 的响应无法解析为 JSON: {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// meta.status 不是 Success
    #[error("{endpoint} 返回状态 {status:?}")]
    UnexpectedStatus {
        endpoint: String,
        status: Option<String>,
    },
    /// 响应缺少 data 字段
    #[error("{endpoint} 的响应缺少 data 字段")]
    MissingData { endpoint: String },
}

/// 账号解析错误
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 主页中没有找到 accountId
    #[error("未能在 {username} 的主页中找到 accountId")]
    AccountIdMissing { username: String },
    /// 匹配规则无效
    #[error("accountId 匹配规则无效: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    InvalidValue {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 会话 Cookie 含有非法字符
    #[error("SESSION_COOKIE 不是合法的请求头值")]
    InvalidCookie,
    /// HTTP 客户端构建失败
    #[error("无法创建 HTTP 客户端: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
    /// 未知的命令
    #[error("未知命令 '{command}'，可用命令: block, list")]
    UnknownCommand { command: String },
}

impl AppError {
    /// 创建 API 状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建 API 业务状态错误
    pub fn unexpected_status(endpoint: impl Into<String>, status: Option<String>) -> Self {
        AppError::Api(ApiError::UnexpectedStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建通用传输错误
    pub fn transport_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Transport(TransportError::Failed {
            url: url.into(),
            message: message.into(),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
