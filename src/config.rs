use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::parse_users_list;

/// 请求通道
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    /// 直接发 HTTP 请求，会话来自 SESSION_COOKIE
    Http,
    /// 在已登录的浏览器标签页里执行 fetch
    Browser,
}

impl FromStr for TransportKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(TransportKind::Http),
            "browser" => Ok(TransportKind::Browser),
            _ => Err(()),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待拉黑的用户名列表
    pub users_to_block: Vec<String>,
    /// 每次请求之间的固定间隔
    pub requests_delay: Duration,
    /// 站点根地址
    pub base_url: String,
    /// 请求通道
    pub transport: TransportKind,
    /// 会话 Cookie（仅 http 通道使用）
    pub session_cookie: Option<String>,
    /// 浏览器调试端口（仅 browser 通道使用）
    pub browser_debug_port: u16,
    /// 单个请求的超时时间
    pub request_timeout: Duration,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_to_block: Vec::new(),
            requests_delay: Duration::from_millis(1000),
            base_url: "https://9gag.com".to_string(),
            transport: TransportKind::Http,
            session_cookie: None,
            browser_debug_port: 9222,
            request_timeout: Duration::from_secs(30),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            users_to_block: std::env::var("USERS_TO_BLOCK")
                .map(|raw| parse_users_list(&raw))
                .unwrap_or(default.users_to_block),
            requests_delay: env_parsed::<u64>("REQUESTS_DELAY_MS", "毫秒数")?
                .map(Duration::from_millis)
                .unwrap_or(default.requests_delay),
            base_url: std::env::var("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            transport: env_parsed::<TransportKind>("TRANSPORT", "http 或 browser")?
                .unwrap_or(default.transport),
            session_cookie: std::env::var("SESSION_COOKIE")
                .ok()
                .filter(|cookie| !cookie.trim().is_empty()),
            browser_debug_port: env_parsed::<u16>("BROWSER_DEBUG_PORT", "端口号")?
                .unwrap_or(default.browser_debug_port),
            request_timeout: env_parsed::<u64>("REQUEST_TIMEOUT_SECS", "秒数")?
                .map(Duration::from_secs)
                .unwrap_or(default.request_timeout),
            verbose_logging: env_parsed::<bool>("VERBOSE_LOGGING", "true 或 false")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

/// 读取并解析环境变量，未设置时返回 None
fn env_parsed<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value, expected_type).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var_name: var_name.to_string(),
        value: value.to_string(),
        expected_type: expected_type.to_string(),
    })
}

/// 运行命令
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// 拉黑 USERS_TO_BLOCK 中的所有账号
    Block,
    /// 列出已拉黑的账号
    ListBlocked,
}

impl Command {
    /// 从命令行参数（不含程序名）解析命令，缺省为 block
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        match args.next().as_deref() {
            None | Some("block") => Ok(Command::Block),
            Some("list") | Some("list-blocked") => Ok(Command::ListBlocked),
            Some(other) => Err(ConfigError::UnknownCommand {
                command: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_command_defaults_to_block() {
        assert_eq!(Command::from_args(args(&[])).unwrap(), Command::Block);
        assert_eq!(Command::from_args(args(&["block"])).unwrap(), Command::Block);
        assert_eq!(
            Command::from_args(args(&["list"])).unwrap(),
            Command::ListBlocked
        );
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let err = Command::from_args(args(&["unblock"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCommand { command } if command == "unblock"));
    }

    #[test]
    fn test_transport_kind_parsing() {
        assert_eq!("HTTP".parse::<TransportKind>(), Ok(TransportKind::Http));
        assert_eq!(" browser ".parse::<TransportKind>(), Ok(TransportKind::Browser));
        assert!("carrier-pigeon".parse::<TransportKind>().is_err());
    }

    #[test]
    fn test_parse_value_reports_variable() {
        let err = parse_value::<u64>("REQUESTS_DELAY_MS", "soon", "毫秒数").unwrap_err();
        match err {
            ConfigError::InvalidValue { var_name, value, .. } => {
                assert_eq!(var_name, "REQUESTS_DELAY_MS");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(parse_value::<u64>("REQUESTS_DELAY_MS", " 250 ", "毫秒数").unwrap(), 250);
    }

    #[test]
    fn test_default_matches_site_defaults() {
        let config = Config::default();
        assert_eq!(config.requests_delay, Duration::from_millis(1000));
        assert_eq!(config.base_url, "https://9gag.com");
        assert!(config.users_to_block.is_empty());
    }
}
