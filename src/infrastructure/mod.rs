//! 基础设施层（Infrastructure）
//!
//! 持有网络资源，只暴露"发请求"的能力：
//! - `HttpTransport` - reqwest 直连，会话来自配置中的 Cookie
//! - `JsExecutor` - 在已登录的浏览器标签页中执行 fetch

pub mod http_client;
pub mod js_executor;
pub mod transport;

#[cfg(test)]
pub mod fake;

pub use http_client::HttpTransport;
pub use js_executor::JsExecutor;
pub use transport::{HttpResponse, Transport};
