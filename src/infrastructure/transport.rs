//! 请求通道抽象 - 基础设施层
//!
//! 上层只依赖 `Transport`，不关心请求是 reqwest 直接发出
//! 还是在浏览器标签页里执行的。

use serde::de::DeserializeOwned;

use crate::error::{ApiError, AppResult};

/// 一次请求的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// 将响应体解析为 JSON
    pub fn json<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|source| {
            ApiError::JsonParseFailed {
                endpoint: endpoint.to_string(),
                source,
            }
            .into()
        })
    }
}

/// 请求通道
///
/// 每个调用都会被等待完成后才发出下一个请求，实现方不需要处理并发。
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GET 请求
    async fn get(&self, url: &str) -> AppResult<HttpResponse>;

    /// 以 multipart/form-data 提交表单
    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::Value;

    #[test]
    fn test_status_helpers() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(HttpResponse::new(404, "").is_not_found());
        assert!(!HttpResponse::new(404, "").is_success());
    }

    #[test]
    fn test_json_error_keeps_endpoint() {
        let response = HttpResponse::new(200, "<html>oops</html>");
        let err = response.json::<Value>("/v1/user-block").unwrap_err();
        match err {
            AppError::Api(ApiError::JsonParseFailed { endpoint, .. }) => {
                assert_eq!(endpoint, "/v1/user-block");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
