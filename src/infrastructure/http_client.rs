//! HTTP 请求通道 - 基础设施层
//!
//! 直接用 reqwest 发请求，会话通过 SESSION_COOKIE 注入到每个请求的 Cookie 头中。

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppResult, ConfigError, TransportError};
use crate::infrastructure::transport::{HttpResponse, Transport};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// reqwest 请求通道
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 根据配置创建 HTTP 通道
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        match &config.session_cookie {
            Some(cookie) => {
                let value = HeaderValue::from_str(cookie).map_err(|_| ConfigError::InvalidCookie)?;
                headers.insert(COOKIE, value);
            }
            None => warn!("⚠️ 未设置 SESSION_COOKIE，拉黑和黑名单接口需要登录态"),
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::ClientBuildFailed)?;

        Ok(Self { client })
    }

    async fn read(url: &str, response: Response) -> AppResult<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| TransportError::Http {
            url: url.to_string(),
            source,
        })?;
        debug!("{} -> HTTP {} ({} 字节)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> AppResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Http {
                url: url.to_string(),
                source,
            })?;
        Self::read(url, response).await
    }

    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
        let form = fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.to_string(), value.clone())
            });

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| TransportError::Http {
                url: url.to_string(),
                source,
            })?;
        Self::read(url, response).await
    }
}
