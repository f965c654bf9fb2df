//! 浏览器请求通道 - 基础设施层
//!
//! 持有已登录的标签页，把每个请求作为页面内的 fetch 执行，
//! 请求自动携带浏览器自己的会话 Cookie。

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::transport::{HttpResponse, Transport};

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval() 能力
/// - 不认识用户名 / 账号 ID
pub struct JsExecutor {
    page: Page,
}

/// 页面内 fetch 脚本的返回值
#[derive(Debug, Deserialize)]
struct ScriptResponse {
    #[serde(default)]
    status: u16,
    #[serde(default)]
    body: String,
    #[serde(default)]
    error: Option<String>,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> anyhow::Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> anyhow::Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    async fn fetch(&self, url: &str, script: String) -> AppResult<HttpResponse> {
        let response: ScriptResponse = self
            .eval_as(script)
            .await
            .map_err(|e| AppError::transport_failed(url, e.to_string()))?;

        if let Some(message) = response.error {
            return Err(AppError::transport_failed(url, message));
        }

        debug!("{} -> HTTP {} ({} 字节)", url, response.status, response.body.len());
        Ok(HttpResponse::new(response.status, response.body))
    }
}

impl Transport for JsExecutor {
    async fn get(&self, url: &str) -> AppResult<HttpResponse> {
        let script = build_fetch_script(url, None)?;
        self.fetch(url, script).await
    }

    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
        let script = build_fetch_script(url, Some(fields))?;
        self.fetch(url, script).await
    }
}

/// 构建页面内 fetch 脚本
///
/// url 和表单字段都经过 JSON 序列化后再嵌入脚本。
fn build_fetch_script(url: &str, fields: Option<&[(&str, String)]>) -> AppResult<String> {
    let url_literal = serde_json::to_string(url)
        .map_err(|e| AppError::transport_failed(url, e.to_string()))?;

    let init = match fields {
        Some(fields) => {
            let fields_literal = serde_json::to_string(fields)
                .map_err(|e| AppError::transport_failed(url, e.to_string()))?;
            format!(
                r#"(() => {{
                    const form = new FormData();
                    for (const [name, value] of {}) {{
                        form.append(name, value);
                    }}
                    return {{ method: "POST", body: form, credentials: "include" }};
                }})()"#,
                fields_literal
            )
        }
        None => r#"{ method: "GET", credentials: "include" }"#.to_string(),
    };

    Ok(format!(
        r#"
        (async () => {{
            try {{
                const res = await fetch({}, {});
                const body = await res.text();
                return {{ status: res.status, body: body }};
            }} catch (err) {{
                return {{ status: 0, body: "", error: String(err) }};
            }}
        }})()
        "#,
        url_literal, init
    ))
}
