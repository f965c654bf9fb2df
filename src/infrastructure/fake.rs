//! 测试用的脚本化请求通道

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::infrastructure::transport::{HttpResponse, Transport};

/// 记录下来的一次请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub fields: Vec<(String, String)>,
}

/// 按 url 排队返回预设响应的通道；未预设的 url 返回传输错误
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, VecDeque<AppResult<HttpResponse>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, Ok(HttpResponse::new(status, body)))
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.push(url, Err(AppError::transport_failed(url, message)))
    }

    fn push(self, url: &str, response: AppResult<HttpResponse>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, method: &'static str, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            fields: fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        });
        self.routes
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(AppError::transport_failed(url, "no scripted response")))
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> AppResult<HttpResponse> {
        self.next("GET", url, &[])
    }

    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> AppResult<HttpResponse> {
        self.next("POST", url, fields)
    }
}
