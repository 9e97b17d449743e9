use async_trait::async_trait;
use reqwest::{Request, Response};

/// HTTP 客户端抽象，方便在测试中替换真实网络层
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// 基于 reqwest 的默认实现
///
/// 不设置请求超时：对存储服务的每次调用都是单发直连，挂起的请求由调用方感知。
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}
