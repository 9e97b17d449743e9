use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
///
/// 只构建一次表格存储客户端，之后注入到所有请求处理链路。
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage().expect("Failed to create storage backend");
    warn!("Table store backend initialized");

    StartupContext { storage }
}
