pub mod qianfan;

use async_trait::async_trait;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use std::sync::Arc;
use self::qianfan::QianfanGateway;

/// The remote conversational service replies are delegated to.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Opens a new remote conversation and returns its identifier.
    async fn create_conversation(&self) -> Result<String, GatewayError>;

    /// Sends `query` within `conversation_id` and returns the decoded reply text.
    async fn query(&self, query: &str, conversation_id: &str) -> Result<String, GatewayError>;
}

pub fn new_gateway(config: &GatewayConfig) -> Result<Arc<dyn ChatGateway>, GatewayError> {
    config.validate()?;
    Ok(Arc::new(QianfanGateway::from_config(config)?))
}
