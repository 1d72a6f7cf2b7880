use crate::cli::Args;
use crate::error::GatewayError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub conversation_url: String,
    pub runs_url: String,
    pub app_id: String,
    pub auth_token: String,
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.app_id.trim().is_empty() {
            return Err(GatewayError::InvalidConfig("GATEWAY_APP_ID is required".into()));
        }
        if self.auth_token.trim().is_empty() {
            return Err(GatewayError::InvalidConfig("GATEWAY_AUTH_TOKEN is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub empty_answer_placeholder: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            empty_answer_placeholder: "（未解析到回答）".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub gateway: GatewayConfig,
    pub tracker: TrackerConfig,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from(&args.user_file),
            },
            gateway: GatewayConfig {
                conversation_url: args.gateway_conversation_url.clone(),
                runs_url: args.gateway_runs_url.clone(),
                app_id: args.gateway_app_id.clone(),
                auth_token: args.gateway_auth_token.clone(),
                timeout: args.gateway_timeout_secs.map(Duration::from_secs),
            },
            tracker: TrackerConfig {
                empty_answer_placeholder: args.empty_answer_placeholder.clone(),
            },
        }
    }
}
