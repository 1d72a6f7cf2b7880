use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Storage Args ---
    /// Path of the JSON document holding accounts and conversation history.
    #[arg(long, env = "USER_FILE", default_value = "users.json")]
    pub user_file: String,

    // --- Remote Chat Gateway Args ---
    /// Endpoint that creates a new remote conversation.
    #[arg(
        long,
        env = "GATEWAY_CONVERSATION_URL",
        default_value = "https://qianfan.baidubce.com/v2/app/conversation"
    )]
    pub gateway_conversation_url: String,

    /// Endpoint that runs a query inside an existing conversation.
    #[arg(
        long,
        env = "GATEWAY_RUNS_URL",
        default_value = "https://qianfan.baidubce.com/v2/app/conversation/runs"
    )]
    pub gateway_runs_url: String,

    /// Application identifier sent with every gateway request.
    #[arg(long, env = "GATEWAY_APP_ID", default_value = "")]
    pub gateway_app_id: String,

    /// Authorization header value, passed through verbatim (e.g. "Bearer bce-v3/...").
    #[arg(long, env = "GATEWAY_AUTH_TOKEN", default_value = "")]
    pub gateway_auth_token: String,

    /// Optional request timeout for gateway calls, in seconds. Unset means no timeout.
    #[arg(long, env = "GATEWAY_TIMEOUT_SECS")]
    pub gateway_timeout_secs: Option<u64>,

    /// Reply stored and returned when the gateway answer cannot be used.
    #[arg(long, env = "EMPTY_ANSWER_PLACEHOLDER", default_value = "（未解析到回答）")]
    pub empty_answer_placeholder: String,

    // --- General App Args ---
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:5000")]
    pub server_addr: String,

    /// Front-end page served at "/".
    #[arg(long, env = "INDEX_PATH", default_value = "index.html")]
    pub index_path: String,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}
