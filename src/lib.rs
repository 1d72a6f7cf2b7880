pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod models;
pub mod server;
pub mod store;
pub mod tracker;

use cli::Args;
use config::AppConfig;
use gateway::new_gateway;
use log::info;
use server::{ AppState, Server };
use std::error::Error;
use std::sync::Arc;
use store::UserStore;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("User File: {}", args.user_file);
    info!("Index Page: {}", args.index_path);
    info!("Gateway Conversation URL: {}", args.gateway_conversation_url);
    info!("Gateway Runs URL: {}", args.gateway_runs_url);
    info!("Gateway App ID: {}", args.gateway_app_id);
    match args.gateway_timeout_secs {
        Some(secs) => info!("Gateway Timeout: {}s", secs),
        None => info!("Gateway Timeout: none"),
    }
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let config = AppConfig::from(&args);
    let store = Arc::new(UserStore::new(&config.store));
    info!("Persisting users to {}", store.path().display());
    let gateway = new_gateway(&config.gateway)?;
    let state = AppState::new(store, gateway, config.tracker, args.index_path.clone());

    let server = Server::new(args.server_addr.clone(), state, args);
    server.run().await?;

    Ok(())
}
