//! sigrelay - sign, verify and relay signed messages over HTTP.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use sigrelay::http_server::{self, Config};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on for HTTP requests
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// JSON file holding a pre-provisioned key pair
    #[arg(short, long)]
    key_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level;
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stdout)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();

    let mut config = Config::new(SocketAddr::new(args.host, args.port), args.key_file);
    config.log_level = log_level;

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    if let Err(e) = http_server::run(config, shutdown_rx).await {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sigrelay"]).unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.log_level, tracing::Level::INFO);
        assert!(args.key_file.is_none());
    }

    #[test]
    fn test_log_level_is_parsed() {
        let args = Args::try_parse_from(["sigrelay", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["sigrelay", "--log-level", "loud"]).is_err());
    }
}
