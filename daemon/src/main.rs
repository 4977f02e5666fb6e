use std::sync::Arc;

use herald_events::config::DaemonConfig;
use herald_events::errors::HeraldError;
use herald_events::event::NotificationEventArgs;
use herald_events::listener::{self, DaemonHandle, ServerInfo};
use herald_events::store::EventStore;
use herald_events::style::ActiveStyleArgs;
use tokio::sync::{RwLock, broadcast};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod socket;

use socket::SocketServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "daemon stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HeraldError> {
    let config = DaemonConfig::load()?;

    let (sender, receiver) = broadcast::channel(32);
    let store = Arc::new(RwLock::new(EventStore::new(config.history_capacity, sender)));

    let handle = DaemonHandle::new(
        Arc::clone(&store),
        config.pipeline_defaults(),
        ServerInfo {
            name: config.server_name.clone(),
            vendor: config.vendor.clone(),
            version: env!("CARGO_PKG_VERSION").into(),
        },
    );
    let conn = listener::serve(handle).await?;

    tokio::spawn(log_events(Arc::clone(&store), receiver));

    let server = SocketServer::new(store, conn);
    tokio::select! {
        res = server.run(&config.socket_path) => res?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    let _ = std::fs::remove_file(&config.socket_path);
    Ok(())
}

async fn log_events(store: Arc<RwLock<EventStore>>, mut receiver: broadcast::Receiver<u32>) {
    loop {
        let id = match receiver.recv().await {
            Ok(id) => id,
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(skipped = n, "event log fell behind");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        let store = store.read().await;
        if let Some(event) = store.get(id) {
            log_event(event);
        }
    }
}

fn log_event(event: &NotificationEventArgs) {
    info!(
        id = event.unique_number(),
        app = %event.app_id(),
        title = %event.title(),
        urgency = %event.urgency(),
        "notification"
    );
    if let Some(active) = event.get_style::<ActiveStyleArgs>() {
        info!(
            id = event.unique_number(),
            auto_remove = active.is_auto_remove(),
            hide_timeout = active.hide_timeout(),
            delete_timeout = active.delete_timeout(),
            buttons = active.button().len(),
            reply = active.reply().is_some(),
            background = active.background_image().unwrap_or("-"),
            "active style"
        );
    }
}
