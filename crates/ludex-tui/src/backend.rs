//! Backend fetch task: owns the catalog source and turns commands into
//! events. Each fetch runs on its own task so a slow page load never blocks
//! a detail view, and vice versa. Nothing is cancelled; a completion the UI
//! no longer wants is discarded on the other side of the channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use ludex_core::CatalogSource;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Spawn the backend command listener. Runs until the command channel
/// closes (the app dropping its sender on quit).
pub fn spawn(
    source: Arc<dyn CatalogSource>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            let source = source.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let event = run_command(source.as_ref(), cmd).await;
                // Send failure just means the UI is gone; nothing to do.
                let _ = tx.send(event);
            });
        }
    })
}

async fn run_command(source: &dyn CatalogSource, cmd: BackendCommand) -> BackendEvent {
    match cmd {
        BackendCommand::LoadPage { page } => {
            let outcome = source.list_page(page).await;
            BackendEvent::PageLoaded { page, outcome }
        }
        BackendCommand::Search { query } => {
            let outcome = source.search(&query).await;
            BackendEvent::SearchLoaded { query, outcome }
        }
        BackendCommand::LoadDetail { id } => {
            let bundle = ludex_core::load_detail(source, id).await;
            BackendEvent::DetailLoaded { id, bundle }
        }
    }
}
