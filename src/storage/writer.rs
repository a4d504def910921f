use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use super::PersistentStore;

enum WriteCommand {
    Save(String),
    Flush(oneshot::Sender<()>),
}

/// Ordered background writer for one store key.
///
/// Saves are applied in the order they were enqueued. When several saves are
/// waiting, only the newest is written since each carries the full list.
#[derive(Debug, Clone)]
pub struct PersistWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl PersistWriter {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn PersistentStore>, key: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, key.into(), rx));
        Self { tx }
    }

    /// Queue `payload` for writing. Returns immediately.
    pub fn enqueue(&self, payload: String) {
        if self.tx.send(WriteCommand::Save(payload)).is_err() {
            tracing::warn!("Persist writer stopped, dropping save");
        }
    }

    /// Wait until every save enqueued so far has been handed to the store.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}

async fn run(
    store: Arc<dyn PersistentStore>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(first) = rx.recv().await {
        let mut latest = None;
        let mut waiters = Vec::new();

        let mut absorb = |command: WriteCommand| match command {
            WriteCommand::Save(payload) => latest = Some(payload),
            WriteCommand::Flush(done) => waiters.push(done),
        };
        absorb(first);
        while let Ok(command) = rx.try_recv() {
            absorb(command);
        }

        if let Some(payload) = latest {
            write(Arc::clone(&store), key.clone(), payload).await;
        }
        for done in waiters {
            let _ = done.send(());
        }
    }
    tracing::debug!("Persist writer finished");
}

async fn write(store: Arc<dyn PersistentStore>, key: String, payload: String) {
    let bytes = payload.len();
    let result = tokio::task::spawn_blocking(move || store.set(&key, &payload)).await;
    match result {
        Ok(Ok(())) => tracing::debug!(bytes, "Items saved"),
        Ok(Err(err)) => tracing::warn!(error = %err, "Failed to save items"),
        Err(err) => tracing::warn!(error = %err, "Save task failed"),
    }
}
