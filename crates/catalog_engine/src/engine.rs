use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::catalog_debug;

use crate::api::CatalogApi;
use crate::types::{EngineEvent, ItemId, MutationToken, NewItemFields};

enum EngineCommand {
    FetchAll,
    Delete {
        token: MutationToken,
        id: ItemId,
    },
    Rename {
        token: MutationToken,
        id: ItemId,
        title: String,
    },
    Create {
        token: MutationToken,
        fields: NewItemFields,
    },
}

/// Cloneable sender half of the engine, for issuing backing calls from
/// the dispatch side while the event half is pumped elsewhere.
#[derive(Clone)]
pub struct EngineCommander {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineCommander {
    pub fn fetch_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchAll);
    }

    pub fn delete(&self, token: MutationToken, id: ItemId) {
        let _ = self.cmd_tx.send(EngineCommand::Delete { token, id });
    }

    pub fn rename(&self, token: MutationToken, id: ItemId, title: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Rename {
            token,
            id,
            title: title.into(),
        });
    }

    pub fn create(&self, token: MutationToken, fields: NewItemFields) {
        let _ = self.cmd_tx.send(EngineCommand::Create { token, fields });
    }
}

/// Executes backing calls on a background tokio runtime. Commands run
/// concurrently; completions arrive on the event channel in whatever
/// order the calls finish. Once issued, a call runs to completion.
pub struct EngineHandle {
    commander: EngineCommander,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            catalog_debug!("engine command channel closed; runtime winding down");
        });

        Self {
            commander: EngineCommander { cmd_tx },
            event_rx,
        }
    }

    pub fn commander(&self) -> EngineCommander {
        self.commander.clone()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn CatalogApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchAll => EngineEvent::LoadCompleted {
            result: api.fetch_all().await,
        },
        EngineCommand::Delete { token, id } => EngineEvent::DeleteCompleted {
            token,
            id,
            result: api.delete_item(id).await,
        },
        EngineCommand::Rename { token, id, title } => EngineEvent::RenameCompleted {
            token,
            id,
            result: api.update_title(id, &title).await,
        },
        EngineCommand::Create { token, fields } => EngineEvent::CreateCompleted {
            token,
            result: api.create_item(&fields).await,
        },
    };
    let _ = event_tx.send(event);
}
