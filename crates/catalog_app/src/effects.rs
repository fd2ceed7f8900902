use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::{Effect, Item, Msg};
use catalog_engine::{ApiItem, CatalogApi, EngineCommander, EngineEvent, EngineHandle};
use catalog_logging::{catalog_info, catalog_warn};

use crate::input::Command;

/// Hands core effects to the engine and pumps engine completions back
/// into the app's command channel as core messages.
pub struct EffectRunner {
    commander: EngineCommander,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn CatalogApi>, tx: mpsc::Sender<Command>) -> Self {
        let engine = EngineHandle::new(api);
        let commander = engine.commander();
        spawn_event_loop(engine, tx);
        Self { commander }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAll => {
                    catalog_info!("FetchAll issued");
                    self.commander.fetch_all();
                }
                Effect::DeleteItem { token, id } => {
                    catalog_info!("DeleteItem token={} id={}", token, id);
                    self.commander.delete(token, id);
                }
                Effect::UpdateTitle { token, id, title } => {
                    catalog_info!("UpdateTitle token={} id={} title_len={}", token, id, title.len());
                    self.commander.rename(token, id, title);
                }
                Effect::CreateItem { token, fields } => {
                    catalog_info!("CreateItem token={} title={}", token, fields.title);
                    self.commander.create(token, map_fields(fields));
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, tx: mpsc::Sender<Command>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            let msg = match event {
                EngineEvent::LoadCompleted { result } => Msg::LoadCompleted {
                    result: result
                        .map(|items| items.into_iter().map(map_item).collect())
                        .map_err(|err| {
                            catalog_warn!("initial load failed: {}", err);
                            err.to_string()
                        }),
                },
                EngineEvent::DeleteCompleted { token, id, result } => Msg::RemoveConfirmed {
                    token,
                    outcome: result.map_err(|err| {
                        catalog_warn!("delete of item {} failed: {}", id, err);
                        err.to_string()
                    }),
                },
                EngineEvent::RenameCompleted { token, id, result } => Msg::RenameConfirmed {
                    token,
                    outcome: result.map_err(|err| {
                        // Renames are fire-and-forget: the optimistic title
                        // stays even though the backing store disagrees.
                        catalog_warn!("rename of item {} failed, keeping local title: {}", id, err);
                        err.to_string()
                    }),
                },
                EngineEvent::CreateCompleted { token, result } => Msg::CreateConfirmed {
                    token,
                    result: result.map(map_item).map_err(|err| {
                        catalog_warn!("create failed: {}", err);
                        err.to_string()
                    }),
                },
            };
            if tx.send(Command::Core(msg)).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_item(item: ApiItem) -> Item {
    Item {
        id: item.id,
        title: item.title,
        brand: item.brand,
        category: item.category,
        price: item.price,
        rating: item.rating,
    }
}

fn map_fields(fields: catalog_core::NewItemFields) -> catalog_engine::NewItemFields {
    catalog_engine::NewItemFields {
        title: fields.title,
        brand: fields.brand,
        category: fields.category,
        price: fields.price,
        rating: fields.rating,
    }
}
