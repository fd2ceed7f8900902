use std::sync::Arc;
use std::time::Duration;

use catalog_engine::{
    ApiItem, ApiOp, EngineEvent, EngineHandle, MemoryCatalogApi, NewItemFields,
};

const EVENT_WAIT: Duration = Duration::from_secs(5);

fn seed_item(id: u64, title: &str) -> ApiItem {
    ApiItem {
        id,
        title: title.to_owned(),
        brand: "Acme".to_owned(),
        category: "tools".to_owned(),
        price: 30.0,
        rating: 4.0,
    }
}

#[test]
fn fetch_all_reports_a_load_completion() {
    let seed = vec![seed_item(1, "Hammer"), seed_item(2, "Wrench")];
    let engine = EngineHandle::new(Arc::new(MemoryCatalogApi::new(seed.clone())));

    engine.commander().fetch_all();

    let event = engine.recv_timeout(EVENT_WAIT).expect("event arrives");
    match event {
        EngineEvent::LoadCompleted { result } => {
            assert_eq!(result.expect("load ok"), seed);
        }
        other => panic!("expected LoadCompleted, got {other:?}"),
    }
}

#[test]
fn delete_failure_carries_its_token_back() {
    let api = Arc::new(MemoryCatalogApi::new(vec![seed_item(1, "Hammer")]));
    api.fail_next(ApiOp::Delete);
    let engine = EngineHandle::new(api.clone());

    engine.commander().delete(9, 1);

    let event = engine.recv_timeout(EVENT_WAIT).expect("event arrives");
    match event {
        EngineEvent::DeleteCompleted { token, id, result } => {
            assert_eq!(token, 9);
            assert_eq!(id, 1);
            assert!(result.is_err());
        }
        other => panic!("expected DeleteCompleted, got {other:?}"),
    }
    // The store is untouched after the failed call.
    assert_eq!(api.items().len(), 1);
}

#[test]
fn create_event_carries_the_assigned_item() {
    let engine = EngineHandle::new(Arc::new(MemoryCatalogApi::new(vec![seed_item(
        3, "Wrench",
    )])));

    let fields = NewItemFields {
        title: "Desk Lamp".to_owned(),
        brand: "Lumina".to_owned(),
        category: "lighting".to_owned(),
        price: 49.5,
        rating: 4.4,
    };
    engine.commander().create(5, fields);

    let event = engine.recv_timeout(EVENT_WAIT).expect("event arrives");
    match event {
        EngineEvent::CreateCompleted { token, result } => {
            assert_eq!(token, 5);
            let item = result.expect("create ok");
            assert_eq!(item.id, 4);
            assert_eq!(item.title, "Desk Lamp");
        }
        other => panic!("expected CreateCompleted, got {other:?}"),
    }
}

#[test]
fn independent_mutations_all_complete() {
    let api = Arc::new(MemoryCatalogApi::new(vec![
        seed_item(1, "Hammer"),
        seed_item(2, "Wrench"),
    ]));
    let engine = EngineHandle::new(api.clone());
    let commander = engine.commander();

    commander.delete(1, 1);
    commander.rename(2, 2, "Adjustable Wrench");

    // Completion order is unspecified; both must arrive.
    let mut saw_delete = false;
    let mut saw_rename = false;
    for _ in 0..2 {
        match engine.recv_timeout(EVENT_WAIT).expect("event arrives") {
            EngineEvent::DeleteCompleted { token: 1, .. } => saw_delete = true,
            EngineEvent::RenameCompleted { token: 2, .. } => saw_rename = true,
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert!(saw_delete && saw_rename);

    let items = api.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Adjustable Wrench");
}
