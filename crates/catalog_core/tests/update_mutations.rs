use std::sync::Once;

use catalog_core::{
    update, CatalogState, Effect, Item, Msg, MutationToken, NewItemForm, Notice,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn item(id: u64, title: &str, price: f64) -> Item {
    Item {
        id,
        title: title.to_owned(),
        brand: "Acme".to_owned(),
        category: "tools".to_owned(),
        price,
        rating: 4.0,
    }
}

fn loaded_state(items: Vec<Item>) -> CatalogState {
    let (state, _) = update(
        CatalogState::new(),
        Msg::LoadCompleted { result: Ok(items) },
    );
    state
}

fn delete_effect(effects: &[Effect]) -> MutationToken {
    match effects {
        [Effect::DeleteItem { token, .. }] => *token,
        other => panic!("expected a single DeleteItem effect, got {other:?}"),
    }
}

fn rename_effect(effects: &[Effect]) -> MutationToken {
    match effects {
        [Effect::UpdateTitle { token, .. }] => *token,
        other => panic!("expected a single UpdateTitle effect, got {other:?}"),
    }
}

#[test]
fn remove_applies_before_confirmation() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0), item(2, "Wrench", 45.0)]);

    let (state, effects) = update(state, Msg::RemoveRequested { id: 1 });

    // Row gone synchronously, delete issued to the backing store.
    let ids: Vec<u64> = state.view().rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(matches!(
        effects.as_slice(),
        [Effect::DeleteItem { id: 1, .. }]
    ));
}

#[test]
fn remove_confirmation_success_needs_no_further_action() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0), item(2, "Wrench", 45.0)]);
    let (state, effects) = update(state, Msg::RemoveRequested { id: 1 });
    let token = delete_effect(&effects);

    let (state, effects) = update(
        state,
        Msg::RemoveConfirmed {
            token,
            outcome: Ok(()),
        },
    );

    assert!(effects.is_empty());
    let ids: Vec<u64> = state.catalog().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(state.view().notice, None);
}

#[test]
fn remove_failure_restores_the_exact_snapshot() {
    init_logging();
    let original = vec![item(1, "Hammer", 30.0), item(2, "Wrench", 45.0)];
    let state = loaded_state(original.clone());
    let (state, effects) = update(state, Msg::RemoveRequested { id: 1 });
    let token = delete_effect(&effects);

    let (state, _) = update(
        state,
        Msg::RemoveConfirmed {
            token,
            outcome: Err("http status 500".to_owned()),
        },
    );

    // Order and content restored, not merely re-inserted.
    assert_eq!(state.catalog(), original.as_slice());
    assert!(matches!(
        state.view().notice,
        Some(Notice::MutationFailed(_))
    ));
}

#[test]
fn remove_unknown_id_is_a_noop() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);
    let before = state.clone();

    let (state, effects) = update(state, Msg::RemoveRequested { id: 99 });

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn overlapping_removals_roll_back_to_their_own_snapshots() {
    init_logging();
    let state = loaded_state(vec![
        item(1, "Hammer", 30.0),
        item(2, "Wrench", 45.0),
        item(3, "Pliers", 25.0),
    ]);
    let (state, effects) = update(state, Msg::RemoveRequested { id: 1 });
    let first = delete_effect(&effects);
    let (state, effects) = update(state, Msg::RemoveRequested { id: 2 });
    let _second = delete_effect(&effects);

    // The first delete fails after the second was applied: its snapshot
    // wins, restoring the catalog as of before the first removal.
    let (state, _) = update(
        state,
        Msg::RemoveConfirmed {
            token: first,
            outcome: Err("timeout".to_owned()),
        },
    );
    let ids: Vec<u64> = state.catalog().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rename_applies_immediately() {
    init_logging();
    let state = loaded_state(vec![item(5, "Old Title", 30.0)]);

    let (state, effects) = update(
        state,
        Msg::RenameRequested {
            id: 5,
            title: "New Title".to_owned(),
        },
    );

    assert_eq!(state.catalog()[0].title, "New Title");
    assert!(matches!(
        effects.as_slice(),
        [Effect::UpdateTitle { id: 5, .. }]
    ));
}

#[test]
fn rename_failure_keeps_the_optimistic_title() {
    init_logging();
    let state = loaded_state(vec![item(5, "Old Title", 30.0)]);
    let (state, effects) = update(
        state,
        Msg::RenameRequested {
            id: 5,
            title: "New Title".to_owned(),
        },
    );
    let token = rename_effect(&effects);

    let (state, effects) = update(
        state,
        Msg::RenameConfirmed {
            token,
            outcome: Err("http status 500".to_owned()),
        },
    );

    // No rollback and no notice: rename failures are swallowed, unlike
    // delete failures.
    assert!(effects.is_empty());
    assert_eq!(state.catalog()[0].title, "New Title");
    assert_eq!(state.view().notice, None);
}

#[test]
fn rename_unknown_id_is_a_noop() {
    init_logging();
    let state = loaded_state(vec![item(5, "Old Title", 30.0)]);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::RenameRequested {
            id: 99,
            title: "New Title".to_owned(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn stale_confirmation_tokens_are_ignored() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::RemoveConfirmed {
            token: 42,
            outcome: Err("timeout".to_owned()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn valid_submission_emits_a_create_with_parsed_fields() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);

    let form = NewItemForm {
        title: "Desk Lamp".to_owned(),
        brand: "Lumina".to_owned(),
        category: "lighting".to_owned(),
        price: "49.5".to_owned(),
        rating: "4.4".to_owned(),
    };
    let (state, effects) = update(state, Msg::SubmitNewItem { form });

    match effects.as_slice() {
        [Effect::CreateItem { fields, .. }] => {
            assert_eq!(fields.title, "Desk Lamp");
            assert_eq!(fields.price, 49.5);
            assert_eq!(fields.rating, 4.4);
        }
        other => panic!("expected a single CreateItem effect, got {other:?}"),
    }
    // Nothing lands locally until the backing store confirms.
    assert_eq!(state.catalog().len(), 1);
}

#[test]
fn incomplete_form_is_rejected_before_any_backing_call() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);

    let form = NewItemForm {
        title: "Desk Lamp".to_owned(),
        brand: "  ".to_owned(),
        category: "lighting".to_owned(),
        price: "49.5".to_owned(),
        rating: "4.4".to_owned(),
    };
    let (state, effects) = update(state, Msg::SubmitNewItem { form });

    assert!(effects.is_empty());
    assert_eq!(
        state.view().notice,
        Some(Notice::ValidationFailed("brand is required".to_owned()))
    );
    assert_eq!(state.catalog().len(), 1);
}

#[test]
fn malformed_numbers_are_validation_failures_not_crashes() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);

    let cases = [
        ("cheap", "4.4", "price must be a number"),
        ("NaN", "4.4", "price must be a number"),
        ("49.5", "lots", "rating must be a number"),
        ("-5", "4.4", "price must not be negative"),
        ("49.5", "5.1", "rating must be between 0 and 5"),
    ];
    for (price, rating, expected) in cases {
        let form = NewItemForm {
            title: "Desk Lamp".to_owned(),
            brand: "Lumina".to_owned(),
            category: "lighting".to_owned(),
            price: price.to_owned(),
            rating: rating.to_owned(),
        };
        let (state, effects) = update(state.clone(), Msg::SubmitNewItem { form });
        assert!(effects.is_empty(), "case {price}/{rating}");
        assert_eq!(
            state.view().notice,
            Some(Notice::ValidationFailed(expected.to_owned())),
            "case {price}/{rating}"
        );
    }
}

#[test]
fn confirmed_create_appends_the_server_assigned_row() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0), item(2, "Wrench", 45.0)]);

    let form = NewItemForm {
        title: "Desk Lamp".to_owned(),
        brand: "Lumina".to_owned(),
        category: "lighting".to_owned(),
        price: "49.5".to_owned(),
        rating: "4.4".to_owned(),
    };
    let (state, effects) = update(state, Msg::SubmitNewItem { form });
    let token = match effects.as_slice() {
        [Effect::CreateItem { token, .. }] => *token,
        other => panic!("expected CreateItem, got {other:?}"),
    };

    let created = Item {
        id: 3,
        title: "Desk Lamp".to_owned(),
        brand: "Lumina".to_owned(),
        category: "lighting".to_owned(),
        price: 49.5,
        rating: 4.4,
    };
    let (state, _) = update(
        state,
        Msg::CreateConfirmed {
            token,
            result: Ok(created.clone()),
        },
    );

    // Round trip: the fresh id is visible under an all-default selection.
    let view = state.view();
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[2], created);
}

#[test]
fn failed_create_leaves_the_catalog_untouched() {
    init_logging();
    let state = loaded_state(vec![item(1, "Hammer", 30.0)]);

    let (state, _) = update(
        state,
        Msg::CreateConfirmed {
            token: 1,
            result: Err("http status 500".to_owned()),
        },
    );

    assert_eq!(state.catalog().len(), 1);
    assert!(matches!(
        state.view().notice,
        Some(Notice::MutationFailed(_))
    ));
}
