use crate::{CatalogState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CatalogState, msg: Msg) -> (CatalogState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested => {
            state.begin_load();
            vec![Effect::FetchAll]
        }
        Msg::LoadCompleted { result } => {
            state.apply_load(result);
            Vec::new()
        }
        Msg::FilterChanged(change) => {
            state.apply_filter(change);
            Vec::new()
        }
        Msg::FiltersCleared => {
            state.clear_filters();
            Vec::new()
        }
        Msg::RemoveRequested { id } => match state.begin_removal(id) {
            Some(token) => vec![Effect::DeleteItem { token, id }],
            None => Vec::new(),
        },
        Msg::RemoveConfirmed { token, outcome } => {
            state.resolve_pending(token, outcome);
            Vec::new()
        }
        Msg::RenameRequested { id, title } => match state.begin_rename(id, &title) {
            Some(token) => vec![Effect::UpdateTitle { token, id, title }],
            None => Vec::new(),
        },
        Msg::RenameConfirmed { token, outcome } => {
            state.resolve_pending(token, outcome);
            Vec::new()
        }
        Msg::SubmitNewItem { form } => match form.parse() {
            Ok(fields) => {
                let token = state.begin_create();
                vec![Effect::CreateItem { token, fields }]
            }
            Err(error) => {
                state.reject_submission(error.to_string());
                Vec::new()
            }
        },
        Msg::CreateConfirmed { result, .. } => {
            state.apply_create_result(result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
