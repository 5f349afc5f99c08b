//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LIST_PLACEHOLDER};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== List actions =====
        Action::Init | Action::ListFetch => {
            state.list_loading = true;
            state.list_failed = false;
            state.message = None;
            DispatchResult::changed_with(Effect::LoadList { limit: state.limit })
        }

        Action::ListDidLoad(names) => {
            state.names = names;
            state.selected_index = 0;
            state.list_loading = false;
            state.list_failed = false;
            state.detail_name = None;
            state.clear_detail();
            DispatchResult::changed()
        }

        Action::ListDidError(error) => {
            state.names = vec![LIST_PLACEHOLDER.to_string()];
            state.selected_index = 0;
            state.list_loading = false;
            state.list_failed = true;
            state.detail_name = None;
            state.clear_detail();
            state.message = Some(format!("List error: {error}"));
            DispatchResult::changed()
        }

        Action::DexSelect(index) => {
            if state.list_failed {
                return DispatchResult::unchanged();
            }
            let moved = state.set_selected_index(index);
            let effects = select_current(state);
            if !moved && effects.is_empty() {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with_many(effects)
        }

        Action::SelectionMove(delta) => {
            if state.list_failed {
                return DispatchResult::unchanged();
            }
            let mut index = state.selected_index as i16 + delta;
            if index < 0 {
                index = 0;
            }
            if !state.set_selected_index(index as usize) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with_many(select_current(state))
        }

        // ===== Detail actions =====
        Action::PokemonDidLoad(detail) => {
            // drop late arrivals for a superseded selection
            if state.detail_name.as_deref() != Some(detail.name.as_str()) {
                return DispatchResult::unchanged();
            }
            let name = detail.name.clone();
            let sprite_url = detail.sprite_front_default.clone();
            state.detail = Some(detail);
            state.detail_loading = false;
            state.message = None;
            match sprite_url {
                Some(url) => {
                    state.sprite = None;
                    state.sprite_loading = true;
                    DispatchResult::changed_with(Effect::LoadSprite { name, url })
                }
                None => {
                    state.sprite = None;
                    state.sprite_loading = false;
                    DispatchResult::changed()
                }
            }
        }

        Action::PokemonDidError { name, error } => {
            if state.detail_name.as_deref() == Some(name.as_str()) {
                state.clear_detail();
            }
            state.message = Some(format!("{name} load error: {error}"));
            DispatchResult::changed()
        }

        Action::SpriteDidLoad { name, sprite } => {
            if state.detail_name.as_deref() != Some(name.as_str()) {
                return DispatchResult::unchanged();
            }
            state.sprite = Some(sprite);
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        Action::SpriteDidError { name, error } => {
            if state.detail_name.as_deref() == Some(name.as_str()) {
                state.sprite = None;
                state.sprite_loading = false;
            }
            state.message = Some(format!("Sprite error for {name}: {error}"));
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Point the detail pane at the current selection, clearing every field of
/// the previous record before the fetch starts.
fn select_current(state: &mut AppState) -> Vec<Effect> {
    let Some(name) = state.selected_name().map(str::to_string) else {
        state.detail_name = None;
        return Vec::new();
    };
    if state.detail_name.as_deref() == Some(name.as_str()) {
        return Vec::new();
    }
    state.detail_name = Some(name.clone());
    state.clear_detail();
    state.detail_loading = true;
    vec![Effect::LoadPokemonDetail { name }]
}
