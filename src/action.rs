//! Actions with automatic category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sprite::SpriteData;
use crate::state::PokemonDetail;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: kick off the single paginated list request
    Init,

    // ===== List category =====
    /// Intent: (re)load the name list
    ListFetch,

    /// Result: list loaded (lowercase API names)
    ListDidLoad(Vec<String>),

    /// Result: list request failed; reducer swaps in the placeholder row
    ListDidError(String),

    /// Select an entry in the list (by index)
    DexSelect(usize),

    /// Move the selection by a delta (mouse scroll)
    SelectionMove(i16),

    // ===== Detail category =====
    /// Result: detail record loaded for the named entry
    PokemonDidLoad(PokemonDetail),

    /// Result: detail fetch failed; the record becomes the null sentinel
    PokemonDidError { name: String, error: String },

    /// Result: sprite decoded and resized for the named entry
    SpriteDidLoad { name: String, sprite: SpriteData },

    /// Result: sprite fetch or decode failed; degrades to "[no sprite]"
    SpriteDidError { name: String, error: String },

    // ===== UI category =====
    #[action(category = "ui")]
    UiTerminalResize(u16, u16),

    /// Force a re-render
    Render,

    /// Exit the application
    Quit,
}
