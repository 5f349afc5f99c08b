//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sprite::SpriteData;

/// Default page-size limit for the single list request.
pub const DEFAULT_LIST_LIMIT: u16 = 1010;

/// Fixed single-element row shown when the list request fails.
pub const LIST_PLACEHOLDER: &str = "Failed to fetch Pokémon list";

/// A base stat as (name, value), in API order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonStat {
    pub name: String,
    pub value: u16,
}

/// The single record displayed at a time, fetched fresh on every selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonDetail {
    pub name: String,
    pub types: Vec<String>,
    pub stats: Vec<PokemonStat>,
    pub sprite_front_default: Option<String>,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Dex list ---
    /// Entry names as returned by the API (lowercase), or the placeholder row
    #[debug(skip)]
    pub names: Vec<String>,

    #[debug(section = "Dex", label = "Selected")]
    pub selected_index: usize,

    /// Set when the list request failed and `names` holds the placeholder
    #[debug(section = "Dex", label = "List failed")]
    pub list_failed: bool,

    #[debug(section = "Dex", label = "List loading")]
    pub list_loading: bool,

    /// Page-size limit used for the single list request
    #[debug(section = "Dex", label = "Limit")]
    pub limit: u16,

    // --- Detail pane ---
    /// Name of the current selection, if any
    #[debug(section = "Detail", label = "Name", debug_fmt)]
    pub detail_name: Option<String>,

    /// The record for the current selection; `None` until loaded or on a
    /// failed fetch (the null sentinel)
    #[debug(skip)]
    pub detail: Option<PokemonDetail>,

    #[debug(section = "Detail", label = "Loading")]
    pub detail_loading: bool,

    /// Decoded sprite for the current selection
    #[debug(skip)]
    pub sprite: Option<SpriteData>,

    #[debug(section = "Detail", label = "Sprite loading")]
    pub sprite_loading: bool,

    // --- Status ---
    /// Last error surfaced to the status line
    #[debug(section = "Status", label = "Message", debug_fmt)]
    pub message: Option<String>,

    #[debug(skip)]
    pub terminal_size: (u16, u16),
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT)
    }
}

impl AppState {
    /// Create state with the given list page-size limit
    pub fn new(limit: u16) -> Self {
        Self {
            names: Vec::new(),
            selected_index: 0,
            list_failed: false,
            list_loading: false,
            limit,
            detail_name: None,
            detail: None,
            detail_loading: false,
            sprite: None,
            sprite_loading: false,
            message: None,
            terminal_size: (80, 24),
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected_index).map(String::as_str)
    }

    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if self.names.is_empty() {
            self.selected_index = 0;
            return false;
        }
        let bounded = index.min(self.names.len() - 1);
        if bounded != self.selected_index {
            self.selected_index = bounded;
            return true;
        }
        false
    }

    /// Drop every displayed field of the previous selection
    pub fn clear_detail(&mut self) {
        self.detail = None;
        self.detail_loading = false;
        self.sprite = None;
        self.sprite_loading = false;
    }
}
