//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the first page of entry names
    LoadList { limit: u16 },
    /// Fetch the detail record for one entry
    LoadPokemonDetail { name: String },
    /// Download and decode the sprite image
    LoadSprite { name: String, url: String },
}
