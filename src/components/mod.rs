pub mod detail_panel;
pub mod dex_list;
pub mod dex_screen;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_panel::{DetailPanel, DetailPanelProps};
pub use dex_list::{DexList, DexListProps};
pub use dex_screen::{DexScreen, DexScreenProps};

use ratatui::style::Color;

pub(crate) const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub(crate) const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
pub(crate) const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub(crate) const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub(crate) const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);

/// Capitalize an API name ("mr-mime" -> "Mr Mime") for display
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("bulbasaur"), "Bulbasaur");
        assert_eq!(format_name("mr-mime"), "Mr Mime");
        assert_eq!(format_name(""), "");
    }
}
