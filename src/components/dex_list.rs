use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::{format_name, Component, ACCENT_TEAL, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::AppState;

/// The scrollable name list on the left
#[derive(Default)]
pub struct DexList {
    list: SelectList,
}

pub struct DexListProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

impl DexList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for DexList {
    type Props<'a> = DexListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        match event {
            EventKind::Scroll { delta, .. } => vec![Action::SelectionMove((*delta * 3) as i16)],
            EventKind::Key(_) => {
                let items = list_items(props.state);
                if items.is_empty() {
                    return Vec::new();
                }
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: props
                        .state
                        .selected_index
                        .min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::DexSelect,
                    render_item: &|item| item.clone(),
                };
                self.list.handle_event(event, list_props).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("POKEDEX")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(if props.is_focused {
                Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_DIM)
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = list_items(props.state);
        if items.is_empty() {
            let message = if props.state.list_loading {
                "Loading list..."
            } else {
                "Press r to load the list."
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(TEXT_DIM))
                    .wrap(Wrap { trim: true }),
                inner,
            );
            return;
        }

        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props
                .state
                .selected_index
                .min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::DexSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}

fn list_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .names
        .iter()
        .map(|name| Line::from(format_name(name)))
        .collect()
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LIST_PLACEHOLDER;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_names() {
        let mut render = RenderHarness::new(30, 12);
        let mut component = DexList::new();
        let state = AppState {
            names: vec!["bulbasaur".into(), "ivysaur".into()],
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DexListProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Bulbasaur"));
        assert!(output.contains("Ivysaur"));
    }

    #[test]
    fn test_render_placeholder_row() {
        let mut render = RenderHarness::new(40, 8);
        let mut component = DexList::new();
        let state = AppState {
            names: vec![LIST_PLACEHOLDER.to_string()],
            list_failed: true,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DexListProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Failed to fetch"));
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let mut component = DexList::new();
        let state = AppState {
            names: vec!["bulbasaur".into()],
            ..Default::default()
        };
        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("j")),
                DexListProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }
}
