use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, DetailPanel, DetailPanelProps, DexList, DexListProps, ACCENT_GOLD,
};
use crate::action::Action;
use crate::state::AppState;

const LIST_WIDTH: u16 = 28;

/// Props for DexScreen - read-only view of state
pub struct DexScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The single screen: name list on the left, detail pane on the right,
/// status bar along the bottom
#[derive(Default)]
pub struct DexScreen {
    list: DexList,
    detail: DetailPanel,
}

impl DexScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for DexScreen {
    type Props<'a> = DexScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => return vec![Action::ListFetch],
                KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
                _ => {}
            }
        }

        let list_props = DexListProps {
            state: props.state,
            is_focused: true,
        };
        self.list.handle_event(event, list_props).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DexScreenProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let panes = Layout::horizontal([Constraint::Length(LIST_WIDTH), Constraint::Min(1)])
            .split(chunks[0]);

        self.list.render(
            frame,
            panes[0],
            DexListProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        );
        self.detail
            .render(frame, panes[1], DetailPanelProps { state: props.state });

        let status = status_text(props.state);
        let status_span = Span::styled(status.as_str(), Style::default().fg(ACCENT_GOLD));
        let status_items = [StatusBarItem::span(status_span)];

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("\u{2191}\u{2193}", "browse"),
                    StatusBarHint::new("r", "reload"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::items(&status_items),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn status_text(state: &AppState) -> String {
    if let Some(message) = state.message.as_deref() {
        message.to_string()
    } else if state.list_loading {
        "Loading list...".to_string()
    } else if state.detail_loading {
        "Loading pokemon...".to_string()
    } else if state.sprite_loading {
        "Loading sprite...".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PokemonDetail, PokemonStat};
    use tui_dispatch::testing::*;

    #[test]
    fn test_handle_event_reload() {
        let mut component = DexScreen::new();
        let state = AppState::default();
        let props = DexScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::ListFetch);
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = DexScreen::new();
        let state = AppState::default();
        let props = DexScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("q")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = DexScreen::new();
        let state = AppState::default();
        let props = DexScreenProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_full_screen() {
        let mut render = RenderHarness::new(80, 24);
        let mut component = DexScreen::new();

        let state = AppState {
            names: vec!["charizard".into()],
            detail_name: Some("charizard".into()),
            detail: Some(PokemonDetail {
                name: "charizard".into(),
                types: vec!["fire".into(), "flying".into()],
                stats: vec![PokemonStat {
                    name: "hp".into(),
                    value: 78,
                }],
                sprite_front_default: None,
            }),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DexScreenProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("POKEDEX"));
        assert!(output.contains("Charizard"));
        assert!(output.contains("Weak To:"));
        assert!(output.contains("reload"));
    }

    #[test]
    fn test_render_status_message() {
        let mut render = RenderHarness::new(80, 24);
        let mut component = DexScreen::new();

        let state = AppState {
            message: Some("List error: 503".into()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DexScreenProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("List error: 503"));
    }
}
