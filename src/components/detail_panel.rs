use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;

use super::{format_name, Component, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::matchup;
use crate::sprite;
use crate::sprite_backend;
use crate::state::{AppState, PokemonStat};

const CELL_ASPECT: f32 = 2.0;

/// The display-only detail pane: sprite, name, type tags, derived matchup
/// tag sets and base stats
#[derive(Default)]
pub struct DetailPanel;

pub struct DetailPanelProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for DetailPanel {
    type Props<'a> = DetailPanelProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let block = Block::default()
            .borders(Borders::ALL)
            .title("DATA")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // name
                Constraint::Length(3), // type / weak to / advantages
                Constraint::Min(6),    // sprite + stats
            ])
            .split(inner);

        render_name(frame, layout[0], state);
        frame.render_widget(
            Paragraph::new(Text::from(tag_lines(state))).wrap(Wrap { trim: true }),
            layout[1],
        );

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        render_sprite(frame, bottom[0], state);
        render_stats(frame, bottom[1], state);
    }
}

fn render_name(frame: &mut Frame, area: Rect, state: &AppState) {
    let name = state
        .detail
        .as_ref()
        .map(|detail| detail.name.as_str())
        .or(state.detail_name.as_deref())
        .map(format_name)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(name).style(
            Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

fn tag_lines(state: &AppState) -> Vec<Line<'static>> {
    let Some(detail) = state.detail.as_ref() else {
        let message = if state.detail_loading {
            "Loading pokemon..."
        } else if state.detail_name.is_some() {
            "No data for this entry."
        } else {
            "Select an entry to view its data."
        };
        return vec![Line::from(message)];
    };

    let types = detail
        .types
        .iter()
        .map(|tag| format_name(tag))
        .collect::<Vec<_>>()
        .join(", ");
    let weak_to = matchup::weak_to(&detail.types).join(", ");
    let advantages = matchup::strong_against(&detail.types).join(", ");
    vec![
        Line::from(format!("Type: {types}")),
        Line::from(format!("Weak To: {weak_to}")),
        Line::from(format!("Advantages: {advantages}")),
    ]
}

fn render_sprite(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(spr) = state.sprite.as_ref() {
        let (cols, rows) = sprite_fit(spr, area.width, area.height);
        if let Ok(sequence) = sprite::kitty_sequence(spr, cols, rows) {
            let offset_x = area.x.saturating_add(area.width.saturating_sub(cols) / 2);
            let offset_y = area.y.saturating_add(area.height.saturating_sub(rows) / 2);
            sprite_backend::update_sprite(offset_x, offset_y, sequence);
        } else {
            sprite_backend::clear_sprite();
        }
        return;
    }

    sprite_backend::clear_sprite();
    let content = if state.detail_name.is_none() {
        "[select a pokemon]"
    } else if state.sprite_loading {
        "[loading sprite]"
    } else {
        "[no sprite]"
    };

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(TEXT_DIM)),
        area,
    );
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("STATS")
        .style(Style::default().fg(TEXT_MAIN));
    let stats = match state.detail.as_ref() {
        Some(detail) => Text::from(
            detail
                .stats
                .iter()
                .map(|stat| Line::from(render_stat(stat)))
                .collect::<Vec<_>>(),
        ),
        None => Text::from("No stats loaded."),
    };
    frame.render_widget(
        Paragraph::new(stats).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_stat(stat: &PokemonStat) -> String {
    let label = shorten_stat(&stat.name);
    let bar_len = (stat.value as usize / 10).clamp(1, 20);
    let bar = "#".repeat(bar_len);
    format!("{label:>4} {value:>3} {bar}", value = stat.value)
}

fn shorten_stat(name: &str) -> String {
    match name {
        "hp" => " HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SAT".to_string(),
        "special-defense" => "SDF".to_string(),
        "speed" => "SPD".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}

fn sprite_fit(sprite: &sprite::SpriteData, max_cols: u16, max_rows: u16) -> (u16, u16) {
    if max_cols == 0 || max_rows == 0 || sprite.height == 0 {
        return (max_cols, max_rows);
    }
    let image_ratio = sprite.width as f32 / sprite.height as f32;
    let max_cols_f = max_cols as f32;
    let max_rows_f = max_rows as f32;
    let cols_for_max_rows = image_ratio * max_rows_f * CELL_ASPECT;
    if cols_for_max_rows <= max_cols_f {
        let cols = cols_for_max_rows.max(1.0).round() as u16;
        return (cols.max(1), max_rows.max(1));
    }
    let rows_for_max_cols = max_cols_f / (image_ratio * CELL_ASPECT);
    let rows = rows_for_max_cols.max(1.0).round() as u16;
    (max_cols.max(1), rows.min(max_rows).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpriteData;
    use crate::state::PokemonDetail;
    use tui_dispatch::testing::*;

    fn charizard() -> PokemonDetail {
        PokemonDetail {
            name: "charizard".into(),
            types: vec!["fire".into(), "flying".into()],
            stats: vec![
                PokemonStat {
                    name: "hp".into(),
                    value: 78,
                },
                PokemonStat {
                    name: "speed".into(),
                    value: 100,
                },
            ],
            sprite_front_default: None,
        }
    }

    #[test]
    fn test_render_detail_labels() {
        let mut render = RenderHarness::new(70, 20);
        let mut component = DetailPanel;
        let state = AppState {
            detail_name: Some("charizard".into()),
            detail: Some(charizard()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DetailPanelProps { state: &state };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Charizard"));
        assert!(output.contains("Type: Fire, Flying"));
        assert!(output.contains("Weak To:"));
        assert!(output.contains("Water"));
        assert!(output.contains("Advantages:"));
        assert!(output.contains("HP"));
        assert!(output.contains("78"));
    }

    #[test]
    fn test_render_empty_selection_prompt() {
        let mut render = RenderHarness::new(60, 16);
        let mut component = DetailPanel;
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = DetailPanelProps { state: &state };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Select an entry"));
        assert!(output.contains("[select a pokemon]"));
    }

    #[test]
    fn test_render_null_sentinel_after_failed_fetch() {
        let mut render = RenderHarness::new(60, 16);
        let mut component = DetailPanel;
        let state = AppState {
            detail_name: Some("missingno".into()),
            detail: None,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = DetailPanelProps { state: &state };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("No data for this entry."));
        assert!(output.contains("[no sprite]"));
    }

    #[test]
    fn test_sprite_fit_respects_bounds() {
        let spr = SpriteData {
            payload: String::new(),
            width: 200,
            height: 200,
        };
        let (cols, rows) = sprite_fit(&spr, 40, 10);
        assert!(cols <= 40 && rows <= 10);
        assert!(cols >= 1 && rows >= 1);
    }

    #[test]
    fn test_render_stat_bar() {
        let stat = PokemonStat {
            name: "attack".into(),
            value: 84,
        };
        let line = render_stat(&stat);
        assert!(line.starts_with(" ATK"));
        assert!(line.contains("84"));
        assert!(line.contains("########"));
    }
}
