//! Pokedex TUI - browse PokeAPI entries with sprites and type matchups

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{Component, DexScreen, DexScreenProps};
use pokedex::effect::Effect;
use pokedex::reducer::reducer;
use pokedex::sprite;
use pokedex::sprite_backend::{sprite_slot, SpriteBackend};
use pokedex::state::{AppState, DEFAULT_LIST_LIMIT};
use ratatui::{Frame, Terminal, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Pokedex TUI over the public PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the national dex with sprites, stats and type matchups")]
struct Args {
    /// Number of entries to request from the list endpoint (minimum 1)
    #[arg(long, short, default_value_t = DEFAULT_LIST_LIMIT, value_parser = clap::value_parser!(u16).range(1..))]
    limit: u16,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DexComponentId {
    Screen,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DexContext {
    Main,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        Some(DexComponentId::Screen)
    }

    fn modal(&self) -> Option<DexComponentId> {
        None
    }

    fn binding_context(&self, _id: DexComponentId) -> DexContext {
        DexContext::Main
    }

    fn default_context(&self) -> DexContext {
        DexContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        limit,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(limit)) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = SpriteBackend::new(stdout, sprite_slot());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct DexUi {
    screen: DexScreen,
}

impl DexUi {
    fn new() -> Self {
        Self {
            screen: DexScreen::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: tui_dispatch::RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        event_ctx.set_component_area(DexComponentId::Screen, area);
        let props = DexScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_screen_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DexScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(DexComponentId::Screen, move |event, state| {
        ui_screen
            .borrow_mut()
            .handle_screen_event(&event.kind, state)
    });

    // Track terminal size so sprite placement follows resizes
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => HandlerResponse {
            actions: vec![Action::UiTerminalResize(width, height)],
            consumed: false,
            needs_render: true,
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadList { limit } => {
            ctx.tasks().spawn("list", async move {
                match api::fetch_pokemon_list(limit).await {
                    Ok(names) => Action::ListDidLoad(names),
                    Err(e) => Action::ListDidError(e),
                }
            });
        }
        Effect::LoadPokemonDetail { name } => {
            ctx.tasks().spawn("detail", async move {
                match api::fetch_pokemon(&name).await {
                    Ok(detail) => Action::PokemonDidLoad(detail),
                    Err(error) => Action::PokemonDidError { name, error },
                }
            });
        }
        Effect::LoadSprite { name, url } => {
            ctx.tasks().spawn("sprite", async move {
                let loaded = match api::fetch_sprite_bytes(&url).await {
                    Ok(bytes) => sprite::decode_sprite(&bytes),
                    Err(e) => Err(e),
                };
                match loaded {
                    Ok(sprite) => Action::SpriteDidLoad { name, sprite },
                    Err(error) => Action::SpriteDidError { name, error },
                }
            });
        }
    }
}
