//! Forecast card TUI

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use forecast_card::action::Action;
use forecast_card::components::{Component, ForecastCard, ForecastCardProps};
use forecast_card::daily::DayBoundary;
use forecast_card::effect::Effect;
use forecast_card::reducer::reducer;
use forecast_card::source;
use forecast_card::state::AppState;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Daily forecast card for a saved 5 day / 3 hour forecast payload
#[derive(Parser, Debug)]
#[command(name = "forecast-card")]
#[command(about = "Groups 3-hour forecast samples by day and shows them as a card")]
struct Args {
    /// Forecast JSON file, as returned by the forecast API
    #[arg(long, short)]
    file: PathBuf,

    /// Group samples by UTC date instead of local date
    #[arg(long)]
    utc: bool,

    /// Reload the file every N seconds (minimum 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    reload_interval: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum CardComponentId {
    Card,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum CardContext {
    Main,
}

impl EventRoutingState<CardComponentId, CardContext> for AppState {
    fn focused(&self) -> Option<CardComponentId> {
        Some(CardComponentId::Card)
    }

    fn modal(&self) -> Option<CardComponentId> {
        None
    }

    fn binding_context(&self, _id: CardComponentId) -> CardContext {
        CardContext::Main
    }

    fn default_context(&self) -> CardContext {
        CardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        file,
        utc,
        reload_interval,
        log_file,
        debug: debug_args,
    } = Args::parse();

    init_logging(log_file.as_deref())?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let boundary = if utc {
        DayBoundary::Utc
    } else {
        DayBoundary::Local
    };
    let source = file.display().to_string();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(source, boundary))
        })
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
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, reload_interval, replay_actions).await;

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

/// The terminal is in raw mode while running, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct CardUi {
    card: ForecastCard,
}

impl CardUi {
    fn new() -> Self {
        Self { card: ForecastCard }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<CardComponentId>,
    ) {
        event_ctx.set_component_area(CardComponentId::Card, area);

        let props = ForecastCardProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.card.render(frame, area, props);
    }

    fn handle_card_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = ForecastCardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.card.handle_event(event, props).into_iter().collect();
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
    reload_interval: Option<u64>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(CardUi::new()));
    let mut bus: EventBus<AppState, Action, CardComponentId, CardContext> = EventBus::new();
    let keybindings: Keybindings<CardContext> = Keybindings::new();

    let ui_card = Rc::clone(&ui);
    bus.register(CardComponentId::Card, move |event, state| {
        ui_card.borrow_mut().handle_card_event(&event.kind, state)
    });

    // Resizing may switch between the accordion and the grid
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::ForecastLoad),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                if let Some(secs) = reload_interval {
                    runtime.subscriptions().interval(
                        "reload",
                        Duration::from_secs(secs),
                        || Action::ForecastLoad,
                    );
                }
            },
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
        Effect::LoadForecast { path } => {
            ctx.tasks().spawn("forecast", async move {
                match source::load_forecast(&path).await {
                    Ok(data) => {
                        tracing::info!("Loaded {} forecast samples from {}", data.list.len(), path);
                        Action::ForecastDidLoad(data)
                    }
                    Err(e) => {
                        tracing::warn!("Forecast load failed: {}", e);
                        Action::ForecastDidError(e.to_string())
                    }
                }
            });
        }
    }
}
