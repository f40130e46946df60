//! Weather widget - terminal front end

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_widget::action::Action;
use weather_widget::components::{Component, WeatherWidget, WeatherWidgetProps};
use weather_widget::effect::{perform_lookup, Effect};
use weather_widget::logging;
use weather_widget::provider::{
    ProviderConfig, WeatherApiClient, WeatherProvider, DEFAULT_BASE_URL,
};
use weather_widget::reducer::reducer;
use weather_widget::state::AppState;

/// How often the local hour is re-read for day/night framing.
const CLOCK_INTERVAL_SECS: u64 = 30;

/// Weather widget - look up current conditions by city name
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Search for the current weather conditions of a place")]
struct Args {
    /// WeatherAPI.com key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Provider base URL
    #[arg(long, env = "WEATHER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (minimum 1)
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Prefill the location and search once on start
    #[arg(long, short)]
    city: Option<String>,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, env = "WEATHER_WIDGET_LOG")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Widget,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        Some(WidgetComponentId::Widget)
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        None
    }

    fn binding_context(&self, _id: WidgetComponentId) -> WidgetContext {
        WidgetContext::Main
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

fn local_hour() -> u32 {
    Local::now().hour()
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        base_url,
        timeout_secs,
        city,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(log_file.as_deref())?;

    if api_key.is_none() {
        warn!("no API key configured; every lookup will fail");
    }
    let provider: Arc<dyn WeatherProvider> = Arc::new(
        WeatherApiClient::new(ProviderConfig {
            base_url,
            api_key,
            timeout_secs,
        })
        .map_err(io::Error::other)?,
    );

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async {
            Ok::<AppState, io::Error>(AppState::new(local_hour()))
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

    info!("weather widget started");
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        provider,
        city.map(Action::LookupSubmit),
        replay_actions,
    )
    .await;

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

    info!("weather widget stopped");
    Ok(())
}

struct WidgetUi {
    widget: WeatherWidget,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            widget: WeatherWidget::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        event_ctx.set_component_area(WidgetComponentId::Widget, area);

        let props = WeatherWidgetProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.widget.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .widget
            .handle_event(event, props)
            .into_iter()
            .collect();
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
    provider: Arc<dyn WeatherProvider>,
    init_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_widget = Rc::clone(&ui);
    bus.register(WidgetComponentId::Widget, move |event, state| {
        ui_widget.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
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
            init_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "clock",
                    Duration::from_secs(CLOCK_INTERVAL_SECS),
                    || Action::UiClockTick(local_hour()),
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, provider.clone()),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    provider: Arc<dyn WeatherProvider>,
) {
    match effect {
        Effect::LookupWeather {
            generation,
            location,
        } => {
            // One task per generation so an earlier lookup is never aborted
            ctx.tasks()
                .spawn(TaskKey::new(format!("lookup_{generation}")), async move {
                    perform_lookup(provider.as_ref(), generation, &location).await
                });
        }
    }
}
