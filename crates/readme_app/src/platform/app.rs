use std::io;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use ratatui::crossterm::event::{self, Event};
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use readme_core::{update, AppState, AppViewModel, Msg};
use readme_logging::{readme_debug, readme_info, readme_warn};

use super::effects::EffectRunner;
use super::terminal;
use super::ui;
use super::ui::constants::TICK_INTERVAL;
use super::ui::input::KeyAction;
use crate::cli::AppConfig;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    readme_info!(
        "Starting README studio service={} output_dir={:?}",
        config.service.service_url,
        config.output_dir
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(&config, msg_tx).context("failed to start engine")?;

    let mut session = Session::new(effects);
    if let Some(url) = config.initial_url {
        session.dispatch(Msg::InputChanged(url));
    }

    let mut tui = ratatui::try_init().context("failed to initialize terminal")?;
    terminal::install_panic_hook();
    let result = terminal::set_bracketed_paste(&mut io::stdout(), true)
        .context("failed to enable bracketed paste")
        .and_then(|()| session.event_loop(&mut tui, &msg_rx));
    if let Err(err) = terminal::set_bracketed_paste(&mut io::stdout(), false) {
        readme_warn!("Failed to disable bracketed paste: {}", err);
    }
    ratatui::restore();

    readme_info!("README studio exited");
    result
}

/// Owns the component state for the lifetime of the UI.
struct Session {
    state: AppState,
    effects: EffectRunner,
    scroll: u16,
    /// Frame size of the last draw; bounds scrolling of the result panel.
    screen: Rect,
    redraw: bool,
}

impl Session {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
            scroll: 0,
            screen: Rect::default(),
            redraw: true,
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        msg_rx: &mpsc::Receiver<Msg>,
    ) -> anyhow::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            if self.state.consume_dirty() || self.redraw {
                self.redraw = false;
                let view = self.state.view();
                let scroll = self.scroll;
                let completed = terminal.draw(|frame| ui::render::render(frame, &view, scroll))?;
                self.screen = completed.area;
            }

            let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                let view = self.state.view();
                let action = match event::read()? {
                    Event::Key(key) => ui::input::map_key(key, &view),
                    Event::Paste(text) => ui::input::map_paste(&text, &view),
                    Event::Resize(_, _) => {
                        self.redraw = true;
                        KeyAction::Ignore
                    }
                    _ => KeyAction::Ignore,
                };
                match action {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Dispatch(msg) => self.dispatch(msg),
                    KeyAction::Scroll(delta) => self.scroll_by(delta, &view),
                    KeyAction::Ignore => {}
                }
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                last_tick = Instant::now();
                self.dispatch(Msg::Tick);
            }

            while let Ok(msg) = msg_rx.try_recv() {
                self.dispatch(msg);
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        if !matches!(msg, Msg::Tick) {
            readme_debug!("dispatch {}", summarize(&msg));
        }
        let starts_request = matches!(msg, Msg::GenerateClicked);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if starts_request && self.state.is_loading() {
            self.scroll = 0;
        }
        self.effects.run(effects);
    }

    fn scroll_by(&mut self, delta: i32, view: &AppViewModel) {
        let max = ui::render::max_result_scroll(view, self.screen);
        let next = clamp_scroll(self.scroll, delta, max);
        if next != self.scroll {
            self.scroll = next;
            self.redraw = true;
        }
    }
}

/// Applies `delta` to `current`, keeping the result within `0..=max`.
fn clamp_scroll(current: u16, delta: i32, max: u16) -> u16 {
    let current = current.min(max);
    let next = (i32::from(current) + delta).clamp(0, i32::from(max));
    u16::try_from(next).unwrap_or(max)
}

/// Message name for debug logs, without the (possibly large) README payload.
fn summarize(msg: &Msg) -> &'static str {
    match msg {
        Msg::InputChanged(_) => "InputChanged",
        Msg::GenerateClicked => "GenerateClicked",
        Msg::GenerationSettled(_) => "GenerationSettled",
        Msg::CopyClicked => "CopyClicked",
        Msg::CopySucceeded => "CopySucceeded",
        Msg::CopyFailed { .. } => "CopyFailed",
        Msg::CopyConfirmationExpired { .. } => "CopyConfirmationExpired",
        Msg::DownloadClicked => "DownloadClicked",
        Msg::DocumentSaved { .. } => "DocumentSaved",
        Msg::Tick => "Tick",
        Msg::NoOp => "NoOp",
    }
}
