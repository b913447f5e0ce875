use crate::components::Spinner;
use crate::effects::EffectRunner;
use crate::events::{Event, EventHandler};
use crate::grid::GridView;
use crate::handlers::{apply_search_edit, resolve_key, KeyOutcome};
use crate::keybindings::KeybindingAction;
use crate::ui;
use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use roster_core::{AppConfig, InputState, RosterResult};
use roster_domain::{Browser, CharacterSource, Effect, Msg, ViewState};
use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Grid,
}

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub search: InputState,
    pub browser: Browser,
    pub grid: GridView,
    pub spinner: Spinner,
    pub end_reached_threshold: f32,
    pub cell_width_px: u16,
    seen_generation: u64,
    source: Arc<dyn CharacterSource>,
}

impl App {
    pub fn new(
        config: &AppConfig,
        source: Arc<dyn CharacterSource>,
        initial_query: Option<String>,
    ) -> Self {
        let query = initial_query.unwrap_or_default();
        let browser = Browser::with_search(config.effective_debounce(), query.clone());
        Self {
            should_quit: false,
            focus: Focus::Search,
            search: InputState::with_text(query),
            seen_generation: browser.generation(),
            browser,
            grid: GridView::new(),
            spinner: Spinner::default(),
            end_reached_threshold: config.effective_end_reached_threshold(),
            cell_width_px: config.effective_cell_width_px(),
            source,
        }
    }

    /// Translate a key press into browser messages. Navigation and focus
    /// changes are applied directly.
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Msg> {
        match resolve_key(self.browser.view(), self.focus, &key) {
            KeyOutcome::Action(action) => self.perform(action),
            KeyOutcome::EditSearch(edit) => {
                if apply_search_edit(&mut self.search, edit) {
                    vec![self.search_changed()]
                } else {
                    Vec::new()
                }
            }
            KeyOutcome::Ignored => Vec::new(),
        }
    }

    fn perform(&mut self, action: KeybindingAction) -> Vec<Msg> {
        use KeybindingAction::*;

        match action {
            NavigateDown => self.grid.move_down(),
            NavigateUp => self.grid.move_up(),
            NavigateLeft => self.grid.move_left(),
            NavigateRight => self.grid.move_right(),
            PageDown => self.grid.page_down(),
            PageUp => self.grid.page_up(),
            JumpToTop => self.grid.jump_to_first(),
            JumpToBottom => self.grid.jump_to_last(),
            FocusSearch => self.focus = Focus::Search,
            FocusGrid => self.focus = Focus::Grid,
            ClearSearch => {
                if !self.search.is_empty() {
                    self.search.clear();
                    return vec![self.search_changed()];
                }
            }
            Reload => return vec![Msg::Reload],
            Refresh => return vec![Msg::Refresh],
            Retry => return vec![Msg::Retry],
            Quit => self.should_quit = true,
        }
        Vec::new()
    }

    fn search_changed(&self) -> Msg {
        Msg::SearchChanged(self.search.as_str().to_string())
    }

    /// Feed a message to the browser and keep the grid in step with it.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = self.browser.dispatch(msg);

        if self.browser.generation() != self.seen_generation {
            self.seen_generation = self.browser.generation();
            self.grid.reset();
        }
        self.grid.layout(
            self.browser.items().len(),
            self.grid.columns(),
            self.grid.viewport_rows(),
        );

        effects
    }

    /// `LoadMore` when the viewport just came within the end threshold.
    pub fn end_reached(&mut self) -> Option<Msg> {
        if self.browser.view() != ViewState::Loaded {
            return None;
        }
        self.grid
            .end_reached(self.end_reached_threshold)
            .then_some(Msg::LoadMore)
    }

    fn dispatch_all(&mut self, runner: &mut EffectRunner, msgs: Vec<Msg>) {
        for msg in msgs {
            let effects = self.update(msg);
            runner.run_all(effects);
        }
    }

    pub async fn run(&mut self) -> RosterResult<()> {
        let mut terminal = setup_terminal()?;
        let (mut runner, mut messages) = EffectRunner::channel(Arc::clone(&self.source));
        let mut events = EventHandler::new();

        self.dispatch_all(&mut runner, vec![Msg::Start]);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(msg) = self.end_reached() {
                self.dispatch_all(&mut runner, vec![msg]);
            }

            tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => {
                        let msgs = self.on_key(key);
                        self.dispatch_all(&mut runner, msgs);
                    }
                    Some(Event::Resize(width, height)) => {
                        tracing::trace!("Terminal resized to {}x{}", width, height);
                    }
                    Some(Event::Tick) => self.spinner.tick(),
                    None => break,
                },
                Some(msg) = messages.recv() => {
                    self.dispatch_all(&mut runner, vec![msg]);
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
