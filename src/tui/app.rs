//! Main TUI application state and logic

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::audio::AudioSource;
use crate::config::Settings;
use crate::pipeline::{self, PipelineOutput, PipelineStage};
use crate::tui::screens::{ResultsScreen, SetupScreen};
use crate::tui::widgets::HelpPopup;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Setup,
    Results,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Pipeline run state as shown in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running(PipelineStage),
    Done,
    Failed(String),
}

/// Events from the background pipeline task
enum PipelineEvent {
    Stage(PipelineStage),
    Finished(PipelineOutput),
    Failed(String),
}

/// Main application state
pub struct App {
    settings: Settings,
    current_screen: AppScreen,
    show_help: bool,

    // Screen states
    setup: SetupScreen,
    results: ResultsScreen,

    // Pipeline state
    run_state: RunState,
    events: Option<mpsc::UnboundedReceiver<PipelineEvent>>,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings, file: Option<PathBuf>) -> Self {
        let setup = SetupScreen::new(&settings, file);

        Self {
            settings,
            current_screen: AppScreen::Setup,
            show_help: false,
            setup,
            results: ResultsScreen::new(),
            run_state: RunState::Idle,
            events: None,
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match self.current_screen {
            AppScreen::Setup => {
                self.setup.draw(frame, area, &self.run_state);
            }
            AppScreen::Results => {
                self.results.draw(frame, area);
            }
        }

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if self.show_help {
            self.show_help = false;
            return AppAction::Continue;
        }

        match self.current_screen {
            AppScreen::Setup => self.handle_setup_key(key),
            AppScreen::Results => self.handle_results_key(key),
        }
    }

    /// Handle setup screen key input
    fn handle_setup_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Esc => {
                return AppAction::Quit;
            }
            KeyCode::Enter => {
                self.start_run();
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Char('?') if !self.setup.editing_path() => {
                self.show_help = true;
            }
            KeyCode::Char('q') if !self.setup.editing_path() => {
                return AppAction::Quit;
            }
            _ => {
                self.setup.handle_key(key);
            }
        }
        AppAction::Continue
    }

    /// Handle results screen key input
    fn handle_results_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Esc => {
                self.current_screen = AppScreen::Setup;
            }
            KeyCode::Char('q') => {
                return AppAction::Quit;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Tab => {
                self.results.toggle_focus();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.results.scroll_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.results.scroll_down();
            }
            KeyCode::PageUp => {
                self.results.page_up();
            }
            KeyCode::PageDown => {
                self.results.page_down();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.results.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.results.scroll_to_bottom();
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Kick off a pipeline run on a background task
    fn start_run(&mut self) {
        if matches!(self.run_state, RunState::Running(_)) {
            return;
        }

        let path = match self.setup.validated_path() {
            Ok(path) => path,
            Err(message) => {
                self.run_state = RunState::Failed(message);
                return;
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let settings = self.settings.clone();
        let source = AudioSource::File(path);
        let options = self.setup.transcribe_options();

        let stage_tx = tx.clone();
        tokio::spawn(async move {
            let result = pipeline::run(
                &settings,
                &source,
                &options,
                Box::new(move |stage| {
                    let _ = stage_tx.send(PipelineEvent::Stage(stage));
                }),
            )
            .await;

            let _ = match result {
                Ok(output) => tx.send(PipelineEvent::Finished(output)),
                Err(e) => tx.send(PipelineEvent::Failed(format!("{e:#}"))),
            };
        });

        self.run_state = RunState::Running(PipelineStage::LoadingAudio);
        self.events = Some(rx);
    }

    /// Drain events from the background pipeline task
    pub fn update(&mut self) {
        let Some(rx) = self.events.as_mut() else {
            return;
        };

        while let Ok(event) = rx.try_recv() {
            match event {
                PipelineEvent::Stage(stage) => {
                    self.run_state = RunState::Running(stage);
                }
                PipelineEvent::Finished(output) => {
                    self.run_state = RunState::Done;
                    self.results.set_output(output);
                    self.current_screen = AppScreen::Results;
                    self.events = None;
                    return;
                }
                PipelineEvent::Failed(message) => {
                    self.run_state = RunState::Failed(message);
                    self.events = None;
                    return;
                }
            }
        }
    }
}
