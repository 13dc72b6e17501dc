//! Setup screen - pick the audio file, speech model, and language

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::path::PathBuf;

use crossterm::event::KeyCode;

use crate::audio;
use crate::config::Settings;
use crate::transcription::{SpeechModel, TranscribeOptions};
use crate::tui::app::RunState;

const MODELS: &[SpeechModel] = &[
    SpeechModel::Universal,
    SpeechModel::Whisper1,
    SpeechModel::Nano,
];

const LANGUAGES: &[(&str, Option<&str>)] = &[
    ("Auto Detect", None),
    ("Vietnamese", Some("vi")),
    ("English", Some("en")),
    ("Japanese", Some("ja")),
    ("Korean", Some("ko")),
    ("Chinese", Some("zh")),
];

/// Field focus on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupField {
    Path,
    Model,
    Language,
}

/// Setup screen state
pub struct SetupScreen {
    path: String,
    focus: SetupField,
    model_index: usize,
    language_index: usize,
}

impl SetupScreen {
    pub fn new(settings: &Settings, file: Option<PathBuf>) -> Self {
        let model_index = MODELS
            .iter()
            .position(|m| *m == settings.transcription.speech_model)
            .unwrap_or(0);

        let configured_language = settings.transcription.language.trim();
        let language_index = LANGUAGES
            .iter()
            .position(|(_, code)| *code == Some(configured_language))
            .unwrap_or(0);

        Self {
            path: file.map(|p| p.display().to_string()).unwrap_or_default(),
            focus: SetupField::Path,
            model_index,
            language_index,
        }
    }

    /// Whether keystrokes currently go into the path input
    pub fn editing_path(&self) -> bool {
        self.focus == SetupField::Path
    }

    /// Selected options for the next run
    pub fn transcribe_options(&self) -> TranscribeOptions {
        TranscribeOptions::new(
            MODELS[self.model_index],
            LANGUAGES[self.language_index].1.map(str::to_string),
        )
    }

    /// Validate the entered path before starting a run
    pub fn validated_path(&self) -> Result<PathBuf, String> {
        let entered = self.path.trim();
        if entered.is_empty() {
            return Err("Enter the path to an audio file first".to_string());
        }

        let path = PathBuf::from(entered);
        if !audio::is_supported_file(&path) {
            return Err("Unsupported audio format. Supported: mp3, wav, m4a".to_string());
        }
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()));
        }

        Ok(path)
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = match self.focus {
                    SetupField::Path => SetupField::Model,
                    SetupField::Model => SetupField::Language,
                    SetupField::Language => SetupField::Path,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = match self.focus {
                    SetupField::Path => SetupField::Language,
                    SetupField::Model => SetupField::Path,
                    SetupField::Language => SetupField::Model,
                };
            }
            KeyCode::Left => match self.focus {
                SetupField::Model => {
                    self.model_index = (self.model_index + MODELS.len() - 1) % MODELS.len();
                }
                SetupField::Language => {
                    self.language_index =
                        (self.language_index + LANGUAGES.len() - 1) % LANGUAGES.len();
                }
                SetupField::Path => {}
            },
            KeyCode::Right => match self.focus {
                SetupField::Model => {
                    self.model_index = (self.model_index + 1) % MODELS.len();
                }
                SetupField::Language => {
                    self.language_index = (self.language_index + 1) % LANGUAGES.len();
                }
                SetupField::Path => {}
            },
            KeyCode::Char(c) if self.focus == SetupField::Path => {
                self.path.push(c);
            }
            KeyCode::Backspace if self.focus == SetupField::Path => {
                self.path.pop();
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, run_state: &RunState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Path input
                Constraint::Length(3), // Model selector
                Constraint::Length(3), // Language selector
                Constraint::Min(4),    // Status
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Title
        let title = Paragraph::new("clerk")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // Path input
        let path_text = if self.path.is_empty() && self.focus != SetupField::Path {
            Line::from(Span::styled(
                "path/to/meeting.mp3",
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.focus == SetupField::Path {
            Line::from(vec![
                Span::raw(self.path.as_str()),
                Span::styled("█", Style::default().fg(Color::White)),
            ])
        } else {
            Line::from(self.path.as_str())
        };
        let path_input = Paragraph::new(path_text).block(
            field_block(" Audio File (mp3/wav/m4a) ", self.focus == SetupField::Path),
        );
        frame.render_widget(path_input, chunks[1]);

        // Model selector
        let model = Paragraph::new(selector_line(
            MODELS[self.model_index].label(),
            self.focus == SetupField::Model,
        ))
        .block(field_block(" Speech Model ", self.focus == SetupField::Model));
        frame.render_widget(model, chunks[2]);

        // Language selector
        let language = Paragraph::new(selector_line(
            LANGUAGES[self.language_index].0,
            self.focus == SetupField::Language,
        ))
        .block(field_block(" Language ", self.focus == SetupField::Language));
        frame.render_widget(language, chunks[3]);

        // Status
        let status_lines = match run_state {
            RunState::Idle => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to transcribe and summarize",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            RunState::Running(stage) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{}...", stage.label())),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "This can take a while for long recordings",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            RunState::Done => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Done - results are on the next screen",
                    Style::default().fg(Color::Green),
                )),
            ],
            RunState::Failed(message) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(Color::Red).bold()),
                    Span::styled(message.as_str(), Style::default().fg(Color::Red)),
                ]),
            ],
        };
        let status = Paragraph::new(status_lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(Block::default().title(" Status ").borders(Borders::ALL));
        frame.render_widget(status, chunks[4]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Next field  "),
            Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Change selection  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Start  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn selector_line(label: &str, focused: bool) -> Line<'_> {
    if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(label)
    }
}
