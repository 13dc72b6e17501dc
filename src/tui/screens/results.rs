//! Results screen - transcript and minutes side by side

use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::pipeline::PipelineOutput;

/// Which pane has scroll focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Transcript,
    Minutes,
}

/// Results screen state
pub struct ResultsScreen {
    output: Option<PipelineOutput>,
    finished_at: Option<DateTime<Local>>,
    focus: Pane,
    transcript_scroll: usize,
    minutes_scroll: usize,
    transcript_height: usize,
    minutes_height: usize,
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self {
            output: None,
            finished_at: None,
            focus: Pane::Transcript,
            transcript_scroll: 0,
            minutes_scroll: 0,
            transcript_height: 0,
            minutes_height: 0,
        }
    }

    pub fn set_output(&mut self, output: PipelineOutput) {
        self.output = Some(output);
        self.finished_at = Some(Local::now());
        self.focus = Pane::Transcript;
        self.transcript_scroll = 0;
        self.minutes_scroll = 0;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Transcript => Pane::Minutes,
            Pane::Minutes => Pane::Transcript,
        };
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Panes
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Header
        let header_text = match (&self.output, &self.finished_at) {
            (Some(output), Some(at)) => Line::from(vec![
                Span::styled("Results", Style::default().fg(Color::White).bold()),
                Span::raw("  •  "),
                Span::styled(
                    at.format("%Y-%m-%d %H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  •  "),
                Span::styled(
                    format!("{} chars transcribed", output.transcript.len()),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            _ => Line::from("No results yet"),
        };
        let header = Paragraph::new(header_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Panes
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let (transcript, minutes) = match &self.output {
            Some(output) => (output.transcript.as_str(), output.minutes.as_str()),
            None => ("", ""),
        };

        self.transcript_height = transcript.lines().count();
        self.minutes_height = minutes.lines().count();

        draw_pane(
            frame,
            panes[0],
            " Transcript ",
            transcript,
            self.transcript_scroll,
            self.transcript_height,
            self.focus == Pane::Transcript,
        );
        draw_pane(
            frame,
            panes[1],
            " Meeting Minutes ",
            minutes,
            self.minutes_scroll,
            self.minutes_height,
            self.focus == Pane::Minutes,
        );

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Switch pane  "),
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll  "),
            Span::styled(" g/G ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Top/Bottom  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    fn focused_scroll(&mut self) -> (&mut usize, usize) {
        match self.focus {
            Pane::Transcript => (&mut self.transcript_scroll, self.transcript_height),
            Pane::Minutes => (&mut self.minutes_scroll, self.minutes_height),
        }
    }

    pub fn scroll_up(&mut self) {
        let (scroll, _) = self.focused_scroll();
        *scroll = scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let (scroll, height) = self.focused_scroll();
        if *scroll < height.saturating_sub(1) {
            *scroll += 1;
        }
    }

    pub fn page_up(&mut self) {
        let (scroll, _) = self.focused_scroll();
        *scroll = scroll.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        let (scroll, height) = self.focused_scroll();
        *scroll = (*scroll + 10).min(height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        let (scroll, _) = self.focused_scroll();
        *scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        let (scroll, height) = self.focused_scroll();
        *scroll = height.saturating_sub(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll: usize,
    content_height: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };

    let pane = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(pane, area);

    // Scrollbar
    let visible_height = area.height.saturating_sub(2) as usize;
    if content_height > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::new(content_height)
            .position(scroll)
            .viewport_content_length(visible_height);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}
