use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::notification::render_notification;
use crate::slots::SLOT_COUNT;
use crate::typing::SessionPhase;

use super::state::{App, Focus};

const HIGHLIGHT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

/// Shown in place of a tab character so every char maps to one cell
const TAB_SYMBOL: char = '\u{21e5}';

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(SLOT_COUNT as u16 + 2), // slots pane
            Constraint::Min(4),                        // clipboard preview
            Constraint::Length(1),                     // status / controls
            Constraint::Length(1),                     // help line
        ])
        .split(frame.area());

        self.render_slots_pane(frame, layout[0]);
        self.render_preview_pane(frame, layout[1]);
        self.render_status_line(frame, layout[2]);
        self.render_help_line(frame, layout[3]);

        if self.editor.is_some() {
            self.render_slot_editor(frame, layout[0]);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_slots_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SlotsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let items: Vec<ListItem> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let label = Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray));
                let content = if value.trim().is_empty() {
                    Span::styled("(empty)", Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
                } else {
                    Span::raw(single_line(value))
                };
                let mut line = Line::from(vec![label, content]);
                if i == self.selected_slot && self.focus == Focus::SlotsPane {
                    line = line.style(Style::default().add_modifier(Modifier::REVERSED));
                }
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick Slots ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(list, area);
    }

    fn render_preview_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::PreviewPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let lines = preview_lines(self.preview.text(), self.preview.highlight());

        // Keep the highlighted character inside the viewport
        let viewport_height = area.height.saturating_sub(2);
        if let Some(line) = self.preview.highlight_line() {
            let line = line.min(u16::MAX as usize) as u16;
            if line < self.preview.scroll_offset {
                self.preview.scroll_offset = line;
            } else if viewport_height > 0 && line >= self.preview.scroll_offset + viewport_height {
                self.preview.scroll_offset = line - viewport_height + 1;
            }
        } else {
            let max_offset = (lines.len() as u16).saturating_sub(viewport_height.max(1));
            self.preview.scroll_offset = self.preview.scroll_offset.min(max_offset);
        }

        let count_label = Line::from(format!(" {} characters ", self.preview.char_count()))
            .right_aligned()
            .style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Clipboard Preview ")
                    .title_bottom(count_label)
                    .border_style(Style::default().fg(border_color)),
            )
            .scroll((self.preview.scroll_offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_status_line(&mut self, frame: &mut Frame, area: Rect) {
        let line = match self.session.phase() {
            Some(SessionPhase::CountingDown { remaining_secs }) => Line::from(Span::styled(
                format!(" Starting in {}s...  [s] stop", remaining_secs),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )),
            Some(SessionPhase::Typing) => Line::from(Span::styled(
                " \u{25cf} Typing...  [s] stop",
                Style::default().fg(Color::White).bg(Color::Red),
            )),
            None => {
                let interval_ms = self.controls.interval_units as f64 / 10.0;
                Line::from(vec![
                    Span::styled(
                        " \u{25b6} [t] type clipboard ",
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(
                            " delay {}s [/]  keystroke {} ({:.1} ms) {{/}}",
                            self.controls.start_delay_secs,
                            self.controls.interval_units,
                            interval_ms
                        ),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(
            " 1-6 copy slot | \u{2191}\u{2193} select | enter copy | e edit | x clear | ^S save | ^O load | tab focus | q quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }

    fn render_slot_editor(&mut self, frame: &mut Frame, slots_area: Rect) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        // One bordered input line directly over the slot being edited
        let row = slots_area.y + 1 + editor.index as u16;
        let area = Rect {
            x: slots_area.x + 1,
            y: row.saturating_sub(1),
            width: slots_area.width.saturating_sub(2),
            height: 3,
        }
        .intersection(frame.area());
        if area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);
        editor.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Edit slot {} (enter saves, esc cancels) ", editor.index + 1))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(&editor.textarea, area);
    }
}

fn single_line(value: &str) -> String {
    match value.split_once('\n') {
        Some((first, _)) => format!("{}\u{2026}", first),
        None => value.to_string(),
    }
}

/// Split text into display lines, marking exactly the highlighted character.
///
/// A highlighted newline is shown as a marked trailing space so the position
/// stays visible.
fn preview_lines(text: &str, highlight: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut plain = String::new();

    let flush_plain = |plain: &mut String, spans: &mut Vec<Span>| {
        if !plain.is_empty() {
            spans.push(Span::raw(std::mem::take(plain)));
        }
    };

    for (i, ch) in text.chars().enumerate() {
        let marked = highlight == Some(i);
        if ch == '\n' {
            if marked {
                flush_plain(&mut plain, &mut spans);
                spans.push(Span::styled(" ", HIGHLIGHT_STYLE));
            }
            flush_plain(&mut plain, &mut spans);
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            let display = if ch == '\t' { TAB_SYMBOL } else { ch };
            if marked {
                flush_plain(&mut plain, &mut spans);
                spans.push(Span::styled(display.to_string(), HIGHLIGHT_STYLE));
            } else {
                plain.push(display);
            }
        }
    }
    flush_plain(&mut plain, &mut spans);
    lines.push(Line::from(spans));
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
