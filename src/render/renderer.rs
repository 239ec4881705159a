use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::board::Board;
use crate::game::{GamePhase, GameState, Grid};
use crate::metrics::GameMetrics;
use crate::scores::HighScores;
use crate::ui::Menu;

/// Everything one frame shows
pub struct View<'a> {
    pub phase: GamePhase,
    pub state: &'a GameState,
    pub menu: Option<&'a Menu>,
    pub high_scores: &'a HighScores,
    pub metrics: &'a GameMetrics,
    pub grid: Grid,
    pub cell_inset: u32,
    pub sound_enabled: bool,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &View) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view), chunks[0]);

        match view.phase {
            GamePhase::Menu | GamePhase::HighScores => {
                let panel = centered(chunks[1], 40, 16);
                let widget = if view.phase == GamePhase::Menu {
                    self.render_menu(view.menu, Vec::new())
                } else {
                    self.render_menu(view.menu, self.high_score_lines(view.high_scores))
                };
                frame.render_widget(widget, panel);
            }
            GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver => {
                let board_area = self.render_board(frame, chunks[1], view);

                if view.phase != GamePhase::Playing {
                    let overlay = centered(board_area, 30, 9);
                    let body = if view.phase == GamePhase::GameOver {
                        self.final_score_lines(view)
                    } else {
                        Vec::new()
                    };
                    frame.render_widget(Clear, overlay);
                    frame.render_widget(self.render_menu(view.menu, body), overlay);
                }
            }
        }

        frame.render_widget(self.render_controls(view.phase), chunks[2]);
    }

    /// Draw the bordered board centred in `area`, returning where it went
    fn render_board(&self, frame: &mut Frame, area: Rect, view: &View) -> Rect {
        let (width, height) = Board::size(&view.grid);
        let outer = centered(area, width.saturating_add(2), height.saturating_add(2));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        frame.render_widget(Board::new(view.state, view.grid, view.cell_inset), inner);

        outer
    }

    fn render_stats(&self, view: &View) -> Paragraph<'_> {
        let best = view.high_scores.highest().max(view.state.score);
        let sound = if view.sound_enabled { "on" } else { "off" };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(best.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(view.metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Sound: ", Style::default().fg(Color::Yellow)),
            Span::styled(sound, Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, menu: Option<&Menu>, body: Vec<Line<'static>>) -> Paragraph<'static> {
        let mut lines = vec![Line::from("")];

        if let Some(menu) = menu {
            lines.push(Line::from(Span::styled(
                menu.title(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        lines.extend(body);

        if let Some(menu) = menu {
            lines.push(Line::from(""));
            for (i, item) in menu.items().iter().enumerate() {
                let line = if i == menu.selected_index() {
                    Line::from(Span::styled(
                        format!("> {} <", item.label()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        item.label(),
                        Style::default().fg(Color::Gray),
                    ))
                };
                lines.push(line);
            }
        }

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
    }

    fn high_score_lines(&self, high_scores: &HighScores) -> Vec<Line<'static>> {
        if high_scores.is_empty() {
            return vec![Line::from(Span::styled(
                "No scores yet",
                Style::default().fg(Color::Gray),
            ))];
        }

        high_scores
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, score)| {
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", rank + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{score:>5}"), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    }

    fn final_score_lines(&self, view: &View) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])]
    }

    fn render_controls(&self, phase: GamePhase) -> Paragraph<'static> {
        let text = match phase {
            GamePhase::Playing => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("P", Style::default().fg(Color::Cyan)),
                Span::raw(" pause | "),
                Span::styled("M", Style::default().fg(Color::Cyan)),
                Span::raw(" sound | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            GamePhase::GameOver => Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" select | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" choose | "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" select | "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" back | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
