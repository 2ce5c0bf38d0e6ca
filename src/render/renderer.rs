use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameConfig, GameState, Position, RunState};
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        config: &GameConfig,
        state: &GameState,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let screen = match state.run_state {
            RunState::Idle => self.render_instructions(game_area),
            RunState::Playing => self.render_grid(game_area, config, state),
            RunState::Won => self.render_won(game_area, state),
            RunState::Lost => self.render_lost(game_area, state),
        };
        frame.render_widget(screen, game_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, config: &GameConfig, state: &GameState) -> Paragraph<'_> {
        let tile = config.tile_size;
        let mut lines = Vec::new();

        for row in 0..config.tiles_high() {
            let mut spans = Vec::new();

            for col in 0..config.tiles_wide() {
                let pos = Position::new(col * tile, row * tile);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.predator {
                    Span::styled(
                        "X ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if pos == state.nest.position {
                    let style = if state.nest_full() {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Yellow)
                    };
                    Span::styled("@ ", style)
                } else if state.eggs.contains(&pos) {
                    Span::styled(
                        "o ",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Egg Hunt "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Eggs: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", state.collected, state.nest.capacity),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Wins: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.wins.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Losses: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.losses.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];
        if let Some(best) = metrics.format_fastest_win() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(best, Style::default().fg(Color::White)));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_instructions(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Oh no! The mother snake's eggs have scattered!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from("Help her gather them up and bring them home."),
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move."),
            ]),
            Line::from(vec![
                Span::raw("Avoid the predator ("),
                Span::styled("X", Style::default().fg(Color::Red)),
                Span::raw("), it wants the eggs too!"),
            ]),
            Line::from(vec![
                Span::raw("Collect every egg ("),
                Span::styled("o", Style::default().fg(Color::White)),
                Span::raw(") and deliver them to the nest ("),
                Span::styled("@", Style::default().fg(Color::Yellow)),
                Span::raw(")."),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to start!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Egg Hunt "),
        )
    }

    fn render_won(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "YOU WIN!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("All ", Style::default().fg(Color::Gray)),
                Span::styled(
                    state.collected.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " eggs are safely in the nest!",
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_lost(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "The predator caught you!",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Eggs collected: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}/{}", state.collected, state.nest.capacity),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
