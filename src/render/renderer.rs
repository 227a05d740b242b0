use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{CollisionType, Direction, GameState, Position};
use crate::metrics::GameMetrics;

const HEAD_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const BODY_STYLE: Style = Style::new().fg(Color::Green);
const FOOD_STYLE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);
const EMPTY_STYLE: Style = Style::new().fg(Color::DarkGray);
const LABEL_STYLE: Style = Style::new().fg(Color::Yellow);
const VALUE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Head glyph, pointing the way the snake travels
pub fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

/// Box-drawing glyph for a body segment, joined towards its neighbours in
/// the body (the segment nearer the head and the one nearer the tail)
pub fn segment_glyph(
    toward_head: Option<Position>,
    at: Position,
    toward_tail: Option<Position>,
) -> char {
    let (mut up, mut down, mut left, mut right) = (false, false, false, false);

    for neighbour in [toward_head, toward_tail].into_iter().flatten() {
        match (neighbour.x - at.x, neighbour.y - at.y) {
            (0, -1) => up = true,
            (0, 1) => down = true,
            (-1, 0) => left = true,
            (1, 0) => right = true,
            _ => {}
        }
    }

    match (up, down, left, right) {
        (false, false, true, true) => '─',
        (true, true, false, false) => '│',
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        (false, false, true, false) => '╴',
        (false, false, false, true) => '╶',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
        _ => '■',
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        frame.render_widget(self.render_stats(state, metrics), header);

        let side = u16::try_from(state.grid_size).unwrap_or(u16::MAX);
        let board = centered(
            body,
            side.saturating_mul(2).saturating_add(2),
            side.saturating_add(2),
        );
        frame.render_widget(self.render_grid(state, board), board);

        if !state.is_running() {
            let popup = centered(body, 34, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(state, metrics), popup);
        }

        frame.render_widget(self.render_controls(), footer);
    }

    /// Only the cells that fit inside `area` are built
    fn render_grid(&self, state: &GameState, area: Rect) -> Paragraph<'_> {
        let segments = state.snake.segments();
        let rows = state.grid_size.min(area.height.saturating_sub(2) as usize);
        let cols = state.grid_size.min(area.width.saturating_sub(2) as usize / 2);
        let mut lines = Vec::with_capacity(rows);

        for y in 0..rows as i32 {
            let mut spans = Vec::with_capacity(cols);

            for x in 0..cols as i32 {
                let pos = Position::new(x, y);

                let cell = if pos == state.snake.head() {
                    Span::styled(format!("{} ", head_glyph(state.direction)), HEAD_STYLE)
                } else if let Some(i) = segments.iter().position(|s| *s == pos) {
                    let toward_head = i.checked_sub(1).and_then(|j| segments.get(j)).copied();
                    let glyph = segment_glyph(toward_head, pos, segments.get(i + 1).copied());
                    // Extend horizontal joins across the gap to the next cell
                    let filler = if matches!(glyph, '─' | '┌' | '└' | '╶') {
                        '─'
                    } else {
                        ' '
                    };
                    Span::styled(format!("{glyph}{filler}"), BODY_STYLE)
                } else if pos == state.food {
                    Span::styled(format!("{} ", state.fruit.glyph()), FOOD_STYLE)
                } else {
                    Span::styled("· ", EMPTY_STYLE)
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![
                Span::styled("Score: ", LABEL_STYLE),
                Span::styled(state.score.to_string(), VALUE_STYLE),
                Span::raw("  |  "),
                Span::styled("Level: ", LABEL_STYLE),
                Span::styled(state.level.to_string(), VALUE_STYLE),
                Span::raw("  |  "),
                Span::styled("Speed: ", LABEL_STYLE),
                Span::styled(format!("{}ms", state.speed_ms), VALUE_STYLE),
            ]),
            Line::from(vec![
                Span::styled("Time: ", LABEL_STYLE),
                Span::raw(metrics.format_time()),
                Span::raw("    "),
                Span::styled("Best: ", LABEL_STYLE),
                Span::raw(metrics.high_score.to_string()),
                Span::raw("    "),
                Span::styled("Food: ", LABEL_STYLE),
                Span::raw(state.fruit.name()),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let cause = match state.collision() {
            Some(CollisionType::Wall) => "Hit the wall",
            Some(CollisionType::SelfCollision) => "Bit yourself",
            None => "",
        };

        let text = vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", LABEL_STYLE),
                Span::styled(state.score.to_string(), VALUE_STYLE),
                Span::raw("  "),
                Span::styled("Level: ", LABEL_STYLE),
                Span::styled(state.level.to_string(), VALUE_STYLE),
            ]),
            Line::from(vec![
                Span::styled("Games: ", LABEL_STYLE),
                Span::raw(metrics.games_played.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Drag", Style::default().fg(Color::Cyan)),
            Span::raw(" to swipe, "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
