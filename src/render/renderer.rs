use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashMap;

use crate::game::{Cell, Drawable, EdgePolicy, RoundController, VisualTag};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        round: &RoundController,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(round, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(round, paused), game_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, round: &RoundController, paused: bool) -> Paragraph<'static> {
        let tags = tag_map(&[round.snake() as &dyn Drawable, round.apple()]);
        let grid = round.grid();

        let lines: Vec<Line> = (0..grid.height() as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..grid.width() as i32)
                    .map(|x| cell_span(tags.get(&Cell::new(x, y)).copied()))
                    .collect();
                Line::from(spans)
            })
            .collect();

        let (title, border) = if paused {
            (" Snake (paused) ", Color::Yellow)
        } else {
            (" Snake ", Color::White)
        };
        let border_type = match grid.edge_policy() {
            EdgePolicy::Wrap => BorderType::Rounded,
            EdgePolicy::BoundedReset => BorderType::Double,
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(Style::default().fg(border))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, round: &RoundController, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let edges = match round.grid().edge_policy() {
            EdgePolicy::Wrap => "wrap",
            EdgePolicy::BoundedReset => "walls",
        };

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                round.snake().target_length().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Apples: ", label),
            Span::styled(metrics.apples_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Rounds: ", label),
            Span::styled(metrics.rounds_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Edges: ", label),
            Span::styled(edges, value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
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

/// Index drawables by cell. Later entries win on overlap.
fn tag_map(drawables: &[&dyn Drawable]) -> HashMap<Cell, VisualTag> {
    drawables
        .iter()
        .flat_map(|drawable| drawable.tagged_cells())
        .collect()
}

fn cell_span(tag: Option<VisualTag>) -> Span<'static> {
    match tag {
        Some(VisualTag::SnakeHead) => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Some(VisualTag::SnakeBody) => Span::styled("□ ", Style::default().fg(Color::Green)),
        Some(VisualTag::Apple) => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(paused: bool) -> String {
        let round = RoundController::new(&GameConfig::small().with_seed(3)).unwrap();
        let metrics = GameMetrics::new();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &round, &metrics, paused))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_and_pieces_are_drawn() {
        let text = screen_text(false);
        assert!(text.contains("Length: 1"));
        assert!(text.contains("Apples: 0"));
        assert!(text.contains("Edges: walls"));
        assert!(text.contains('■'));
        assert!(text.contains('O'));
    }

    #[test]
    fn test_paused_title() {
        assert!(screen_text(true).contains("(paused)"));
    }

    #[test]
    fn test_tag_map_prefers_later_drawables() {
        let snake = crate::game::Snake::new(Cell::new(1, 1));
        let apple = crate::game::Apple::at(Cell::new(1, 1));
        let tags = tag_map(&[&snake as &dyn Drawable, &apple]);
        assert_eq!(tags.get(&Cell::new(1, 1)), Some(&VisualTag::Apple));
    }
}
