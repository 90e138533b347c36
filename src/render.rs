use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::game::Game;
use crate::world::{Cell, Position};

const PLAYER_GLYPH: char = 'X';
const ENEMY_GLYPH: char = 'E';
const FOOD_GLYPH: char = 'o';

const BANNER_WIDTH: u16 = 34;
const BANNER_HEIGHT: u16 = 7;

pub fn render<R>(frame: &mut Frame, game: &Game<R>) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let score_area = Rect { height: 1, ..area };
    let score = Paragraph::new(format!("Score: {}", game.player.score))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(score, score_area);

    if game.game_over {
        render_game_over(frame, game, area);
        return;
    }

    let map_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    render_map(frame, game, map_area);
}

fn render_map<R>(frame: &mut Frame, game: &Game<R>, area: Rect) {
    let lines: Vec<Line> = game
        .grid
        .rows()
        .take(area.height as usize)
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .take(area.width as usize)
                .enumerate()
                .map(|(x, cell)| {
                    let (glyph, style) = glyph_at(game, Position::new(x, y), *cell);
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Player over enemies over food over terrain.
fn glyph_at<R>(game: &Game<R>, pos: Position, cell: Cell) -> (char, Style) {
    if game.player.position == pos {
        return (
            PLAYER_GLYPH,
            Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        );
    }
    if game.enemies.iter().any(|e| e.position == pos) {
        return (ENEMY_GLYPH, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    }
    if game.food.iter().any(|f| f.position == pos) {
        return (FOOD_GLYPH, Style::default().fg(Color::Yellow));
    }

    let style = match cell {
        Cell::Wall => Style::default().fg(Color::Gray),
        Cell::Open => Style::default(),
    };
    (cell.symbol(), style)
}

fn render_game_over<R>(frame: &mut Frame, game: &Game<R>, area: Rect) {
    let banner = centered(area, BANNER_WIDTH, BANNER_HEIGHT);

    let text = vec![
        Line::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("Final score: {}", game.player.score)),
        Line::raw(""),
        Line::styled("Press R to restart", Style::default().fg(Color::Gray)),
        Line::styled("Press C to quit", Style::default().fg(Color::Gray)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        banner,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
