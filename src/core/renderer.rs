/// Board drawing: header, the four quadrants, key legend and a centered message.
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::games::simon::Color;
use crate::games::GameInfo;

pub const QUAD_WIDTH: u16 = 15;
pub const QUAD_HEIGHT: u16 = 7;

const QUAD_FILL: &str = "▒";

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Green => ratatui::style::Color::Green,
            Color::Red => ratatui::style::Color::Red,
            Color::Yellow => ratatui::style::Color::Yellow,
            Color::Blue => ratatui::style::Color::Blue,
        }
    }
}

/// Everything one frame shows. Drawing is a pure function of this.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    pub info: &'a GameInfo,
    pub highlight: Option<Color>,
    pub score: u32,
    pub message: &'a str,
}

impl BoardView<'_> {
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let board_x = (area.width / 2).saturating_sub(QUAD_WIDTH);
        let board_y = (area.height / 2).saturating_sub(QUAD_HEIGHT + 2);
        let board_bottom = board_y + QUAD_HEIGHT * 2;

        // Header sits one row above the board.
        let header_y = board_y.saturating_sub(1);
        let title = Paragraph::new(self.info.title());
        frame.render_widget(title, clip(Rect::new(board_x + 1, header_y, QUAD_WIDTH, 1), area));
        let score = Paragraph::new(format!("Score: {}", self.score));
        frame.render_widget(
            score,
            clip(Rect::new(board_x + QUAD_WIDTH + 3, header_y, QUAD_WIDTH, 1), area),
        );

        for color in Color::ALL {
            let (qx, qy) = quadrant_origin(color, board_x, board_y);
            let rect = clip(Rect::new(qx, qy, QUAD_WIDTH, QUAD_HEIGHT), area);
            frame.render_widget(self.quadrant(color), rect);
        }

        frame.render_widget(
            Paragraph::new(legend()),
            clip(Rect::new(board_x + 4, board_bottom, QUAD_WIDTH * 2, 1), area),
        );

        frame.render_widget(
            Paragraph::new(self.message).alignment(Alignment::Center),
            clip(Rect::new(area.x, board_bottom + 2, area.width, 1), area),
        );
    }

    fn quadrant(&self, color: Color) -> Paragraph<'static> {
        let mut style = Style::default().fg(color.into());
        if self.highlight == Some(color) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let row = QUAD_FILL.repeat(QUAD_WIDTH as usize);
        let lines: Vec<Line> = (0..QUAD_HEIGHT).map(|_| Line::from(row.clone())).collect();
        Paragraph::new(lines).style(style)
    }
}

/// Quadrants 1 and 3 share a column, as do 2 and 4; 1 and 2 share the top row.
pub fn quadrant_origin(color: Color, board_x: u16, board_y: u16) -> (u16, u16) {
    let i = color.index();
    let qx = if i % 2 == 1 { board_x } else { board_x + QUAD_WIDTH };
    let qy = if i <= 2 { board_y } else { board_y + QUAD_HEIGHT };
    (qx, qy)
}

fn legend() -> Line<'static> {
    let mut spans = vec![Span::raw("Press:")];
    spans.extend(
        Color::ALL
            .iter()
            .map(|&c| Span::styled(format!(" [{}]", c.key()), Style::default().fg(c.into()))),
    );
    Line::from(spans)
}

fn clip(rect: Rect, area: Rect) -> Rect {
    rect.intersection(area)
}
