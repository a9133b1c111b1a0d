//! Board rendering for the five-in-a-row window

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Line, Location, Player, LOCATIONS, NUM_COLS, NUM_ROWS};

use super::theme::*;

/// Board view handles rendering and input for the game board.
///
/// Cells are squares; marks are drawn inside them.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are only reported when `accept_clicks` is set and the cell is blank.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Location>,
        winning_line: Option<Line>,
        accept_clicks: bool,
    ) -> Option<Location> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / NUM_COLS as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(loc) = last_move {
            painter.circle_filled(
                self.cell_center(loc) + Vec2::splat(self.cell_size * 0.38),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accept_clicks {
            return None;
        }

        let loc = self.screen_to_board(response.hover_pos()?)?;
        let is_valid = board.is_blank(loc);
        let hover = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(self.cell_rect(loc).shrink(2.0), CornerRadius::same(3), hover);

        (response.clicked() && is_valid).then_some(loc)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let span = self.cell_size * NUM_COLS as f32;

        for i in 0..=NUM_ROWS {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }
        for i in 0..=NUM_COLS {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
        }
    }

    /// Row and column numbers, matching what the console accepts
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let half = self.cell_size * 0.5;

        for col in 0..NUM_COLS {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size + half;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), GRID_LINE);
        }
        for row in 0..NUM_ROWS {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size + half;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), GRID_LINE);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for &loc in LOCATIONS.iter() {
            if let Some(player) = board.get(loc) {
                self.draw_mark(painter, loc, player);
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, loc: Location, player: Player) {
        let center = self.cell_center(loc);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match player {
            Player::X => {
                let stroke = Stroke::new(MARK_STROKE, X_MARK);
                let d = Vec2::splat(radius);
                let e = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center - e, center + e], stroke);
            }
            Player::O => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE, O_MARK));
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);
        for loc in line {
            painter.rect_stroke(
                self.cell_rect(loc).shrink(3.0),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        let cells: Vec<Location> = line.iter().collect();
        if let (Some(&first), Some(&last)) = (cells.first(), cells.last()) {
            painter.line_segment([self.cell_center(first), self.cell_center(last)], stroke);
        }
    }

    /// Convert screen coordinates to a cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Location> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Location::new(row, col).ok()
    }

    fn cell_rect(&self, loc: Location) -> Rect {
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(loc.col() as f32, loc.row() as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert a cell to its screen centre
    pub fn cell_center(&self, loc: Location) -> Pos2 {
        self.cell_rect(loc).center()
    }
}
