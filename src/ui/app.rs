//! Main application for the five-in-a-row window

use eframe::egui;
use egui::{CentralPanel, ComboBox, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::board::{Player, State};
use crate::config::GameConfig;
use crate::controller::PlayerKind;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new("FIVE IN A ROW")
                        .size(22.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(12.0);

                self.render_players_card(ui);
                ui.add_space(10.0);
                self.render_status_card(ui);

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Controller selection for both players and the Start button
    fn render_players_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for player in [Player::X, Player::O] {
                let mut kind = self.state.kind(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    ComboBox::from_id_salt(("kind", player.to_string()))
                        .selected_text(kind.label())
                        .show_ui(ui, |ui| {
                            for option in PlayerKind::ALL {
                                ui.selectable_value(&mut kind, option, option.label());
                            }
                        });
                });
                self.state.set_kind(player, kind);
            }

            ui.add_space(8.0);
            if ui.button("Start").clicked() {
                if let Err(e) = self.state.start() {
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    fn status_text(&self) -> (String, egui::Color32) {
        if !self.state.started {
            return ("Choose players and press Start".to_string(), TEXT_SECONDARY);
        }
        let board = self.state.game.board();
        match board.state() {
            State::HasWinner => match board.victory() {
                Some(v) => (format!("{} wins!", v.winner), WIN_HIGHLIGHT),
                None => ("Game over".to_string(), WIN_HIGHLIGHT),
            },
            State::Draw => ("Game ended in a draw!".to_string(), WIN_HIGHLIGHT),
            State::NotOver if self.state.is_ai_thinking() => {
                let secs = self
                    .state
                    .ai_thinking_elapsed()
                    .map_or(0.0, |d| d.as_secs_f32());
                (
                    format!("{} is thinking... {secs:.1}s", self.state.game.next_turn()),
                    TIMER_WARNING,
                )
            }
            State::NotOver => (
                format!("It is {}'s turn", self.state.game.next_turn()),
                TIMER_NORMAL,
            ),
        }
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let (text, color) = self.status_text();
            ui.label(RichText::new(text).size(16.0).strong().color(color));

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_clicks = self.state.is_human_turn() && !self.state.is_ai_thinking();
            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.last_move(),
                self.state.winning_line(),
                accept_clicks,
            );

            if let Some(loc) = clicked {
                if let Err(msg) = self.state.try_place(loc) {
                    self.state.message = Some(msg);
                }
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
