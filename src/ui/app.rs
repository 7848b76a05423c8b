//! Main application for the Go-Moku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::{GameConfig, GameStatus, MAX_BOARD_SIZE};

/// Board sizes offered in the menu
const SIZE_CHOICES: [u8; 4] = [6, 9, 15, MAX_BOARD_SIZE];

/// Main Go-Moku application
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

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    for size in SIZE_CHOICES {
                        if ui.button(format!("New {size}x{size} Game")).clicked() {
                            self.state.resize(size);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.engine.size();
                    ui.label(format!("{size}x{size} - You: X (black)"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.state.engine.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GO-MOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row wins").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player_turn = self.state.engine.is_player_turn();
            let (who, accent, symbol_color) = if player_turn {
                ("YOU", PLAYER_STONE_HIGHLIGHT, TEXT_PRIMARY)
            } else {
                ("COMPUTER", COMPUTER_STONE, PLAYER_STONE)
            };
            let symbol = self.state.engine.turn().mark().symbol().to_string();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(24.0),
                    symbol_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(who).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.engine.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.thinking_elapsed(Instant::now()) {
                        (format!("Computer thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WAIT)
                    } else {
                        ("Your turn".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(label).clicked() {
                        self.state.reset();
                    }
                });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.engine.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let status = self.state.engine.status();
        let detail = match status {
            GameStatus::Draw => "board full".to_string(),
            _ => format!("by {} in a row", self.state.engine.winning_line().map_or(0, |l| l.len())),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(status.message()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("Play Again").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let overlay = BoardOverlay {
                last_move: self.state.engine.last_move(),
                winning_line: self.state.engine.winning_line(),
                accepting_input: self.state.engine.is_player_turn()
                    && !self.state.engine.is_game_over(),
            };

            let board = self.state.engine.board();
            if let Some(pos) = self.board_view.show(ui, &board, &overlay) {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let thinking = self.state.update_computer(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep frames coming until the computer has answered
        if thinking {
            ctx.request_repaint();
        }
    }
}
