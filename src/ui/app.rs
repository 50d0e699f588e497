//! Main application for the Pente GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameState, Phase};
use super::theme::*;
use crate::board::Side;
use crate::game::{CoinFace, PlayerKind, RoundResult, Standing, CAPTURE_WIN_PAIRS};

/// Main Pente application
pub struct PenteApp {
    state: GameState,
    board_view: BoardView,
    save_name: String,
    /// Saved games offered by the load list, refreshed on demand
    saved_games: Vec<String>,
}

impl PenteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        let saved_games = state.saved_games();
        Self {
            state,
            board_view: BoardView::default(),
            save_name: String::new(),
            saved_games,
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    match self.state.phase {
                        Phase::CoinToss => self.render_coin_toss_card(ui),
                        Phase::Playing => self.render_turn_card(ui),
                        Phase::RoundOver => {
                            if let Some(result) = self.state.round_result().cloned() {
                                self.render_round_over_card(ui, &result);
                            }
                        }
                        Phase::TournamentOver => self.render_tournament_card(ui),
                    }
                    ui.add_space(10.0);

                    self.render_scores_card(ui);
                    ui.add_space(10.0);

                    if self.state.tournament.round().is_some() {
                        self.render_captures_card(ui);
                        ui.add_space(10.0);
                    }

                    if let Some(rationale) = &self.state.last_rationale {
                        Self::render_rationale_card(ui, rationale);
                        ui.add_space(10.0);
                    }

                    if !self.state.phase.is_tournament_over() {
                        self.render_actions_card(ui);
                    }

                    if let Some(msg) = &self.state.message {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, msg);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label styled as a button
    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("PENTE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let rounds = self.state.tournament.rounds_played();
            ui.label(RichText::new(format!("Rounds played: {rounds}")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let Some(round) = self.state.tournament.round() else {
            return;
        };
        let seat = round.current();
        let name = &self.state.tournament.participant(seat.kind).name;

        Self::card_frame().show(ui, |ui| {
            let (stone_char, accent, stone_color) = match seat.side {
                Side::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Side::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(seat.side.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if seat.kind.is_human() {
                        (format!("{name}, your turn"), STATUS_GOOD)
                    } else {
                        ("Computer thinking...".to_string(), STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(RichText::new(format!("Move #{}", round.ply() + 1)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_coin_toss_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COIN TOSS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new("Scores are tied. Call the coin to decide who opens as White.").size(12.0).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if Self::button(ui, "Heads") {
                    self.state.call_coin(CoinFace::Heads);
                }
                ui.add_space(4.0);
                if Self::button(ui, "Tails") {
                    self.state.call_coin(CoinFace::Tails);
                }
            });
        });
    }

    fn render_scores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TOURNAMENT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for kind in [PlayerKind::Human, PlayerKind::Computer] {
                let participant = self.state.tournament.participant(kind);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&participant.name).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(participant.score.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_captures_card(&self, ui: &mut egui::Ui) {
        let Some(round) = self.state.tournament.round() else {
            return;
        };
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURED PAIRS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for kind in [PlayerKind::Human, PlayerKind::Computer] {
                let seat = round.seat(kind);
                let name = &self.state.tournament.participant(kind).name;
                Self::render_capture_row(ui, name, seat.side, seat.captured_pairs);
                ui.add_space(6.0);
            }
        });
    }

    /// One row of five pair indicators
    fn render_capture_row(ui: &mut egui::Ui, name: &str, side: Side, captures: usize) {
        let (symbol, filled_color, empty_color) = match side {
            Side::Black => ("●", egui::Color32::from_rgb(60, 60, 65), egui::Color32::from_rgb(40, 42, 46)),
            Side::White => ("○", egui::Color32::from_rgb(200, 200, 205), egui::Color32::from_rgb(60, 62, 66)),
        };
        let near_win = captures + 1 >= CAPTURE_WIN_PAIRS;

        ui.label(RichText::new(name).size(11.0).color(TEXT_SECONDARY));
        ui.horizontal(|ui| {
            for i in 0..CAPTURE_WIN_PAIRS {
                let color = match (i < captures, near_win) {
                    (true, true) => STATUS_WARNING,
                    (true, false) => filled_color,
                    (false, _) => empty_color,
                };
                ui.label(RichText::new(symbol).size(18.0).color(color));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = RichText::new(format!("{captures}/{CAPTURE_WIN_PAIRS}")).size(14.0);
                let text = if near_win { text.strong().color(STATUS_WARNING) } else { text.color(TEXT_SECONDARY) };
                ui.label(text);
            });
        });
    }

    fn render_rationale_card(ui: &mut egui::Ui, rationale: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(rationale).size(12.0).color(TEXT_PRIMARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if self.state.is_human_turn() {
                ui.horizontal(|ui| {
                    if Self::button(ui, "Hint (H)") {
                        self.state.request_hint();
                    }
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut self.save_name).hint_text("save name").desired_width(140.0));
                    if Self::button(ui, "Save") && !self.save_name.trim().is_empty() {
                        match self.state.save(self.save_name.trim()) {
                            Ok(_) => {
                                self.save_name.clear();
                                self.saved_games = self.state.saved_games();
                            }
                            Err(err) => self.state.message = Some(format!("{err:#}")),
                        }
                    }
                });
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new("Load").size(11.0).color(TEXT_SECONDARY));
                if ui.small_button("↻").clicked() {
                    self.saved_games = self.state.saved_games();
                }
            });
            if self.saved_games.is_empty() {
                ui.label(RichText::new("No saved games").size(10.0).color(TEXT_MUTED));
            }
            let mut chosen = None;
            for name in &self.saved_games {
                if ui.add(egui::Label::new(RichText::new(name).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                    chosen = Some(name.clone());
                }
            }
            if let Some(name) = chosen {
                if let Err(err) = self.state.load(&name) {
                    self.state.message = Some(format!("{err:#}"));
                }
            }
        });
    }

    fn render_round_over_card(&mut self, ui: &mut egui::Ui, result: &RoundResult) {
        let headline = self.state.describe_result(result);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(14.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(8.0);

                for points in &result.points {
                    let name = &self.state.tournament.participant(points.kind).name;
                    ui.label(RichText::new(format!("{name} ({})", points.side)).size(12.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!(
                            "five {} + captures {} + fours {} = {}",
                            points.five,
                            points.captures,
                            points.fours,
                            points.total()
                        ))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                    );
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if Self::button(ui, "Next Round (N)") {
                        self.state.next_round();
                    }
                    ui.add_space(4.0);
                    if Self::button(ui, "End Tournament") {
                        self.state.end_tournament();
                    }
                });
            });
    }

    fn render_tournament_card(&self, ui: &mut egui::Ui) {
        let tournament = &self.state.tournament;
        let headline = match tournament.standing() {
            Standing::Leader(kind) => format!("{} wins the tournament", tournament.participant(kind).name),
            Standing::Tie => "The tournament is a draw".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TOURNAMENT OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(16.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("after {} round(s)", tournament.rounds_played()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let Some(round) = self.state.tournament.round() else {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("Call the coin to start").size(18.0).color(TEXT_SECONDARY));
                    });
                    return;
                };

                let overlay = BoardOverlay {
                    turn: round.current().side,
                    last_move: round.board().last_move_position(),
                    hint: self.state.hint.map(|hint| hint.pos),
                    interactive: self.state.is_human_turn(),
                };
                let clicked = self.board_view.show(ui, round.board(), &overlay);

                if let Some(pos) = clicked {
                    if let Err(err) = self.state.try_place_stone(pos) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Typing a save name must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }
        let (hint, next) = ctx.input(|i| (i.key_pressed(egui::Key::H), i.key_pressed(egui::Key::N)));
        if hint {
            self.state.request_hint();
        }
        if next && self.state.phase.is_round_over() {
            self.state.next_round();
        }
    }
}

impl eframe::App for PenteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The human's stone has been drawn for a frame before the reply
        self.state.play_computer_turn();

        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_computer_turn() {
            ctx.request_repaint();
        }
    }
}
