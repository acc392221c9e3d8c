use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use sudoku_core::Position;
use sudoku_game::Game;

use crate::ui::{
    Action, grid,
    grid::GridViewModel,
    keypad,
    sidebar::{self, SidebarViewModel},
};

pub fn show(
    ui: &mut Ui,
    game: &Game,
    selected_cell: Option<Position>,
    sidebar_vm: &SidebarViewModel,
) -> Vec<Action> {
    let mut actions = vec![];
    let selected_digit = selected_cell.and_then(|pos| game.cell(pos).as_digit());
    let grid_vm = GridViewModel::new(game, selected_cell, selected_digit);
    StripBuilder::new(ui)
        .size(Size::relative(0.75))
        .size(Size::relative(0.25))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::relative(9.0 / (9.0 + 2.0)))
                    .size(Size::relative(2.0 / (9.0 + 2.0)))
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            actions.extend(grid::show(ui, &grid_vm));
                        });
                        strip.cell(|ui| {
                            actions.extend(keypad::show(ui, game, selected_cell));
                        });
                    });
            });
            strip.cell(|ui| {
                actions.extend(sidebar::show(ui, sidebar_vm));
            });
        });
    actions
}
