use eframe::egui::{ComboBox, RichText, Ui};
use sudoku_core::SolutionCheck;
use sudoku_generator::Difficulty;

use crate::{
    app::{GameStatus, Message},
    ui::Action,
};

#[derive(Debug, Clone, Copy)]
pub struct SidebarViewModel {
    pub status: GameStatus,
    pub message: Option<Message>,
    pub difficulty: Difficulty,
}

pub fn show(ui: &mut Ui, vm: &SidebarViewModel) -> Vec<Action> {
    let mut actions = vec![];
    ui.vertical(|ui| {
        let text = match vm.status {
            GameStatus::InProgress => "Game in progress",
            GameStatus::Solved => "Congratulations! You solved the puzzle!",
        };
        ui.label(RichText::new(text).size(20.0));

        ui.add_space(10.0);
        ComboBox::from_label("Difficulty")
            .selected_text(vm.difficulty.name())
            .show_ui(ui, |ui| {
                for difficulty in Difficulty::ALL {
                    if ui
                        .selectable_label(vm.difficulty == difficulty, difficulty.name())
                        .clicked()
                    {
                        actions.push(Action::SelectDifficulty(difficulty));
                    }
                }
            });

        ui.add_space(10.0);
        if ui.button(RichText::new("New Game").size(20.0)).clicked() {
            actions.push(Action::NewGame);
        }
        if ui.button(RichText::new("Check").size(20.0)).clicked() {
            actions.push(Action::CheckSolution);
        }
        if ui
            .button(RichText::new("Auto-Complete").size(20.0))
            .clicked()
        {
            actions.push(Action::AutoComplete);
        }

        if let Some(message) = vm.message {
            ui.add_space(10.0);
            ui.label(message_text(message));
        }
    });
    actions
}

fn message_text(message: Message) -> &'static str {
    match message {
        Message::CheckResult(SolutionCheck::Valid) => "The board is correct!",
        Message::CheckResult(SolutionCheck::Incomplete) => "The board is not complete yet.",
        Message::CheckResult(SolutionCheck::Invalid) => "The board has mistakes.",
        Message::AutoCompleted => "Board completed by the solver.",
        Message::Unsolvable => "No solution exists from the current board.",
        Message::FewerEmptyCells => "Generated with fewer empty cells than requested.",
    }
}
