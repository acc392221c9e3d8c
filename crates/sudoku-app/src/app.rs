//! Application state and the eframe update loop.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use sudoku_core::{Digit, Position, SolutionCheck};
use sudoku_game::Game;
use sudoku_generator::{Difficulty, GeneratorError, PuzzleGenerator, PuzzleSeed};
use sudoku_solver::BacktrackSolver;

use crate::ui::{self, Action, MoveDirection, sidebar::SidebarViewModel};

/// The desktop Sudoku application.
///
/// All state changes flow through [`Action`]s collected from the UI and
/// keyboard, applied once per frame after drawing.
#[derive(Debug)]
pub struct SudokuApp {
    game: Game,
    solver: BacktrackSolver,
    difficulty: Difficulty,
    selected_cell: Option<Position>,
    message: Option<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Solved,
}

/// Feedback shown in the sidebar after a check, auto-complete, or
/// generation shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CheckResult(SolutionCheck),
    AutoCompleted,
    Unsolvable,
    FewerEmptyCells,
}

impl SudokuApp {
    /// Creates the application with a freshly generated easy puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if initial puzzle generation fails.
    pub fn new(_cc: &CreationContext<'_>) -> Result<Self, GeneratorError> {
        let solver = BacktrackSolver::new();
        let difficulty = Difficulty::default();
        let (game, message) = generate_game(&solver, difficulty)?;
        Ok(Self {
            game,
            solver,
            difficulty,
            selected_cell: None,
            message,
        })
    }

    fn status(&self) -> GameStatus {
        if self.game.is_solved() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectCell(pos) => self.selected_cell = Some(pos),
            Action::ClearSelection => self.selected_cell = None,
            Action::MoveSelection(direction) => self.move_selection(direction),
            Action::SetDigit(digit) => self.set_digit(digit),
            Action::RemoveDigit => self.remove_digit(),
            Action::SelectDifficulty(difficulty) => self.difficulty = difficulty,
            Action::NewGame => self.new_game(),
            Action::CheckSolution => {
                self.message = Some(Message::CheckResult(self.game.check_solution()));
            }
            Action::AutoComplete => self.auto_complete(),
        }
    }

    fn new_game(&mut self) {
        match generate_game(&self.solver, self.difficulty) {
            Ok((game, message)) => {
                self.game = game;
                self.message = message;
                self.selected_cell = None;
            }
            Err(err) => log::error!("puzzle generation failed: {err}"),
        }
    }

    fn move_selection(&mut self, direction: MoveDirection) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);
        let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
        let next = match direction {
            MoveDirection::Up => pos.up(),
            MoveDirection::Down => pos.down(),
            MoveDirection::Left => pos.left(),
            MoveDirection::Right => pos.right(),
        };
        if let Some(next) = next {
            *pos = next;
        }
    }

    fn set_digit(&mut self, digit: Digit) {
        if let Some(pos) = self.selected_cell
            && let Err(err) = self.game.set_digit(pos, digit)
        {
            log::debug!("ignoring input at {pos}: {err}");
        }
    }

    fn remove_digit(&mut self) {
        if let Some(pos) = self.selected_cell
            && let Err(err) = self.game.remove_digit(pos)
        {
            log::debug!("ignoring input at {pos}: {err}");
        }
    }

    fn auto_complete(&mut self) {
        match self.game.auto_complete(&self.solver) {
            Ok(true) => self.message = Some(Message::AutoCompleted),
            Ok(false) => self.message = Some(Message::Unsolvable),
            Err(err) => log::error!("auto-complete failed: {err}"),
        }
    }
}

fn generate_game(
    solver: &BacktrackSolver,
    difficulty: Difficulty,
) -> Result<(Game, Option<Message>), GeneratorError> {
    let seed = PuzzleSeed::random();
    log::info!("starting {difficulty} game, seed={seed}");
    let puzzle = PuzzleGenerator::new(solver).generate_with_seed(difficulty, seed)?;
    let message = puzzle.is_exhausted().then(|| {
        log::warn!(
            "removal exhausted, {} of {} cells emptied",
            puzzle.empty_cells(),
            puzzle.requested_empty_cells()
        );
        Message::FewerEmptyCells
    });
    Ok((Game::new(puzzle), message))
}

impl App for SudokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut actions = ctx.input(ui::input::handle);

        CentralPanel::default().show(ctx, |ui| {
            let sidebar_vm = SidebarViewModel {
                status: self.status(),
                message: self.message,
                difficulty: self.difficulty,
            };
            actions.extend(ui::game_screen::show(
                ui,
                &self.game,
                self.selected_cell,
                &sidebar_vm,
            ));
        });

        for action in actions {
            self.apply(action);
        }
    }
}
