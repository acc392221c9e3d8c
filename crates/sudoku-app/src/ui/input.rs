//! Keyboard handling.

use eframe::egui::{InputState, Key};
use sudoku_core::Digit;

use crate::ui::{Action, MoveDirection};

const DIGIT_KEYS: [(Key, Digit); 9] = [
    (Key::Num1, Digit::D1),
    (Key::Num2, Digit::D2),
    (Key::Num3, Digit::D3),
    (Key::Num4, Digit::D4),
    (Key::Num5, Digit::D5),
    (Key::Num6, Digit::D6),
    (Key::Num7, Digit::D7),
    (Key::Num8, Digit::D8),
    (Key::Num9, Digit::D9),
];

const MOVE_KEYS: [(Key, MoveDirection); 4] = [
    (Key::ArrowUp, MoveDirection::Up),
    (Key::ArrowDown, MoveDirection::Down),
    (Key::ArrowLeft, MoveDirection::Left),
    (Key::ArrowRight, MoveDirection::Right),
];

/// Translates pressed keys into actions.
///
/// Digits fill the selected cell, arrows move the selection, Delete and
/// Backspace clear the cell, Escape drops the selection, and Ctrl+N (Cmd+N
/// on macOS) starts a new game.
pub fn handle(i: &InputState) -> Vec<Action> {
    let mut actions = vec![];

    if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
        actions.push(Action::NewGame);
    }
    if i.key_pressed(Key::Escape) {
        actions.push(Action::ClearSelection);
    }
    for (key, direction) in MOVE_KEYS {
        if i.key_pressed(key) {
            actions.push(Action::MoveSelection(direction));
        }
    }
    if i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace) {
        actions.push(Action::RemoveDigit);
    }
    for (key, digit) in DIGIT_KEYS {
        if i.key_pressed(key) {
            actions.push(Action::SetDigit(digit));
        }
    }

    actions
}
