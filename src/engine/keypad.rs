//! The calculator's button grid.
//!
//! Each button maps to exactly one [`Intent`]. Labels follow the on-screen
//! layout; [`Button::from_label`] also accepts ASCII aliases so buttons can
//! be pressed from a terminal.

use crate::engine::Intent;

/// A button on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// `0`-`9`
    Digit(u8),
    /// `.`
    Point,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`, types `*`
    Multiply,
    /// `÷`, types `/`
    Divide,
    /// `⌫`
    Backspace,
    /// `C`
    Clear,
    /// `±`
    Negate,
    /// `%`
    Percent,
    /// `√`
    SquareRoot,
    /// `=`
    Equals,
    /// `MC`
    MemoryClear,
    /// `MR`
    MemoryRecall,
    /// `M+`
    MemoryAdd,
    /// `M-`
    MemorySubtract,
}

/// Rows of the keypad, top to bottom.
pub const KEYPAD: [&[Button]; 8] = [
    &[
        Button::MemoryClear,
        Button::MemoryRecall,
        Button::MemoryAdd,
        Button::MemorySubtract,
    ],
    &[
        Button::OpenParen,
        Button::CloseParen,
        Button::Backspace,
        Button::Clear,
    ],
    &[Button::Digit(1), Button::Digit(2), Button::Digit(3)],
    &[Button::Digit(4), Button::Digit(5), Button::Digit(6)],
    &[Button::Digit(7), Button::Digit(8), Button::Digit(9)],
    &[Button::Digit(0), Button::Point],
    &[
        Button::Add,
        Button::Subtract,
        Button::Multiply,
        Button::Divide,
    ],
    &[
        Button::Negate,
        Button::Percent,
        Button::SquareRoot,
        Button::Equals,
    ],
];

impl Button {
    /// On-screen label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => digit_label(d),
            Self::Point => ".",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Backspace => "⌫",
            Self::Clear => "C",
            Self::Negate => "±",
            Self::Percent => "%",
            Self::SquareRoot => "√",
            Self::Equals => "=",
            Self::MemoryClear => "MC",
            Self::MemoryRecall => "MR",
            Self::MemoryAdd => "M+",
            Self::MemorySubtract => "M-",
        }
    }

    /// The intent a press produces.
    #[must_use]
    pub fn intent(self) -> Intent {
        match self {
            Self::Digit(d) => Intent::append(digit_label(d)),
            Self::Point => Intent::append("."),
            Self::OpenParen => Intent::append("("),
            Self::CloseParen => Intent::append(")"),
            Self::Add => Intent::append("+"),
            Self::Subtract => Intent::append("-"),
            Self::Multiply => Intent::append("*"),
            Self::Divide => Intent::append("/"),
            Self::Backspace => Intent::Backspace,
            Self::Clear => Intent::Clear,
            Self::Negate => Intent::Negate,
            Self::Percent => Intent::Percentage,
            Self::SquareRoot => Intent::SquareRoot,
            Self::Equals => Intent::Evaluate,
            Self::MemoryClear => Intent::MemoryClear,
            Self::MemoryRecall => Intent::MemoryRecall,
            Self::MemoryAdd => Intent::MemoryAdd,
            Self::MemorySubtract => Intent::MemorySubtract,
        }
    }

    /// Looks up a button by label or alias, case-insensitively.
    ///
    /// Single typeable characters other than `%` are not buttons here;
    /// the terminal front end types them through the keyboard mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskcalc::engine::Button;
    ///
    /// assert_eq!(Button::from_label("sqrt"), Some(Button::SquareRoot));
    /// assert_eq!(Button::from_label("M+"), Some(Button::MemoryAdd));
    /// assert_eq!(Button::from_label("×"), Some(Button::Multiply));
    /// assert_eq!(Button::from_label("7"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let button = match label.to_lowercase().as_str() {
            "mc" => Self::MemoryClear,
            "mr" => Self::MemoryRecall,
            "m+" => Self::MemoryAdd,
            "m-" => Self::MemorySubtract,
            "c" | "clear" | "esc" => Self::Clear,
            "⌫" | "bs" | "back" | "backspace" => Self::Backspace,
            "±" | "neg" | "+/-" | "negate" => Self::Negate,
            "%" | "pct" | "percent" => Self::Percent,
            "√" | "sqrt" => Self::SquareRoot,
            "=" | "eq" | "enter" => Self::Equals,
            "×" => Self::Multiply,
            "÷" => Self::Divide,
            _ => return None,
        };
        Some(button)
    }
}

const fn digit_label(digit: u8) -> &'static str {
    match digit {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        _ => "9",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_buttons() -> impl Iterator<Item = Button> {
        KEYPAD.iter().flat_map(|row| row.iter().copied())
    }

    #[test]
    fn test_keypad_has_every_button_once() {
        let buttons: Vec<_> = all_buttons().collect();
        assert_eq!(buttons.len(), 27);
        for (i, a) in buttons.iter().enumerate() {
            assert!(!buttons[i + 1..].contains(a), "{a:?} appears twice");
        }
    }

    #[test]
    fn test_digit_buttons_append_their_digit() {
        for d in 0..=9 {
            assert_eq!(Button::Digit(d).intent(), Intent::append(d.to_string()));
        }
    }

    #[test]
    fn test_operator_symbols_type_ascii() {
        assert_eq!(Button::Multiply.intent(), Intent::append("*"));
        assert_eq!(Button::Divide.intent(), Intent::append("/"));
        assert_eq!(Button::Multiply.label(), "×");
    }

    #[test]
    fn test_labels_round_trip_for_named_buttons() {
        for button in all_buttons() {
            if let Some(found) = Button::from_label(button.label()) {
                assert_eq!(found, button);
            }
        }
        assert_eq!(Button::from_label("mc"), Some(Button::MemoryClear));
        assert_eq!(Button::from_label("Back"), Some(Button::Backspace));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Button::from_label("sin"), None);
        assert_eq!(Button::from_label("+"), None);
    }
}
