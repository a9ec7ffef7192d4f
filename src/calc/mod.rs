//! Calculation engine: the operation set and the pure arithmetic.
//!
//! `Operation` is the single source of truth — the compute dispatch, the
//! history rendering, the help labels, and the operand prompts are
//! adjacent `match` blocks over the same enum, so the menu and the log
//! can never drift apart.

use strum::{EnumIter, FromRepr};

/// A calculator action, selected by its menu number (1–9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter)]
#[repr(u8)]
pub enum Operation {
    Add = 1,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Modulus,
    Percentage,
    Exit,
}

impl Operation {
    /// Map a menu number to an operation. `None` outside 1–9.
    pub fn from_menu_choice(choice: u8) -> Option<Self> {
        Self::from_repr(choice)
    }

    /// The number shown in the menu and help.
    pub fn menu_number(self) -> u8 {
        self as u8
    }

    /// Russian name used in the help listing.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Сложение",
            Operation::Subtract => "Вычитание",
            Operation::Multiply => "Умножение",
            Operation::Divide => "Деление",
            Operation::Power => "Возведение в степень",
            Operation::SquareRoot => "Квадратный корень",
            Operation::Modulus => "Остаток от деления",
            Operation::Percentage => "Процент",
            Operation::Exit => "Выход",
        }
    }

    /// Symbolic form shown next to the label, empty for Exit.
    pub fn signature(self) -> &'static str {
        match self {
            Operation::Add => "a + b",
            Operation::Subtract => "a - b",
            Operation::Multiply => "a * b",
            Operation::Divide => "a / b",
            Operation::Power => "a^b",
            Operation::SquareRoot => "sqrt(a)",
            Operation::Modulus => "a % b",
            Operation::Percentage => "b% от a",
            Operation::Exit => "",
        }
    }

    /// Input prompts for this operation, in reading order.
    ///
    /// SquareRoot takes a single number; Percentage takes the number and
    /// then the rate; Exit takes nothing.
    pub fn operand_prompts(self) -> &'static [&'static str] {
        match self {
            Operation::SquareRoot => &["Введите число: "],
            Operation::Percentage => &["Введите число: ", "Введите процент: "],
            Operation::Exit => &[],
            _ => &["Введите первое число: ", "Введите второе число: "],
        }
    }
}

/// Compute the result of an operation. Pure; no side effects.
///
/// Mathematically undefined cases (division by zero, square root of a
/// negative) return `f64::NAN` rather than panicking. `b` is ignored by
/// SquareRoot and callers pass 0.0 there.
pub fn calculate(op: Operation, a: f64, b: f64) -> f64 {
    match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
        Operation::Power => a.powf(b),
        Operation::SquareRoot => {
            if a >= 0.0 {
                a.sqrt()
            } else {
                f64::NAN
            }
        }
        Operation::Modulus => a % b,
        Operation::Percentage => a * b / 100.0,
        Operation::Exit => f64::NAN,
    }
}

/// Render the human-readable expression recorded in the history log.
///
/// `None` for Exit, which is never logged. Percentage deliberately
/// reverses the operand order ("5% от 200") — this matches the recorded
/// format consumers of the log already parse.
pub fn render_expression(op: Operation, a: f64, b: f64) -> Option<String> {
    let expr = match op {
        Operation::Add => format!("{a} + {b}"),
        Operation::Subtract => format!("{a} - {b}"),
        Operation::Multiply => format!("{a} * {b}"),
        Operation::Divide => format!("{a} / {b}"),
        Operation::Power => format!("{a} ^ {b}"),
        Operation::SquareRoot => format!("sqrt({a})"),
        Operation::Modulus => format!("{a} % {b}"),
        Operation::Percentage => format!("{b}% от {a}"),
        Operation::Exit => return None,
    };
    Some(expr)
}
