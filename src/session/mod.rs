//! The interactive read-compute-print-log loop.
//!
//! Runs over an injected console, so the binary drives real
//! stdin/stdout while tests script entire sessions from buffers.

use std::io::{self, BufRead, Write};

use crate::calc::{self, Operation};
use crate::config::Config;
use crate::history::HistoryLog;
use crate::input::Console;
use crate::ui;

/// Run one calculator session until the user selects Exit.
///
/// Cycle: menu → operation choice → operand reads → compute → report.
/// Defined results are printed and appended to the history log; the NAN
/// failure marker prints a generic error and logs nothing. Returns when
/// Exit is chosen, or with an `io::Error` if the console fails (EOF on
/// stdin included).
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> io::Result<()> {
    let history = HistoryLog::new(config.history.path.clone());
    let mut console = Console::new(input, output);

    ui::apply_locale(&config.ui.locale);
    ui::print_welcome(console.writer())?;

    loop {
        ui::print_menu(console.writer())?;
        let op = console.read_operation()?;

        if op == Operation::Exit {
            ui::print_farewell(console.writer(), history.path())?;
            return Ok(());
        }

        // Unused operands stay at 0.0 (SquareRoot reads only one).
        let mut operands = [0.0_f64; 2];
        for (i, prompt) in op.operand_prompts().iter().enumerate() {
            operands[i] = console.read_number(prompt)?;
        }
        let [a, b] = operands;

        let result = calc::calculate(op, a, b);
        if result.is_nan() {
            ui::print_calc_error(console.writer())?;
        } else {
            ui::print_result(console.writer(), result)?;
            history.append(op, a, b, result);
        }
    }
}
