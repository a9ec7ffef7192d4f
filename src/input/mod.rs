//! Console input: retry-until-valid reads over injectable I/O.
//!
//! `Console` owns a `BufRead` source and a `Write` sink so the session
//! can run against real stdin/stdout in the binary and against scripted
//! buffers in tests — the same swap-the-backend doctrine the config
//! layer uses for environment variables.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::calc::Operation;
use crate::constants::HELP_TOKEN;
use crate::ui;

/// Blocking line-oriented console over generic reader/writer halves.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output half, for presenter calls between reads.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line; end-of-stream is an unrecoverable external
    /// condition and surfaces as `UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "ввод завершён (конец потока)",
            ));
        }
        Ok(line)
    }

    /// Prompt until the user enters a parsable number.
    ///
    /// A decimal comma is accepted and treated as a decimal point. On a
    /// malformed entry the rest of the line is discarded, an error is
    /// printed and the prompt repeats. Blank lines repeat the prompt
    /// silently.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            match token.replace(',', ".").parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(
                        self.output,
                        "{}",
                        "Ошибка: введите корректное число".red()
                    )?;
                }
            }
        }
    }

    /// Read a menu selection.
    ///
    /// `?` prints the help text and the menu again, then keeps reading.
    /// Any other token must be an integer in 1–9; otherwise an error is
    /// printed inline and reading continues. Never returns an invalid
    /// operation.
    pub fn read_operation(&mut self) -> io::Result<Operation> {
        loop {
            let line = self.read_line()?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            if token == HELP_TOKEN {
                ui::print_help(&mut self.output)?;
                ui::print_menu(&mut self.output)?;
                continue;
            }

            if let Some(op) = token
                .parse::<u8>()
                .ok()
                .and_then(Operation::from_menu_choice)
            {
                return Ok(op);
            }

            write!(
                self.output,
                "{}",
                "Неверный ввод. Выберите 1-9 или '?' для помощи: ".red()
            )?;
            self.output.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    #[test]
    fn read_number_accepts_valid_input() {
        let mut c = console("3.5\n");
        assert_eq!(c.read_number("n: ").unwrap(), 3.5);
    }

    #[test]
    fn read_number_recovers_from_garbage() {
        let mut c = console("abc\n3.5\n");
        assert_eq!(c.read_number("n: ").unwrap(), 3.5);

        let out = output_of(c);
        let errors = out.matches("Ошибка: введите корректное число").count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn read_number_accepts_decimal_comma() {
        let mut c = console("3,5\n");
        assert_eq!(c.read_number("n: ").unwrap(), 3.5);
    }

    #[test]
    fn read_number_skips_blank_lines() {
        let mut c = console("\n\n42\n");
        assert_eq!(c.read_number("n: ").unwrap(), 42.0);
        let out = output_of(c);
        assert!(!out.contains("Ошибка"));
    }

    #[test]
    fn read_number_negative_and_integer_forms() {
        let mut c = console("-7\n");
        assert_eq!(c.read_number("n: ").unwrap(), -7.0);
    }

    #[test]
    fn read_number_eof_is_an_error() {
        let mut c = console("");
        let err = c.read_number("n: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_operation_maps_menu_numbers() {
        let mut c = console("4\n");
        assert_eq!(c.read_operation().unwrap(), Operation::Divide);
    }

    #[test]
    fn read_operation_help_then_choice() {
        let mut c = console("?\n2\n");
        assert_eq!(c.read_operation().unwrap(), Operation::Subtract);

        let out = output_of(c);
        let help_shown = out.matches("Справка по операциям").count();
        assert_eq!(help_shown, 1);
        // Help re-prints the menu before reading again.
        assert!(out.contains("КОНСОЛЬНЫЙ КАЛЬКУЛЯТОР"));
    }

    #[test]
    fn read_operation_rejects_out_of_range() {
        let mut c = console("0\n10\n99\n1\n");
        assert_eq!(c.read_operation().unwrap(), Operation::Add);

        let out = output_of(c);
        assert_eq!(out.matches("Неверный ввод").count(), 3);
    }

    #[test]
    fn read_operation_rejects_non_numeric() {
        let mut c = console("exit\n9\n");
        assert_eq!(c.read_operation().unwrap(), Operation::Exit);
        assert!(output_of(c).contains("Неверный ввод"));
    }
}
