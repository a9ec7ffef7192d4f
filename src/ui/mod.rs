//! Presenter: fixed Russian texts for the menu, help, and result lines.
//!
//! Every function writes to a caller-supplied handle, so the session and
//! the tests decide where the text lands. Styling is applied to whole
//! phrases, never to fragments, to keep the output greppable.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use strum::IntoEnumIterator;

use crate::calc::Operation;
use crate::constants::DEFAULT_LOCALE;

/// Greeting printed once at startup.
pub fn print_welcome(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{}", "Добро пожаловать в калькулятор!".bold())?;
    writeln!(w, "Введите '?' в меню для получения справки")
}

/// The two-column operation menu, ending with the selection prompt.
pub fn print_menu(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "=== КОНСОЛЬНЫЙ КАЛЬКУЛЯТОР ===".bold())?;
    writeln!(w, "1. Сложение\t\t5. Степень")?;
    writeln!(w, "2. Вычитание\t\t6. Корень (sqrt)")?;
    writeln!(w, "3. Умножение\t\t7. Остаток")?;
    writeln!(w, "4. Деление\t\t8. Процент")?;
    writeln!(w, "9. Выход\t\t?. Помощь (введите '?')")?;
    write!(w, "Выберите операцию: ")?;
    w.flush()
}

/// Help listing, one line per operation, generated from the enum.
pub fn print_help(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "Справка по операциям:".bold())?;
    for op in Operation::iter() {
        let sig = op.signature();
        if sig.is_empty() {
            writeln!(w, "{}. {}", op.menu_number(), op.label())?;
        } else {
            writeln!(w, "{}. {} ({})", op.menu_number(), op.label(), sig)?;
        }
    }
    writeln!(w)?;
    writeln!(
        w,
        "{}",
        "Для операций 6 и 8 нужно вводить только первое число!".yellow()
    )
}

/// Print a successful result.
pub fn print_result(w: &mut impl Write, result: f64) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", format!("Результат: {result}").green().bold())?;
    writeln!(w)
}

/// Generic error for a mathematically undefined calculation.
pub fn print_calc_error(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "Ошибка вычисления!".red().bold())?;
    writeln!(w)
}

/// Farewell message, pointing at the history file.
pub fn print_farewell(w: &mut impl Write, history_path: &Path) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "История сохранена в файле: {}",
        history_path.display().to_string().bold()
    )?;
    writeln!(w, "До свидания!")
}

/// Apply the configured locale, best-effort.
///
/// The message catalog is fixed Russian; unknown tags fall back to it.
/// Failure to apply a locale is never an error.
pub fn apply_locale(tag: &str) {
    match tag {
        "ru" | "ru-RU" | "ru_RU" => {}
        other => {
            log::debug!("unsupported locale {other:?}, using {DEFAULT_LOCALE}");
        }
    }
}
