use std::path::Path;

use crate::division::error::{ErrorKind, ToolError};

/// Language used for console messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    /// Prompt shown before the dividend is read.
    pub fn first_prompt(self) -> &'static str {
        match self {
            Locale::English => "Enter the first number: ",
            Locale::Russian => "Введите первое число: ",
        }
    }

    /// Prompt shown before the divisor is read.
    pub fn second_prompt(self) -> &'static str {
        match self {
            Locale::English => "Enter the second number: ",
            Locale::Russian => "Введите второе число: ",
        }
    }

    pub fn result_line(self, quotient: i32) -> String {
        match self {
            Locale::English => format!("Division result: {quotient}"),
            Locale::Russian => format!("Результат деления: {quotient}"),
        }
    }

    pub fn saved_line(self, path: &Path) -> String {
        match self {
            Locale::English => format!("Result successfully written to file {}.", path.display()),
            Locale::Russian => format!("Результат успешно записан в файл {}.", path.display()),
        }
    }

    /// Formats the single line reported for a failed run.
    pub fn error_line(self, error: &ToolError) -> String {
        match (self, error.kind()) {
            (Locale::English, ErrorKind::InvalidFormat) => {
                format!("Error: please enter valid numbers. {error}")
            }
            (Locale::English, ErrorKind::DivisionByZero) => {
                format!("Error: division by zero. {error}")
            }
            (Locale::English, ErrorKind::IoFailure) => format!("Error writing to file: {error}"),
            (Locale::English, ErrorKind::Unexpected) => {
                format!("An unexpected error occurred: {error}")
            }
            (Locale::Russian, ErrorKind::InvalidFormat) => {
                format!("Ошибка: Введите корректные числа. {error}")
            }
            (Locale::Russian, ErrorKind::DivisionByZero) => {
                format!("Ошибка: Деление на ноль. {error}")
            }
            (Locale::Russian, ErrorKind::IoFailure) => format!("Ошибка записи в файл: {error}"),
            (Locale::Russian, ErrorKind::Unexpected) => {
                format!("Произошла непредвиденная ошибка: {error}")
            }
        }
    }

    pub fn finished_line(self) -> &'static str {
        match self {
            Locale::English => "Program finished.",
            Locale::Russian => "Программа завершена.",
        }
    }
}
