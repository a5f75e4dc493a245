use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::config;

/// ESL CLI - разбор текстовых блоков event socket.
///
/// Читает блок из файла (--input) или stdin и печатает результат:
/// словари и таблицы — JSON, одиночные значения — текстом.
#[derive(Parser, Debug, Clone)]
#[command(name = "esl-cli", version, about)]
pub(crate) struct Args {
    /// Файл с входным блоком. Без него читается stdin
    #[arg(long, global = true)]
    pub(crate) input: Option<PathBuf>,

    /// Не писать диагностику через логгер
    #[arg(long, global = true)]
    pub(crate) quiet: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Кадр события: заголовки + тело (EvBody)
    Event,

    /// Только заголовки, с исключением имён
    Headers {
        /// Имя заголовка, который надо выкинуть (можно несколько раз)
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Таблица каналов (вывод `show channels`)
    Channels,

    /// Значение одного заголовка
    Header {
        /// Имя заголовка
        name: String,
    },

    /// Деление каждой строки с учётом скобочных групп
    Split {
        /// Разделитель (используется первый символ)
        #[arg(long, default_value = config::SPLIT_SEPARATOR)]
        sep: String,
    },

    /// Percent-декодирование каждой строки
    Decode,

    /// Случайные идентификаторы
    Uuid {
        /// Сколько идентификаторов напечатать
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Задержки переподключения, мс
    Backoff {
        /// Шаг, мс
        #[arg(long, default_value_t = config::BACKOFF_UNIT_MS)]
        unit_ms: u64,

        /// Потолок, мс (0 — без потолка)
        #[arg(long, default_value_t = config::BACKOFF_MAX_MS)]
        max_ms: u64,

        /// Сколько значений напечатать
        #[arg(long, default_value_t = config::BACKOFF_COUNT)]
        count: usize,
    },
}

impl Command {
    /// Нужен ли команде входной блок
    pub(crate) fn reads_input(&self) -> bool {
        !matches!(self, Command::Uuid { .. } | Command::Backoff { .. })
    }
}

impl Args {
    /// Валидация аргументов (файл существует, параметры в допустимых пределах)
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input {
            if !self.command.reads_input() {
                bail!("--input is not used by this command");
            }
            if !path.is_file() {
                bail!("--input must point to a file: {:?}", path);
            }
        }

        match &self.command {
            Command::Header { name } if name.trim().is_empty() => {
                bail!("header name is empty");
            }
            Command::Backoff { unit_ms: 0, .. } => {
                bail!("--unit-ms must be greater than zero");
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_with_repeated_exclude() {
        let args = Args::try_parse_from([
            "esl-cli", "headers", "--exclude", "Core-UUID", "--exclude", "Event-Date-GMT",
        ])
        .unwrap();
        match args.command {
            Command::Headers { exclude } => assert_eq!(exclude, vec!["Core-UUID", "Event-Date-GMT"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn backoff_defaults_come_from_config() {
        let args = Args::try_parse_from(["esl-cli", "backoff"]).unwrap();
        match args.command {
            Command::Backoff { unit_ms, max_ms, count } => {
                assert_eq!(unit_ms, config::BACKOFF_UNIT_MS);
                assert_eq!(max_ms, config::BACKOFF_MAX_MS);
                assert_eq!(count, config::BACKOFF_COUNT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_zero_unit() {
        let args = Args::try_parse_from(["esl-cli", "backoff", "--unit-ms", "0"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_input_for_generators() {
        let args = Args::try_parse_from(["esl-cli", "uuid", "--input", "Cargo.toml"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_input_file() {
        let args =
            Args::try_parse_from(["esl-cli", "event", "--input", "/definitely/not/here.txt"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_header_name() {
        let args = Args::try_parse_from(["esl-cli", "header", " "]).unwrap();
        assert!(args.validate().is_err());
    }
}
