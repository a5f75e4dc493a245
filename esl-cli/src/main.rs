//! Точка входа `esl-cli`.
//!
//! Жизненный цикл:
//! - парсинг CLI и валидация аргументов
//! - выбор диагностического логгера (`log` или no-op при `--quiet`)
//! - чтение входного блока из файла или stdin (если команде он нужен)
//! - разбор через `esl-core` и печать результата в stdout

mod cli;
mod commands;
mod config;
mod input;

use std::io;

use clap::Parser;
use esl_core::{EventLogger, LogFacadeLogger, NopLogger};
use log::{debug, warn};

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug/trace
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let logger: Box<dyn EventLogger> = if args.quiet {
        Box::new(NopLogger)
    } else {
        Box::new(LogFacadeLogger::new())
    };

    let block = if args.command.reads_input() {
        input::load_input(args.input.as_deref())?
    } else {
        String::new()
    };

    debug!("running {:?} on {} bytes of input", args.command, block.len());

    let mut stdout = io::stdout().lock();
    let result = commands::run(&args.command, &block, logger.as_ref(), &mut stdout);

    if let Err(e) = logger.close() {
        warn!("failed to close logger: {e}");
    }

    result
}
