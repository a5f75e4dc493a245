use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use esl_core::{
    EventLogger, FibBackoff, event_body, event_to_map, fs_event_str_to_map, gen_uuid,
    header_value, map_chan_data, split_ignore_groups, url_decode,
};

use crate::cli::Command;

/// Выполняет команду над входным блоком и пишет результат в `out`.
///
/// `block` пустой для команд, которым вход не нужен.
pub(crate) fn run(
    cmd: &Command,
    block: &str,
    logger: &dyn EventLogger,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        Command::Event => {
            let ev = event_to_map(block);
            diag(
                logger.debug(&format!(
                    "event: {} headers, body: {}",
                    ev.len() - usize::from(event_body(&ev).is_some()),
                    event_body(&ev).map_or(0, str::len)
                )),
            );
            write_json(out, &sorted(&ev))?;
        }
        Command::Headers { exclude } => {
            let ev = fs_event_str_to_map(block, exclude.as_slice());
            diag(logger.debug(&format!("headers: {} kept, {} excluded names", ev.len(), exclude.len())));
            write_json(out, &sorted(&ev))?;
        }
        Command::Channels => {
            let table = map_chan_data(block);
            if table.is_empty() {
                diag(logger.notice("channel table is empty"));
            }
            let rows: Vec<_> = table.iter().map(sorted).collect();
            write_json(out, &rows)?;
        }
        Command::Header { name } => {
            let value = header_value(block, name);
            if value.is_empty() {
                diag(logger.info(&format!("header {name:?} not found")));
            }
            writeln!(out, "{value}")?;
        }
        Command::Split { sep } => {
            let rows: Vec<Vec<&str>> = block
                .lines()
                .map(|line| split_ignore_groups(line, sep))
                .collect();
            write_json(out, &rows)?;
        }
        Command::Decode => {
            for line in block.lines() {
                writeln!(out, "{}", url_decode(line))?;
            }
        }
        Command::Uuid { count } => {
            for _ in 0..*count {
                writeln!(out, "{}", gen_uuid())?;
            }
        }
        Command::Backoff {
            unit_ms,
            max_ms,
            count,
        } => {
            let backoff = FibBackoff::new(
                Duration::from_millis(*unit_ms),
                Duration::from_millis(*max_ms),
            );
            for delay in backoff.take(*count) {
                writeln!(out, "{}", delay.as_millis())?;
            }
        }
    }

    out.flush().context("flush output")?;
    Ok(())
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("write json")?;
    writeln!(out)?;
    Ok(())
}

// отказ логгера не должен ронять команду
fn diag(res: esl_core::logger::LogResult) {
    if let Err(e) = res {
        log::debug!("diagnostic logger failed: {e}");
    }
}
