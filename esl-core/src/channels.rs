use std::collections::HashMap;

use crate::constants::{CHANNEL_TRAILER_LINES, MIN_CHANNEL_BLOCK_LINES};
use crate::split::split_ignore_groups;

/// Строка таблицы каналов: колонка -> значение
pub type ChannelRow = HashMap<String, String>;

/// Строки таблицы в исходном порядке
pub type ChannelTable = Vec<ChannelRow>;

/// Разбирает ответ вида `show channels`:
/// строка заголовков, строки данных и три служебные строки в конце.
///
/// Заголовки делятся обычной запятой, строки данных — через
/// [`split_ignore_groups`], так что запятые внутри `[]`, `{}`, `()` не рвут ячейку.
/// Строка, у которой число полей не совпадает с числом заголовков, пропускается.
pub fn map_chan_data(block: &str) -> ChannelTable {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() <= MIN_CHANNEL_BLOCK_LINES {
        return ChannelTable::new();
    }

    let headers: Vec<&str> = lines[0].split(',').collect();
    let data = &lines[1..lines.len() - CHANNEL_TRAILER_LINES];

    let mut table = ChannelTable::with_capacity(data.len());
    for line in data {
        let cells = split_ignore_groups(line, ",");
        if cells.len() != headers.len() {
            log::trace!(
                "skipping channel row with {} fields (expected {}): {line:?}",
                cells.len(),
                headers.len()
            );
            continue;
        }

        let row = headers
            .iter()
            .zip(cells)
            .map(|(h, c)| (h.to_string(), c.to_string()))
            .collect::<ChannelRow>();
        table.push(row);
    }

    table
}
