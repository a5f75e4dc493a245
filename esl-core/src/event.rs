use std::collections::HashMap;

use crate::constants::EVENT_BODY_TAG;
use crate::headers::parse_header_line;

/// Разобранное событие: имя заголовка -> декодированное значение.
/// Тело (если есть) лежит под [`EVENT_BODY_TAG`].
pub type Event = HashMap<String, String>;

/// Разбирает кадр события: заголовки до пустой строки, дальше тело.
///
/// - строки без `": "` пропускаются
/// - повторный заголовок перезаписывает прежний
/// - первая пустая строка отделяет тело; пустые строки перед телом пропускаются,
///   остаток склеивается через `\n` и после этого разбор прекращается
/// - если после разделителя нет ни одной непустой строки, ключа тела нет
pub fn event_to_map(frame: &str) -> Event {
    let mut event = Event::new();
    let mut in_body = false;
    let lines: Vec<&str> = frame.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            in_body = true;
            continue;
        }
        if in_body {
            event.insert(EVENT_BODY_TAG.to_string(), lines[i..].join("\n"));
            return event;
        }
        match parse_header_line(line) {
            Some((name, value)) => {
                event.insert(name, value);
            }
            None => log::trace!("skipping malformed header line: {line:?}"),
        }
    }

    event
}

/// Тело события, если оно было
pub fn event_body(event: &Event) -> Option<&str> {
    event.get(EVENT_BODY_TAG).map(String::as_str)
}
