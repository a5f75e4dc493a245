use std::collections::HashMap;

use crate::constants::HEADER_SEPARATOR;
use crate::decode::url_decode;

/// Разбирает одну строку вида `Name: value`.
///
/// Делит по первому `": "`, у значения срезаются хвостовые `\r`/`\n` и пробелы
/// по краям, затем значение декодируется. Без `": "` возвращает `None`.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, raw) = line.split_once(HEADER_SEPARATOR)?;
    Some((name.to_string(), clean_value(raw)))
}

fn clean_value(raw: &str) -> String {
    url_decode(raw.trim_end_matches(['\r', '\n']).trim())
}

/// Заголовки события без обработки тела.
///
/// Каждая строка с `": "` даёт пару; имена из `exclude` пропускаются.
/// Пустой `exclude` — без фильтра. Повторный заголовок перезаписывает прежний.
pub fn fs_event_str_to_map<S: AsRef<str>>(text: &str, exclude: &[S]) -> HashMap<String, String> {
    let mut event = HashMap::new();

    for line in text.split('\n') {
        let Some((name, raw)) = line.split_once(HEADER_SEPARATOR) else {
            continue;
        };
        if exclude.iter().any(|h| h.as_ref() == name) {
            continue;
        }
        event.insert(name.to_string(), clean_value(raw));
    }

    event
}

/// Ищет значение заголовка `name` где угодно в блоке.
///
/// Поиск идёт по подстроке, без привязки к началу строки: имя, которое входит
/// в другое имя или в значение, может дать ложное совпадение.
/// Если заголовка нет или в найденной строке нет `": "`, возвращает пустую строку.
pub fn header_value(block: &str, name: &str) -> String {
    let Some(start) = block.find(name) else {
        return String::new();
    };
    let rest = &block[start..];
    let line = match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    };

    match line.split_once(HEADER_SEPARATOR) {
        Some((_, raw)) => clean_value(raw),
        None => String::new(),
    }
}
