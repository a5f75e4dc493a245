/// Делит строку по разделителю, не заходя внутрь групп `[]`, `{}` и `()`.
///
/// Правила:
/// - пустая строка -> пустой список
/// - пустой разделитель -> вся строка одним элементом
/// - используется только первый символ `sep`
/// - три счётчика скобок независимы, лишние закрывающие скобки игнорируются
/// - последний сегмент (возможно пустой) добавляется всегда
///
/// ```rust
/// use esl_core::split::split_ignore_groups;
///
/// assert_eq!(split_ignore_groups("a,[b,c],d", ","), vec!["a", "[b,c]", "d"]);
/// ```
pub fn split_ignore_groups<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if s.is_empty() {
        return Vec::new();
    }
    let Some(sep) = sep.chars().next() else {
        return vec![s];
    };

    let mut out = Vec::new();
    let mut start = 0;
    let (mut square, mut curly, mut round) = (0usize, 0usize, 0usize);

    for (i, ch) in s.char_indices() {
        // разделитель проверяем раньше скобок
        if ch == sep && square == 0 && curly == 0 && round == 0 {
            out.push(&s[start..i]);
            start = i + ch.len_utf8();
            continue;
        }
        match ch {
            '[' => square += 1,
            ']' => square = square.saturating_sub(1),
            '{' => curly += 1,
            '}' => curly = curly.saturating_sub(1),
            '(' => round += 1,
            ')' => round = round.saturating_sub(1),
            _ => {}
        }
    }

    out.push(&s[start..]);
    out
}
