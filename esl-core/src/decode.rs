use percent_encoding::percent_decode_str;

/// Декодирует percent-encoded значение заголовка.
///
/// Если в строке битая escape-последовательность (`%` без двух hex-цифр)
/// или результат не является валидным UTF-8, возвращается исходная строка.
/// `+` остаётся как есть.
pub fn url_decode(value: &str) -> String {
    if !value.contains('%') {
        return value.to_string();
    }
    if !escapes_well_formed(value) {
        log::trace!("malformed percent escape, keeping raw value: {value:?}");
        return value.to_string();
    }

    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::trace!("decoded value is not utf-8 ({e}), keeping raw value: {value:?}");
            value.to_string()
        }
    }
}

fn escapes_well_formed(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let ok = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !ok {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(url_decode("2024-01-02%2012%3A30%3A00"), "2024-01-02 12:30:00");
        assert_eq!(url_decode("sofia%2Finternal%2F1000%40example.com"), "sofia/internal/1000@example.com");
        assert_eq!(url_decode("%D0%BF%D1%80%D0%B8%D0%B2%D0%B5%D1%82"), "привет");
    }

    #[test]
    fn plain_values_are_unchanged() {
        for s in ["", "CHANNEL_CREATE", "+15551234", "a b c", "value_with-dashes.and.dots"] {
            assert_eq!(url_decode(s), s);
        }
    }

    #[test]
    fn plus_is_kept_literal() {
        assert_eq!(url_decode("a+b"), "a+b");
        assert_eq!(url_decode("1+1%3D2"), "1+1=2");
    }

    #[test]
    fn decode_is_idempotent_on_plain_output() {
        let once = url_decode("hello%20world");
        assert_eq!(url_decode(&once), once);
    }

    #[test]
    fn malformed_escapes_fall_back_to_raw() {
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
        assert_eq!(url_decode("a%2"), "a%2");
        assert_eq!(url_decode("ok%20then%g1"), "ok%20then%g1");
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw() {
        assert_eq!(url_decode("%FF%FE"), "%FF%FE");
    }
}
