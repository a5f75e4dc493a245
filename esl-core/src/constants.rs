use std::time::Duration;

/// Зарезервированный ключ, под которым хранится тело события
pub const EVENT_BODY_TAG: &str = "EvBody";

/// Разделитель имени и значения заголовка
pub const HEADER_SEPARATOR: &str = ": ";

/// Число служебных строк в конце таблицы каналов (пустая строка, "N total.", пустая строка)
pub const CHANNEL_TRAILER_LINES: usize = 3;

/// Блок каналов из стольких строк (или меньше) считается пустым
pub const MIN_CHANNEL_BLOCK_LINES: usize = 5;

/// Шаг backoff по умолчанию
pub const DEFAULT_BACKOFF_UNIT: Duration = Duration::from_secs(1);

/// Потолок backoff по умолчанию
pub const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(30);
