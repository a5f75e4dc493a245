/// Шаг backoff по умолчанию, мс
pub(crate) const BACKOFF_UNIT_MS: u64 = 1000;

/// Потолок backoff по умолчанию, мс (0 — без потолка)
pub(crate) const BACKOFF_MAX_MS: u64 = 30_000;

/// Сколько задержек печатать по умолчанию
pub(crate) const BACKOFF_COUNT: usize = 10;

/// Разделитель для `split` по умолчанию
pub(crate) const SPLIT_SEPARATOR: &str = ",";
