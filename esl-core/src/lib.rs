//! # esl-core
//!
//! Разбор текстового протокола event socket (строки `Name: value`,
//! тело события после пустой строки, табличные ответы `show channels`)
//! и мелкие утилиты для слоя соединения.
//!
//! Этот крейт содержит:
//!
//! - [`event`] — разбор кадра события с телом
//! - [`headers`] — разбор отдельных строк, заголовки с фильтром, поиск одного заголовка
//! - [`channels`] — разбор таблицы каналов
//! - [`split`] — деление строки с учётом скобочных групп
//! - [`decode`] — percent-декодирование значений
//! - [`id`] — генерация случайных идентификаторов
//! - [`backoff`] — задержки переподключения по Фибоначчи
//! - [`logger`] — минимальный логгер-возможность и его реализации
//! - [`error`] — типы ошибок
//!
//! ## Пример: кадр события
//!
//! ```rust
//! use esl_core::event::event_to_map;
//! use esl_core::EVENT_BODY_TAG;
//!
//! let ev = event_to_map("Name: John\nAge: 30\n\nHello\nWorld");
//! assert_eq!(ev["Name"], "John");
//! assert_eq!(ev["Age"], "30");
//! assert_eq!(ev[EVENT_BODY_TAG], "Hello\nWorld");
//! ```
//!
//! ## Пример: таблица каналов
//!
//! ```rust
//! use esl_core::channels::map_chan_data;
//!
//! let block = "uuid,name,application_data\nu1,n1,bridge(a,b)\n\n1 total.\n\n";
//! let table = map_chan_data(block);
//! assert_eq!(table.len(), 1);
//! assert_eq!(table[0]["application_data"], "bridge(a,b)");
//! ```
//!
//! ## Пример: один заголовок
//!
//! ```rust
//! use esl_core::headers::header_value;
//!
//! let hdrs = "Content-Type: command/reply\nReply-Text: +OK%20accepted\n";
//! assert_eq!(header_value(hdrs, "Reply-Text"), "+OK accepted");
//! assert_eq!(header_value(hdrs, "Job-UUID"), "");
//! ```
//!
//! ## Дизайн
//!
//! Все функции разбора чистые: не хранят состояния между вызовами и никогда
//! не возвращают ошибок. Кривой ввод даёт частичный или пустой результат.
//! Единственный объект с состоянием — [`backoff::FibBackoff`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Задержки переподключения.
pub mod backoff;

/// Таблица каналов (`show channels`).
pub mod channels;

/// Percent-декодирование значений заголовков.
pub mod decode;

/// Ошибки `esl-core`.
pub mod error;

/// Кадр события.
pub mod event;

/// Строки заголовков.
pub mod headers;

/// Случайные идентификаторы.
pub mod id;

/// Логгер-возможность.
pub mod logger;

/// Деление строк с учётом групп.
pub mod split;

/// Общие константы
mod constants;
pub use constants::{
    CHANNEL_TRAILER_LINES, DEFAULT_BACKOFF_MAX, DEFAULT_BACKOFF_UNIT, EVENT_BODY_TAG,
    HEADER_SEPARATOR, MIN_CHANNEL_BLOCK_LINES,
};

// --- Re-exports (публичный фасад API) ---

pub use crate::backoff::FibBackoff;
pub use crate::channels::{ChannelRow, ChannelTable, map_chan_data};
pub use crate::decode::url_decode;
pub use crate::error::{LogError, RandomSourceError};
pub use crate::event::{Event, event_body, event_to_map};
pub use crate::headers::{fs_event_str_to_map, header_value, parse_header_line};
pub use crate::id::gen_uuid;
pub use crate::logger::{EventLogger, LogFacadeLogger, NopLogger};
pub use crate::split::split_ignore_groups;
