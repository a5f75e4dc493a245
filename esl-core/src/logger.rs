use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::LogError;

/// Результат операции логгера
pub type LogResult = Result<(), LogError>;

/// Минимальный логгер, который передаётся слою соединения извне.
///
/// По одному методу на уровень важности (как у syslog) плюс `close`.
pub trait EventLogger: Send + Sync {
    /// Тревога: требуется немедленное действие
    fn alert(&self, msg: &str) -> LogResult;
    /// Критическое состояние
    fn crit(&self, msg: &str) -> LogResult;
    /// Отладочное сообщение
    fn debug(&self, msg: &str) -> LogResult;
    /// Система неработоспособна
    fn emerg(&self, msg: &str) -> LogResult;
    /// Ошибка
    fn err(&self, msg: &str) -> LogResult;
    /// Информационное сообщение
    fn info(&self, msg: &str) -> LogResult;
    /// Значимое, но штатное событие
    fn notice(&self, msg: &str) -> LogResult;
    /// Предупреждение
    fn warning(&self, msg: &str) -> LogResult;
    /// Закрыть логгер и сбросить буферы
    fn close(&self) -> LogResult;
}

/// Логгер, который ничего не делает. Используется по умолчанию.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLogger;

impl EventLogger for NopLogger {
    fn alert(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn crit(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn debug(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn emerg(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn err(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn info(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn notice(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn warning(&self, _: &str) -> LogResult {
        Ok(())
    }
    fn close(&self) -> LogResult {
        Ok(())
    }
}

/// Прокидывает сообщения в фасад `log`.
///
/// emerg/alert/crit/err -> `error!`, warning -> `warn!`,
/// notice/info -> `info!`, debug -> `debug!`.
/// После `close` все вызовы возвращают [`LogError::Closed`].
#[derive(Debug, Default)]
pub struct LogFacadeLogger {
    closed: AtomicBool,
}

impl LogFacadeLogger {
    /// Новый открытый логгер
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, level: log::Level, msg: &str) -> LogResult {
        if self.closed.load(Ordering::Acquire) {
            return Err(LogError::Closed);
        }
        log::log!(target: "esl", level, "{msg}");
        Ok(())
    }
}

impl EventLogger for LogFacadeLogger {
    fn alert(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Error, msg)
    }
    fn crit(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Error, msg)
    }
    fn debug(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Debug, msg)
    }
    fn emerg(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Error, msg)
    }
    fn err(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Error, msg)
    }
    fn info(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Info, msg)
    }
    fn notice(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Info, msg)
    }
    fn warning(&self, msg: &str) -> LogResult {
        self.emit(log::Level::Warn, msg)
    }

    fn close(&self) -> LogResult {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(LogError::Closed);
        }
        log::logger().flush();
        Ok(())
    }
}
