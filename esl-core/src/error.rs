use thiserror::Error;

/// Ошибки логгера-возможности ([`crate::logger::EventLogger`])
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Логгер уже закрыт
    #[error("logger is closed")]
    Closed,

    /// Приёмник сообщений отказал
    #[error("log sink failure: {0}")]
    Sink(String),
}

/// Ошибка источника случайных байт
#[derive(Debug, Error)]
#[error("random source failure: {0}")]
pub struct RandomSourceError(pub String);
