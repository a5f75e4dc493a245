use rand::TryRngCore;
use rand::rngs::OsRng;
use uuid::Builder;

use crate::error::RandomSourceError;

/// Генерирует случайный идентификатор формата 8-4-4-4-12 (lowercase hex).
///
/// В байте 6 выставляется версия 4, в байте 8 — вариант `10xx`.
/// Если ОС не отдала случайные байты, идентификатор всё равно строится
/// из нулевого буфера (с теми же битами версии и варианта).
pub fn gen_uuid() -> String {
    let mut b = [0u8; 16];
    if let Err(e) = fill_random(&mut b) {
        log::warn!("{e}; generating identifier from zeroed buffer");
        b = [0u8; 16];
    }
    format_uuid(b)
}

fn fill_random(buf: &mut [u8]) -> Result<(), RandomSourceError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| RandomSourceError(e.to_string()))
}

fn format_uuid(b: [u8; 16]) -> String {
    // Builder выставляет версию 4 и вариант RFC 4122
    Builder::from_random_bytes(b)
        .into_uuid()
        .hyphenated()
        .to_string()
}
