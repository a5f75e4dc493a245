use std::time::Duration;

use crate::constants::{DEFAULT_BACKOFF_MAX, DEFAULT_BACKOFF_UNIT};

/// Задержки переподключения по Фибоначчи: `unit * 1, 1, 2, 3, 5, 8, ...`
///
/// Если задан потолок, значение выше него заменяется потолком, но внутреннее
/// состояние продолжает расти. Не потокобезопасен: один экземпляр на цикл
/// переподключения.
///
/// ```rust
/// use esl_core::backoff::FibBackoff;
/// use std::time::Duration;
///
/// let mut b = FibBackoff::new(Duration::from_secs(1), Duration::from_secs(5));
/// let got: Vec<u64> = b.by_ref().take(7).map(|d| d.as_secs()).collect();
/// assert_eq!(got, vec![1, 1, 2, 3, 5, 5, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct FibBackoff {
    prev: u64,
    curr: u64,
    unit: Duration,
    /// `None` — без потолка
    max: Option<Duration>,
}

impl FibBackoff {
    /// `max` равный нулю означает "без потолка"
    pub fn new(unit: Duration, max: Duration) -> Self {
        Self {
            prev: 0,
            curr: 1,
            unit,
            max: (!max.is_zero()).then_some(max),
        }
    }

    /// Следующая задержка
    pub fn next_delay(&mut self) -> Duration {
        (self.prev, self.curr) = (self.curr, self.prev.saturating_add(self.curr));

        let delay = scale(self.unit, self.prev);

        match self.max {
            Some(max) if delay > max => max,
            _ => delay,
        }
    }

    /// Начать последовательность заново (после успешного подключения)
    pub fn reset(&mut self) {
        self.prev = 0;
        self.curr = 1;
    }
}

/// `unit * n` с насыщением до `Duration::MAX`
fn scale(unit: Duration, n: u64) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let Some(nanos) = unit.as_nanos().checked_mul(u128::from(n)) else {
        return Duration::MAX;
    };
    match u64::try_from(nanos / NANOS_PER_SEC) {
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

impl Default for FibBackoff {
    fn default() -> Self {
        Self::new(DEFAULT_BACKOFF_UNIT, DEFAULT_BACKOFF_MAX)
    }
}

impl Iterator for FibBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        Some(self.next_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(b: &mut FibBackoff, n: usize) -> Vec<u64> {
        b.take(n).map(|d| d.as_secs()).collect()
    }

    #[test]
    fn uncapped_sequence() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(secs(&mut b, 8), vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn capped_sequence_never_exceeds_cap() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::from_secs(5));
        assert_eq!(secs(&mut b, 9), vec![1, 1, 2, 3, 5, 5, 5, 5, 5]);
    }

    #[test]
    fn state_keeps_growing_under_cap() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::from_secs(2));
        for _ in 0..6 {
            b.next_delay();
        }
        // внутреннее состояние ушло дальше потолка
        assert_eq!((b.prev, b.curr), (8, 13));
        assert_eq!(b.next_delay(), Duration::from_secs(2));
    }

    #[test]
    fn unit_scales_values() {
        let mut b = FibBackoff::new(Duration::from_millis(100), Duration::ZERO);
        let got: Vec<Duration> = b.by_ref().take(5).collect();
        assert_eq!(
            got,
            [100, 100, 200, 300, 500].map(Duration::from_millis).to_vec()
        );
    }

    #[test]
    fn reset_restarts_sequence() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(secs(&mut b, 5), vec![1, 1, 2, 3, 5]);
        b.reset();
        assert_eq!(secs(&mut b, 3), vec![1, 1, 2]);
    }

    #[test]
    fn huge_values_saturate_instead_of_panicking() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::ZERO);
        let mut last = Duration::ZERO;
        for _ in 0..200 {
            let d = b.next_delay();
            assert!(d >= last);
            last = d;
        }
        // число Фибоначчи упёрлось в u64::MAX, произведение ещё помещается
        assert_eq!(last, Duration::from_secs(u64::MAX));
    }

    #[test]
    fn values_past_u32_are_exact() {
        let mut b = FibBackoff::new(Duration::from_secs(1), Duration::ZERO);
        let d48 = b.by_ref().nth(47).unwrap();
        assert_eq!(d48, Duration::from_secs(4_807_526_976));
        assert_eq!(b.next_delay(), Duration::from_secs(7_778_742_049));
    }

    #[test]
    fn sub_second_unit_past_u32() {
        let mut b = FibBackoff::new(Duration::from_millis(1500), Duration::ZERO);
        let d48 = b.by_ref().nth(47).unwrap();
        assert_eq!(d48, Duration::from_millis(4_807_526_976 * 1500));
    }

    #[test]
    fn product_overflowing_duration_saturates() {
        assert_eq!(scale(Duration::from_secs(2), u64::MAX), Duration::MAX);
        assert_eq!(scale(Duration::MAX, 2), Duration::MAX);
        assert_eq!(scale(Duration::from_nanos(3), 5), Duration::from_nanos(15));
    }

    #[test]
    fn default_uses_constants() {
        let mut b = FibBackoff::default();
        assert_eq!(b.next_delay(), DEFAULT_BACKOFF_UNIT);
        assert!(b.take(50).all(|d| d <= DEFAULT_BACKOFF_MAX));
    }
}
