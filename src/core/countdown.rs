//! Offer countdown shown in the fixed top bar
//!
//! The countdown starts at 15 minutes and loses one second per tick until it
//! reaches zero, where it stays.

use std::time::Duration;

/// Length of the limited-time offer countdown
pub const OFFER_DURATION: Duration = Duration::from_secs(15 * 60);

/// Tick interval of the countdown (1 second)
pub const TICK_INTERVAL_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u64,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining_secs: duration.as_secs(),
        }
    }

    /// Remove one second. Returns `false` once the countdown is already at zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        true
    }

    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.remaining_secs)
    }

    pub fn minutes(&self) -> u64 {
        self.remaining_secs / 60
    }

    pub fn seconds(&self) -> u64 {
        self.remaining_secs % 60
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Zero-padded `(minutes, seconds)` pair for display
    pub fn display(&self) -> (String, String) {
        (
            format!("{:02}", self.minutes()),
            format!("{:02}", self.seconds()),
        )
    }

    /// Screen reader label for the timer
    pub fn aria_label(&self) -> String {
        let (minutes, seconds) = self.display();
        format!("faltam {minutes} minutos e {seconds} segundos")
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(OFFER_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifteen_minutes() {
        let countdown = Countdown::default();
        assert_eq!(countdown.minutes(), 15);
        assert_eq!(countdown.seconds(), 0);
        assert_eq!(countdown.display(), ("15".to_string(), "00".to_string()));
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_tick_crosses_minute_boundary() {
        let mut countdown = Countdown::default();
        assert!(countdown.tick());
        assert_eq!(countdown.display(), ("14".to_string(), "59".to_string()));
        assert_eq!(countdown.remaining(), Duration::from_secs(899));
    }

    #[test]
    fn test_tick_stops_at_zero() {
        let mut countdown = Countdown::new(Duration::from_secs(2));
        assert!(countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.is_expired());
        assert!(!countdown.tick());
        assert_eq!(countdown.display(), ("00".to_string(), "00".to_string()));
    }

    #[test]
    fn test_aria_label() {
        let countdown = Countdown::new(Duration::from_secs(65));
        assert_eq!(countdown.aria_label(), "faltam 01 minutos e 05 segundos");
    }

    #[test]
    fn test_sub_second_duration_is_expired() {
        let countdown = Countdown::new(Duration::from_millis(900));
        assert!(countdown.is_expired());
    }
}
