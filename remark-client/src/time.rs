use std::{cell::Cell, fmt::Write, rc::Rc};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::Config;

pub type Time = DateTime<Utc>;

pub trait Clock {
    fn now(&self) -> Time;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Time>>,
}

impl ManualClock {
    pub fn new(now: Time) -> ManualClock {
        ManualClock {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: Time) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Time {
        self.now.get()
    }
}

/// Produces the display timestamps stored alongside each comment
pub struct Stamper {
    clock: Box<dyn Clock>,
    tz: Tz,
    format: String,
    edited_label: String,
}

impl Stamper {
    pub fn new(clock: Box<dyn Clock>, tz: Tz, config: &Config) -> Stamper {
        Stamper {
            clock,
            tz,
            format: config.timestamp_format.clone(),
            edited_label: config.edited_label.clone(),
        }
    }

    pub fn created(&self) -> String {
        let now = self.clock.now().with_timezone(&self.tz);
        let mut res = String::new();
        if write!(res, "{}", now.format(&self.format)).is_err() {
            tracing::warn!(format = %self.format, "invalid timestamp format, using default");
            res = now.format(Config::DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        res
    }

    pub fn edited(&self) -> String {
        format!("{} ({})", self.created(), self.edited_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn formats_in_local_time() {
        let clock = ManualClock::new(fixtures::at(2024, 12, 15, 17, 30, 45));
        let tz = chrono_tz::America::Sao_Paulo;
        let stamper = Stamper::new(Box::new(clock), tz, &Config::default());
        assert_eq!(stamper.created(), "15/12/2024 14:30:45");
        assert_eq!(stamper.edited(), "15/12/2024 14:30:45 (edited)");
    }

    #[test]
    fn follows_the_clock() {
        let clock = ManualClock::new(fixtures::at(2024, 12, 15, 14, 30, 45));
        let stamper = Stamper::new(Box::new(clock.clone()), Tz::UTC, &Config::default());
        clock.set(fixtures::at(2025, 1, 2, 3, 4, 5));
        assert_eq!(stamper.created(), "02/01/2025 03:04:05");
    }

    #[test]
    fn configured_format_and_label() {
        let config = Config {
            timestamp_format: String::from("%Y-%m-%d %H:%M"),
            edited_label: String::from("editado"),
            ..Config::default()
        };
        let clock = ManualClock::new(fixtures::at(2024, 12, 15, 14, 30, 45));
        let stamper = Stamper::new(Box::new(clock), Tz::UTC, &config);
        assert_eq!(stamper.edited(), "2024-12-15 14:30 (editado)");
    }

    #[test]
    fn invalid_format_falls_back() {
        let config = Config {
            timestamp_format: String::from("%Q %"),
            ..Config::default()
        };
        let clock = ManualClock::new(fixtures::at(2024, 12, 15, 14, 30, 45));
        let stamper = Stamper::new(Box::new(clock), Tz::UTC, &config);
        assert_eq!(stamper.created(), "15/12/2024 14:30:45");
    }
}
