use chrono::{DateTime, Utc};
use fc_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
