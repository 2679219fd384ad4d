//! 壁時計による Clock 実装

use crate::ports::outbound::Clock;
use chrono::Utc;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        // 1970 年より前の時計は 0 扱い
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
