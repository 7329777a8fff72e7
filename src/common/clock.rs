use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Source of the current instant and of the wall-clock offset dates are
/// shown in
///
/// Relative publish times are computed against this clock whenever a view is
/// rendered, so tests can pin "now" instead of racing the wall clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// UTC offset of the viewer's wall clock at `instant`
    fn local_offset(&self, instant: DateTime<Utc>) -> FixedOffset;
}

/// Production implementation that reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self, instant: DateTime<Utc>) -> FixedOffset {
        instant.with_timezone(&Local).offset().fix()
    }
}

/// Test-only clock frozen at a given instant, viewed from UTC
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }

    fn local_offset(&self, _instant: DateTime<Utc>) -> FixedOffset {
        Utc.fix()
    }
}

/// Test-only clock frozen at a given instant, viewed from a fixed offset
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

#[cfg(test)]
impl Clock for ZonedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_offset(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}
