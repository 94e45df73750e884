use chrono::{DateTime, Utc};

/// Source of timestamps for step timing and generated file headers.
///
/// Readings are wall-clock time. If the clock steps backwards during a step,
/// the interpreter reports that step's elapsed time as zero.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
