//! Timezones with a fixed offset.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::borrow::Cow;
use chrono::{Duration, Offset};


//------------ FixedOffset ---------------------------------------------------

/// A timezone with a constant offset from UTC and a display name.
///
/// Time strings can only carry a numeric offset, so there is no concept
/// of daylight saving time and [`dst`] is always zero. The name is
/// informational only: `"UTC"` for times ending in `Z` and `"?"` for
/// those with a numeric offset.
///
/// Two values are equal if both their offset and their name are equal.
///
/// [`dst`]: #method.dst
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FixedOffset {
    /// The offset east of UTC.
    ///
    /// This is always a whole number of minutes.
    offset: chrono::FixedOffset,

    /// The display name.
    name: Cow<'static, str>,
}

impl FixedOffset {
    /// The number of minutes in a day.
    const DAY_MINUTES: i32 = 24 * 60;

    /// Creates a new offset from minutes east of UTC and a name.
    ///
    /// Returns `None` if the offset is a day or more in either direction.
    pub fn new(
        minutes: i32, name: impl Into<Cow<'static, str>>
    ) -> Option<Self> {
        if minutes <= -Self::DAY_MINUTES || minutes >= Self::DAY_MINUTES {
            return None
        }
        chrono::FixedOffset::east_opt(minutes * 60).map(|offset| {
            FixedOffset { offset, name: name.into() }
        })
    }

    /// Returns the UTC timezone.
    ///
    /// This is the timezone of time strings ending in `Z`.
    pub fn utc() -> Self {
        FixedOffset {
            offset: chrono::Utc.fix(),
            name: Cow::Borrowed("UTC"),
        }
    }

    /// Creates a value from a chrono offset.
    ///
    /// Seconds in the offset are dropped. The name will be `"UTC"` if the
    /// remaining offset is zero and `"?"` otherwise.
    pub fn from_chrono(offset: chrono::FixedOffset) -> Self {
        let minutes = offset.local_minus_utc() / 60;
        if minutes == 0 {
            Self::utc()
        }
        else {
            // A chrono offset is less than a day, so this is fine.
            Self::new(minutes, "?").unwrap_or_else(Self::utc)
        }
    }

    /// Returns the offset in minutes east of UTC.
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Returns the daylight saving time contribution.
    ///
    /// This is always zero.
    pub fn dst(&self) -> Duration {
        Duration::zero()
    }

    /// Returns the offset from UTC as a duration.
    pub fn utc_offset(&self) -> Duration {
        Duration::minutes(i64::from(self.offset_minutes()))
    }

    /// Returns whether the offset is zero.
    ///
    /// This is true for any offset of zero, not only those named `"UTC"`.
    pub fn is_utc(&self) -> bool {
        self.offset.local_minus_utc() == 0
    }

    /// Returns the offset as a chrono offset.
    pub fn to_chrono(&self) -> chrono::FixedOffset {
        self.offset
    }
}


//============ Tests =========================================================
