//! The Hijri month-length table.

use serde::Serialize;

use crate::error::CalendarError;

/// Default month lengths: odd months 30 days, even months 29 (354-day year).
pub const UMM_AL_QURA_APPROX: [u8; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Day count of each Hijri month, the single source of Hijri validity.
///
/// Every entry is 29 or 30. The table has no mutators; build a new one to
/// change lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLengthTable {
    lengths: [u8; 12],
    // Cumulative days before each month, plus the year length at index 12.
    #[serde(skip)]
    offsets: [u32; 13],
}

impl MonthLengthTable {
    /// Builds a table, rejecting any length other than 29 or 30.
    pub fn new(lengths: [u8; 12]) -> Result<Self, CalendarError> {
        let mut offsets = [0u32; 13];
        for (i, &days) in lengths.iter().enumerate() {
            if !(29..=30).contains(&days) {
                return Err(CalendarError::InvalidMonthLength {
                    month: i as u32 + 1,
                    days: u32::from(days),
                });
            }
            offsets[i + 1] = offsets[i] + u32::from(days);
        }
        Ok(Self { lengths, offsets })
    }

    /// Builds a table from a slice, which must hold exactly twelve entries.
    pub fn from_slice(lengths: &[u8]) -> Result<Self, CalendarError> {
        let lengths: [u8; 12] = lengths.try_into().map_err(|_| {
            CalendarError::invalid_config(format!(
                "month-length table needs 12 entries, got {}",
                lengths.len()
            ))
        })?;
        Self::new(lengths)
    }

    /// Length of `month`, or `None` if the month is not in the table.
    pub fn get(&self, month: i32) -> Option<u32> {
        if (1..=12).contains(&month) {
            Some(u32::from(self.lengths[(month - 1) as usize]))
        } else {
            None
        }
    }

    /// Length of `month`.
    ///
    /// # Errors
    /// Returns `InvalidMonthIndex` if `month` is outside 1-12.
    pub fn days_in_month(&self, month: i32) -> Result<u32, CalendarError> {
        self.get(month)
            .ok_or(CalendarError::InvalidMonthIndex { month: i64::from(month) })
    }

    /// Days in a Hijri year under this table.
    pub fn year_length(&self) -> u32 {
        self.offsets[12]
    }

    /// Days in the months before `month` (1-12) within a year.
    pub(crate) fn days_before(&self, month: u32) -> u32 {
        self.offsets[(month - 1) as usize]
    }

    /// Splits a zero-based day-of-year into (month, day), both 1-based.
    pub(crate) fn month_and_day(&self, day_of_year: u32) -> (u32, u32) {
        // offsets is sorted; the month is the last one starting at or before the day.
        let idx = self.offsets[1..12].partition_point(|&start| start <= day_of_year);
        let month = idx as u32 + 1;
        (month, day_of_year - self.offsets[idx] + 1)
    }

    pub fn lengths(&self) -> [u8; 12] {
        self.lengths
    }
}

impl Default for MonthLengthTable {
    fn default() -> Self {
        let mut offsets = [0u32; 13];
        for (i, &days) in UMM_AL_QURA_APPROX.iter().enumerate() {
            offsets[i + 1] = offsets[i] + u32::from(days);
        }
        Self { lengths: UMM_AL_QURA_APPROX, offsets }
    }
}
