//! Upload-activity series: zero-filled per-day counts for the activity chart.

use crate::workforce::domain::DocumentType;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// One calendar day of upload activity, split by document category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub day: NaiveDate,
    pub resumes: u64,
    pub certifications: u64,
    pub reviews: u64,
}

impl DayActivity {
    fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            resumes: 0,
            certifications: 0,
            reviews: 0,
        }
    }

    fn add(&mut self, document_type: DocumentType, count: u64) {
        match document_type {
            DocumentType::Resume => self.resumes += count,
            DocumentType::Certification => self.certifications += count,
            DocumentType::Review => self.reviews += count,
        }
    }

    pub fn total(&self) -> u64 {
        self.resumes + self.certifications + self.reviews
    }
}

/// ActivitySeries domain service
pub struct ActivitySeries;

impl ActivitySeries {
    /// Builds the zero-filled activity series for the window
    /// `[today − (days − 1), today]`.
    ///
    /// Every calendar day in the window appears exactly once, in
    /// chronological order, even when no uploads occurred. Raw buckets
    /// outside the window are ignored; buckets for the same day and type
    /// are summed.
    ///
    /// # Arguments
    /// * `today` - The last day of the window (UTC calendar date)
    /// * `days` - Window length; the caller clamps this beforehand
    /// * `raw` - Day-bucketed counts from the document store
    pub fn zero_fill(
        today: NaiveDate,
        days: u32,
        raw: &[(NaiveDate, DocumentType, u64)],
    ) -> Vec<DayActivity> {
        let start = today - Duration::days(days as i64 - 1);

        let mut by_day: HashMap<NaiveDate, DayActivity> = HashMap::new();
        for &(day, document_type, count) in raw {
            if day < start || day > today {
                continue;
            }
            by_day
                .entry(day)
                .or_insert_with(|| DayActivity::empty(day))
                .add(document_type, count);
        }

        (0..days)
            .map(|offset| {
                let day = start + Duration::days(offset as i64);
                by_day
                    .get(&day)
                    .copied()
                    .unwrap_or_else(|| DayActivity::empty(day))
            })
            .collect()
    }
}
