//! A row of the BOQ timeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PHASE_WEIGHT: f64 = 10.0;

/// A construction phase with its share of the project (`weight`) and its
/// completion (`progress`, percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,
    #[serde(default, with = "optional_date")]
    pub start: Option<NaiveDate>,
    #[serde(default, with = "optional_date")]
    pub end: Option<NaiveDate>,
    /// Contribution to the project total; weights need not sum to 100.
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub weight: f64,
    /// Percent complete, 0-100.
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub progress: f64,
}

impl Phase {
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate, weight: f64) -> Self {
        Self {
            title: title.into(),
            start: Some(start),
            end: Some(end),
            weight,
            progress: 0.0,
        }
    }

    /// Blank row added from the timeline editor, dates still unset
    pub fn blank(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start: None,
            end: None,
            weight: DEFAULT_PHASE_WEIGHT,
            progress: 0.0,
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// Weight with negative and non-finite values counted as zero
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }

    /// Progress as a fraction in [0, 1]
    pub fn progress_fraction(&self) -> f64 {
        if self.progress.is_finite() {
            self.progress.clamp(0.0, 100.0) / 100.0
        } else {
            0.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress_fraction() >= 1.0
    }

    /// Not finished although its end date is already behind `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        matches!(self.end, Some(end) if end < today) && !self.is_complete()
    }
}

/// Dates stored as `YYYY-MM-DD`; rows still being edited carry an empty string.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            // Accept full timestamps too, only the calendar date matters
            Some(s) => NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Form inputs arrive as numbers or numeric strings; anything else reads as 0.
mod lenient_number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => n,
            NumberOrString::Text(s) => s.trim().parse().unwrap_or(0.0),
            NumberOrString::Other(_) => 0.0,
        })
    }
}
