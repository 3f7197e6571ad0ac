use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const SERIES_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outer spacing between the viewport edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Plot area left after subtracting margins from `viewport`.
    pub fn plot_area(self, viewport: Viewport) -> ChartResult<Viewport> {
        let width = self
            .left
            .checked_add(self.right)
            .and_then(|horizontal| viewport.width.checked_sub(horizontal));
        let height = self
            .top
            .checked_add(self.bottom)
            .and_then(|vertical| viewport.height.checked_sub(vertical));
        match (width, height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Ok(Viewport::new(width, height))
            }
            _ => Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            }),
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 150, 50, 50)
    }
}

/// One of the five fixed series.
///
/// Declaration order is the canonical stacking and layering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesKey {
    #[serde(rename = "GPT-4")]
    Gpt4,
    #[serde(rename = "Gemini")]
    Gemini,
    #[serde(rename = "PaLM-2")]
    Palm2,
    #[serde(rename = "Claude")]
    Claude,
    #[serde(rename = "LLaMA-3.1")]
    Llama31,
}

impl SeriesKey {
    pub const ALL: [SeriesKey; SERIES_COUNT] = [
        SeriesKey::Gpt4,
        SeriesKey::Gemini,
        SeriesKey::Palm2,
        SeriesKey::Claude,
        SeriesKey::Llama31,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SeriesKey::Gpt4 => 0,
            SeriesKey::Gemini => 1,
            SeriesKey::Palm2 => 2,
            SeriesKey::Claude => 3,
            SeriesKey::Llama31 => 4,
        }
    }

    /// Column header and legend label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SeriesKey::Gpt4 => "GPT-4",
            SeriesKey::Gemini => "Gemini",
            SeriesKey::Palm2 => "PaLM-2",
            SeriesKey::Claude => "Claude",
            SeriesKey::Llama31 => "LLaMA-3.1",
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKey {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SeriesKey::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown series `{trimmed}`")))
    }
}

/// One time sample with a value for every series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: DateTime<Utc>,
    pub values: [f64; SERIES_COUNT],
}

impl Record {
    #[must_use]
    pub fn new(date: DateTime<Utc>, values: [f64; SERIES_COUNT]) -> Self {
        Self { date, values }
    }

    #[must_use]
    pub fn value(&self, key: SeriesKey) -> f64 {
        self.values[key.index()]
    }

    /// Sum of all series values at this sample.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
