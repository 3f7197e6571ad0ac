use std::path::Path;

use chrono::TimeDelta;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_HIT_TOLERANCE_SECS, Margins, MiniChartBox, SeriesKey, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipOffset;
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field but `viewport` has a
/// default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamgraphConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_series_order")]
    pub series_order: Vec<SeriesKey>,
    #[serde(default = "default_palette")]
    pub palette: IndexMap<SeriesKey, String>,
    #[serde(default = "default_hit_tolerance_secs")]
    pub hit_tolerance_secs: i64,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    #[serde(default)]
    pub mini_chart: MiniChartBox,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

impl Default for StreamgraphConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl StreamgraphConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            series_order: default_series_order(),
            palette: default_palette(),
            hit_tolerance_secs: default_hit_tolerance_secs(),
            tooltip_offset: TooltipOffset::default(),
            mini_chart: MiniChartBox::default(),
            axis_font_size_px: default_axis_font_size_px(),
            show_legend: default_show_legend(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the stacking and layering order.
    #[must_use]
    pub fn with_series_order(mut self, series_order: Vec<SeriesKey>) -> Self {
        self.series_order = series_order;
        self
    }

    #[must_use]
    pub fn with_series_color(mut self, key: SeriesKey, hex: impl Into<String>) -> Self {
        self.palette.insert(key, hex.into());
        self
    }

    #[must_use]
    pub fn with_hit_tolerance_secs(mut self, seconds: i64) -> Self {
        self.hit_tolerance_secs = seconds;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, dx: f64, dy: f64) -> Self {
        self.tooltip_offset = TooltipOffset { dx, dy };
        self
    }

    #[must_use]
    pub fn with_mini_chart(mut self, mini_chart: MiniChartBox) -> Self {
        self.mini_chart = mini_chart;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ChartResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plot area inside the margins.
    pub fn plot_area(&self) -> ChartResult<Viewport> {
        self.margins.plot_area(self.viewport)
    }

    #[must_use]
    pub fn hit_tolerance(&self) -> TimeDelta {
        TimeDelta::seconds(self.hit_tolerance_secs)
    }

    /// Fill color for `key`; series without a palette entry draw black.
    pub fn color_for(&self, key: SeriesKey) -> ChartResult<Color> {
        self.palette
            .get(&key)
            .map_or(Ok(Color::BLACK), |hex| Color::from_hex(hex))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.plot_area()?;

        for (index, key) in self.series_order.iter().enumerate() {
            if self.series_order[..index].contains(key) {
                return Err(ChartError::InvalidData(format!(
                    "series `{key}` appears more than once in series_order"
                )));
            }
        }
        for hex in self.palette.values() {
            Color::from_hex(hex)?;
        }
        if self.hit_tolerance_secs < 0 {
            return Err(ChartError::InvalidData(
                "hit tolerance must be >= 0 seconds".to_owned(),
            ));
        }
        if !self.tooltip_offset.dx.is_finite() || !self.tooltip_offset.dy.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        if !self.axis_font_size_px.is_finite() || self.axis_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis font size must be finite and > 0".to_owned(),
            ));
        }
        self.mini_chart.validate()?;
        Ok(())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 400)
}

fn default_series_order() -> Vec<SeriesKey> {
    SeriesKey::ALL.to_vec()
}

fn default_palette() -> IndexMap<SeriesKey, String> {
    [
        (SeriesKey::Gpt4, "#e41a1c"),
        (SeriesKey::Gemini, "#377eb8"),
        (SeriesKey::Palm2, "#4daf4a"),
        (SeriesKey::Claude, "#984ea3"),
        (SeriesKey::Llama31, "#ff7f00"),
    ]
    .into_iter()
    .map(|(key, hex)| (key, hex.to_owned()))
    .collect()
}

fn default_hit_tolerance_secs() -> i64 {
    DEFAULT_HIT_TOLERANCE_SECS
}

fn default_axis_font_size_px() -> f64 {
    12.0
}

fn default_show_legend() -> bool {
    true
}
