pub mod area_series;
pub mod band_scale;
pub mod curve;
pub mod mini_chart;
pub mod scale;
pub mod stack;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use area_series::{
    AreaPath, LayerGeometry, LayerVertex, build_area_path, build_layer_geometries,
};
pub use band_scale::BandScale;
pub use curve::{PathCommand, svg_path_data};
pub use hit_test::{
    DEFAULT_HIT_TOLERANCE_SECS, HitResult, default_hit_tolerance, end_of_month, hit_test,
    nearest_to_anchor,
};
pub use mini_chart::{
    MAX_MINI_Y_TICKS, MiniBar, MiniBarRect, MiniChartBox, MiniChartLayout, MiniTick, project,
};
pub use scale::LinearScale;
pub use stack::{Band, StackedLayers, stack};
pub use time_scale::{TimeScale, TimeTick, datetime_to_millis, millis_to_datetime};
pub use types::{Margins, Record, SERIES_COUNT, SeriesKey, Viewport};
pub use value_scale::ValueScale;
