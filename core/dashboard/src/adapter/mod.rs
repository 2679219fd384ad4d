//! pulse のアダプター（ports::outbound の実装）

pub mod demo_metrics;
pub mod tip_picker;

pub use demo_metrics::DemoMetricsSource;
pub use tip_picker::{FixedTipPicker, RandomTipPicker};
