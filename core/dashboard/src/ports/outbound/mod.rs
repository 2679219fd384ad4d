//! Outbound ポート: アプリが外界（指標の取得元・ヒントの選び方）を使うための trait
//!
//! LLM・ログ・時刻は common::ports::outbound のものを使う。

pub mod metrics_source;
pub mod tip_picker;

pub use metrics_source::MetricsSource;
pub use tip_picker::TipPicker;
