//! pulse 固有のドメイン型（プラットフォーム定義・指標・スコアリング・提案）

pub mod advice;
pub mod alert;
pub mod benchmarks;
pub mod command;
pub mod composer;
pub mod content;
pub mod metrics;
pub mod platform;
pub mod scoring;

pub use advice::{ContentSuggestion, GrowthAnalysis, GrowthInput, PostOptimization};
pub use alert::{AlertKind, DashboardAlert};
pub use command::DashboardCommand;
pub use composer::CharBudget;
pub use content::{optimal_content_types, ContentType};
pub use metrics::{InteractionCounts, PlatformConnection, PlatformMetrics, PostAnalytics};
pub use platform::{PlatformCategory, PlatformConfig, PlatformId};
pub use scoring::{EngagementSample, ViralityAnalysis};
