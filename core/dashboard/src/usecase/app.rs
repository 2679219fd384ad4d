//! ダッシュボードの各操作（指標の取得 → スコアリング → 必要なら LLM に相談）

use crate::domain::alert::recent_unread;
use crate::domain::benchmarks::{
    algorithm_signals, benchmarks, benchmarks_or_generic, platform_tips, posting_times,
    AlgorithmSignal, PlatformBenchmarks, PostingTimes,
};
use crate::domain::platform::{self, REGIONS};
use crate::domain::scoring::{engagement_velocity, virality_score, EngagementVelocity};
use crate::domain::{
    optimal_content_types, CharBudget, ContentSuggestion, ContentType, DashboardAlert,
    EngagementSample, GrowthAnalysis, GrowthInput, PlatformCategory, PlatformConfig,
    PlatformConnection, PlatformId, PlatformMetrics, PostAnalytics, PostOptimization,
    ViralityAnalysis,
};
use crate::ports::outbound::{MetricsSource, TipPicker};
use crate::usecase::advisor::{Advised, Advisor};
use common::error::Error;
use common::ports::outbound::{Clock, LlmCompletion, Log, LogLevel, LogRecord};
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct DashboardDeps {
    pub data: DataDeps,
    pub model: ModelDeps,
    pub obs: ObsDeps,
}

pub struct DataDeps {
    pub metrics: Arc<dyn MetricsSource>,
    pub tips: Arc<dyn TipPicker>,
}

pub struct ModelDeps {
    pub completion: Arc<dyn LlmCompletion>,
    pub clock: Arc<dyn Clock>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 成長分析で投稿頻度が分からないときの値
pub const DEFAULT_POSTS_PER_WEEK: u32 = 3;

/// 概要に載せる上位投稿の件数
const OVERVIEW_TOP_POSTS: usize = 3;

/// 概要に載せる未読通知の件数
const OVERVIEW_ALERTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub connections: Vec<PlatformConnection>,
    pub metrics: Vec<PlatformMetrics>,
    pub total_followers: u64,
    /// 連携済みプラットフォームの単純平均（%）
    pub avg_engagement_rate: f64,
    pub top_posts: Vec<PostAnalytics>,
    /// 未読の新しいもの
    pub alerts: Vec<DashboardAlert>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
    pub post: PostAnalytics,
    pub benchmarks: PlatformBenchmarks,
    pub analysis: ViralityAnalysis,
}

/// プラットフォームの運用ガイド
#[derive(Debug, Clone, PartialEq)]
pub struct Playbook {
    pub platform: &'static PlatformConfig,
    /// 固有の基準が無ければ None（汎用基準を使う）
    pub benchmarks: Option<&'static PlatformBenchmarks>,
    pub signals: &'static [AlgorithmSignal],
    pub tips: &'static [&'static str],
    pub posting_times: Option<PostingTimes>,
    pub content_types: &'static [ContentType],
}

/// 成長分析の入力の上書き（未指定は指標ソースの値）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrowthOverrides {
    pub followers: Option<u64>,
    pub monthly_growth: Option<f64>,
    pub posts_per_week: Option<u32>,
}

/// 最適化の結果と、元の下書き・最適化後それぞれの文字数
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedDraft {
    pub advised: Advised<PostOptimization>,
    pub draft_budget: CharBudget,
    pub optimized_budget: CharBudget,
}

/// pulse のユースケース（アダプター経由で I/O を行う）
pub struct DashboardUseCase {
    deps: DashboardDeps,
    advisor: Advisor,
}

impl DashboardUseCase {
    pub fn new(deps: DashboardDeps) -> Self {
        let advisor = Advisor::new(
            Arc::clone(&deps.model.completion),
            Arc::clone(&deps.model.clock),
            Arc::clone(&deps.obs.log),
        );
        Self { deps, advisor }
    }

    pub fn is_live(&self) -> bool {
        self.deps.model.completion.is_live()
    }

    pub fn overview(&self) -> Result<Overview, Error> {
        let connections = self.deps.data.metrics.connections()?;
        let metrics = self.deps.data.metrics.platform_metrics()?;
        let total_followers = metrics.iter().map(|m| m.followers).sum();
        let avg_engagement_rate = if metrics.is_empty() {
            0.0
        } else {
            metrics.iter().map(|m| m.engagement_rate()).sum::<f64>() / metrics.len() as f64
        };
        let mut top_posts = self.deps.data.metrics.posts(None)?;
        top_posts.truncate(OVERVIEW_TOP_POSTS);
        let alerts = recent_unread(&self.deps.data.metrics.alerts()?, OVERVIEW_ALERTS);
        Ok(Overview {
            connections,
            metrics,
            total_followers,
            avg_engagement_rate,
            top_posts,
            alerts,
        })
    }

    /// 地域・カテゴリで絞り込んだプラットフォーム定義（両方指定なら積集合）
    pub fn platforms(
        &self,
        region: Option<&str>,
        category: Option<PlatformCategory>,
    ) -> Result<Vec<&'static PlatformConfig>, Error> {
        if let Some(r) = region {
            if !REGIONS.iter().any(|known| known.eq_ignore_ascii_case(r)) {
                return Err(Error::invalid_argument(format!(
                    "Unknown region '{}' (expected one of: {})",
                    r,
                    REGIONS.join(", ")
                )));
            }
        }
        Ok(match (region, category) {
            (Some(r), Some(c)) => platform::by_region(r)
                .into_iter()
                .filter(|p| p.category == c)
                .collect(),
            (Some(r), None) => platform::by_region(r),
            (None, Some(c)) => platform::by_category(c),
            (None, None) => platform::PLATFORMS.iter().collect(),
        })
    }

    pub fn posts(&self, platform: Option<PlatformId>, limit: Option<usize>) -> Result<Vec<PostAnalytics>, Error> {
        let mut posts = self.deps.data.metrics.posts(platform)?;
        if let Some(n) = limit {
            posts.truncate(n);
        }
        Ok(posts)
    }

    /// 投稿 ID を指定してバイラリティを分析する
    pub fn score(&self, post_id: &str) -> Result<ScoredPost, Error> {
        let post = self
            .deps
            .data
            .metrics
            .posts(None)?
            .into_iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown post id: {}", post_id)))?;
        let bench = benchmarks_or_generic(post.platform);
        let tip = self.deps.data.tips.pick(platform_tips(post.platform));
        let analysis = virality_score(&post, &bench, tip);
        let _ = self.deps.obs.log.log(
            &LogRecord::new(LogLevel::Debug, "usecase", "scoring", "post scored")
                .with_field("post_id", post_id)
                .with_field("overall_score", analysis.overall_score)
                .with_field("prediction", analysis.prediction.as_str()),
        );
        Ok(ScoredPost {
            post,
            benchmarks: bench,
            analysis,
        })
    }

    pub fn velocity(&self, samples: &[EngagementSample]) -> Result<Vec<EngagementVelocity>, Error> {
        if samples.is_empty() {
            return Err(Error::invalid_argument("velocity needs at least one <minutes>:<engagement> sample"));
        }
        Ok(engagement_velocity(samples))
    }

    pub fn playbook(&self, platform: PlatformId) -> Playbook {
        Playbook {
            platform: platform.config(),
            benchmarks: benchmarks(platform),
            signals: algorithm_signals(platform),
            tips: platform_tips(platform),
            posting_times: posting_times(platform),
            content_types: optimal_content_types(platform),
        }
    }

    /// 上位投稿を参考に提案を作る
    pub fn suggest(
        &self,
        platform: PlatformId,
        niche: &str,
        tone: &str,
    ) -> Result<Advised<Vec<ContentSuggestion>>, Error> {
        if niche.trim().is_empty() {
            return Err(Error::invalid_argument("--niche must not be empty"));
        }
        let top_posts = self.deps.data.metrics.posts(Some(platform))?;
        Ok(self
            .advisor
            .generate_content_suggestions(platform, &top_posts, niche, tone))
    }

    /// 指標ソースの値（と上書き）から入力を組み立てる
    pub fn growth_input(&self, platform: PlatformId, overrides: &GrowthOverrides) -> Result<GrowthInput, Error> {
        let metrics = self
            .deps
            .data
            .metrics
            .platform_metrics()?
            .into_iter()
            .find(|m| m.platform == platform);
        let followers = match (overrides.followers, &metrics) {
            (Some(f), _) => f,
            (None, Some(m)) => m.followers,
            (None, None) => {
                return Err(Error::invalid_argument(format!(
                    "{} is not connected; pass --followers to analyse it",
                    platform
                )))
            }
        };
        let monthly_growth = overrides
            .monthly_growth
            .or_else(|| metrics.as_ref().map(|m| m.follower_growth_rate))
            .unwrap_or(0.0);
        let engagement_rate = metrics
            .as_ref()
            .map(|m| m.engagement_rate())
            .unwrap_or_else(|| benchmarks_or_generic(platform).avg_engagement_rate);
        Ok(GrowthInput {
            followers,
            weekly_growth: monthly_growth / 4.0,
            monthly_growth,
            engagement_rate,
            posts_per_week: overrides.posts_per_week.unwrap_or(DEFAULT_POSTS_PER_WEEK),
        })
    }

    pub fn growth(&self, platform: PlatformId, overrides: &GrowthOverrides) -> Result<Advised<GrowthAnalysis>, Error> {
        let input = self.growth_input(platform, overrides)?;
        Ok(self.advisor.analyze_growth(platform, &input))
    }

    pub fn optimize(
        &self,
        platform: PlatformId,
        content_type: ContentType,
        draft: &str,
    ) -> Result<OptimizedDraft, Error> {
        if draft.trim().is_empty() {
            return Err(Error::invalid_argument("draft must not be empty"));
        }
        let draft_budget = CharBudget::measure(platform, draft);
        if draft_budget.is_over_limit() {
            let _ = self.deps.obs.log.log(
                &LogRecord::new(LogLevel::Warn, "usecase", "composer", "draft exceeds character limit")
                    .with_field("platform", platform.as_str())
                    .with_field("count", draft_budget.count)
                    .with_field("limit", draft_budget.limit),
            );
        }
        let advised = self.advisor.optimize_post(platform, draft, content_type);
        let optimized_budget = CharBudget::measure(platform, &advised.data.optimized);
        Ok(OptimizedDraft {
            advised,
            draft_budget,
            optimized_budget,
        })
    }
}
