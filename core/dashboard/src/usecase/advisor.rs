//! LLM による提案・成長分析・投稿最適化（モデル → 失敗時は決定的フォールバック）
//!
//! モデルのエラーは呼び出し側に返さない。warn でログに残してフォールバックに切り替える。

use crate::domain::advice::{
    mock_suggestions, ContentSuggestion, GrowthAnalysis, GrowthDiagnosis, GrowthInput,
    PostOptimization, SuggestionCategory, SuggestionIdea,
};
use crate::domain::benchmarks::{algorithm_signals, benchmarks_or_generic};
use crate::domain::content::{optimal_content_types, ContentType};
use crate::domain::metrics::PostAnalytics;
use crate::domain::platform::PlatformId;
use common::error::Error;
use common::llm::decode_json;
use common::ports::outbound::{Clock, CompletionRequest, LlmCompletion, Log, LogLevel, LogRecord};
use std::sync::Arc;

const SUGGESTIONS_SYSTEM: &str = "You are an elite social media strategist. You understand platform algorithms deeply and craft content that maximises organic reach and engagement. You always respond with valid JSON arrays.";
const GROWTH_SYSTEM: &str = "You are a social media growth consultant. You diagnose growth problems, identify opportunities, and create actionable recovery plans. Respond with valid JSON.";
const OPTIMIZE_SYSTEM: &str = "You are a social media copy optimization expert. You take draft posts and improve them to maximize engagement based on platform algorithm signals. Respond with valid JSON.";

/// プロンプトに載せる上位投稿の件数と本文の長さ
const TOP_POSTS_IN_PROMPT: usize = 3;
const PREVIEW_CHARS: usize = 100;

/// 結果の出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    pub data: T,
    pub source: AdviceSource,
}

impl<T> Advised<T> {
    fn model(data: T) -> Self {
        Self {
            data,
            source: AdviceSource::Model,
        }
    }

    fn fallback(data: T) -> Self {
        Self {
            data,
            source: AdviceSource::Fallback,
        }
    }
}

fn signal_priorities(platform: PlatformId) -> String {
    let signals = algorithm_signals(platform);
    if signals.is_empty() {
        return "Standard engagement metrics".to_string();
    }
    signals
        .iter()
        .map(|s| format!("- {} (weight: {}): {}", s.signal, s.weight, s.how_to_optimize))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted_choices<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(|v| format!("\"{}\"", v)).collect::<Vec<_>>().join(" | ")
}

pub fn build_suggestions_prompt(
    platform: PlatformId,
    top_posts: &[PostAnalytics],
    niche: &str,
    tone: &str,
) -> String {
    let bench = benchmarks_or_generic(platform);
    let top = if top_posts.is_empty() {
        "No historical data yet".to_string()
    } else {
        top_posts
            .iter()
            .take(TOP_POSTS_IN_PROMPT)
            .map(|p| {
                let preview: String = p.text.chars().take(PREVIEW_CHARS).collect();
                format!(
                    "- Type: {}, Engagement: {:.2}%, Text preview: \"{}\"",
                    p.content_type,
                    p.engagement_rate(),
                    preview
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        r#"Generate 5 content suggestions for {platform} in the "{niche}" niche with a {tone} tone.

Platform algorithm priorities:
{signals}

Benchmark engagement rate: {bench_er}%

Top performing post styles from this account:
{top}

Return a JSON array with exactly 5 objects, each with these fields:
- title: string (compelling working title)
- body: string (full post text ready to publish, with line breaks)
- contentType: {content_types}
- hashtags: string[] (3-5 relevant hashtags)
- estimatedReach: string (e.g. "2x-5x average")
- viralityPotential: "low" | "moderate" | "high" | "viral"
- reasoning: string (why this will perform well, referencing algorithm signals)
- basedOn: string (what trend or insight this leverages)
- category: {categories}

Respond with ONLY the JSON array, no markdown formatting."#,
        signals = signal_priorities(platform),
        bench_er = bench.avg_engagement_rate,
        content_types = quoted_choices(optimal_content_types(platform).iter().map(ContentType::as_str)),
        categories = quoted_choices(SuggestionCategory::ALL.iter().map(SuggestionCategory::as_str)),
    )
}

pub fn build_growth_prompt(platform: PlatformId, input: &GrowthInput) -> String {
    let bench = benchmarks_or_generic(platform);
    let signals = algorithm_signals(platform);
    let signal_lines = if signals.is_empty() {
        "Standard engagement signals".to_string()
    } else {
        signals
            .iter()
            .map(|s| format!("- {}: {}", s.signal, s.description))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        r#"Analyze this {platform} account and provide a growth strategy:

Current metrics:
- Followers: {followers}
- Weekly growth: {weekly:.2}%
- Monthly growth: {monthly:.2}%
- Engagement rate: {er:.2}%
- Posts per week: {ppw}

Platform benchmarks:
- Avg engagement rate: {bench_er}%
- Monthly growth benchmark: {bench_growth}%

Algorithm signals to leverage:
{signal_lines}

Return a JSON object with:
- currentPhase: "nadir" | "declining" | "stagnant" | "growing" | "accelerating" | "viral"
- weeklyGrowthRate: number
- monthlyGrowthRate: number
- projectedFollowers30d: integer
- projectedFollowers90d: integer
- bottlenecks: [{{ issue: string, severity: "critical"|"high"|"medium"|"low", impact: string, solution: string }}] (2-3 items)
- opportunities: [{{ opportunity: string, effort: "low"|"medium"|"high", potentialImpact: string, timeframe: string, steps: string[] }}] (2-3 items)
- recoveryPlan: {{ diagnosis: string, phase1: {{ name: string, actions: string[], duration: string }}, phase2: {{ name: string, actions: string[], duration: string }}, phase3: {{ name: string, actions: string[], duration: string }}, expectedOutcome: string }}

Respond with ONLY the JSON object, no markdown."#,
        followers = input.followers,
        weekly = input.weekly_growth,
        monthly = input.monthly_growth,
        er = input.engagement_rate,
        ppw = input.posts_per_week,
        bench_er = bench.avg_engagement_rate,
        bench_growth = bench.growth_rate_benchmark,
    )
}

pub fn build_optimize_prompt(platform: PlatformId, draft: &str, content_type: ContentType) -> String {
    format!(
        r#"Optimize this {platform} {content_type} post for maximum engagement:

Draft:
"{draft}"

Algorithm signals to optimize for:
{signals}

Return a JSON object with:
- optimized: string (the improved post text, ready to publish)
- changes: string[] (list of specific changes made and why)
- predictedLift: string (estimated engagement improvement, e.g. "+40-80%")

Respond with ONLY the JSON object, no markdown."#,
        signals = signal_priorities(platform),
    )
}

pub struct Advisor {
    completion: Arc<dyn LlmCompletion>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl Advisor {
    pub fn new(completion: Arc<dyn LlmCompletion>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self {
            completion,
            clock,
            log,
        }
    }

    fn log_offline(&self, operation: &str) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "llm", "mock mode: using deterministic advice")
                .with_field("operation", operation),
        );
    }

    fn log_fallback(&self, operation: &str, error: &Error) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, "usecase", "llm", "advisor request failed, using fallback")
                .with_field("operation", operation)
                .with_field("error", error.to_string()),
        );
    }

    /// モデル呼び出し → 失敗時・モック時はフォールバック
    fn advise<T>(
        &self,
        operation: &str,
        query: impl FnOnce() -> Result<T, Error>,
        fallback: impl FnOnce() -> T,
    ) -> Advised<T> {
        if !self.completion.is_live() {
            self.log_offline(operation);
            return Advised::fallback(fallback());
        }
        match query() {
            Ok(data) => Advised::model(data),
            Err(e) => {
                self.log_fallback(operation, &e);
                Advised::fallback(fallback())
            }
        }
    }

    fn query_suggestions(
        &self,
        platform: PlatformId,
        top_posts: &[PostAnalytics],
        niche: &str,
        tone: &str,
    ) -> Result<Vec<ContentSuggestion>, Error> {
        let prompt = build_suggestions_prompt(platform, top_posts, niche, tone);
        let request = CompletionRequest::json(&prompt).with_system(SUGGESTIONS_SYSTEM);
        let text = self.completion.complete(&request)?;
        let ideas: Vec<SuggestionIdea> = decode_json(&text)?;
        if ideas.is_empty() {
            return Err(Error::schema("model returned no suggestions"));
        }
        for idea in &ideas {
            idea.validate()?;
        }
        let stamp = self.clock.now_ms();
        Ok(ideas
            .into_iter()
            .enumerate()
            .map(|(i, idea)| ContentSuggestion {
                id: format!("suggestion-{}-{}", stamp, i),
                platform_id: platform,
                idea,
            })
            .collect())
    }

    /// 5 件のコンテンツ提案
    pub fn generate_content_suggestions(
        &self,
        platform: PlatformId,
        top_posts: &[PostAnalytics],
        niche: &str,
        tone: &str,
    ) -> Advised<Vec<ContentSuggestion>> {
        self.advise(
            "suggest",
            || self.query_suggestions(platform, top_posts, niche, tone),
            || mock_suggestions(platform, niche, self.clock.now_ms()),
        )
    }

    pub fn analyze_growth(&self, platform: PlatformId, input: &GrowthInput) -> Advised<GrowthAnalysis> {
        self.advise(
            "growth",
            || {
                let prompt = build_growth_prompt(platform, input);
                let request = CompletionRequest::json(&prompt).with_system(GROWTH_SYSTEM);
                let text = self.completion.complete(&request)?;
                let diagnosis: GrowthDiagnosis = decode_json(&text)?;
                Ok(GrowthAnalysis {
                    platform_id: platform,
                    diagnosis,
                })
            },
            || GrowthAnalysis {
                platform_id: platform,
                diagnosis: GrowthDiagnosis::fallback(input),
            },
        )
    }

    pub fn optimize_post(
        &self,
        platform: PlatformId,
        draft: &str,
        content_type: ContentType,
    ) -> Advised<PostOptimization> {
        self.advise(
            "optimize",
            || {
                let prompt = build_optimize_prompt(platform, draft, content_type);
                let request = CompletionRequest::json(&prompt).with_system(OPTIMIZE_SYSTEM);
                let text = self.completion.complete(&request)?;
                let optimization: PostOptimization = decode_json(&text)?;
                optimization.validate()?;
                Ok(optimization)
            },
            || PostOptimization::unavailable(draft),
        )
    }
}
