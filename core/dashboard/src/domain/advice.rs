//! モデルが返す提案・成長分析・投稿最適化の型と、モデルに届かないときの決定的なフォールバック
//!
//! 閉じた値（形式・カテゴリ・フェーズ・深刻度・労力）は serde enum で、範囲外の文字列はデコード時に弾く。

use crate::domain::content::ContentType;
use crate::domain::platform::PlatformId;
use crate::domain::scoring::{round_half_up, ViralityLevel};
use common::error::Error;
use serde::{Deserialize, Serialize};

// --- コンテンツ提案

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    TrendingTopic,
    AudienceInterest,
    ContentGap,
    ViralFormat,
    EngagementRecovery,
    CrossPlatform,
    Contrarian,
    Evergreen,
    Newsjacking,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 9] = [
        Self::TrendingTopic,
        Self::AudienceInterest,
        Self::ContentGap,
        Self::ViralFormat,
        Self::EngagementRecovery,
        Self::CrossPlatform,
        Self::Contrarian,
        Self::Evergreen,
        Self::Newsjacking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrendingTopic => "trending_topic",
            Self::AudienceInterest => "audience_interest",
            Self::ContentGap => "content_gap",
            Self::ViralFormat => "viral_format",
            Self::EngagementRecovery => "engagement_recovery",
            Self::CrossPlatform => "cross_platform",
            Self::Contrarian => "contrarian",
            Self::Evergreen => "evergreen",
            Self::Newsjacking => "newsjacking",
        }
    }
}

/// モデルが返す提案 1 件（id とプラットフォームは呼び出し側が付ける）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionIdea {
    pub content_type: ContentType,
    pub title: String,
    pub body: String,
    pub hashtags: Vec<String>,
    pub estimated_reach: String,
    pub virality_potential: ViralityLevel,
    pub reasoning: String,
    pub based_on: String,
    pub category: SuggestionCategory,
}

impl SuggestionIdea {
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err(Error::schema("suggestion title and body must be non-empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestion {
    pub id: String,
    pub platform_id: PlatformId,
    #[serde(flatten)]
    pub idea: SuggestionIdea,
}

#[allow(clippy::too_many_arguments)]
fn mock_idea(
    content_type: ContentType,
    title: &str,
    body: String,
    hashtags: Vec<String>,
    estimated_reach: &str,
    virality_potential: ViralityLevel,
    reasoning: &str,
    based_on: &str,
    category: SuggestionCategory,
) -> SuggestionIdea {
    SuggestionIdea {
        content_type,
        title: title.to_string(),
        body,
        hashtags,
        estimated_reach: estimated_reach.to_string(),
        virality_potential,
        reasoning: reasoning.to_string(),
        based_on: based_on.to_string(),
        category,
    }
}

/// ニッチ名から組み立てる 5 件の定型提案。id は `mock-{n}-{stamp_ms}`
pub fn mock_suggestions(platform: PlatformId, niche: &str, stamp_ms: u64) -> Vec<ContentSuggestion> {
    use ContentType::{Image, Poll, Text, Thread};
    use SuggestionCategory::*;
    use ViralityLevel::{High, Moderate, Viral};

    let tag = format!("#{}", niche);
    let ideas = vec![
        mock_idea(
            Thread,
            "Contrarian Take Thread",
            format!(
                "Unpopular opinion: The most successful people in {niche} aren't the ones working 80-hour weeks.\n\nThey're the ones who mastered these 5 counterintuitive strategies:\n\n(A thread)"
            ),
            vec!["#strategy".to_string(), "#growth".to_string(), tag.clone()],
            "3x-5x average",
            High,
            "Contrarian takes trigger high-arousal emotions (surprise, curiosity) which are the strongest sharing drivers",
            "Contrarian content format analysis",
            Contrarian,
        ),
        mock_idea(
            Text,
            "Personal Story + Lesson",
            format!(
                "3 years ago I almost quit {niche} entirely.\n\nWhat changed everything was a single conversation that shifted my entire perspective.\n\nHere's what happened and the lesson I think about every single day:"
            ),
            vec!["#lessons".to_string(), "#journey".to_string()],
            "2x-4x average",
            High,
            "Personal vulnerability stories create emotional connection and drive replies — replies have 13.5x weight in the X algorithm",
            "Narrative engagement patterns",
            AudienceInterest,
        ),
        mock_idea(
            Image,
            "Data-Driven Insight",
            format!(
                "I analysed 1,000+ top-performing posts in {niche}.\n\nThe #1 pattern that separated viral content from everything else?\n\nIt wasn't what I expected. Here's the data:"
            ),
            vec!["#data".to_string(), "#insights".to_string(), tag.clone()],
            "4x-8x average",
            Viral,
            "Data-backed content with surprising findings triggers awe and practical value — two of the strongest virality emotions",
            "Data-driven content performance analysis",
            ViralFormat,
        ),
        mock_idea(
            Poll,
            "Engagement Recovery Poll",
            format!("Quick question for everyone in {niche}:\n\nWhat's your biggest challenge right now?"),
            vec![tag.clone(), "#community".to_string()],
            "1.5x-2x average",
            Moderate,
            "Polls generate easy engagement which boosts algorithmic distribution — great for recovering from low-engagement periods",
            "Engagement recovery patterns",
            EngagementRecovery,
        ),
        mock_idea(
            Text,
            "Practical Framework",
            format!(
                "The 3-2-1 framework for {niche} that I wish someone told me on day one:\n\n3 things to focus on daily\n2 things to track weekly\n1 thing to review monthly\n\nBookmark this. You'll need it."
            ),
            vec!["#framework".to_string(), "#productivity".to_string(), tag],
            "2x-3x average",
            High,
            "Frameworks and numbered lists get bookmarked heavily — bookmarks are a strong positive signal across all platforms",
            "Save/bookmark engagement patterns",
            Evergreen,
        ),
    ];
    ideas
        .into_iter()
        .enumerate()
        .map(|(i, idea)| ContentSuggestion {
            id: format!("mock-{}-{}", i + 1, stamp_ms),
            platform_id: platform,
            idea,
        })
        .collect()
}

// --- 成長分析

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPhase {
    Nadir,
    Declining,
    Stagnant,
    Growing,
    Accelerating,
    Viral,
}

impl GrowthPhase {
    /// 月間成長率（%）からの決定的な判定: <0 declining, <1 stagnant, <3 growing, それ以外 accelerating
    pub fn from_monthly_growth(monthly: f64) -> Self {
        if monthly < 0.0 {
            Self::Declining
        } else if monthly < 1.0 {
            Self::Stagnant
        } else if monthly < 3.0 {
            Self::Growing
        } else {
            Self::Accelerating
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nadir => "nadir",
            Self::Declining => "declining",
            Self::Stagnant => "stagnant",
            Self::Growing => "growing",
            Self::Accelerating => "accelerating",
            Self::Viral => "viral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthBottleneck {
    pub issue: String,
    pub severity: Severity,
    pub impact: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthOpportunity {
    pub opportunity: String,
    pub effort: Effort,
    pub potential_impact: String,
    pub timeframe: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryPhase {
    pub name: String,
    pub actions: Vec<String>,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPlan {
    pub diagnosis: String,
    pub phase1: RecoveryPhase,
    pub phase2: RecoveryPhase,
    pub phase3: RecoveryPhase,
    pub expected_outcome: String,
}

impl RecoveryPlan {
    pub fn phases(&self) -> [&RecoveryPhase; 3] {
        [&self.phase1, &self.phase2, &self.phase3]
    }
}

/// モデルが返す成長分析（プラットフォームは呼び出し側が付ける）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthDiagnosis {
    pub current_phase: GrowthPhase,
    pub weekly_growth_rate: f64,
    pub monthly_growth_rate: f64,
    pub projected_followers30d: u64,
    pub projected_followers90d: u64,
    pub bottlenecks: Vec<GrowthBottleneck>,
    pub opportunities: Vec<GrowthOpportunity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_plan: Option<RecoveryPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAnalysis {
    pub platform_id: PlatformId,
    #[serde(flatten)]
    pub diagnosis: GrowthDiagnosis,
}

/// 成長分析の入力
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthInput {
    pub followers: u64,
    /// %
    pub weekly_growth: f64,
    /// %
    pub monthly_growth: f64,
    pub engagement_rate: f64,
    pub posts_per_week: u32,
}

/// これ未満の月間成長率はテコ入れが必要とみなす
const STRUGGLING_MONTHLY_GROWTH: f64 = 1.0;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scaled(followers: u64, factor: f64) -> u64 {
    round_half_up(followers as f64 * factor).max(0.0) as u64
}

impl GrowthDiagnosis {
    /// 入力だけから組み立てる決定的な分析
    pub fn fallback(input: &GrowthInput) -> Self {
        let struggling = input.monthly_growth < STRUGGLING_MONTHLY_GROWTH;
        let phase = GrowthPhase::from_monthly_growth(input.monthly_growth);
        let growth = 1.0 + input.monthly_growth / 100.0;

        let first_bottleneck = if struggling {
            GrowthBottleneck {
                issue: "Low posting consistency".to_string(),
                severity: Severity::Critical,
                impact: "Algorithm deprioritises inconsistent accounts".to_string(),
                solution: "Commit to posting 5x/week for 30 days — consistency rebuilds algorithmic trust"
                    .to_string(),
            }
        } else {
            GrowthBottleneck {
                issue: "Content format stagnation".to_string(),
                severity: Severity::Medium,
                impact: "Same format loses novelty with audience".to_string(),
                solution: "Introduce 1-2 new content formats (carousels, threads, polls) per week"
                    .to_string(),
            }
        };

        let diagnosis = if struggling {
            "Account is in a low-engagement cycle. The algorithm has likely reduced distribution due to inconsistent posting and declining engagement signals."
        } else {
            "Account is performing adequately but has significant untapped growth potential."
        };
        let expected_outcome = if struggling {
            format!(
                "Expected to move from {} to growing within 6-10 weeks, with {}-{} projected followers",
                phase.as_str(),
                scaled(input.followers, 1.15),
                scaled(input.followers, 1.30)
            )
        } else {
            format!(
                "Expected to accelerate growth to 4-6% monthly, reaching {} followers in 90 days",
                scaled(input.followers, 1.2)
            )
        };

        Self {
            current_phase: phase,
            weekly_growth_rate: input.weekly_growth,
            monthly_growth_rate: input.monthly_growth,
            projected_followers30d: scaled(input.followers, growth),
            projected_followers90d: scaled(input.followers, growth.powi(3)),
            bottlenecks: vec![
                first_bottleneck,
                GrowthBottleneck {
                    issue: "Under-leveraging replies and conversations".to_string(),
                    severity: Severity::High,
                    impact: "Missing the highest-weighted algorithm signal (author replies)".to_string(),
                    solution: "Reply to every comment within 60 minutes of posting — set up notifications"
                        .to_string(),
                },
            ],
            opportunities: vec![
                GrowthOpportunity {
                    opportunity: "Cross-platform content repurposing".to_string(),
                    effort: Effort::Medium,
                    potential_impact: "2-3x total reach across platforms".to_string(),
                    timeframe: "2-4 weeks to establish".to_string(),
                    steps: strings(&[
                        "Identify top-performing content from each platform",
                        "Adapt format for each target platform",
                        "Stagger posting times across platforms",
                        "Track cross-platform attribution",
                    ]),
                },
                GrowthOpportunity {
                    opportunity: "Engagement pod alternative: genuine community building".to_string(),
                    effort: Effort::High,
                    potential_impact: "Sustainable 5-10% monthly growth".to_string(),
                    timeframe: "1-3 months".to_string(),
                    steps: strings(&[
                        "Identify 20-30 accounts in your niche",
                        "Engage genuinely with their content daily",
                        "Start meaningful conversations in replies",
                        "Collaborate on content (guest posts, joint threads)",
                    ]),
                },
            ],
            recovery_plan: Some(RecoveryPlan {
                diagnosis: diagnosis.to_string(),
                phase1: RecoveryPhase {
                    name: "Foundation Reset".to_string(),
                    actions: strings(&[
                        "Post consistently at optimal times for 14 days straight",
                        "Engage with 15-20 accounts in your niche daily before posting",
                        "Reply to 100% of comments within 60 minutes",
                        "Avoid external links in main posts",
                    ]),
                    duration: "2 weeks".to_string(),
                },
                phase2: RecoveryPhase {
                    name: "Content Experimentation".to_string(),
                    actions: strings(&[
                        "Test 3 different content formats and track engagement",
                        "Post your best-performing format 2x per week",
                        "Start 1 thread per week on your deepest expertise",
                        "Begin cross-platform repurposing",
                    ]),
                    duration: "4 weeks".to_string(),
                },
                phase3: RecoveryPhase {
                    name: "Growth Acceleration".to_string(),
                    actions: strings(&[
                        "Double down on top 2 content formats",
                        "Launch a content series (weekly thread, daily tips)",
                        "Collaborate with 2-3 accounts in adjacent niches",
                        "Optimize posting schedule based on 6 weeks of data",
                    ]),
                    duration: "4 weeks".to_string(),
                },
                expected_outcome,
            }),
        }
    }
}

// --- 投稿最適化

pub const OPTIMIZE_UNAVAILABLE_NOTE: &str =
    "Unable to optimize — AI service unavailable. Try adding an API key in settings.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOptimization {
    pub optimized: String,
    pub changes: Vec<String>,
    pub predicted_lift: String,
}

impl PostOptimization {
    /// 下書きをそのまま返す
    pub fn unavailable(draft: &str) -> Self {
        Self {
            optimized: draft.to_string(),
            changes: vec![OPTIMIZE_UNAVAILABLE_NOTE.to_string()],
            predicted_lift: "N/A".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.optimized.trim().is_empty() {
            return Err(Error::schema("optimized post text must be non-empty"));
        }
        Ok(())
    }
}
