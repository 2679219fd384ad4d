//! エンゲージメント率・バイラリティスコア・エンゲージメント速度
//!
//! すべて純粋関数。重みと係数は調整可能なプロダクト定数として扱う。

use crate::domain::benchmarks::PlatformBenchmarks;
use crate::domain::metrics::{InteractionCounts, PostAnalytics};
use crate::domain::platform::PlatformId;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- エンゲージメント率

/// 分母に使うカウント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    Impressions,
    Reach,
}

/// プラットフォーム別の線形重み
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateWeights {
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub saves: f64,
    pub clicks: f64,
    pub denominator: Denominator,
}

const fn weights(
    comments: f64,
    shares: f64,
    saves: f64,
    clicks: f64,
    denominator: Denominator,
) -> RateWeights {
    RateWeights {
        likes: 1.0,
        comments,
        shares,
        saves,
        clicks,
        denominator,
    }
}

pub fn rate_weights(platform: PlatformId) -> RateWeights {
    use Denominator::{Impressions, Reach};
    match platform {
        PlatformId::X => weights(2.0, 2.0, 1.5, 1.0, Impressions),
        PlatformId::Linkedin => weights(3.0, 2.5, 0.0, 0.5, Impressions),
        PlatformId::Facebook => weights(2.5, 3.0, 0.0, 0.5, Reach),
        PlatformId::Instagram => weights(2.0, 3.0, 3.0, 0.0, Reach),
        PlatformId::Youtube => weights(2.0, 2.0, 0.0, 0.0, Impressions),
        PlatformId::Tiktok => weights(1.5, 3.0, 2.0, 0.0, Impressions),
        PlatformId::Substack => weights(2.0, 0.0, 0.0, 1.5, Reach),
        PlatformId::Threads => weights(2.5, 2.0, 0.0, 0.0, Impressions),
        PlatformId::Bluesky => weights(2.0, 2.0, 0.0, 0.0, Impressions),
        _ => weights(2.0, 2.0, 1.0, 0.5, Impressions),
    }
}

/// 重み付きインタラクション / 分母 × 100。分母が 0 なら 0
pub fn engagement_rate(platform: PlatformId, counts: &InteractionCounts) -> f64 {
    let w = rate_weights(platform);
    let denominator = match w.denominator {
        Denominator::Impressions => counts.impressions,
        Denominator::Reach => counts.reach,
    };
    if denominator == 0 {
        return 0.0;
    }
    let weighted = counts.likes as f64 * w.likes
        + counts.comments as f64 * w.comments
        + counts.shares as f64 * w.shares
        + counts.saves as f64 * w.saves
        + counts.clicks as f64 * w.clicks;
    weighted / denominator as f64 * 100.0
}

// --- バイラリティスコア

/// 要因の重み（%）。Engagement Rate, Amplification Ratio, Save/Bookmark Rate,
/// Conversation Depth, Reach Multiplier の順
pub const FACTOR_WEIGHT_PERCENT: [u32; 5] = [25, 30, 15, 15, 15];

const _: () = {
    let mut sum = 0;
    let mut i = 0;
    while i < FACTOR_WEIGHT_PERCENT.len() {
        sum += FACTOR_WEIGHT_PERCENT[i];
        i += 1;
    }
    assert!(sum == 100, "virality factor weights must sum to 100%");
};

/// 比率・ベンチマークの分母の下限
const MIN_BENCHMARK_RATE: f64 = 0.01;
const MIN_BENCHMARK_REACH: f64 = 1.0;

/// 推奨に含める要因スコアの上限（これ未満を弱点とみなす）
const WEAK_FACTOR_SCORE: f64 = 60.0;
const MAX_FACTOR_TIPS: usize = 3;

pub const GENERIC_RECOMMENDATION: &str =
    "Keep creating consistent, high-quality content — your metrics are strong";

fn factor_weight(index: usize) -> f64 {
    FACTOR_WEIGHT_PERCENT[index] as f64 / 100.0
}

/// low / moderate / high / viral
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViralityLevel {
    Low,
    Moderate,
    High,
    Viral,
}

impl ViralityLevel {
    /// 丸め済みスコアに対する閾値（≥80 viral, ≥55 high, ≥30 moderate）
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Viral,
            55..=79 => Self::High,
            30..=54 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Viral => "viral",
        }
    }
}

impl fmt::Display for ViralityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViralityFactor {
    pub name: &'static str,
    /// 0〜100
    pub score: f64,
    pub weight: f64,
    pub description: String,
    pub improvement_tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViralityAnalysis {
    /// 0〜100
    pub overall_score: u32,
    pub factors: Vec<ViralityFactor>,
    pub prediction: ViralityLevel,
    pub recommendations: Vec<String>,
    /// ベンチマーク比（%、符号付き）
    pub benchmark_comparison: i64,
}

/// Math.round 相当（.5 は正の方向へ）
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// 5 要因を算出する（順序は FACTOR_WEIGHT_PERCENT と同じ）
pub fn virality_factors(post: &PostAnalytics, benchmarks: &PlatformBenchmarks) -> Vec<ViralityFactor> {
    let er = post.engagement_rate();
    let bench_er = benchmarks.avg_engagement_rate;
    let engagement_ratio = er / bench_er.max(MIN_BENCHMARK_RATE);

    let c = &post.counts;
    let total = c.total_engagement();
    let share_ratio = ratio(c.shares, total);
    let save_ratio = ratio(c.saves, total);
    let comment_ratio = ratio(c.comments, total);
    let reach_multiplier = c.reach as f64 / benchmarks.avg_reach.max(MIN_BENCHMARK_REACH);

    vec![
        ViralityFactor {
            name: "Engagement Rate",
            score: (engagement_ratio * 50.0).min(100.0),
            weight: factor_weight(0),
            description: format!("{:.2}% vs {:.2}% benchmark", er, bench_er),
            improvement_tip: if engagement_ratio < 1.0 {
                "Try asking questions or including a clear call-to-action to boost engagement"
            } else {
                "Strong engagement — keep using this content format"
            },
        },
        ViralityFactor {
            name: "Amplification Ratio",
            score: (share_ratio * 300.0).min(100.0),
            weight: factor_weight(1),
            description: format!("{:.1}% of engagement is shares/retweets", share_ratio * 100.0),
            improvement_tip: if share_ratio < 0.1 {
                "Create more \"share-worthy\" content: surprising stats, relatable takes, or useful frameworks"
            } else {
                "Your content is being actively shared — this is the strongest virality signal"
            },
        },
        ViralityFactor {
            name: "Save/Bookmark Rate",
            score: (save_ratio * 400.0).min(100.0),
            weight: factor_weight(2),
            description: format!("{:.1}% of engagement is saves/bookmarks", save_ratio * 100.0),
            improvement_tip: if save_ratio < 0.05 {
                "Add practical, reference-worthy content (lists, frameworks, how-tos) that people want to revisit"
            } else {
                "High save rate indicates your content has lasting value — algorithms love this"
            },
        },
        ViralityFactor {
            name: "Conversation Depth",
            score: (comment_ratio * 250.0).min(100.0),
            weight: factor_weight(3),
            description: format!("{:.1}% of engagement is comments/replies", comment_ratio * 100.0),
            improvement_tip: if comment_ratio < 0.1 {
                "End posts with a question or controversial (but thoughtful) take to spark discussion"
            } else {
                "Great conversation generation — reply to comments to multiply this effect"
            },
        },
        ViralityFactor {
            name: "Reach Multiplier",
            score: (reach_multiplier * 33.0).min(100.0),
            weight: factor_weight(4),
            description: format!("{:.1}x your average reach", reach_multiplier),
            improvement_tip: if reach_multiplier < 1.0 {
                "Post during peak hours and engage with others before posting to warm up algorithmic distribution"
            } else {
                "Above-average reach — the algorithm is amplifying this content"
            },
        },
    ]
}

/// 重み付き寄与の小さい順に最大 3 要因（スコア 60 未満のみ）のヒント + プラットフォームのヒント 1 件
pub fn recommendations(factors: &[ViralityFactor], platform_tip: Option<&str>) -> Vec<String> {
    let mut sorted: Vec<&ViralityFactor> = factors.iter().collect();
    sorted.sort_by(|a, b| (a.score * a.weight).total_cmp(&(b.score * b.weight)));

    let mut out: Vec<String> = sorted
        .iter()
        .take(MAX_FACTOR_TIPS)
        .filter(|f| f.score < WEAK_FACTOR_SCORE)
        .map(|f| f.improvement_tip.to_string())
        .collect();
    if let Some(tip) = platform_tip {
        out.push(tip.to_string());
    }
    if out.is_empty() {
        out.push(GENERIC_RECOMMENDATION.to_string());
    }
    out
}

/// round((er − bench) / max(bench, 0.01) × 100)
pub fn benchmark_comparison(engagement_rate: f64, benchmark_rate: f64) -> i64 {
    round_half_up((engagement_rate - benchmark_rate) / benchmark_rate.max(MIN_BENCHMARK_RATE) * 100.0)
        as i64
}

/// 投稿のバイラリティ分析。platform_tip は呼び出し側が選ぶ（TipPicker 経由）
pub fn virality_score(
    post: &PostAnalytics,
    benchmarks: &PlatformBenchmarks,
    platform_tip: Option<&str>,
) -> ViralityAnalysis {
    let factors = virality_factors(post, benchmarks);
    let weighted: f64 = factors.iter().map(|f| f.score * f.weight).sum();
    let overall_score = round_half_up(weighted).clamp(0.0, 100.0) as u32;
    let recommendations = recommendations(&factors, platform_tip);
    ViralityAnalysis {
        overall_score,
        prediction: ViralityLevel::from_score(overall_score),
        benchmark_comparison: benchmark_comparison(
            post.engagement_rate(),
            benchmarks.avg_engagement_rate,
        ),
        factors,
        recommendations,
    }
}

// --- エンゲージメント速度

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngagementSample {
    pub minutes_elapsed: f64,
    pub cumulative_engagement: f64,
}

impl EngagementSample {
    pub fn new(minutes_elapsed: f64, cumulative_engagement: f64) -> Self {
        Self {
            minutes_elapsed,
            cumulative_engagement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementVelocity {
    pub minutes_elapsed: f64,
    pub cumulative_engagement: f64,
    /// 1 分あたりのエンゲージメント
    pub velocity: f64,
    pub is_accelerating: bool,
}

/// 各点の速度（直前の点との差分 / 経過分、最初の点は原点と比較）と加速フラグ。
/// 経過分が 0 以下なら速度 0。先頭 2 点は比較対象が無いので加速しない。
pub fn engagement_velocity(samples: &[EngagementSample]) -> Vec<EngagementVelocity> {
    let origin = EngagementSample::new(0.0, 0.0);
    let mut out: Vec<EngagementVelocity> = Vec::with_capacity(samples.len());
    for (i, point) in samples.iter().enumerate() {
        let prev = if i > 0 { samples[i - 1] } else { origin };
        let dt = point.minutes_elapsed - prev.minutes_elapsed;
        let velocity = if dt > 0.0 {
            (point.cumulative_engagement - prev.cumulative_engagement) / dt
        } else {
            0.0
        };
        let is_accelerating = i >= 2 && out.last().map_or(false, |p| velocity > p.velocity);
        out.push(EngagementVelocity {
            minutes_elapsed: point.minutes_elapsed,
            cumulative_engagement: point.cumulative_engagement,
            velocity,
            is_accelerating,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmarks::{benchmarks_or_generic, GENERIC_BENCHMARKS};
    use crate::domain::content::ContentType;

    fn counts(impressions: u64, reach: u64, l: u64, c: u64, sh: u64, sv: u64, cl: u64) -> InteractionCounts {
        InteractionCounts {
            impressions,
            reach,
            likes: l,
            comments: c,
            shares: sh,
            saves: sv,
            clicks: cl,
        }
    }

    fn post(platform: PlatformId, counts: InteractionCounts) -> PostAnalytics {
        PostAnalytics {
            id: "x-0".to_string(),
            platform,
            content_type: ContentType::Text,
            text: "t".to_string(),
            published_at: "2026-01-01T00:00:00Z".to_string(),
            counts,
            sentiment_score: 0.4,
            hashtags: vec![],
        }
    }

    #[test]
    fn test_engagement_rate_x_example() {
        let er = engagement_rate(PlatformId::X, &counts(1000, 0, 20, 5, 3, 2, 0));
        assert!((er - 3.9).abs() < 1e-9, "er = {}", er);
    }

    #[test]
    fn test_engagement_rate_platform_formulas() {
        let c = counts(1000, 500, 10, 10, 10, 10, 10);
        let cases = [
            (PlatformId::X, 75.0 / 1000.0),
            (PlatformId::Linkedin, 70.0 / 1000.0),
            (PlatformId::Facebook, 70.0 / 500.0),
            (PlatformId::Instagram, 90.0 / 500.0),
            (PlatformId::Youtube, 50.0 / 1000.0),
            (PlatformId::Tiktok, 75.0 / 1000.0),
            (PlatformId::Substack, 45.0 / 500.0),
            (PlatformId::Threads, 55.0 / 1000.0),
            (PlatformId::Bluesky, 50.0 / 1000.0),
            (PlatformId::Reddit, 65.0 / 1000.0),
        ];
        for (platform, expected) in cases {
            let er = engagement_rate(platform, &c);
            assert!((er - expected * 100.0).abs() < 1e-9, "{}: {}", platform, er);
        }
    }

    #[test]
    fn test_engagement_rate_zero_denominator_is_zero() {
        let busy = counts(0, 0, 50, 40, 30, 20, 10);
        for platform in PlatformId::ALL {
            assert_eq!(engagement_rate(platform, &busy), 0.0, "{}", platform);
        }
        // reach 分母のプラットフォームは impressions があっても reach = 0 なら 0
        let no_reach = counts(1000, 0, 50, 40, 30, 20, 10);
        assert_eq!(engagement_rate(PlatformId::Facebook, &no_reach), 0.0);
        assert_eq!(engagement_rate(PlatformId::Instagram, &no_reach), 0.0);
        assert_eq!(engagement_rate(PlatformId::Substack, &no_reach), 0.0);
    }

    #[test]
    fn test_engagement_rate_monotonic_in_each_interaction() {
        let base = counts(2000, 1500, 30, 8, 5, 4, 12);
        for platform in PlatformId::ALL {
            let before = engagement_rate(platform, &base);
            let bumped = [
                InteractionCounts { likes: base.likes + 7, ..base },
                InteractionCounts { comments: base.comments + 7, ..base },
                InteractionCounts { shares: base.shares + 7, ..base },
                InteractionCounts { saves: base.saves + 7, ..base },
                InteractionCounts { clicks: base.clicks + 7, ..base },
            ];
            for c in bumped {
                assert!(engagement_rate(platform, &c) >= before, "{} {:?}", platform, c);
            }
        }
    }

    #[test]
    fn test_factor_weights_sum_to_one() {
        let sum: u32 = FACTOR_WEIGHT_PERCENT.iter().sum();
        assert_eq!(sum, 100);
        let p = post(PlatformId::X, counts(1000, 500, 10, 2, 3, 1, 0));
        let factors = virality_factors(&p, &benchmarks_or_generic(PlatformId::X));
        let weight_sum: f64 = factors.iter().map(|f| f.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-12);
        let names: Vec<&str> = factors.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Engagement Rate",
                "Amplification Ratio",
                "Save/Bookmark Rate",
                "Conversation Depth",
                "Reach Multiplier"
            ]
        );
    }

    #[test]
    fn test_prediction_boundaries() {
        assert_eq!(ViralityLevel::from_score(100), ViralityLevel::Viral);
        assert_eq!(ViralityLevel::from_score(80), ViralityLevel::Viral);
        assert_eq!(ViralityLevel::from_score(79), ViralityLevel::High);
        assert_eq!(ViralityLevel::from_score(55), ViralityLevel::High);
        assert_eq!(ViralityLevel::from_score(54), ViralityLevel::Moderate);
        assert_eq!(ViralityLevel::from_score(30), ViralityLevel::Moderate);
        assert_eq!(ViralityLevel::from_score(29), ViralityLevel::Low);
        assert_eq!(ViralityLevel::from_score(0), ViralityLevel::Low);
    }

    #[test]
    fn test_engineered_scores_hit_boundaries() {
        // 汎用基準（er 3.0, reach 500）で、シェア比のみが寄与する投稿:
        // total = 100, shares = s -> amplification = min(100, s * 3) * 0.30
        let bench = GENERIC_BENCHMARKS;
        let score_for = |shares: u64| {
            let p = post(PlatformId::Reddit, counts(0, 0, 100 - shares, 0, shares, 0, 0));
            virality_score(&p, &bench, None)
        };
        // shares = 10 -> 30 * 0.30 = 9 -> low
        let a = score_for(10);
        assert_eq!(a.overall_score, 9);
        assert_eq!(a.prediction, ViralityLevel::Low);
        // shares = 34 -> 100 * 0.30 = 30 -> moderate
        let b = score_for(34);
        assert_eq!(b.overall_score, 30);
        assert_eq!(b.prediction, ViralityLevel::Moderate);
    }

    #[test]
    fn test_rounding_happens_before_level_thresholds() {
        // reach スコア = reach / 330 * 33 = reach / 10 なので reach で 0.15 刻みの微調整ができる
        let bench = PlatformBenchmarks {
            avg_engagement_rate: 1.0,
            avg_reach: 330.0,
            ..GENERIC_BENCHMARKS
        };
        let raw_total = |a: &ViralityAnalysis| a.factors.iter().map(|f| f.score * f.weight).sum::<f64>();
        let cases = [
            // er 14% (満点 25) + シェア (30) + 保存 (15) = 70
            (counts(1000, 640, 30, 0, 40, 30, 0), 79.6, 80, ViralityLevel::Viral),
            (counts(1000, 620, 30, 0, 40, 30, 0), 79.3, 79, ViralityLevel::High),
            // シェア (30) + 保存 (15) = 45
            (counts(0, 640, 30, 0, 40, 30, 0), 54.6, 55, ViralityLevel::High),
            (counts(0, 620, 30, 0, 40, 30, 0), 54.3, 54, ViralityLevel::Moderate),
            // 保存 (15) のみ
            (counts(0, 980, 70, 0, 0, 30, 0), 29.7, 30, ViralityLevel::Moderate),
            (counts(0, 960, 70, 0, 0, 30, 0), 29.4, 29, ViralityLevel::Low),
        ];
        for (c, raw, score, level) in cases {
            let a = virality_score(&post(PlatformId::Reddit, c), &bench, None);
            assert!((raw_total(&a) - raw).abs() < 1e-9, "{:?}: raw {}", c, raw_total(&a));
            assert_eq!(a.overall_score, score, "{:?}", c);
            assert_eq!(a.prediction, level, "{:?}", c);
        }
    }

    #[test]
    fn test_overall_score_in_range_and_maxes_out() {
        let bench = benchmarks_or_generic(PlatformId::Instagram);
        // reach 分母: (2*400 + 3*350 + 3*250) / 3000 = 86.7%、reach は基準の 3.75 倍
        let strong = post(PlatformId::Instagram, counts(5000, 3000, 0, 400, 350, 250, 0));
        let a = virality_score(&strong, &bench, None);
        assert!(a.overall_score <= 100);
        assert_eq!(a.factors.iter().filter(|f| f.score == 100.0).count(), 5);
        assert_eq!(a.overall_score, 100);
        assert_eq!(a.prediction, ViralityLevel::Viral);
        assert_eq!(a.recommendations, vec![GENERIC_RECOMMENDATION.to_string()]);

        let empty = post(PlatformId::Instagram, InteractionCounts::default());
        let b = virality_score(&empty, &bench, None);
        assert_eq!(b.overall_score, 0);
        assert_eq!(b.prediction, ViralityLevel::Low);
        assert_eq!(b.benchmark_comparison, -100);
    }

    #[test]
    fn test_zero_benchmarks_do_not_divide_by_zero() {
        let bench = PlatformBenchmarks {
            avg_engagement_rate: 0.0,
            avg_reach: 0.0,
            ..GENERIC_BENCHMARKS
        };
        let p = post(PlatformId::Youtube, counts(1000, 800, 20, 5, 5, 0, 0));
        let a = virality_score(&p, &bench, None);
        assert!(a.factors.iter().all(|f| f.score.is_finite()));
        assert!(a.overall_score <= 100);
        // er = 4% / 下限 0.01 -> +40000%
        assert_eq!(a.benchmark_comparison, 40000);
    }

    #[test]
    fn test_recommendations_weakest_first_then_platform_tip() {
        // シェアも保存もコメントも無い: 弱い 3 要因は amplification, save, conversation
        let p = post(PlatformId::X, counts(1000, 2000, 50, 0, 0, 0, 0));
        let a = virality_score(&p, &benchmarks_or_generic(PlatformId::X), Some("platform tip"));
        assert_eq!(a.recommendations.len(), 4);
        assert!(a.recommendations[0].starts_with("Create more \"share-worthy\""));
        assert!(a.recommendations[1].starts_with("Add practical"));
        assert!(a.recommendations[2].starts_with("End posts with a question"));
        assert_eq!(a.recommendations[3], "platform tip");
    }

    #[test]
    fn test_strong_factor_tips_keep_dashes() {
        let p = post(PlatformId::Instagram, counts(5000, 3000, 0, 400, 350, 250, 0));
        let factors = virality_factors(&p, &benchmarks_or_generic(PlatformId::Instagram));
        assert_eq!(factors[0].improvement_tip, "Strong engagement — keep using this content format");
        assert_eq!(factors[4].improvement_tip, "Above-average reach — the algorithm is amplifying this content");
        assert_eq!(
            GENERIC_RECOMMENDATION,
            "Keep creating consistent, high-quality content — your metrics are strong"
        );
    }

    #[test]
    fn test_benchmark_comparison_rounding() {
        assert_eq!(benchmark_comparison(3.0, 1.5), 100);
        assert_eq!(benchmark_comparison(1.5, 3.0), -50);
        assert_eq!(benchmark_comparison(2.0, 2.0), 0);
    }

    #[test]
    fn test_engagement_velocity_example() {
        let samples = [
            EngagementSample::new(0.0, 0.0),
            EngagementSample::new(10.0, 50.0),
            EngagementSample::new(20.0, 90.0),
        ];
        let v = engagement_velocity(&samples);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].velocity, 0.0);
        assert!(!v[0].is_accelerating);
        assert_eq!(v[1].velocity, 5.0);
        assert!(!v[1].is_accelerating);
        assert_eq!(v[2].velocity, 4.0);
        assert!(!v[2].is_accelerating);
        assert_eq!(v[2].cumulative_engagement, 90.0);
    }

    #[test]
    fn test_engagement_velocity_acceleration_and_zero_delta() {
        let samples = [
            EngagementSample::new(5.0, 10.0),
            EngagementSample::new(10.0, 20.0),
            EngagementSample::new(15.0, 50.0),
            EngagementSample::new(15.0, 60.0),
        ];
        let v = engagement_velocity(&samples);
        // 先頭は原点と比較
        assert_eq!(v[0].velocity, 2.0);
        assert_eq!(v[1].velocity, 2.0);
        assert_eq!(v[2].velocity, 6.0);
        assert!(v[2].is_accelerating);
        assert_eq!(v[3].velocity, 0.0);
        assert!(!v[3].is_accelerating);
        assert!(engagement_velocity(&[]).is_empty());
    }
}
