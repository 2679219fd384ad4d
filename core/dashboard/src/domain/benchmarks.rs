//! プラットフォーム別の基準値・アルゴリズムシグナル・運用ヒント
//!
//! 値は調整可能なプロダクト定数で、検証済みの統計ではない。

use crate::domain::platform::PlatformId;
use serde::Serialize;

/// プラットフォームの中央値的な基準
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformBenchmarks {
    pub platform: Option<PlatformId>,
    /// 平均エンゲージメント率（%）
    pub avg_engagement_rate: f64,
    pub avg_reach: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
    /// バイラルとみなすエンゲージメント率（%）
    pub viral_threshold: f64,
    /// 月間フォロワー成長率の基準（%）
    pub growth_rate_benchmark: f64,
}

const fn bench(
    platform: PlatformId,
    avg_engagement_rate: f64,
    avg_reach: f64,
    likes_comments_shares: (f64, f64, f64),
    viral_threshold: f64,
    growth_rate_benchmark: f64,
) -> PlatformBenchmarks {
    PlatformBenchmarks {
        platform: Some(platform),
        avg_engagement_rate,
        avg_reach,
        avg_likes: likes_comments_shares.0,
        avg_comments: likes_comments_shares.1,
        avg_shares: likes_comments_shares.2,
        viral_threshold,
        growth_rate_benchmark,
    }
}

static BENCHMARKS: [PlatformBenchmarks; 9] = [
    bench(PlatformId::X, 1.5, 500.0, (8.0, 1.0, 2.0), 10.0, 2.5),
    bench(PlatformId::Linkedin, 3.2, 1200.0, (25.0, 5.0, 3.0), 15.0, 3.0),
    bench(PlatformId::Facebook, 0.6, 300.0, (12.0, 2.0, 1.0), 5.0, 0.5),
    bench(PlatformId::Instagram, 4.7, 800.0, (50.0, 5.0, 3.0), 20.0, 3.5),
    bench(PlatformId::Youtube, 3.5, 2000.0, (40.0, 8.0, 5.0), 15.0, 2.0),
    bench(PlatformId::Tiktok, 5.9, 3000.0, (100.0, 10.0, 15.0), 25.0, 8.0),
    // 開封率
    bench(PlatformId::Substack, 35.0, 500.0, (10.0, 3.0, 2.0), 50.0, 5.0),
    bench(PlatformId::Threads, 2.5, 600.0, (15.0, 3.0, 2.0), 12.0, 4.0),
    bench(PlatformId::Bluesky, 3.8, 400.0, (12.0, 3.0, 4.0), 15.0, 5.0),
];

/// 個別の基準が無いプラットフォーム用
pub const GENERIC_BENCHMARKS: PlatformBenchmarks = PlatformBenchmarks {
    platform: None,
    avg_engagement_rate: 3.0,
    avg_reach: 500.0,
    avg_likes: 10.0,
    avg_comments: 2.0,
    avg_shares: 2.0,
    viral_threshold: 10.0,
    growth_rate_benchmark: 2.0,
};

/// 個別の基準があればそれを返す
pub fn benchmarks(platform: PlatformId) -> Option<&'static PlatformBenchmarks> {
    BENCHMARKS.iter().find(|b| b.platform == Some(platform))
}

/// 個別の基準、無ければ汎用の基準
pub fn benchmarks_or_generic(platform: PlatformId) -> PlatformBenchmarks {
    benchmarks(platform).copied().unwrap_or(GENERIC_BENCHMARKS)
}

/// ランキングに効くシグナル（weight は相対値。負はペナルティ）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlgorithmSignal {
    pub signal: &'static str,
    pub weight: f64,
    pub description: &'static str,
    pub how_to_optimize: &'static str,
}

const fn sig(
    signal: &'static str,
    weight: f64,
    description: &'static str,
    how_to_optimize: &'static str,
) -> AlgorithmSignal {
    AlgorithmSignal {
        signal,
        weight,
        description,
        how_to_optimize,
    }
}

static X_SIGNALS: [AlgorithmSignal; 10] = [
    sig("Reply from author", 1.0, "Author replying to comments (75x boost in ranking)", "Reply to every comment within the first hour"),
    sig("Replies received", 0.85, "Comments/replies trigger 13.5x weight", "End tweets with questions or controversial takes"),
    sig("Retweets", 0.55, "Retweets indicate share-worthiness", "Create content with a clear takeaway that people want to share"),
    sig("Bookmarks", 0.5, "Bookmarks signal high-value content", "Post frameworks, lists, and reference material"),
    sig("Likes", 0.3, "Baseline positive signal", "Relatable, agreeable content gets more likes"),
    sig("Dwell time", 0.4, "Time spent reading the tweet", "Write longer, formatted content with line breaks"),
    sig("Profile clicks", 0.45, "Clicking through to your profile", "Intrigue people enough to want to know more about you"),
    sig("External links", -0.3, "Links to external sites reduce distribution", "Put links in replies, not the main tweet"),
    sig("Premium status", 0.2, "Twitter Premium gives a visibility boost", "Subscribe to Premium for algorithmic priority"),
    sig("Engagement velocity", 0.7, "Speed of engagement in first 30-60 minutes", "Post when audience is online; engage with others first"),
];

static LINKEDIN_SIGNALS: [AlgorithmSignal; 8] = [
    sig("Comments", 1.0, "Comments are the strongest signal on LinkedIn", "Ask questions, share controversial professional takes"),
    sig("Dwell time", 0.9, "Time spent reading — \"golden hour\" of dwell time", "Write long-form posts with compelling hooks"),
    sig("Content quality classification", 0.85, "LinkedIn classifies posts as spam/low/high quality", "Avoid engagement bait, use natural language, provide value"),
    sig("Shares", 0.7, "Reshares amplify to new networks", "Create insight-rich content worth sharing with colleagues"),
    sig("Document/carousel posts", 0.6, "Carousel PDFs get higher distribution", "Create visual slide-style carousels for key insights"),
    sig("Reactions (beyond like)", 0.5, "Celebrate, love, insightful reactions weighted more", "Create content that evokes specific emotions"),
    sig("First-hour engagement", 0.8, "Engagement in first 60 minutes is critical", "Post at peak times and engage immediately with early commenters"),
    sig("Pod detection", -0.5, "LinkedIn detects engagement pods and penalises", "Avoid coordinated engagement groups"),
];

static INSTAGRAM_SIGNALS: [AlgorithmSignal; 8] = [
    sig("Saves", 1.0, "Saves are the strongest ranking signal on Instagram", "Create educational, reference-worthy content people want to revisit"),
    sig("Shares (DM + Stories)", 0.95, "Content shared via DM or to Stories is weighted highest", "Create relatable, shareable content formats"),
    sig("Comments", 0.7, "Genuine comments boost distribution", "Ask questions in captions, reply to every comment"),
    sig("Watch time (Reels)", 0.9, "Reel completion rate is critical for Reels distribution", "Hook viewers in first 1-3 seconds, keep Reels under 30s"),
    sig("Relationship closeness", 0.6, "Content from close connections shown first", "Build genuine relationships via DMs and consistent interaction"),
    sig("Content freshness", 0.5, "Newer content gets priority", "Post consistently at optimal times for your audience"),
    sig("Carousel engagement", 0.7, "Multiple-image carousels increase time-on-post", "Use 5-10 slide carousels with a hook on slide 1"),
    sig("Hashtags", 0.15, "Hashtags matter less than before but still help discoverability", "Use 5-10 relevant, specific hashtags — avoid generic ones"),
];

static YOUTUBE_SIGNALS: [AlgorithmSignal; 7] = [
    sig("Click-through rate (CTR)", 1.0, "Thumbnail + title CTR is the primary discovery signal", "A/B test thumbnails with high-contrast, emotional faces, minimal text"),
    sig("Average view duration", 0.95, "How long viewers watch determines ongoing distribution", "Front-load value, use pattern interrupts every 30-60 seconds"),
    sig("Session watch time", 0.8, "Does your video lead to more YouTube watching?", "Suggest next videos, create series, avoid sending viewers off-platform"),
    sig("Likes", 0.3, "Positive signal but lower weight than retention", "Ask viewers to like — direct CTAs work"),
    sig("Comments", 0.4, "Active comment sections signal engaging content", "Pin a question as first comment; reply to early comments"),
    sig("Subscribers from video", 0.5, "New subscribers signals high-value content", "Include subscribe CTA in first 30 seconds and end screen"),
    sig("Shorts completion rate", 0.9, "For Shorts: loop/completion rate is the primary signal", "Keep Shorts under 30s with a hook in first 2 seconds"),
];

static TIKTOK_SIGNALS: [AlgorithmSignal; 7] = [
    sig("Completion rate", 1.0, "Video watched to end (or looped) is the top signal", "Keep videos short (15-30s), start with immediate hook"),
    sig("Shares", 0.9, "Shares trigger rapid distribution to new audiences", "Create \"send this to...\" content that people forward to friends"),
    sig("Saves", 0.75, "Saves indicate high-value content", "Educational and tutorial content gets saved most"),
    sig("Comments", 0.65, "Comments signal engagement and controversy", "Include a \"hot take\" or question that compels response"),
    sig("Rewatches/loops", 0.85, "Multiple views of the same video = strong signal", "Create content that rewards rewatching (hidden details, fast info)"),
    sig("Trending sounds", 0.5, "Using trending audio gets distribution boost", "Monitor trending sounds and adapt them to your niche"),
    sig("Batch testing", 0.6, "TikTok shows to small batches first, then expands", "Optimise for first 200-500 views — early signals determine expansion"),
];

/// ランキングシグナル（x / linkedin / instagram / youtube / tiktok のみ）
pub fn algorithm_signals(platform: PlatformId) -> &'static [AlgorithmSignal] {
    match platform {
        PlatformId::X => &X_SIGNALS,
        PlatformId::Linkedin => &LINKEDIN_SIGNALS,
        PlatformId::Instagram => &INSTAGRAM_SIGNALS,
        PlatformId::Youtube => &YOUTUBE_SIGNALS,
        PlatformId::Tiktok => &TIKTOK_SIGNALS,
        _ => &[],
    }
}

/// バイラリティ推奨に 1 件だけ混ぜるプラットフォーム固有のヒント
pub fn platform_tips(platform: PlatformId) -> &'static [&'static str] {
    match platform {
        PlatformId::X => &[
            "Reply to every comment on your tweets within 60 minutes — author replies have 75x weight in the algorithm",
            "Post links in the first reply, not the main tweet — external links reduce distribution",
            "Use threads for complex topics — cumulative engagement boosts the hook tweet",
            "Engage with 10-15 accounts before posting to \"warm up\" the algorithm",
        ],
        PlatformId::Linkedin => &[
            "Use carousel/document posts — they get 3x more engagement than text-only",
            "Write a compelling first 2-3 lines — 80% of readers decide to click \"see more\" based on the hook",
            "Comment on 5-10 posts from your network before publishing to boost your visibility",
            "Avoid external links in the main post — put them in the first comment instead",
        ],
        PlatformId::Instagram => &[
            "Saves and shares now outweigh likes in the algorithm — create reference-worthy content",
            "Use carousel posts with 7-10 slides for maximum dwell time",
            "Post Reels with hooks in the first 1-3 seconds for Explore page distribution",
            "Reply to every comment and DM — relationship signals boost your visibility",
        ],
        PlatformId::Youtube => &[
            "Your thumbnail is 80% of the battle — test multiple versions and track CTR",
            "The first 30 seconds determine if viewers stay — front-load value and curiosity",
            "Post Shorts consistently to feed the long-form algorithm with new subscribers",
            "End videos with a question to boost comment engagement",
        ],
        PlatformId::Tiktok => &[
            "First 2 seconds are everything — start with motion, text, or a surprising statement",
            "Keep videos under 30 seconds for maximum completion rate",
            "Use trending sounds but add your unique niche spin",
            "Post 1-3 times daily for optimal algorithm consideration",
        ],
        PlatformId::Substack => &[
            "Your subject line determines open rate — A/B test different styles",
            "Cross-post Notes to build discovery through the Substack network",
            "Recommend other Substacks to get recommendation reciprocity",
            "Consistency matters more than frequency — weekly is better than sporadic",
        ],
        _ => &[],
    }
}

/// 一般的な投稿時間帯（UTC）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostingTimes {
    pub best_days: &'static [&'static str],
    pub best_hours_utc: &'static [u8],
    pub reasoning: &'static str,
}

pub fn posting_times(platform: PlatformId) -> Option<PostingTimes> {
    let (best_days, best_hours_utc, reasoning): (&[&str], &[u8], &str) = match platform {
        PlatformId::X => (
            &["Tuesday", "Wednesday", "Thursday"],
            &[8, 9, 12, 17, 18],
            "X engagement peaks during morning commute and evening wind-down. Mid-week sees highest activity.",
        ),
        PlatformId::Linkedin => (
            &["Tuesday", "Wednesday", "Thursday"],
            &[7, 8, 9, 12, 17],
            "LinkedIn is a professional platform — engagement peaks during work hours, especially early morning.",
        ),
        PlatformId::Instagram => (
            &["Monday", "Wednesday", "Friday"],
            &[11, 12, 17, 18, 19],
            "Instagram engagement peaks during lunch breaks and evening browsing.",
        ),
        PlatformId::Youtube => (
            &["Thursday", "Friday", "Saturday"],
            &[14, 15, 16, 17],
            "Publish in afternoon to build initial engagement before the evening viewing peak.",
        ),
        PlatformId::Tiktok => (
            &["Tuesday", "Thursday", "Friday"],
            &[10, 11, 14, 15, 19, 20],
            "TikTok has multiple daily peaks — morning, afternoon, and prime evening hours.",
        ),
        PlatformId::Facebook => (
            &["Wednesday", "Thursday", "Friday"],
            &[9, 10, 12, 13],
            "Facebook engagement is highest mid-morning to early afternoon during the work week.",
        ),
        PlatformId::Substack => (
            &["Tuesday", "Wednesday", "Thursday"],
            &[7, 8, 9],
            "Newsletter open rates peak in early morning when people check email.",
        ),
        _ => return None,
    };
    Some(PostingTimes {
        best_days,
        best_hours_utc,
        reasoning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_benchmarked_platforms() {
        let benchmarked: Vec<PlatformId> = PlatformId::ALL
            .iter()
            .copied()
            .filter(|p| benchmarks(*p).is_some())
            .collect();
        assert_eq!(benchmarked.len(), 9);
        assert_eq!(benchmarks(PlatformId::X).map(|b| b.avg_engagement_rate), Some(1.5));
        assert_eq!(benchmarks_or_generic(PlatformId::Vk), GENERIC_BENCHMARKS);
    }

    #[test]
    fn test_signals_and_tips_coverage() {
        assert_eq!(algorithm_signals(PlatformId::X).len(), 10);
        assert!(algorithm_signals(PlatformId::Substack).is_empty());
        assert_eq!(platform_tips(PlatformId::Substack).len(), 4);
        assert!(platform_tips(PlatformId::Facebook).is_empty());
        assert!(algorithm_signals(PlatformId::Linkedin).iter().any(|s| s.weight < 0.0));
    }

    #[test]
    fn test_tip_wording_is_kept_verbatim() {
        assert_eq!(
            platform_tips(PlatformId::X)[0],
            "Reply to every comment on your tweets within 60 minutes — author replies have 75x weight in the algorithm"
        );
        assert_eq!(
            posting_times(PlatformId::Tiktok).unwrap().reasoning,
            "TikTok has multiple daily peaks — morning, afternoon, and prime evening hours."
        );
    }

    #[test]
    fn test_posting_times() {
        let t = posting_times(PlatformId::Substack).unwrap();
        assert_eq!(t.best_hours_utc, &[7, 8, 9]);
        assert!(posting_times(PlatformId::Line).is_none());
    }
}
