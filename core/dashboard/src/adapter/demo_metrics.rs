//! シード付き乱数で組み立てるデモ用の MetricsSource 実装
//!
//! データは生成時に 1 度だけ作る。同じシードと基準時刻なら同じ内容になる。

use crate::domain::{
    AlertKind, ContentType, DashboardAlert, InteractionCounts, PlatformConnection, PlatformId,
    PlatformMetrics, PostAnalytics,
};
use crate::ports::outbound::MetricsSource;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use common::error::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// デモで連携済みにするアカウント（ユーザー名・フォロワー数）
const DEMO_ACCOUNTS: [(PlatformId, &str, u64); 6] = [
    (PlatformId::X, "yourhandle", 12_400),
    (PlatformId::Linkedin, "your-name", 8_200),
    (PlatformId::Instagram, "yourname", 15_600),
    (PlatformId::Youtube, "YourChannel", 3_200),
    (PlatformId::Tiktok, "yourname", 45_000),
    (PlatformId::Substack, "yournewsletter", 2_100),
];

/// 連携済みプラットフォームごとにテンプレート 1 件につき 1 投稿を作る
const POST_TEMPLATES: [(&str, ContentType); 8] = [
    ("Just shipped a major update to our product. Here's what changed and why it matters for your workflow:", ContentType::Text),
    ("The 5 biggest mistakes I see in content strategy (and how to fix each one):", ContentType::Thread),
    ("Behind the scenes of our latest campaign. The numbers surprised even us:", ContentType::Image),
    ("Unpopular opinion: Most growth hacks are just procrastination in disguise. Here's what actually works:", ContentType::Text),
    ("I analysed 500 viral posts in our niche. The pattern was unmistakable:", ContentType::Carousel),
    ("Quick tip that saved us 10 hours per week. Bookmark this:", ContentType::Text),
    ("The future of our industry in 3 charts. Thread:", ContentType::Thread),
    ("We A/B tested our content format for 90 days. The winner was clear:", ContentType::Video),
];

/// デモの通知（種類・タイトル・本文・プラットフォーム・何ミリ秒前か・既読）
const DEMO_ALERTS: [(AlertKind, &str, &str, PlatformId, u64, bool); 3] = [
    (
        AlertKind::Spike,
        "Engagement Spike",
        "Your latest thread is getting 3.5x normal engagement — consider replying to comments now to amplify reach",
        PlatformId::X,
        3_600_000,
        false,
    ),
    (
        AlertKind::Milestone,
        "Follower Milestone",
        "Congratulations! You passed 15,000 followers on Instagram",
        PlatformId::Instagram,
        86_400_000,
        false,
    ),
    (
        AlertKind::Tip,
        "Optimal Posting Window",
        "Your LinkedIn audience is most active in 2 hours — consider posting now",
        PlatformId::Linkedin,
        7_200_000,
        true,
    ),
];

/// 集計期間（日）
const WINDOW_DAYS: f64 = 30.0;

fn scale(base: u64, factor: f64) -> u64 {
    (base as f64 * factor).round() as u64
}

pub struct DemoMetricsSource {
    connections: Vec<PlatformConnection>,
    metrics: Vec<PlatformMetrics>,
    posts: Vec<PostAnalytics>,
    alerts: Vec<DashboardAlert>,
}

impl DemoMetricsSource {
    /// seed と基準時刻（UNIX ミリ秒）から組み立てる
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = DateTime::<Utc>::from_timestamp_millis(now_ms as i64).unwrap_or_default();
        let connections = demo_connections();
        let metrics = connections
            .iter()
            .filter(|c| c.connected)
            .map(|c| demo_metrics(&mut rng, c))
            .collect();
        let posts = demo_posts(&mut rng, &connections, now);
        Self {
            connections,
            metrics,
            posts,
            alerts: demo_alerts(now_ms),
        }
    }
}

fn demo_connections() -> Vec<PlatformConnection> {
    PlatformId::ALL
        .iter()
        .map(|&platform| {
            let demo = DEMO_ACCOUNTS.iter().find(|(id, _, _)| *id == platform);
            PlatformConnection {
                platform,
                connected: demo.is_some(),
                username: demo.map(|(_, name, _)| name.to_string()),
                followers: demo.map(|(_, _, followers)| *followers),
            }
        })
        .collect()
}

fn demo_alerts(now_ms: u64) -> Vec<DashboardAlert> {
    DEMO_ALERTS
        .iter()
        .enumerate()
        .map(|(i, (kind, title, message, platform, age_ms, read))| DashboardAlert {
            id: format!("alert-{}", i + 1),
            kind: *kind,
            title: title.to_string(),
            message: message.to_string(),
            platform: Some(*platform),
            timestamp_ms: now_ms.saturating_sub(*age_ms),
            read: *read,
        })
        .collect()
}

fn demo_metrics(rng: &mut StdRng, conn: &PlatformConnection) -> PlatformMetrics {
    let followers = conn.followers.unwrap_or(1000);
    let per_window = |daily: f64| scale(followers, daily * WINDOW_DAYS);
    PlatformMetrics {
        platform: conn.platform,
        followers,
        following: scale(followers, 0.15),
        total_posts: scale(followers, 0.03),
        counts: InteractionCounts {
            impressions: scale(followers, rng.gen_range(3.0..8.0)),
            reach: scale(followers, rng.gen_range(1.5..4.5)),
            likes: per_window(0.02),
            comments: per_window(0.003),
            shares: per_window(0.001),
            saves: per_window(0.002),
            clicks: per_window(0.005),
        },
        profile_views: per_window(0.01),
        follower_growth: scale(followers, 0.025),
        follower_growth_rate: rng.gen_range(2.0..5.0),
    }
}

fn demo_posts(
    rng: &mut StdRng,
    connections: &[PlatformConnection],
    now: DateTime<Utc>,
) -> Vec<PostAnalytics> {
    let mut posts = Vec::new();
    for conn in connections.iter().filter(|c| c.connected) {
        for (i, (text, content_type)) in POST_TEMPLATES.iter().enumerate() {
            let impressions = rng.gen_range(1000.0..21000.0_f64).round() as u64;
            let likes = scale(impressions, rng.gen_range(0.01..0.06));
            let comments = scale(likes, rng.gen_range(0.05..0.20));
            let shares = scale(likes, rng.gen_range(0.02..0.12));
            let saves = scale(likes, rng.gen_range(0.03..0.11));
            let clicks = scale(impressions, rng.gen_range(0.005..0.025));
            let published = now - Duration::days(2 * (i as i64 + 1));
            posts.push(PostAnalytics {
                id: format!("{}-{}", conn.platform, i),
                platform: conn.platform,
                content_type: *content_type,
                text: text.to_string(),
                published_at: published.to_rfc3339_opts(SecondsFormat::Millis, true),
                counts: InteractionCounts {
                    impressions,
                    reach: scale(impressions, 0.7),
                    likes,
                    comments,
                    shares,
                    saves,
                    clicks,
                },
                sentiment_score: rng.gen_range(0.3..0.8),
                hashtags: vec!["#growth".to_string(), "#strategy".to_string()],
            });
        }
    }
    // 同率は生成順を保つ
    posts.sort_by(|a, b| b.engagement_rate().total_cmp(&a.engagement_rate()));
    posts
}

impl MetricsSource for DemoMetricsSource {
    fn connections(&self) -> Result<Vec<PlatformConnection>, Error> {
        Ok(self.connections.clone())
    }

    fn platform_metrics(&self) -> Result<Vec<PlatformMetrics>, Error> {
        Ok(self.metrics.clone())
    }

    fn posts(&self, platform: Option<PlatformId>) -> Result<Vec<PostAnalytics>, Error> {
        Ok(self
            .posts
            .iter()
            .filter(|p| platform.map_or(true, |id| p.platform == id))
            .cloned()
            .collect())
    }

    fn alerts(&self) -> Result<Vec<DashboardAlert>, Error> {
        Ok(self.alerts.clone())
    }
}
