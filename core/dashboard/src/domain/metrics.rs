//! プラットフォーム指標と投稿分析
//!
//! エンゲージメント率は保持せず、カウンターから毎回導出する。

use crate::domain::content::ContentType;
use crate::domain::platform::PlatformId;
use crate::domain::scoring::engagement_rate;
use serde::Serialize;

/// エンゲージメント率の計算に使う生カウント
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionCounts {
    pub impressions: u64,
    pub reach: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    pub clicks: u64,
}

impl InteractionCounts {
    /// likes + comments + shares + saves（クリックは含まない）
    pub fn total_engagement(&self) -> u64 {
        self.likes + self.comments + self.shares + self.saves
    }
}

/// 連携済みアカウント
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformConnection {
    pub platform: PlatformId,
    pub connected: bool,
    pub username: Option<String>,
    pub followers: Option<u64>,
}

/// プラットフォーム単位のスナップショット
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformMetrics {
    pub platform: PlatformId,
    pub followers: u64,
    pub following: u64,
    pub total_posts: u64,
    pub counts: InteractionCounts,
    pub profile_views: u64,
    /// 純増数
    pub follower_growth: u64,
    /// 月間成長率（%）
    pub follower_growth_rate: f64,
}

impl PlatformMetrics {
    /// プラットフォーム別の式で導出（独立に設定できない）
    pub fn engagement_rate(&self) -> f64 {
        engagement_rate(self.platform, &self.counts)
    }
}

/// 1 投稿の分析
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostAnalytics {
    pub id: String,
    pub platform: PlatformId,
    pub content_type: ContentType,
    pub text: String,
    /// RFC 3339
    pub published_at: String,
    pub counts: InteractionCounts,
    /// -1.0〜1.0
    pub sentiment_score: f64,
    pub hashtags: Vec<String>,
}

/// これを超えるエンゲージメント率の投稿を上位扱いにする
pub const TOP_PERFORMING_RATE: f64 = 5.0;

impl PostAnalytics {
    pub fn engagement_rate(&self) -> f64 {
        engagement_rate(self.platform, &self.counts)
    }

    /// round(er × 15)。上限は設けない
    pub fn virality_score(&self) -> u64 {
        (self.engagement_rate() * 15.0).round() as u64
    }

    pub fn top_performing(&self) -> bool {
        self.engagement_rate() > TOP_PERFORMING_RATE
    }
}
