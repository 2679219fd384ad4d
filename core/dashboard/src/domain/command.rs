//! pulse コマンドの enum（Command Pattern）

use crate::domain::content::ContentType;
use crate::domain::platform::{PlatformCategory, PlatformId};
use crate::domain::scoring::EngagementSample;

/// pulse の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// ヘルプ表示
    Help,
    /// プロバイダ状態の表示
    Status,
    /// 連携アカウントとプラットフォーム別の指標
    Overview,
    /// プラットフォーム一覧（地域・カテゴリで絞り込み）
    Platforms {
        region: Option<String>,
        category: Option<PlatformCategory>,
    },
    /// 投稿一覧（エンゲージメント率の降順）
    Posts {
        platform: Option<PlatformId>,
        limit: Option<usize>,
    },
    /// 1 投稿のバイラリティ分析
    Score { post_id: String },
    /// 累積エンゲージメントの時系列から速度を出す
    Velocity { samples: Vec<EngagementSample> },
    /// アルゴリズムのシグナル・ヒント・推奨投稿時間
    Tips { platform: PlatformId },
    /// コンテンツ提案
    Suggest {
        platform: PlatformId,
        niche: String,
        tone: String,
    },
    /// 成長分析（指定が無い値は指標ソースから補う）
    Growth {
        platform: PlatformId,
        followers: Option<u64>,
        monthly_growth: Option<f64>,
        posts_per_week: Option<u32>,
    },
    /// 下書きの最適化
    Optimize {
        platform: PlatformId,
        content_type: ContentType,
        draft: String,
    },
}
