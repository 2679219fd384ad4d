//! 指標の取得元（デモデータ・実 API など差し替え可能）

use crate::domain::{DashboardAlert, PlatformConnection, PlatformId, PlatformMetrics, PostAnalytics};
use common::error::Error;

pub trait MetricsSource: Send + Sync {
    /// 連携済みアカウント
    fn connections(&self) -> Result<Vec<PlatformConnection>, Error>;

    /// 連携済みプラットフォームごとのスナップショット
    fn platform_metrics(&self) -> Result<Vec<PlatformMetrics>, Error>;

    /// 投稿一覧（エンゲージメント率の降順）。platform 指定時はそのプラットフォームのみ
    fn posts(&self, platform: Option<PlatformId>) -> Result<Vec<PostAnalytics>, Error>;

    /// 通知（既読を含む）
    fn alerts(&self) -> Result<Vec<DashboardAlert>, Error>;
}
