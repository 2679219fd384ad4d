//! ダッシュボードの通知

use crate::domain::platform::PlatformId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Spike,
    Milestone,
    Tip,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spike => "spike",
            Self::Milestone => "milestone",
            Self::Tip => "tip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardAlert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub platform: Option<PlatformId>,
    /// UNIX ミリ秒
    pub timestamp_ms: u64,
    pub read: bool,
}

/// 未読のものを新しい順に最大 limit 件
pub fn recent_unread(alerts: &[DashboardAlert], limit: usize) -> Vec<DashboardAlert> {
    let mut unread: Vec<DashboardAlert> = alerts.iter().filter(|a| !a.read).cloned().collect();
    // 同時刻は元の順を保つ
    unread.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));
    unread.truncate(limit);
    unread
}
