//! 時刻取得 Outbound ポート
//!
//! 提案 ID の採番やデモデータの基準時刻に使う。テストでは固定時刻を注入する。

pub trait Clock: Send + Sync {
    /// Unix epoch からのミリ秒
    fn now_ms(&self) -> u64;
}
