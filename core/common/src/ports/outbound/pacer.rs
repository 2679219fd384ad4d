//! 演出用の待機 Outbound ポート
//!
//! 「入力中…」の間合いなど見た目だけの遅延。状態遷移はこの trait に依存しない。

use std::time::Duration;

/// 待機の抽象
///
/// 実装は `common::adapter::ThreadPacer`（実際に sleep）と `NoPacer`（即時）。
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}
