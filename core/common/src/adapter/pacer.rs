//! Pacer 実装（実際に待つ / 待たない）

use crate::ports::outbound::Pacer;
use std::thread;
use std::time::Duration;

/// thread::sleep で待つ Pacer
#[derive(Debug, Clone, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// 待たない Pacer（--fast・テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&self, _duration: Duration) {}
}
