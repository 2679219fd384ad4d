//! TipPicker 実装（本番は乱数、テストは固定位置）

use crate::ports::outbound::TipPicker;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// 一様に 1 件選ぶ
pub struct RandomTipPicker {
    rng: Mutex<StdRng>,
}

impl RandomTipPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TipPicker for RandomTipPicker {
    fn pick(&self, tips: &[&'static str]) -> Option<&'static str> {
        // poison 時も乱数状態を引き継ぐ
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tips.choose(&mut *rng).copied()
    }
}

/// 常に index 番目（範囲外なら末尾）を選ぶ
pub struct FixedTipPicker {
    index: usize,
}

impl FixedTipPicker {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl TipPicker for FixedTipPicker {
    fn pick(&self, tips: &[&'static str]) -> Option<&'static str> {
        tips.get(self.index).or_else(|| tips.last()).copied()
    }
}
