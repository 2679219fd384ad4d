//! 投稿の文字数上限

use crate::domain::platform::PlatformId;

/// 上限が決まっているプラットフォーム
pub const CHAR_LIMITS: [(PlatformId, usize); 6] = [
    (PlatformId::X, 280),
    (PlatformId::Linkedin, 3000),
    (PlatformId::Facebook, 63206),
    (PlatformId::Instagram, 2200),
    (PlatformId::Threads, 500),
    (PlatformId::Bluesky, 300),
];

/// 上の表に無いプラットフォームの上限
pub const DEFAULT_CHAR_LIMIT: usize = 5000;

pub fn char_limit(platform: PlatformId) -> usize {
    CHAR_LIMITS
        .iter()
        .find(|(id, _)| *id == platform)
        .map(|(_, limit)| *limit)
        .unwrap_or(DEFAULT_CHAR_LIMIT)
}

/// 下書きの文字数と上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharBudget {
    pub count: usize,
    pub limit: usize,
}

impl CharBudget {
    /// UTF-16 単位で数える（絵文字は 2）
    pub fn measure(platform: PlatformId, text: &str) -> Self {
        Self {
            count: text.encode_utf16().count(),
            limit: char_limit(platform),
        }
    }

    pub fn is_over_limit(&self) -> bool {
        self.count > self.limit
    }

    /// 超過分（収まっていれば 0）
    pub fn overflow(&self) -> usize {
        self.count.saturating_sub(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_limit_table_and_default() {
        assert_eq!(char_limit(PlatformId::X), 280);
        assert_eq!(char_limit(PlatformId::Facebook), 63206);
        assert_eq!(char_limit(PlatformId::Bluesky), 300);
        assert_eq!(char_limit(PlatformId::Tiktok), DEFAULT_CHAR_LIMIT);
        assert_eq!(char_limit(PlatformId::Substack), 5000);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let at_limit = CharBudget::measure(PlatformId::X, &"a".repeat(280));
        assert_eq!(at_limit.count, 280);
        assert!(!at_limit.is_over_limit());
        assert_eq!(at_limit.overflow(), 0);

        let over = CharBudget::measure(PlatformId::X, &"a".repeat(281));
        assert!(over.is_over_limit());
        assert_eq!(over.overflow(), 1);
    }

    #[test]
    fn test_counts_utf16_units() {
        let b = CharBudget::measure(PlatformId::Threads, "héllo 🚀");
        assert_eq!(b.count, 8);
        assert_eq!(b.limit, 500);
    }
}
