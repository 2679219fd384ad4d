//! 「入力中…」の間合い（見た目だけ。状態遷移には影響しない）

use std::time::Duration;

pub const WELCOME_DELAY: Duration = Duration::from_millis(1000);
pub const FIRST_QUESTION_DELAY: Duration = Duration::from_millis(1500);
pub const AFTER_ANSWER_DELAY: Duration = Duration::from_millis(500);
pub const AFTER_ENCOURAGEMENT_DELAY: Duration = Duration::from_millis(2000);
pub const BEFORE_COMPLETION_DELAY: Duration = Duration::from_millis(1500);

const BOT_BASE_MS: u64 = 1000;
const BOT_PER_CHAR_MS: u64 = 10;
const BOT_MAX_MS: u64 = 2500;

/// bot メッセージを出すまでの待ち: min(1000 + 10 * 文字数, 2500) ms
pub fn bot_message_delay(text: &str) -> Duration {
    let len = text.chars().count() as u64;
    Duration::from_millis((BOT_BASE_MS + BOT_PER_CHAR_MS * len).min(BOT_MAX_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_message_delay_scales_then_caps() {
        assert_eq!(bot_message_delay(""), Duration::from_millis(1000));
        assert_eq!(bot_message_delay(&"a".repeat(50)), Duration::from_millis(1500));
        assert_eq!(bot_message_delay(&"a".repeat(150)), Duration::from_millis(2500));
        assert_eq!(bot_message_delay(&"a".repeat(1000)), Duration::from_millis(2500));
    }
}
