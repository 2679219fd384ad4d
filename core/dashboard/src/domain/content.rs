//! 投稿のコンテンツ形式

use crate::domain::platform::PlatformId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Carousel,
    Reel,
    Short,
    Story,
    Thread,
    Article,
    Poll,
    Newsletter,
    Live,
}

impl ContentType {
    pub const ALL: [ContentType; 12] = [
        Self::Text,
        Self::Image,
        Self::Video,
        Self::Carousel,
        Self::Reel,
        Self::Short,
        Self::Story,
        Self::Thread,
        Self::Article,
        Self::Poll,
        Self::Newsletter,
        Self::Live,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Carousel => "carousel",
            Self::Reel => "reel",
            Self::Short => "short",
            Self::Story => "story",
            Self::Thread => "thread",
            Self::Article => "article",
            Self::Poll => "poll",
            Self::Newsletter => "newsletter",
            Self::Live => "live",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == lower)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// プラットフォームで伸びやすい形式（提案プロンプトの許容値にも使う）
pub fn optimal_content_types(platform: PlatformId) -> &'static [ContentType] {
    use ContentType::*;
    match platform {
        PlatformId::X => &[Text, Thread, Image, Video, Poll],
        PlatformId::Linkedin => &[Text, Carousel, Article, Poll, Video],
        PlatformId::Instagram => &[Reel, Carousel, Image, Story],
        PlatformId::Youtube => &[Video, Short],
        PlatformId::Tiktok => &[Reel, Video],
        PlatformId::Facebook => &[Text, Image, Video, Reel, Poll],
        PlatformId::Substack => &[Newsletter, Article],
        PlatformId::Threads | PlatformId::Bluesky => &[Text, Image, Thread],
        _ => &[Text, Image, Video],
    }
}
