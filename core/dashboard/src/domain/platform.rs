//! 対応プラットフォームの静的レジストリ
//!
//! 19 のプラットフォーム ID と表示用メタデータ。起動時から変わらない設定データ。

use serde::{Deserialize, Serialize};
use std::fmt;

/// プラットフォーム ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    X,
    Linkedin,
    Facebook,
    Instagram,
    Youtube,
    Tiktok,
    Substack,
    Threads,
    Bluesky,
    Mastodon,
    Snapchat,
    Telegram,
    Wechat,
    Weibo,
    Vk,
    Whatsapp,
    Line,
    Reddit,
    Pinterest,
}

impl PlatformId {
    pub const ALL: [PlatformId; 19] = [
        Self::X,
        Self::Linkedin,
        Self::Facebook,
        Self::Instagram,
        Self::Youtube,
        Self::Tiktok,
        Self::Substack,
        Self::Threads,
        Self::Bluesky,
        Self::Mastodon,
        Self::Snapchat,
        Self::Telegram,
        Self::Wechat,
        Self::Weibo,
        Self::Vk,
        Self::Whatsapp,
        Self::Line,
        Self::Reddit,
        Self::Pinterest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Substack => "substack",
            Self::Threads => "threads",
            Self::Bluesky => "bluesky",
            Self::Mastodon => "mastodon",
            Self::Snapchat => "snapchat",
            Self::Telegram => "telegram",
            Self::Wechat => "wechat",
            Self::Weibo => "weibo",
            Self::Vk => "vk",
            Self::Whatsapp => "whatsapp",
            Self::Line => "line",
            Self::Reddit => "reddit",
            Self::Pinterest => "pinterest",
        }
    }

    /// 文字列から解析（大文字小文字は区別しない。"twitter" は x の別名）
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower == "twitter" {
            return Some(Self::X);
        }
        Self::ALL.iter().copied().find(|id| id.as_str() == lower)
    }

    /// 静的メタデータ
    pub fn config(&self) -> &'static PlatformConfig {
        // PLATFORMS は ALL と同じ並び
        &PLATFORMS[*self as usize]
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformCategory {
    Core,
    Emerging,
    GlobalSouth,
    Messaging,
}

impl PlatformCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Emerging => "emerging",
            Self::GlobalSouth => "global_south",
            Self::Messaging => "messaging",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "core" => Some(Self::Core),
            "emerging" => Some(Self::Emerging),
            "global_south" | "global-south" => Some(Self::GlobalSouth),
            "messaging" => Some(Self::Messaging),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFeature {
    Posting,
    Analytics,
    Scheduling,
    Stories,
    Reels,
    Shorts,
    Threads,
    Polls,
    Newsletters,
    Live,
    Spaces,
    Dm,
}

/// 地域タグ
pub const REGIONS: [&str; 8] = ["UK", "US", "EU", "UAE", "CANZUK", "LATAM", "AFRICA", "APAC"];

/// プラットフォームの表示用メタデータ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformConfig {
    pub id: PlatformId,
    pub name: &'static str,
    pub category: PlatformCategory,
    pub color: &'static str,
    /// OAuth 認可 URL（トークン方式などで無い場合は空）
    pub auth_url: &'static str,
    pub api_base_url: &'static str,
    pub scopes: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub features: &'static [PlatformFeature],
}

use PlatformFeature as F;

const ALL_REGIONS: &[&str] = &REGIONS;
const WESTERN: &[&str] = &["UK", "US", "EU", "CANZUK"];
const APAC_ONLY: &[&str] = &["APAC"];

pub static PLATFORMS: [PlatformConfig; 19] = [
    PlatformConfig {
        id: PlatformId::X,
        name: "X (Twitter)",
        category: PlatformCategory::Core,
        color: "#000000",
        auth_url: "https://twitter.com/i/oauth2/authorize",
        api_base_url: "https://api.twitter.com/2",
        scopes: &["tweet.read", "tweet.write", "users.read", "offline.access", "bookmark.read", "like.read"],
        regions: ALL_REGIONS,
        features: &[F::Posting, F::Analytics, F::Scheduling, F::Polls, F::Spaces, F::Threads],
    },
    PlatformConfig {
        id: PlatformId::Linkedin,
        name: "LinkedIn",
        category: PlatformCategory::Core,
        color: "#0A66C2",
        auth_url: "https://www.linkedin.com/oauth/v2/authorization",
        api_base_url: "https://api.linkedin.com/v2",
        scopes: &["r_liteprofile", "r_organization_social", "w_member_social", "r_organization_admin"],
        regions: &["UK", "US", "EU", "UAE", "CANZUK"],
        features: &[F::Posting, F::Analytics, F::Newsletters, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Facebook,
        name: "Facebook",
        category: PlatformCategory::Core,
        color: "#1877F2",
        auth_url: "https://www.facebook.com/v19.0/dialog/oauth",
        api_base_url: "https://graph.facebook.com/v19.0",
        scopes: &["pages_show_list", "pages_read_engagement", "pages_manage_posts", "read_insights"],
        regions: ALL_REGIONS,
        features: &[F::Posting, F::Analytics, F::Stories, F::Reels, F::Live, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Instagram,
        name: "Instagram",
        category: PlatformCategory::Core,
        color: "#E4405F",
        auth_url: "https://api.instagram.com/oauth/authorize",
        api_base_url: "https://graph.instagram.com/v19.0",
        scopes: &["instagram_basic", "instagram_content_publish", "instagram_manage_insights"],
        regions: ALL_REGIONS,
        features: &[F::Posting, F::Analytics, F::Stories, F::Reels, F::Live],
    },
    PlatformConfig {
        id: PlatformId::Youtube,
        name: "YouTube",
        category: PlatformCategory::Core,
        color: "#FF0000",
        auth_url: "https://accounts.google.com/o/oauth2/v2/auth",
        api_base_url: "https://www.googleapis.com/youtube/v3",
        scopes: &[
            "https://www.googleapis.com/auth/youtube.readonly",
            "https://www.googleapis.com/auth/yt-analytics.readonly",
        ],
        regions: ALL_REGIONS,
        features: &[F::Posting, F::Analytics, F::Shorts, F::Live],
    },
    PlatformConfig {
        id: PlatformId::Tiktok,
        name: "TikTok",
        category: PlatformCategory::Core,
        color: "#000000",
        auth_url: "https://www.tiktok.com/v2/auth/authorize",
        api_base_url: "https://open.tiktokapis.com/v2",
        scopes: &["user.info.basic", "video.list", "video.publish", "video.upload"],
        regions: &["UK", "US", "EU", "CANZUK", "LATAM", "APAC"],
        features: &[F::Posting, F::Analytics, F::Reels, F::Live],
    },
    PlatformConfig {
        id: PlatformId::Substack,
        name: "Substack",
        category: PlatformCategory::Core,
        color: "#FF6719",
        auth_url: "",
        api_base_url: "https://substack.com/api/v1",
        scopes: &[],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics, F::Newsletters],
    },
    PlatformConfig {
        id: PlatformId::Threads,
        name: "Threads",
        category: PlatformCategory::Emerging,
        color: "#000000",
        auth_url: "https://threads.net/oauth/authorize",
        api_base_url: "https://graph.threads.net/v1.0",
        scopes: &["threads_basic", "threads_content_publish", "threads_manage_insights"],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics, F::Threads],
    },
    PlatformConfig {
        id: PlatformId::Bluesky,
        name: "Bluesky",
        category: PlatformCategory::Emerging,
        color: "#0085FF",
        auth_url: "https://bsky.social/xrpc/com.atproto.server.createSession",
        api_base_url: "https://bsky.social/xrpc",
        scopes: &[],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics, F::Threads],
    },
    PlatformConfig {
        id: PlatformId::Mastodon,
        name: "Mastodon",
        category: PlatformCategory::Emerging,
        color: "#6364FF",
        // インスタンスごとに異なる
        auth_url: "",
        api_base_url: "",
        scopes: &["read", "write", "follow"],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Snapchat,
        name: "Snapchat",
        category: PlatformCategory::Emerging,
        color: "#FFFC00",
        auth_url: "https://accounts.snapchat.com/accounts/oauth2/auth",
        api_base_url: "https://adsapi.snapchat.com/v1",
        scopes: &["snapchat-marketing-api"],
        regions: &["UK", "US", "EU", "UAE", "CANZUK"],
        features: &[F::Posting, F::Analytics, F::Stories],
    },
    PlatformConfig {
        id: PlatformId::Telegram,
        name: "Telegram",
        category: PlatformCategory::GlobalSouth,
        color: "#26A5E4",
        auth_url: "",
        api_base_url: "https://api.telegram.org/bot",
        scopes: &[],
        regions: &["EU", "UAE", "LATAM", "AFRICA", "APAC"],
        features: &[F::Posting, F::Analytics, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Wechat,
        name: "WeChat",
        category: PlatformCategory::GlobalSouth,
        color: "#07C160",
        auth_url: "https://open.weixin.qq.com/connect/qrconnect",
        api_base_url: "https://api.weixin.qq.com/cgi-bin",
        scopes: &["snsapi_userinfo"],
        regions: APAC_ONLY,
        features: &[F::Posting, F::Analytics, F::Newsletters],
    },
    PlatformConfig {
        id: PlatformId::Weibo,
        name: "Weibo",
        category: PlatformCategory::GlobalSouth,
        color: "#E6162D",
        auth_url: "https://api.weibo.com/oauth2/authorize",
        api_base_url: "https://api.weibo.com/2",
        scopes: &["all"],
        regions: APAC_ONLY,
        features: &[F::Posting, F::Analytics, F::Stories, F::Live],
    },
    PlatformConfig {
        id: PlatformId::Vk,
        name: "VK",
        category: PlatformCategory::GlobalSouth,
        color: "#0077FF",
        auth_url: "https://oauth.vk.com/authorize",
        api_base_url: "https://api.vk.com/method",
        scopes: &["wall", "stats", "groups"],
        regions: &["EU"],
        features: &[F::Posting, F::Analytics, F::Stories, F::Live, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Whatsapp,
        name: "WhatsApp Business",
        category: PlatformCategory::Messaging,
        color: "#25D366",
        auth_url: "https://www.facebook.com/v19.0/dialog/oauth",
        api_base_url: "https://graph.facebook.com/v19.0",
        scopes: &["whatsapp_business_management", "whatsapp_business_messaging"],
        regions: ALL_REGIONS,
        features: &[F::Posting, F::Analytics],
    },
    PlatformConfig {
        id: PlatformId::Line,
        name: "LINE",
        category: PlatformCategory::GlobalSouth,
        color: "#00C300",
        auth_url: "https://access.line.me/oauth2/v2.1/authorize",
        api_base_url: "https://api.line.me/v2",
        scopes: &["profile", "openid"],
        regions: APAC_ONLY,
        features: &[F::Posting, F::Analytics],
    },
    PlatformConfig {
        id: PlatformId::Reddit,
        name: "Reddit",
        category: PlatformCategory::Emerging,
        color: "#FF4500",
        auth_url: "https://www.reddit.com/api/v1/authorize",
        api_base_url: "https://oauth.reddit.com/api/v1",
        scopes: &["identity", "read", "submit", "history"],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics, F::Polls],
    },
    PlatformConfig {
        id: PlatformId::Pinterest,
        name: "Pinterest",
        category: PlatformCategory::Emerging,
        color: "#E60023",
        auth_url: "https://api.pinterest.com/oauth",
        api_base_url: "https://api.pinterest.com/v5",
        scopes: &["boards:read", "pins:read", "user_accounts:read"],
        regions: WESTERN,
        features: &[F::Posting, F::Analytics],
    },
];

/// 地域タグ（大文字小文字は区別しない）に対応するプラットフォーム
pub fn by_region(region: &str) -> Vec<&'static PlatformConfig> {
    PLATFORMS
        .iter()
        .filter(|p| p.regions.iter().any(|r| r.eq_ignore_ascii_case(region)))
        .collect()
}

pub fn by_category(category: PlatformCategory) -> Vec<&'static PlatformConfig> {
    PLATFORMS.iter().filter(|p| p.category == category).collect()
}
