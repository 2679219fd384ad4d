//! テスト用のスタブアダプタ

use crate::adapter::{DemoMetricsSource, FixedTipPicker};
use crate::domain::{
    ContentType, DashboardAlert, InteractionCounts, PlatformConnection, PlatformId,
    PlatformMetrics, PostAnalytics,
};
use crate::ports::outbound::{MetricsSource, TipPicker};
use crate::usecase::app::{DashboardDeps, DashboardUseCase, DataDeps, ModelDeps, ObsDeps};
use common::error::Error;
use common::ports::outbound::{Clock, CompletionRequest, LlmCompletion, Log, LogLevel, LogRecord};
use std::sync::{Arc, Mutex};

/// デモデータの基準時刻
pub const NOW_MS: u64 = 1_790_000_000_000;

/// StubCompletion が受け取ったリクエスト
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: Option<String>,
    pub user: String,
    pub json: bool,
    pub temperature: Option<f32>,
}

/// 固定の応答（または失敗）を返す LlmCompletion
pub struct StubCompletion {
    live: bool,
    response: Result<String, Error>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl StubCompletion {
    pub fn text(response: &str) -> Self {
        Self {
            live: true,
            response: Ok(response.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            live: true,
            response: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        Self {
            live: false,
            response: Err(Error::env("offline")),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// 最後に送ったユーザープロンプト
    pub fn last_prompt(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|call| call.user.clone())
            .unwrap_or_default()
    }
}

impl LlmCompletion for StubCompletion {
    fn is_live(&self) -> bool {
        self.live
    }

    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system_instruction.map(str::to_string),
            user: request.user_message.to_string(),
            json: request.options.json,
            temperature: request.options.temperature,
        });
        self.response.clone()
    }
}

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}

/// レコードを保持する Log
#[derive(Default)]
pub struct MemoryLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn count(&self, level: LogLevel, kind: &str) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == level && r.kind.as_deref() == Some(kind))
            .count()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 渡した投稿だけを持つ MetricsSource（接続は投稿のあるプラットフォーム）
pub struct StaticMetrics {
    pub metrics: Vec<PlatformMetrics>,
    pub posts: Vec<PostAnalytics>,
    pub alerts: Vec<DashboardAlert>,
}

impl MetricsSource for StaticMetrics {
    fn connections(&self) -> Result<Vec<PlatformConnection>, Error> {
        Ok(self
            .metrics
            .iter()
            .map(|m| PlatformConnection {
                platform: m.platform,
                connected: true,
                username: Some("fixture".to_string()),
                followers: Some(m.followers),
            })
            .collect())
    }

    fn platform_metrics(&self) -> Result<Vec<PlatformMetrics>, Error> {
        Ok(self.metrics.clone())
    }

    fn posts(&self, platform: Option<PlatformId>) -> Result<Vec<PostAnalytics>, Error> {
        Ok(self
            .posts
            .iter()
            .filter(|p| platform.map_or(true, |id| p.platform == id))
            .cloned()
            .collect())
    }

    fn alerts(&self) -> Result<Vec<DashboardAlert>, Error> {
        Ok(self.alerts.clone())
    }
}

/// X の投稿 1 件（er 3.9%）
pub fn fixture_post() -> PostAnalytics {
    PostAnalytics {
        id: "x-fixture".to_string(),
        platform: PlatformId::X,
        content_type: ContentType::Thread,
        text: "Five lessons from a year of shipping weekly".to_string(),
        published_at: "2026-09-01T09:00:00.000Z".to_string(),
        counts: InteractionCounts {
            impressions: 1000,
            reach: 700,
            likes: 20,
            comments: 5,
            shares: 3,
            saves: 2,
            clicks: 0,
        },
        sentiment_score: 0.6,
        hashtags: vec!["#shipping".to_string()],
    }
}

pub fn fixture_metrics() -> StaticMetrics {
    StaticMetrics {
        metrics: vec![PlatformMetrics {
            platform: PlatformId::X,
            followers: 1000,
            following: 150,
            total_posts: 30,
            counts: InteractionCounts {
                impressions: 10_000,
                reach: 6_000,
                likes: 200,
                ..Default::default()
            },
            profile_views: 80,
            follower_growth: 20,
            follower_growth_rate: 2.0,
        }],
        posts: vec![fixture_post()],
        alerts: Vec::new(),
    }
}

pub struct Harness {
    pub completion: Arc<StubCompletion>,
    pub log: Arc<MemoryLog>,
    pub use_case: DashboardUseCase,
}

pub fn harness_with(completion: StubCompletion, metrics: Arc<dyn MetricsSource>) -> Harness {
    let completion = Arc::new(completion);
    let log = Arc::new(MemoryLog::default());
    let use_case = DashboardUseCase::new(DashboardDeps {
        data: DataDeps {
            metrics,
            tips: Arc::new(FixedTipPicker::new(0)) as Arc<dyn TipPicker>,
        },
        model: ModelDeps {
            completion: Arc::clone(&completion) as Arc<dyn LlmCompletion>,
            clock: Arc::new(FixedClock(1234)),
        },
        obs: ObsDeps {
            log: Arc::clone(&log) as Arc<dyn Log>,
        },
    });
    Harness {
        completion,
        log,
        use_case,
    }
}

/// シード 42 のデモデータで組み立てる
pub fn demo_harness(completion: StubCompletion) -> Harness {
    harness_with(completion, Arc::new(DemoMetricsSource::new(42, NOW_MS)))
}
