//! Outbound ポート: アプリが外界（FS・環境変数・時刻・ログ・LLM・待機）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod llm_completion;
pub mod log;
pub mod pacer;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use llm_completion::{CompletionRequest, LlmCompletion};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use pacer::Pacer;
