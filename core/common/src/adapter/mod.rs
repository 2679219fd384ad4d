//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・時刻・環境変数・LLM に触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod driver_completion;
pub mod file_json_log;
pub mod pacer;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;

pub use crate::ports::outbound::{Clock, EnvResolver, FileSystem};
pub use driver_completion::{completion_from_config, DriverCompletion, OfflineCompletion};
pub use file_json_log::{FileJsonLog, NoopLog, StderrLog, TeeLog};
pub use pacer::{NoPacer, ThreadPacer};
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
