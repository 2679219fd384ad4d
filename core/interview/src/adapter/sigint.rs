//! Ctrl+C（SIGINT）でインタビューを放棄する
//!
//! インタビューの状態は保存しない。ログに残して 130 で終了する。

use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::process;
use std::sync::Arc;

pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// ハンドラを登録する。複数回呼んでも登録は初回のみ（ctrlc の仕様）。
pub fn install_abandon_handler(log: Arc<dyn Log>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        let _ = log.log(&LogRecord::new(
            LogLevel::Warn,
            "adapter",
            "lifecycle",
            "interview abandoned by interrupt",
        ));
        eprintln!("\nconfluation: interrupted, session discarded");
        process::exit(INTERRUPTED_EXIT_CODE);
    })
}
