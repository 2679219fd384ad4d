//! Outbound ポート: アプリが外界（端末・回答ファイル・保存先）を使うための trait
//!
//! LLM・ログ・待機は common::ports::outbound のものを使う。

pub mod answers_source;
pub mod chat_io;
pub mod report_exporter;

pub use answers_source::AnswersSource;
pub use chat_io::ChatIo;
pub use report_exporter::ReportExporter;
