//! confluation のアダプター（ports::outbound の実装）

pub mod answers_file;
pub mod json_report_exporter;
pub mod sigint;
pub mod stdio_chat;

pub use answers_file::JsonAnswersFile;
pub use json_report_exporter::JsonReportExporter;
pub use sigint::install_abandon_handler;
pub use stdio_chat::StdioChat;
