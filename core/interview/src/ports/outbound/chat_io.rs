//! 対話端末の Outbound ポート

use crate::domain::Message;
use common::error::Error;

/// インタビューの入出力
///
/// 実装は adapter::StdioChat（標準入出力）とテスト用の ScriptedChat。
pub trait ChatIo: Send + Sync {
    /// bot / user のメッセージを表示する
    fn show_message(&self, message: &Message) -> Result<(), Error>;

    /// 「Question 3 of 10」などの補助表示
    fn show_status(&self, status: &str) -> Result<(), Error>;

    /// 回答を 1 件読む。入力が終わった（EOF）ときは None。
    fn read_answer(&self) -> Result<Option<String>, Error>;
}
