//! confluation コマンドの enum（Command Pattern）

use std::path::PathBuf;

/// confluation の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum InterviewCommand {
    /// ヘルプ表示
    Help,
    /// プロバイダ状態の表示
    Status,
    /// インタビューを実行してレポートを生成する
    Run {
        /// 回答を JSON ファイルから読み込む（非対話）
        answers_file: Option<PathBuf>,
        /// レポート後に市場調査を行う
        research: bool,
        /// 結果を JSON で保存する先
        save: Option<PathBuf>,
    },
}
