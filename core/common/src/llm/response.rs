//! LLM 応答テキストのデコード
//!
//! モデルは JSON をコードフェンスで囲んで返すことがある。フェンスを外してから
//! 期待する型へ厳密にデコードし、合わないものは `Error::Schema` にする。

use crate::error::Error;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

const PREVIEW_CHARS: usize = 120;

fn fence_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:json|JSON)?[ \t]*\r?\n?").ok())
        .as_ref()
}

/// 前後の markdown コードフェンス（```json / ```）を取り除き、空白を詰める
pub fn strip_code_fences(text: &str) -> String {
    match fence_re() {
        Some(re) => re.replace_all(text, "").trim().to_string(),
        None => text.replace("```json", "").replace("```", "").trim().to_string(),
    }
}

/// フェンスを除去した応答を `T` にデコードする
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned).map_err(|e| {
        let preview: String = cleaned.chars().take(PREVIEW_CHARS).collect();
        Error::schema(format!("{} (response: {})", e, preview))
    })
}
