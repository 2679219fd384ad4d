//! 回答 JSON ファイルを読む AnswersSource 実装
//!
//! 形式: `{ "origin": "...", "pivot": "...", ... }`（キーは質問 ID）

use crate::domain::InterviewAnswers;
use crate::ports::outbound::AnswersSource;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct JsonAnswersFile {
    fs: Arc<dyn FileSystem>,
}

impl JsonAnswersFile {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl AnswersSource for JsonAnswersFile {
    fn load(&self, path: &Path) -> Result<InterviewAnswers, Error> {
        let contents = self
            .fs
            .read_to_string(path)
            .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::invalid_argument(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionId;
    use common::adapter::StdFileSystem;

    #[test]
    fn test_load_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{"origin":"Osaka","legacy":"a school"}"#).unwrap();
        let source = JsonAnswersFile::new(Arc::new(StdFileSystem));
        let a = source.load(&path).unwrap();
        assert_eq!(a.get(QuestionId::Origin), Some("Osaka"));
        assert_eq!(a.get(QuestionId::Legacy), Some("a school"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_load_unknown_key_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{"favorite_color":"blue"}"#).unwrap();
        let source = JsonAnswersFile::new(Arc::new(StdFileSystem));
        let err = source.load(&path).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("answers.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let source = JsonAnswersFile::new(Arc::new(StdFileSystem));
        let err = source.load(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
