//! セッション結果を書き出す Outbound ポート（--save）

use crate::domain::SavedSession;
use common::error::Error;
use std::path::Path;

pub trait ReportExporter: Send + Sync {
    fn export(&self, path: &Path, session: &SavedSession) -> Result<(), Error>;
}
