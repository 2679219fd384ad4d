//! セッション結果を整形 JSON で書き出す ReportExporter 実装

use crate::domain::SavedSession;
use crate::ports::outbound::ReportExporter;
use anyhow::Context;
use common::error::Error;
use std::fs;
use std::path::Path;

pub struct JsonReportExporter;

impl JsonReportExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_session(path: &Path, session: &SavedSession) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(session).context("serialize session")?;
    fs::write(path, json + "\n").with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

impl ReportExporter for JsonReportExporter {
    fn export(&self, path: &Path, session: &SavedSession) -> Result<(), Error> {
        write_session(path, session).map_err(Error::from)
    }
}
