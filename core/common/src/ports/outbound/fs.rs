//! ファイルシステム Outbound ポート（settings.json の読み込みとログの追記）

use crate::error::Error;
use std::io::Write;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（無ければ作成）。drop で閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
    /// 通常ファイルとして存在するか（ディレクトリは false）
    fn is_file(&self, path: &Path) -> bool;
}
