use crate::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ブラウザプロファイル相当のキーバリューストレージ境界
///
/// セッション情報などの少量の文字列データを永続化する。
/// バリデーションは行わない（値の形の責任は呼び出し側にある）。
pub trait LocalStorage: Send + Sync {
    /// キーに対応する値を取得する（存在しない場合はNone）
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// キーに値を保存する（既存の値は上書きされる）
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// キーを削除する
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// JSONファイルに保存するストレージ
///
/// ファイル全体をひとつのJSONオブジェクトとして保持し、
/// 書き込みのたびに保存する。ストレージが利用できない場合は
/// リトライせず即座にエラーを返す。
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// 指定パスのストレージファイルを開く（なければ空の状態から開始）
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// 既定の保存先でストレージを開く
    ///
    /// ユーザーデータディレクトリ配下の `billed/storage.json` を使用する。
    pub fn open_default() -> AppResult<Self> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| AppError::storage("データディレクトリを取得できませんでした"))?;
        let dir = base.join("billed");
        fs::create_dir_all(&dir)?;
        Self::open(dir.join("storage.json"))
    }

    fn save(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::storage("ストレージのロック取得に失敗しました"))
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.lock()?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;
        log::debug!("ストレージに保存しました: key={key}");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut entries = self.lock()?;
        entries.remove(key);
        self.save(&entries)?;
        log::debug!("ストレージから削除しました: key={key}");
        Ok(())
    }
}

/// メモリ上のストレージ（テストハーネス用）
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// 空のメモリストレージを作成する
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("ストレージのロック取得に失敗しました"))?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("ストレージのロック取得に失敗しました"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::storage("ストレージのロック取得に失敗しました"))?;
        entries.remove(key);
        Ok(())
    }
}
