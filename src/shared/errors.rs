use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// ローカルストレージ関連のエラー
    #[error("ストレージエラー: {0}")]
    Storage(String),

    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リモートサービス連携でのエラー
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// セッションが保存されていない状態での操作
    #[error("セッションが見つかりません")]
    SessionMissing,

    /// I/O関連のエラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// ストレージエラーを作成するヘルパー関数
    pub fn storage<S: Into<String>>(message: S) -> Self {
        AppError::Storage(message.into())
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        AppError::ExternalService(message.into())
    }
}

/// reqwest::ErrorからAppErrorへの変換
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::ExternalService(error.to_string())
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;

/// 一覧取得の失敗をユーザー向けメッセージへ分類する
///
/// エラーメッセージに含まれるステータス文字列で判定する。
/// 判定ロジックをここに閉じ込めておき、構造化エラーコードへの
/// 移行時は呼び出し側を変えずにこの関数だけ差し替える。
///
/// # 引数
/// * `error` - 一覧取得が返したエラー
///
/// # 戻り値
/// エラービューに表示するメッセージ
pub fn list_error_message(error: &AppError) -> String {
    let text = error.to_string();
    if text.contains("404") {
        "Erreur 404".to_string()
    } else if text.contains("500") {
        "Erreur 500".to_string()
    } else {
        text
    }
}
