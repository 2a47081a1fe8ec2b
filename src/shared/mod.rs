/// 共有エラー型とエラーハンドリング
pub mod errors;

/// リモート永続化サービス（ストア）との境界
pub mod api;

/// 共有設定管理
pub mod config;

/// ナビゲーション境界
pub mod navigation;

/// ローカルのキーバリューストレージ
pub mod storage;

// 便利な再エクスポート
pub use config::{initialize_logging_system, load_environment_variables, ApiConfig};
pub use errors::{list_error_message, AppError, AppResult};
pub use navigation::{Navigator, RoutePath};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
