// 機能モジュール構造
pub mod features;
pub mod shared;

// 主要な型の再エクスポート
pub use features::auth::{LoginController, LoginForm, Session, SessionStore, UserKind};
pub use features::bills::{Bill, BillsController, BillsView};
pub use features::new_bill::{NewBillController, NewBillForm};
pub use shared::api::models::UploadedFile;
pub use shared::api::{http::HttpStore, BillsApi, Store};
pub use shared::errors::{AppError, AppResult};
pub use shared::navigation::{Navigator, RoutePath};
pub use shared::storage::{FileStorage, LocalStorage, MemoryStorage};
