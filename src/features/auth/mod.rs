/// 認証機能のモジュール
pub mod controller;
pub mod models;
pub mod session_store;

pub use controller::LoginController;
pub use models::{LoginForm, Session, SessionStatus, UserKind};
pub use session_store::{SessionStore, SessionStoreKeys};
