/// 請求書一覧機能モジュール
///
/// ストアから取得したレコードの整列・整形と、一覧画面の
/// 行イベント（プレビュー表示、新規作成）への反応を提供する。
pub mod controller;
pub mod format;
pub mod models;

pub use controller::{BillsController, BillsView, PreviewImage, PreviewSurface};
pub use format::{format_date, format_status};
pub use models::Bill;
