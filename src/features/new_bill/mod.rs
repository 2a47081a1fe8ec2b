/// 新規請求書機能モジュール
///
/// アップロードファイルの検証とステージング、フォーム送信時の
/// 請求書レコードの組み立てと保存を提供する。
pub mod controller;
pub mod models;

pub use controller::NewBillController;
pub use models::{
    is_supported_image, parse_number, FileSelection, NewBillForm, StagedReceipt,
    UNSUPPORTED_FILE_MESSAGE,
};
