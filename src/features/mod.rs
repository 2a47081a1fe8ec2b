/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するコード（モデル、
/// コントローラー、ストレージ）を含む自己完結型のユニット。
pub mod auth;
pub mod bills;
pub mod new_bill;
