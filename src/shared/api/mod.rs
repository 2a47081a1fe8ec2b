/// リモート永続化サービス（ストア）との境界
///
/// ストアは不透明な非同期APIとして扱う。コントローラーはこの
/// トレイト越しにのみ通信し、テストではフェイク実装を注入する。
pub mod http;
pub mod models;

#[cfg(test)]
pub mod mock;

use crate::shared::errors::AppResult;
use async_trait::async_trait;
use models::{AuthToken, BillPayload, BillRecord, CreatedBill, UploadedFile};
use std::sync::Arc;

/// 請求書コレクションへの操作
#[async_trait]
pub trait BillsApi: Send + Sync {
    /// 請求書コレクション全体を取得する
    async fn list(&self) -> AppResult<Vec<BillRecord>>;

    /// 領収書ファイルをステージングし、新しいレコードを作成する
    ///
    /// # 引数
    /// * `file` - アップロードするファイル
    /// * `email` - 現在のユーザーのメールアドレス
    ///
    /// # 戻り値
    /// 参照URL・ファイル名・作成されたレコードの識別子
    async fn create(&self, file: UploadedFile, email: &str) -> AppResult<CreatedBill>;

    /// 請求書レコードを保存する
    ///
    /// `id` があれば既存レコードの更新、なければ新規作成として扱う。
    async fn update(&self, id: Option<&str>, data: &BillPayload) -> AppResult<BillRecord>;
}

/// リモートサービス全体の境界
#[async_trait]
pub trait Store: Send + Sync {
    /// 請求書コレクションへのハンドルを取得する
    fn bills(&self) -> Arc<dyn BillsApi>;

    /// 資格情報をトークンと交換する
    ///
    /// # 引数
    /// * `payload` - JSONエンコード済みの `{"email":…,"password":…}` 文字列
    async fn login(&self, payload: &str) -> AppResult<AuthToken>;
}
