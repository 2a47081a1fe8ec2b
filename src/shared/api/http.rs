// APIサーバーをストアとして公開するHTTPクライアント

use super::models::{AuthToken, BillPayload, BillRecord, CreatedBill, UploadedFile};
use super::{BillsApi, Store};
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{multipart, Client, Response};
use std::sync::Arc;

/// HTTP通信の共有部分
///
/// 各リモート呼び出しは一度だけ試行する。リトライもタイムアウトも
/// 設定しない（応答しない呼び出しは待機中の操作を保留のままにする）。
struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 失敗ステータスをエラーへ変換する
    ///
    /// メッセージには数値ステータスを含める（一覧取得側の分類が
    /// この文字列を判定に使う）。
    async fn check(&self, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());
        warn!("APIサーバーエラー: status={}, body={body}", status.as_u16());

        Err(AppError::ExternalService(format!(
            "HTTP {}: {body}",
            status.as_u16()
        )))
    }
}

/// reqwestベースのストア実装
pub struct HttpStore {
    api: Arc<HttpApi>,
}

impl HttpStore {
    /// 環境変数の設定でストアを作成する
    pub fn new() -> AppResult<Self> {
        Self::with_config(ApiConfig::from_env())
    }

    /// 設定を指定してストアを作成する
    pub fn with_config(config: ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        info!("ストアクライアントを初期化しました: base_url={}", config.base_url);

        Ok(Self {
            api: Arc::new(HttpApi {
                client,
                base_url: config.base_url,
            }),
        })
    }
}

#[async_trait]
impl Store for HttpStore {
    fn bills(&self) -> Arc<dyn BillsApi> {
        Arc::new(HttpBills {
            api: Arc::clone(&self.api),
        })
    }

    async fn login(&self, payload: &str) -> AppResult<AuthToken> {
        let url = self.api.endpoint("/auth/login");
        info!("ログインリクエスト送信: url={url}");

        // ペイロードは呼び出し側でJSONエンコード済みの文字列
        let response = self
            .api
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await?;

        let response = self.api.check(response).await?;
        let token: AuthToken = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;

        info!("ログインに成功しました");
        Ok(token)
    }
}

/// 請求書エンドポイント
struct HttpBills {
    api: Arc<HttpApi>,
}

#[async_trait]
impl BillsApi for HttpBills {
    async fn list(&self) -> AppResult<Vec<BillRecord>> {
        let url = self.api.endpoint("/bills");
        info!("請求書一覧を取得します: url={url}");

        let response = self.api.client.get(&url).send().await?;
        let response = self.api.check(response).await?;

        let records: Vec<BillRecord> = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;

        info!("請求書一覧を取得しました: {}件", records.len());
        Ok(records)
    }

    async fn create(&self, file: UploadedFile, email: &str) -> AppResult<CreatedBill> {
        let url = self.api.endpoint("/bills");
        info!(
            "領収書をステージングします: filename={}, size={} bytes",
            file.name,
            file.data.len()
        );

        // マルチパートフォーム（ファイル + メールアドレス）
        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(file.data)
                    .file_name(file.name)
                    .mime_str(&file.mime_type)
                    .map_err(|e| AppError::Validation(format!("MIMEタイプ設定エラー: {e}")))?,
            )
            .text("email", email.to_string());

        let response = self.api.client.post(&url).multipart(form).send().await?;
        let response = self.api.check(response).await?;

        let created: CreatedBill = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;

        info!("ステージングに成功しました: id={}", created.id);
        Ok(created)
    }

    async fn update(&self, id: Option<&str>, data: &BillPayload) -> AppResult<BillRecord> {
        // idがあれば既存レコードの更新、なければ新規作成
        let request = match id {
            Some(id) => {
                let url = self.api.endpoint(&format!("/bills/{id}"));
                info!("請求書を更新します: url={url}");
                self.api.client.patch(&url)
            }
            None => {
                let url = self.api.endpoint("/bills");
                info!("請求書を作成します: url={url}");
                self.api.client.post(&url)
            }
        };

        let response = request.json(data).send().await?;
        let response = self.api.check(response).await?;

        let record: BillRecord = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;

        info!("請求書を保存しました: id={}", record.id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_store_creation() {
        let store = HttpStore::with_config(ApiConfig {
            base_url: "http://localhost:5678".to_string(),
        })
        .unwrap();

        assert_eq!(store.api.endpoint("/bills"), "http://localhost:5678/bills");
        assert_eq!(
            store.api.endpoint("/auth/login"),
            "http://localhost:5678/auth/login"
        );
    }
}
