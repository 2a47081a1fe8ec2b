// テストハーネス用のモックストア
//
// 固定のフィクスチャを返し、受け取った呼び出しを記録する。

use super::models::{AuthToken, BillPayload, BillRecord, BillStatus, CreatedBill, UploadedFile};
use super::{BillsApi, Store};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// フィクスチャの請求書レコード（4件）
pub fn fixture_bills() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400.0,
            date: "2004-04-04".to_string(),
            vat: Some(80.0),
            pct: Some(20.0),
            commentary: Some("séminaire billed".to_string()),
            file_url: Some("https://test.storage.tld/47qAXb6fIm2zOKkLzMro.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
        },
        BillRecord {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: "test1".to_string(),
            amount: 100.0,
            date: "2001-01-01".to_string(),
            vat: None,
            pct: Some(20.0),
            commentary: Some("plane ticket".to_string()),
            file_url: Some("https://test.storage.tld/BeKy5Mo4jkmdfPGYpTxZ.jpg".to_string()),
            file_name: Some("billed-200x400.jpg".to_string()),
            status: BillStatus::Refused,
        },
        BillRecord {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            expense_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            amount: 300.0,
            date: "2003-03-03".to_string(),
            vat: Some(60.0),
            pct: Some(20.0),
            commentary: Some("abonnement mensuel".to_string()),
            file_url: Some("https://test.storage.tld/UIUZtnPQvnbFnB0ozvJh.jpg".to_string()),
            file_name: Some("facture-client-php-exportee.jpg".to_string()),
            status: BillStatus::Accepted,
        },
        BillRecord {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            expense_type: "Restaurants et bars".to_string(),
            name: "test2".to_string(),
            amount: 200.0,
            date: "2002-02-02".to_string(),
            vat: Some(40.0),
            pct: Some(20.0),
            commentary: Some("invitation client".to_string()),
            file_url: Some("https://test.storage.tld/qcCK3SzECmaZAGRrHjaC.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-2.jpg".to_string()),
            status: BillStatus::Refused,
        },
    ]
}

/// モックストアが受け取った呼び出しの記録
#[derive(Default)]
pub struct MockCalls {
    pub list: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub login: AtomicUsize,
    pub last_login_payload: Mutex<Option<String>>,
    pub last_create_email: Mutex<Option<String>>,
    pub last_create_file_name: Mutex<Option<String>>,
    pub last_update_id: Mutex<Option<Option<String>>>,
    pub last_update_payload: Mutex<Option<BillPayload>>,
}

/// 記録付きモックストア
///
/// `list` はフィクスチャを返し、`create` は固定の参照URLと識別子
/// `1234` を返す。`update_delay` を設定すると更新呼び出しを遅延させ、
/// 進行中リクエストの競合を再現できる。
#[derive(Default)]
pub struct MockStore {
    pub calls: Arc<MockCalls>,
    update_delay: Option<Duration>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新呼び出しを遅延させるモックストアを作成する
    pub fn with_update_delay(delay: Duration) -> Self {
        Self {
            calls: Arc::new(MockCalls::default()),
            update_delay: Some(delay),
        }
    }
}

#[async_trait]
impl Store for MockStore {
    fn bills(&self) -> Arc<dyn BillsApi> {
        Arc::new(MockBills {
            calls: Arc::clone(&self.calls),
            update_delay: self.update_delay,
        })
    }

    async fn login(&self, payload: &str) -> AppResult<AuthToken> {
        self.calls.login.fetch_add(1, Ordering::SeqCst);
        *self.calls.last_login_payload.lock().unwrap() = Some(payload.to_string());
        Ok(AuthToken {
            jwt: "mockJwt".to_string(),
        })
    }
}

struct MockBills {
    calls: Arc<MockCalls>,
    update_delay: Option<Duration>,
}

#[async_trait]
impl BillsApi for MockBills {
    async fn list(&self) -> AppResult<Vec<BillRecord>> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        Ok(fixture_bills())
    }

    async fn create(&self, file: UploadedFile, email: &str) -> AppResult<CreatedBill> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        *self.calls.last_create_email.lock().unwrap() = Some(email.to_string());
        *self.calls.last_create_file_name.lock().unwrap() = Some(file.name.clone());
        Ok(CreatedBill {
            id: "1234".to_string(),
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
            file_name: Some(file.name),
        })
    }

    async fn update(&self, id: Option<&str>, data: &BillPayload) -> AppResult<BillRecord> {
        if let Some(delay) = self.update_delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        *self.calls.last_update_id.lock().unwrap() = Some(id.map(|s| s.to_string()));
        *self.calls.last_update_payload.lock().unwrap() = Some(data.clone());

        Ok(BillRecord {
            id: id.unwrap_or("47qAXb6fIm2zOKkLzMro").to_string(),
            email: data.email.clone(),
            expense_type: data.expense_type.clone(),
            name: data.name.clone(),
            amount: data.amount,
            date: data.date.clone(),
            vat: Some(data.vat),
            pct: Some(data.pct),
            commentary: Some(data.commentary.clone()),
            file_url: data.file_url.clone(),
            file_name: data.file_name.clone(),
            status: data.status,
        })
    }
}
