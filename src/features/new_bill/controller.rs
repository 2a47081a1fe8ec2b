use crate::features::auth::session_store::SessionStore;
use crate::features::new_bill::models::{
    is_supported_image, parse_number, FileSelection, NewBillForm, StagedReceipt,
    UNSUPPORTED_FILE_MESSAGE,
};
use crate::shared::api::models::{BillPayload, BillStatus, UploadedFile};
use crate::shared::api::Store;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, RoutePath};
use std::sync::{Arc, Mutex};

/// 新規請求書フォームのコントローラー
///
/// フォーム既定の送信遷移を抑止するのはイベント接続側の責務。
/// 進行中の送信を抑止するガードは持たない（多重送信はそのまま
/// 複数回の保存になる）。
pub struct NewBillController {
    store: Option<Arc<dyn Store>>,
    navigator: Arc<dyn Navigator>,
    session: SessionStore,
    /// ステージング済み領収書（ファイル選択の成功時に設定される）
    staged: Mutex<Option<StagedReceipt>>,
}

impl NewBillController {
    /// 新しいNewBillControllerを作成する
    ///
    /// # 引数
    /// * `store` - リモートサービス（未設定なら送信はネットワークを伴わない）
    /// * `navigator` - ナビゲーション機能
    /// * `session` - セッションストア（メールアドレスの取得に使う）
    pub fn new(
        store: Option<Arc<dyn Store>>,
        navigator: Arc<dyn Navigator>,
        session: SessionStore,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            staged: Mutex::new(None),
        }
    }

    /// 選択されたファイルを検証し、受理ならステージングする
    ///
    /// 拡張子チェックはネットワーク呼び出しの前に同期的に行う。
    /// 対応していないファイルがストアへ送られることはない。
    /// ステージングの失敗は捕捉せず伝播する。
    pub async fn select_file(&self, file: UploadedFile) -> AppResult<FileSelection> {
        if !is_supported_image(&file.name) {
            // 拒否: ステージング済みの参照を消し、検証メッセージを返す
            *self.staged.lock().unwrap() = None;
            log::info!("対応していないファイルを拒否しました: {}", file.name);
            return Ok(FileSelection::Rejected {
                message: UNSUPPORTED_FILE_MESSAGE.to_string(),
            });
        }

        let file_name = file.name.clone();
        let Some(store) = &self.store else {
            return Ok(FileSelection::Accepted {
                file_url: String::new(),
                file_name,
            });
        };

        let session = self.session.get()?.ok_or(AppError::SessionMissing)?;
        let created = store.bills().create(file, &session.email).await?;

        let staged = StagedReceipt {
            bill_id: created.id,
            file_url: created.file_url,
            file_name,
        };
        log::info!(
            "領収書をステージングしました: id={}, file={}",
            staged.bill_id,
            staged.file_name
        );

        *self.staged.lock().unwrap() = Some(staged.clone());
        Ok(FileSelection::Accepted {
            file_url: staged.file_url,
            file_name: staged.file_name,
        })
    }

    /// フォームを送信し、請求書を保存して一覧へ戻る
    ///
    /// ステージング済みの識別子があればそのレコードの更新として、
    /// なければ新規作成として保存する。ストアが未設定なら
    /// ネットワーク呼び出しなしで遷移だけ行う。
    /// 保存の失敗は捕捉せず伝播し、その場合は遷移しない。
    pub async fn submit(&self, form: NewBillForm) -> AppResult<()> {
        let session = self.session.get()?.ok_or(AppError::SessionMissing)?;
        let staged = self.staged.lock().unwrap().clone();

        let bill = BillPayload {
            email: session.email,
            expense_type: form.expense_type,
            name: form.name,
            amount: parse_number(&form.amount),
            date: form.date,
            vat: parse_number(&form.vat),
            pct: parse_number(&form.pct),
            commentary: form.commentary,
            file_url: staged.as_ref().map(|s| s.file_url.clone()),
            file_name: staged.as_ref().map(|s| s.file_name.clone()),
            status: BillStatus::Pending,
        };

        if let Some(store) = &self.store {
            let id = staged.as_ref().map(|s| s.bill_id.as_str());
            store.bills().update(id, &bill).await?;
            log::info!("請求書を保存しました: name={}", bill.name);
        }

        self.navigator.on_navigate(RoutePath::Bills);
        Ok(())
    }
}
