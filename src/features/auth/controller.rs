use crate::features::auth::models::{LoginForm, Session, SessionStatus, UserKind};
use crate::features::auth::session_store::SessionStore;
use crate::shared::api::Store;
use crate::shared::errors::AppResult;
use crate::shared::navigation::{Navigator, RoutePath};
use std::sync::Arc;

/// ログイン画面のコントローラー
///
/// フォームの生の値をそのまま受け取り、入力のバリデーションは行わない。
/// フォーム既定の送信遷移を抑止するのはイベント接続側（アダプター層）の責務。
pub struct LoginController {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
}

impl LoginController {
    /// 新しいLoginControllerを作成する
    ///
    /// # 引数
    /// * `session` - セッションストア
    /// * `navigator` - ナビゲーション機能
    /// * `store` - リモートサービス（未設定ならローカルのみで動作）
    pub fn new(
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        store: Option<Arc<dyn Store>>,
    ) -> Self {
        Self {
            session,
            navigator,
            store,
        }
    }

    /// 従業員としてログインフォームを送信する
    pub async fn submit_employee(&self, form: LoginForm) -> AppResult<()> {
        self.submit(UserKind::Employee, form, RoutePath::Bills).await
    }

    /// 管理者としてログインフォームを送信する
    pub async fn submit_admin(&self, form: LoginForm) -> AppResult<()> {
        self.submit(UserKind::Admin, form, RoutePath::Dashboard)
            .await
    }

    /// ログイン送信の共通処理
    ///
    /// 1. リモートログインが設定されていれば資格情報をトークンと交換する
    ///    （失敗はそのまま呼び出し側へ伝播し、以降の手順は実行されない）
    /// 2. セッションを保存する
    /// 3. 役割ごとの着地ルートへ遷移する
    async fn submit(&self, kind: UserKind, form: LoginForm, landing: RoutePath) -> AppResult<()> {
        if let Some(store) = &self.store {
            let payload = serde_json::json!({
                "email": form.email,
                "password": form.password,
            })
            .to_string();

            let token = store.login(&payload).await?;
            self.session.set_jwt(&token.jwt)?;
        }

        let session = Session {
            kind,
            email: form.email,
            password: form.password,
            status: SessionStatus::Connected,
        };
        self.session.set(&session)?;

        log::info!("ログインしました: kind={kind:?}, email={}", session.email);

        self.navigator.on_navigate(landing);
        Ok(())
    }
}
