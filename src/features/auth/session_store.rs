use crate::features::auth::models::Session;
use crate::shared::errors::AppResult;
use crate::shared::storage::LocalStorage;
use std::sync::Arc;

/// セッションストレージのキー定義
pub struct SessionStoreKeys;

impl SessionStoreKeys {
    /// セッション本体のキー
    pub const USER: &'static str = "user";
    /// リモートログインが返したトークンのキー
    pub const JWT: &'static str = "jwt";
}

/// 現在の認証済みユーザーを読み書きするストア
///
/// 下位のキーバリューストレージにJSONとして保存する。
/// 形のバリデーションはここでは行わない。
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
}

impl SessionStore {
    /// 新しいSessionStoreを作成する
    ///
    /// # 引数
    /// * `storage` - 下位のキーバリューストレージ
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// 現在のセッションを取得する（存在しない場合はNone）
    pub fn get(&self) -> AppResult<Option<Session>> {
        match self.storage.get_item(SessionStoreKeys::USER)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// セッションを保存する（既存のセッションは上書きされる）
    pub fn set(&self, session: &Session) -> AppResult<()> {
        let raw = serde_json::to_string(session)?;
        self.storage.set_item(SessionStoreKeys::USER, &raw)?;
        log::debug!("セッションを保存しました: email={}", session.email);
        Ok(())
    }

    /// ログインが返したトークンを保存する
    pub fn set_jwt(&self, jwt: &str) -> AppResult<()> {
        self.storage.set_item(SessionStoreKeys::JWT, jwt)
    }

    /// 保存されているトークンを取得する
    pub fn get_jwt(&self) -> AppResult<Option<String>> {
        self.storage.get_item(SessionStoreKeys::JWT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::{SessionStatus, UserKind};
    use crate::shared::storage::MemoryStorage;

    fn setup_store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_get_without_session() {
        let store = setup_store();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = setup_store();
        let session = Session {
            kind: UserKind::Employee,
            email: "a@a".to_string(),
            password: "azerty".to_string(),
            status: SessionStatus::Connected,
        };

        store.set(&session).unwrap();
        assert_eq!(store.get().unwrap(), Some(session));
    }

    #[test]
    fn test_set_overwrites_previous_session() {
        // セッションはひとつだけ（最後の書き込みが勝つ）
        let store = setup_store();
        let first = Session {
            kind: UserKind::Employee,
            email: "first@billed.com".to_string(),
            password: "a".to_string(),
            status: SessionStatus::Connected,
        };
        let second = Session {
            kind: UserKind::Admin,
            email: "second@billed.com".to_string(),
            password: "b".to_string(),
            status: SessionStatus::Connected,
        };

        store.set(&first).unwrap();
        store.set(&second).unwrap();
        assert_eq!(store.get().unwrap(), Some(second));
    }

    #[test]
    fn test_jwt_roundtrip() {
        let store = setup_store();
        assert_eq!(store.get_jwt().unwrap(), None);

        store.set_jwt("mockJwt").unwrap();
        assert_eq!(store.get_jwt().unwrap(), Some("mockJwt".to_string()));
    }
}
