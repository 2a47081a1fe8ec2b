use serde::{Deserialize, Serialize};

/// ユーザーの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    /// 従業員
    Employee,
    /// 人事管理者
    Admin,
}

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// ログイン成功後の接続済み状態
    Connected,
}

/// ローカルに保持する認証済みユーザーの記録
///
/// ストレージには常にひとつだけ存在し、書き込みは前の値を上書きする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
    /// 送信時にだけ使われる一時的な値（長期保存の必須項目ではない）
    pub password: String,
    pub status: SessionStatus,
}

/// ログインフォームの生の入力値
///
/// 形式や空文字のチェックは行わない（フォームは空のまま送信できる）。
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialization_shape() {
        // ストレージに書かれるJSONの形そのものを確認する
        let session = Session {
            kind: UserKind::Employee,
            email: "johndoe@email.com".to_string(),
            password: "azerty".to_string(),
            status: SessionStatus::Connected,
        };

        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(
            json,
            r#"{"type":"Employee","email":"johndoe@email.com","password":"azerty","status":"connected"}"#
        );
    }

    #[test]
    fn test_session_roundtrip_admin() {
        let session = Session {
            kind: UserKind::Admin,
            email: "admin@billed.com".to_string(),
            password: "secret".to_string(),
            status: SessionStatus::Connected,
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.kind, UserKind::Admin);
    }
}
