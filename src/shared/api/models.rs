use serde::{Deserialize, Serialize};

/// 請求書の承認状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// 承認待ち
    Pending,
    /// 承認済み
    Accepted,
    /// 差し戻し
    Refused,
}

/// ストアから取得する請求書レコード
///
/// ワイヤ上のフィールド名はキャメルケース（fileUrl / fileName / type）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    pub amount: f64,
    /// ISO形式の日付文字列（ソートはこの生の値で行う）
    pub date: String,
    #[serde(default)]
    pub vat: Option<f64>,
    #[serde(default)]
    pub pct: Option<f64>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// 請求書の作成・更新でストアへ送るペイロード
///
/// 数値フィールドはフォーム入力の解析結果をそのまま運ぶ。
/// 解析できなかった値はNaNのまま渡され、JSONではnullになる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: f64,
    pub pct: f64,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// ファイルステージングのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBill {
    /// 作成されたレコードの識別子
    #[serde(alias = "key")]
    pub id: String,
    /// アップロードされた領収書の参照URL
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// 元のファイル名
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

/// ログインのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub jwt: String,
}

/// アップロード対象のファイル（クライアント側の一時的な成果物）
///
/// 領収書の参照URLを得るために一度だけ消費され、永続化はされない。
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 元のファイル名
    pub name: String,
    /// 宣言されたMIMEタイプ
    pub mime_type: String,
    /// ファイルの生データ
    pub data: Vec<u8>,
}
