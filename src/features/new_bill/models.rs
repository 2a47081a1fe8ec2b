use std::path::Path;

/// 対応していないファイルを選択したときに表示する検証メッセージ
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Veuillez choisir une image (jpg, jpeg ou png)";

/// 新規請求書フォームのスナップショット（生の入力値）
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    /// 経費のカテゴリ
    pub expense_type: String,
    /// 経費の名称
    pub name: String,
    /// 金額（数値として解析される）
    pub amount: String,
    /// 日付（ISO形式）
    pub date: String,
    /// 消費税額（数値として解析される）
    pub vat: String,
    /// 税率（数値として解析される）
    pub pct: String,
    /// コメント
    pub commentary: String,
}

/// ステージング済みの領収書への参照
///
/// ファイル選択時の作成呼び出しが返した識別子と参照URLを、
/// フォーム送信時の更新のために保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedReceipt {
    /// 作成されたレコードの識別子
    pub bill_id: String,
    /// 領収書の参照URL
    pub file_url: String,
    /// 元のファイル名
    pub file_name: String,
}

/// ファイル選択の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// 受理された（以前の検証メッセージは消える）
    Accepted {
        file_url: String,
        file_name: String,
    },
    /// 拒否された（アダプター側でメッセージを表示し、入力値をリセットする）
    Rejected { message: String },
}

/// ファイル名の拡張子が受理対象（jpg / jpeg / png）かを判定する
///
/// 拡張子は小文字化してから比較する。
pub fn is_supported_image(file_name: &str) -> bool {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    matches!(extension.as_str(), "jpg" | "jpeg" | "png")
}

/// フォームの数値フィールドを解析する
///
/// 解析できない・空の入力はNaNのまま通す（拒否はしない）。
pub fn parse_number(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}
