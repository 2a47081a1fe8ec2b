use crate::features::bills::format::{format_date, format_status};
use crate::shared::api::models::{BillRecord, BillStatus};
use serde::{Deserialize, Serialize};

/// 一覧表示用の請求書エンティティ
///
/// ストアのレコードに表示専用の派生フィールド（整形済み日付と
/// 状態ラベル）を加えたもの。生の `date` はソートのために残す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    /// ストアが返した生の日付（ソートの基準）
    pub date: String,
    /// 表示用に整形した日付。解析できない日付は生の値のまま。
    pub formatted_date: String,
    pub vat: Option<f64>,
    pub pct: Option<f64>,
    pub commentary: Option<String>,
    /// プレビュー表示が参照する領収書のURL
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: BillStatus,
    /// 表示用の状態ラベル
    pub status_label: String,
}

impl Bill {
    /// ストアのレコードから表示用エンティティを組み立てる
    ///
    /// 日付が解析できないレコードも除外はせず、表示用の日付に
    /// 生の文字列をそのまま使う。
    pub fn from_record(record: BillRecord) -> Self {
        let formatted_date =
            format_date(&record.date).unwrap_or_else(|_| record.date.clone());
        let status_label = format_status(record.status).to_string();

        Self {
            id: record.id,
            email: record.email,
            expense_type: record.expense_type,
            name: record.name,
            amount: record.amount,
            date: record.date,
            formatted_date,
            vat: record.vat,
            pct: record.pct,
            commentary: record.commentary,
            file_url: record.file_url,
            file_name: record.file_name,
            status: record.status,
            status_label,
        }
    }
}
