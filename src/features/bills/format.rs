use crate::shared::api::models::BillStatus;
use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// フランス語の月の短縮形（Intlのfrロケール相当）
const SHORT_MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// ISO形式の日付を一覧表示用の短い形式に整形する
///
/// 例: "2004-04-04" -> "4 Avr.04"
/// （日、先頭を大文字にした月の短縮形の先頭4文字、年の下2桁）
///
/// # 引数
/// * `date` - ISO形式（YYYY-MM-DD）の日付文字列
///
/// # 戻り値
/// 表示用の文字列。日付として解釈できない場合はエラー。
pub fn format_date(date: &str) -> AppResult<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| AppError::Validation(format!("日付を解析できません: {date}: {e}")))?;

    let month = SHORT_MONTHS_FR[parsed.month0() as usize];
    let capitalized: String = month
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 0 { c.to_uppercase().next().unwrap_or(c) } else { c })
        .collect();
    let short_month: String = capitalized.chars().take(4).collect();
    let year = parsed.year().rem_euclid(100);

    Ok(format!("{} {short_month}{year:02}", parsed.day()))
}

/// 承認状態を表示用のラベルに変換する
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
