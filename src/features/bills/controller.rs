use crate::features::bills::models::Bill;
use crate::shared::api::Store;
use crate::shared::errors::{list_error_message, AppResult};
use crate::shared::navigation::{Navigator, RoutePath};
use std::sync::Arc;

/// プレビュー画像の幅に使う、プレビュー面の幅に対する比率
const PREVIEW_IMAGE_RATIO: f64 = 0.5;

/// 請求書一覧ビューの描画内容
#[derive(Debug, Clone)]
pub enum BillsView {
    /// 正常に取得できた一覧
    Loaded(Vec<Bill>),
    /// 取得失敗（表示するメッセージ付き）
    Failure(String),
}

/// プレビュー面に表示する画像
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub file_url: String,
    /// プレビュー面の幅に比率を掛けて切り捨てた値
    pub width: u32,
}

/// 領収書プレビュー面の境界
pub trait PreviewSurface {
    /// プレビュー面の幅
    fn width(&self) -> f64;

    /// 画像の表示を要求する
    fn show(&self, image: PreviewImage);
}

/// 請求書一覧のコントローラー
pub struct BillsController {
    store: Option<Arc<dyn Store>>,
    navigator: Arc<dyn Navigator>,
}

impl BillsController {
    /// 新しいBillsControllerを作成する
    ///
    /// # 引数
    /// * `store` - リモートサービス（未設定なら一覧は空になる）
    /// * `navigator` - ナビゲーション機能
    pub fn new(store: Option<Arc<dyn Store>>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// 請求書コレクションを取得し、新しい順に整列した表示用一覧を返す
    ///
    /// 整列は生の `date` の降順で行う（日付が古いものほど後ろ）。
    /// 日付が解析できないレコードも除外せず一覧に含める。
    /// 同じ日付同士の順序は保証しない。
    pub async fn get_bills(&self) -> AppResult<Vec<Bill>> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let mut records = store.bills().list().await?;
        records.sort_by(|a, b| b.date.cmp(&a.date));

        let bills: Vec<Bill> = records.into_iter().map(Bill::from_record).collect();
        log::info!("請求書一覧を取得しました: {}件", bills.len());
        Ok(bills)
    }

    /// 一覧ビューの描画内容を組み立てる
    ///
    /// 取得に失敗した場合はリトライせず、分類したメッセージを
    /// 持つエラービューを返す。
    pub async fn bills_view(&self) -> BillsView {
        match self.get_bills().await {
            Ok(bills) => BillsView::Loaded(bills),
            Err(error) => {
                let message = list_error_message(&error);
                log::warn!("請求書一覧の取得に失敗しました: {error}");
                BillsView::Failure(message)
            }
        }
    }

    /// 行の領収書URLをプレビュー面に表示する
    ///
    /// ネットワーク呼び出しは行わない。画像の幅はプレビュー面の幅の
    /// 一定比率に切り捨てる。
    pub fn preview_attachment(&self, file_url: &str, surface: &dyn PreviewSurface) {
        let width = (surface.width() * PREVIEW_IMAGE_RATIO).floor() as u32;
        surface.show(PreviewImage {
            file_url: file_url.to_string(),
            width,
        });
    }

    /// 新規請求書フォームへ遷移する
    pub fn navigate_to_new_bill(&self) {
        self.navigator.on_navigate(RoutePath::NewBill);
    }
}
