/// 画面遷移を表す型とナビゲーション境界
///
/// ルーター本体（DOMの差し替え）はクレートの外側にあり、
/// コントローラーはこの境界を通じて遷移を要求するだけ。

/// アプリケーション内のルート識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// ログイン画面
    Login,
    /// 従業員の請求書一覧
    Bills,
    /// 新規請求書フォーム
    NewBill,
    /// 管理者ダッシュボード
    Dashboard,
}

impl RoutePath {
    /// ルーターが解釈するパス文字列を取得する
    pub fn pathname(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

/// ナビゲーション機能の境界
///
/// 実装はビュー領域の内容を差し替える。テストでは記録用のフェイクを使う。
pub trait Navigator: Send + Sync {
    /// 指定ルートへの遷移を要求する
    fn on_navigate(&self, route: RoutePath);
}
