//! WidgetStorage port - ホームウィジェットの共有 key-value ストレージ
//!
//! ホストアプリが書き込み、ウィジェット側は読むだけ。
//! 型が合わない値は「無い」として扱う。

pub trait WidgetStorage: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;

    fn get_int(&self, key: &str) -> Option<i64>;
}
