//! Resolvers - ドキュメントストアから 1 レコードを読んで答えを出す
//!
//! どちらも「レコードが無い」はエラーにせず既定値（false / None）にする。
//! 読み取りの失敗だけが `DispatchError` として実行を中断する。

pub mod entitlement;
pub mod token;

pub use self::entitlement::EntitlementResolver;
pub use self::token::TokenResolver;
