//! Document - ドキュメントストアのレコード表現
//!
//! ストアのレコードは JSON オブジェクトとして扱います。
//! フィールドの有無や型はストア側で保証されないので、読み取りは常に
//! `Option` を返すアクセサ経由で行います。

use serde_json::{Map, Value};
use std::fmt;

use super::ids::{MemberId, UserId};

/// 1 レコード分のフィールド集合
pub type Document = Map<String, Value>;

/// 非空の文字列フィールドだけを返す（空文字列は「無い」扱い）
pub fn non_empty_str<'a>(doc: &'a Document, field: &str) -> Option<&'a str> {
    match doc.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// フィールドが真偽値 `true` そのものかどうか
///
/// `"true"` や `1` は true とみなさない。
pub fn is_exactly_true(doc: &Document, field: &str) -> bool {
    matches!(doc.get(field), Some(Value::Bool(true)))
}

/// ドキュメントの位置（`users/{uid}/members/{mid}` のようなパス）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    segments: Vec<String>,
}

impl DocumentPath {
    pub fn user(user_id: &UserId) -> Self {
        Self {
            segments: vec![UserId::collection().to_string(), user_id.to_string()],
        }
    }

    /// Member は owner の下にネストされる
    pub fn member(owner: &UserId, member: &MemberId) -> Self {
        let mut path = Self::user(owner);
        path.segments.push(MemberId::collection().to_string());
        path.segments.push(member.to_string());
        path
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
