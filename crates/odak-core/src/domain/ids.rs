//! Domain identifiers (strongly-typed IDs).
//!
//! ドキュメントストアの ID は文字列なので、`Id<T>` は `String` を包みます。
//! `T` は PhantomData のマーカー型で、`TaskId` / `UserId` / `MemberId` を
//! コンパイル時に区別します。
//!
//! パイプライン実行ごとの `RunId` だけは ULID ベース（ログの相関用）です。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// ID が属するコレクション名を提供します（`DocumentPath` の組み立てに使う）。
pub trait IdMarker: Send + Sync + 'static {
    /// コレクション名（例: "users", "members"）
    fn collection() -> &'static str;
}

/// ジェネリック ID 型
///
/// # 例
/// ```ignore
/// let owner = UserId::new("u-1");
/// let member = MemberId::new("m-1");
/// // owner と member は異なる型なので、引数を取り違えるとコンパイルエラー
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn collection() -> &'static str {
        T::collection()
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn collection() -> &'static str {
        "tasks"
    }
}

/// User のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum User {}

impl IdMarker for User {
    fn collection() -> &'static str {
        "users"
    }
}

/// Member のマーカー型（User の下にネストされる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Member {}

impl IdMarker for Member {
    fn collection() -> &'static str {
        "members"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of a task record.
pub type TaskId = Id<Task>;

/// Identifier of a user (task owner, entitlement holder).
pub type UserId = Id<User>;

/// Identifier of a member, scoped under its owning user.
pub type MemberId = Id<Member>;

/// Identifier of one pipeline run (one triggering event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(Ulid);

impl RunId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}
