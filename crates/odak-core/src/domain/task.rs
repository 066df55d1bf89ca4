use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, non_empty_str};
use super::ids::{MemberId, TaskId, UserId};

pub const TITLE_FIELD: &str = "title";
pub const ASSIGNED_MEMBER_FIELD: &str = "assignedMemberId";
pub const CREATOR_FIELD: &str = "creatorId";

/// A task record as read from one side of a change event.
///
/// Fields are read lazily: the store does not guarantee their presence or type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskSnapshot(Document);

impl TaskSnapshot {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    /// `None` unless the value is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// A snapshot with no fields carries no data.
    pub fn has_data(&self) -> bool {
        !self.0.is_empty()
    }

    /// Empty strings count as "unassigned".
    pub fn assigned_member_id(&self) -> Option<MemberId> {
        non_empty_str(&self.0, ASSIGNED_MEMBER_FIELD).map(MemberId::new)
    }

    pub fn creator_id(&self) -> Option<UserId> {
        non_empty_str(&self.0, CREATOR_FIELD).map(UserId::new)
    }

    /// Non-string titles are rendered as their JSON text; a missing title is empty.
    pub fn title(&self) -> String {
        match self.0.get(TITLE_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Typed view of the snapshot. `None` when the owning user is unknown.
    pub fn to_task(&self, id: &TaskId) -> Option<Task> {
        Some(Task {
            id: id.clone(),
            title: self.title(),
            assigned_member_id: self.assigned_member_id(),
            creator_id: self.creator_id()?,
        })
    }
}

/// A unit of work with an owner and an optional assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub assigned_member_id: Option<MemberId>,
    pub creator_id: UserId,
}

/// Before/after pair delivered by the store's change notification.
///
/// `after == None` means the record was deleted; `before == None` means it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChange {
    pub task_id: TaskId,
    #[serde(default)]
    pub before: Option<TaskSnapshot>,
    #[serde(default)]
    pub after: Option<TaskSnapshot>,
}

impl TaskChange {
    pub fn new(task_id: TaskId, before: Option<TaskSnapshot>, after: Option<TaskSnapshot>) -> Self {
        Self {
            task_id,
            before,
            after,
        }
    }

    pub fn created(task_id: TaskId, after: TaskSnapshot) -> Self {
        Self::new(task_id, None, Some(after))
    }

    pub fn updated(task_id: TaskId, before: TaskSnapshot, after: TaskSnapshot) -> Self {
        Self::new(task_id, Some(before), Some(after))
    }

    pub fn deleted(task_id: TaskId, before: TaskSnapshot) -> Self {
        Self::new(task_id, Some(before), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: Value) -> TaskSnapshot {
        TaskSnapshot::from_value(value).unwrap()
    }

    #[test]
    fn empty_assignment_is_absent() {
        let s = snapshot(json!({ "assignedMemberId": "", "creatorId": "u1" }));
        assert_eq!(s.assigned_member_id(), None);
        assert_eq!(s.creator_id(), Some(UserId::new("u1")));
    }

    #[test]
    fn title_interpolates_as_given() {
        assert_eq!(snapshot(json!({ "title": "Buy milk" })).title(), "Buy milk");
        assert_eq!(snapshot(json!({ "title": 7 })).title(), "7");
        assert_eq!(snapshot(json!({ "other": 1 })).title(), "");
    }

    #[test]
    fn to_task_requires_creator() {
        let id = TaskId::new("t1");
        assert!(snapshot(json!({ "title": "x" })).to_task(&id).is_none());

        let task = snapshot(json!({ "title": "x", "creatorId": "u1", "assignedMemberId": "m1" }))
            .to_task(&id)
            .unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.assigned_member_id, Some(MemberId::new("m1")));
    }

    #[test]
    fn non_object_values_are_not_snapshots() {
        assert!(TaskSnapshot::from_value(json!(null)).is_none());
        assert!(TaskSnapshot::from_value(json!("x")).is_none());
        assert!(!snapshot(json!({})).has_data());
    }

    #[test]
    fn change_deserializes_from_event_json() {
        let change: TaskChange = serde_json::from_value(json!({
            "taskId": "t1",
            "before": null,
            "after": { "title": "x", "creatorId": "u1", "assignedMemberId": "m1" }
        }))
        .unwrap();
        assert_eq!(change.task_id, TaskId::new("t1"));
        assert!(change.before.is_none());
        assert_eq!(
            change.after.unwrap().assigned_member_id(),
            Some(MemberId::new("m1"))
        );
    }
}
