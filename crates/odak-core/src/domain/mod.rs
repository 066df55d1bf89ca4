//! Domain model (IDs, task snapshots, messages, outcomes, errors, events).

pub mod document;
pub mod errors;
pub mod events;
pub mod ids;
pub mod message;
pub mod outcome;
pub mod task;

pub use self::document::{Document, DocumentPath};
pub use self::errors::{DispatchError, PushError, StoreError};
pub use self::events::DomainEvent;
pub use self::ids::{MemberId, RunId, TaskId, UserId};
pub use self::message::{DeliveryToken, MessageData, Notification, OutboundMessage};
pub use self::outcome::{DeliveryReport, DispatchOutcome, SkipReason};
pub use self::task::{Task, TaskChange, TaskSnapshot};
