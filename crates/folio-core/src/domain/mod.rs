//! Domain entities - the core business objects.

mod kind;
mod resource;
mod user;
mod validation;

pub use kind::{ResourceKind, UnknownKind};
pub use resource::{ResolvedResource, Resource};
pub use user::{OwnerSummary, User};
pub use validation::{ResourceDraft, ValidFields, validate};
