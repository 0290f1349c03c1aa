//! Client side of Folio: a typed REST client, resource proxies bound to page
//! state, navigation configuration and the page controllers.

pub mod api;
pub mod controller;
pub mod proxy;
pub mod routes;

#[cfg(test)]
mod testing;

pub use api::{ClientError, HttpResourceApi, ResourceApi};
pub use controller::{Confirm, ListController, RemoveOutcome, ResourceController, SaveOutcome};
pub use proxy::ResourceProxy;
pub use routes::{MenuItem, NavigationConfig, PageKind, PageState, Route};
