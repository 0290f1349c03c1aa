//! Page controllers: the create/edit/view page and the list page.

use std::sync::Arc;

use folio_core::domain::{ResourceDraft, ResourceKind, validate};
use folio_shared::dto::ResourceResponse;

use crate::api::ResourceApi;
use crate::proxy::ResourceProxy;
use crate::routes::Route;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete?";

/// Asks the user a yes/no question before a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The form is invalid; the view should display errors for `form`.
    ShowValidationErrors { form: String },
    Navigated(Route),
    /// The server rejected the save; its message is in `error`.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Cancelled,
    Navigated(Route),
    Failed,
}

/// Backs the create, edit and view pages of one resource.
pub struct ResourceController {
    pub resource: ResourceProxy,
    pub error: Option<String>,
    /// Where the last successful action sent the user.
    pub location: Option<Route>,
}

impl ResourceController {
    pub fn new(resource: ResourceProxy) -> Self {
        Self {
            resource,
            error: None,
            location: None,
        }
    }

    /// Name of the form the page binds, e.g. `vm.form.blogForm`.
    pub fn form_name(&self) -> String {
        format!("vm.form.{}Form", self.resource.kind().as_str())
    }

    /// Validate, then create or update, then go to the view page.
    pub async fn save(&mut self) -> SaveOutcome {
        let draft = ResourceDraft::new(self.resource.title.as_str(), self.resource.content.as_str());
        if validate(&draft).is_err() {
            return SaveOutcome::ShowValidationErrors {
                form: self.form_name(),
            };
        }

        let kind = self.resource.kind();
        match self.resource.create_or_update().await {
            Ok(saved) => {
                let route = Route::View(kind, saved.id);
                self.error = None;
                self.navigate(route)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                SaveOutcome::Failed
            }
        }
    }

    /// Delete after confirmation, then go to the list page.
    pub async fn remove(&mut self, confirm: &dyn Confirm) -> RemoveOutcome {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return RemoveOutcome::Cancelled;
        }

        let route = Route::List(self.resource.kind());
        match self.resource.remove().await {
            Ok(_) => {
                self.error = None;
                self.location = Some(route);
                RemoveOutcome::Navigated(route)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                RemoveOutcome::Failed
            }
        }
    }

    fn navigate(&mut self, route: Route) -> SaveOutcome {
        tracing::debug!(path = %route.path(), "Navigating");
        self.location = Some(route);
        SaveOutcome::Navigated(route)
    }
}

/// Backs the list page of one kind.
pub struct ListController {
    api: Arc<dyn ResourceApi>,
    kind: ResourceKind,
    pub items: Vec<ResourceResponse>,
    pub error: Option<String>,
}

impl ListController {
    pub fn new(api: Arc<dyn ResourceApi>, kind: ResourceKind) -> Self {
        Self {
            api,
            kind,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub async fn load(&mut self) {
        match self.api.list(self.kind).await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
