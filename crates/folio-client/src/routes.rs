//! Page states and menus for every resource kind.
//!
//! [`NavigationConfig::build`] produces the whole table once; the rendering
//! layer receives it as a value instead of registering states globally.

use std::sync::Arc;

use uuid::Uuid;

use folio_core::domain::ResourceKind;
use folio_core::policy::Role;

use crate::api::{ClientError, ResourceApi};
use crate::proxy::ResourceProxy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    List,
    Create,
    Edit,
    View,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [PageKind::List, PageKind::Create, PageKind::Edit, PageKind::View];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::List => "list",
            PageKind::Create => "create",
            PageKind::Edit => "edit",
            PageKind::View => "view",
        }
    }
}

/// What a page needs loaded before its controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolve {
    Nothing,
    /// A blank, unsaved instance.
    Blank,
    /// The instance named by the route's id.
    Fetch,
}

/// A concrete location in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List(ResourceKind),
    Create(ResourceKind),
    Edit(ResourceKind, Uuid),
    View(ResourceKind, Uuid),
}

impl Route {
    /// Match a client path such as `/blogs/<id>/edit`.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/');
        let kind = ResourceKind::from_collection(segments.next()?)?;

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Some(Route::List(kind)),
            (Some("create"), None, _) => Some(Route::Create(kind)),
            (Some(id), None, _) => id.parse().ok().map(|id| Route::View(kind, id)),
            (Some(id), Some("edit"), None) => id.parse().ok().map(|id| Route::Edit(kind, id)),
            _ => None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match *self {
            Route::List(kind) | Route::Create(kind) => kind,
            Route::Edit(kind, _) | Route::View(kind, _) => kind,
        }
    }

    pub fn page(&self) -> PageKind {
        match self {
            Route::List(_) => PageKind::List,
            Route::Create(_) => PageKind::Create,
            Route::Edit(..) => PageKind::Edit,
            Route::View(..) => PageKind::View,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match *self {
            Route::Edit(_, id) | Route::View(_, id) => Some(id),
            _ => None,
        }
    }

    /// State name, e.g. `blogs.view`.
    pub fn state_name(&self) -> String {
        state_name(self.kind(), self.page())
    }

    pub fn path(&self) -> String {
        let collection = self.kind().collection();
        match *self {
            Route::List(_) => format!("/{collection}"),
            Route::Create(_) => format!("/{collection}/create"),
            Route::Edit(_, id) => format!("/{collection}/{id}/edit"),
            Route::View(_, id) => format!("/{collection}/{id}"),
        }
    }
}

fn state_name(kind: ResourceKind, page: PageKind) -> String {
    format!("{}.{}", kind.collection(), page.as_str())
}

/// `required` empty means public. Admins hold the user role as well.
fn grants(required: &[Role], role: Role) -> bool {
    required.is_empty()
        || required
            .iter()
            .any(|r| *r == role || (*r == Role::User && role == Role::Admin))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub name: String,
    /// URL pattern, `:id` marks the identifier segment.
    pub url: String,
    pub kind: ResourceKind,
    pub page: PageKind,
    pub resolve: Resolve,
    /// Roles allowed to enter; empty for public pages.
    pub roles: Vec<Role>,
    title: PageTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageTitle {
    Fixed(String),
    /// Prefix followed by the resolved resource's title.
    WithResource(String),
}

impl PageState {
    fn new(kind: ResourceKind, page: PageKind) -> Self {
        let collection = kind.collection();
        let (url, resolve, roles, title) = match page {
            PageKind::List => (
                format!("/{collection}"),
                Resolve::Nothing,
                Vec::new(),
                PageTitle::Fixed(format!("{} List", kind.plural_label())),
            ),
            PageKind::Create => (
                format!("/{collection}/create"),
                Resolve::Blank,
                vec![Role::User, Role::Admin],
                PageTitle::Fixed(format!("{} Create", kind.plural_label())),
            ),
            PageKind::Edit => (
                format!("/{collection}/:id/edit"),
                Resolve::Fetch,
                vec![Role::User, Role::Admin],
                PageTitle::WithResource(format!("Edit {}", kind.label())),
            ),
            PageKind::View => (
                format!("/{collection}/:id"),
                Resolve::Fetch,
                Vec::new(),
                PageTitle::WithResource(kind.label().to_string()),
            ),
        };

        Self {
            name: state_name(kind, page),
            url,
            kind,
            page,
            resolve,
            roles,
            title,
        }
    }

    pub fn is_accessible(&self, role: Role) -> bool {
        grants(&self.roles, role)
    }

    /// Page title, filled in with the resolved resource when the page has one.
    pub fn title(&self, resource: Option<&ResourceProxy>) -> String {
        match &self.title {
            PageTitle::Fixed(title) => title.clone(),
            PageTitle::WithResource(prefix) => match resource {
                Some(resource) => format!("{prefix} {}", resource.title),
                None => prefix.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    /// Target state name.
    pub state: String,
    /// Roles the item is shown to; empty for everyone.
    pub roles: Vec<Role>,
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn is_dropdown(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn is_visible(&self, role: Role) -> bool {
        grants(&self.roles, role)
    }

    /// Copy with the sub-items `role` may not see removed.
    fn visible_to(&self, role: Role) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.is_visible(role))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    fn dropdown(kind: ResourceKind) -> Self {
        Self {
            title: kind.plural_label().to_string(),
            state: kind.collection().to_string(),
            roles: Vec::new(),
            items: vec![
                Self {
                    title: format!("List {}", kind.plural_label()),
                    state: state_name(kind, PageKind::List),
                    roles: Vec::new(),
                    items: Vec::new(),
                },
                Self {
                    title: format!("Create {}", kind.label()),
                    state: state_name(kind, PageKind::Create),
                    roles: vec![Role::User],
                    items: Vec::new(),
                },
            ],
        }
    }
}

/// Every page state and the topbar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub states: Vec<PageState>,
    pub topbar: Vec<MenuItem>,
}

impl NavigationConfig {
    pub fn build() -> Self {
        let states = ResourceKind::ALL
            .into_iter()
            .flat_map(|kind| PageKind::ALL.into_iter().map(move |page| PageState::new(kind, page)))
            .collect();
        let topbar = ResourceKind::ALL.into_iter().map(MenuItem::dropdown).collect();

        Self { states, topbar }
    }

    pub fn state(&self, name: &str) -> Option<&PageState> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn state_for(&self, route: &Route) -> Option<&PageState> {
        self.states
            .iter()
            .find(|s| s.kind == route.kind() && s.page == route.page())
    }

    /// Topbar entries as `role` sees them.
    pub fn menu_for(&self, role: Role) -> Vec<MenuItem> {
        self.topbar
            .iter()
            .filter(|item| item.is_visible(role))
            .map(|item| item.visible_to(role))
            .collect()
    }

    /// Load what the route's page resolves before its controller runs.
    pub async fn resolve(
        &self,
        route: &Route,
        api: Arc<dyn ResourceApi>,
    ) -> Result<Option<ResourceProxy>, ClientError> {
        let resolve = self
            .state_for(route)
            .map(|s| s.resolve)
            .unwrap_or(Resolve::Nothing);

        match (resolve, route.id()) {
            (Resolve::Blank, _) => Ok(Some(ResourceProxy::blank(api, route.kind()))),
            (Resolve::Fetch, Some(id)) => ResourceProxy::get(api, route.kind(), id).await.map(Some),
            _ => Ok(None),
        }
    }
}
