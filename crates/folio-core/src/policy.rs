//! Access policy - which roles may perform which resource actions.
//!
//! The role table only looks at authentication. Ownership is checked later,
//! once the resource has been resolved, through [`OwnershipRules`].

use uuid::Uuid;

use crate::domain::ResolvedResource;
use crate::error::DomainError;

/// Role of the session making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Guest,
    User,
    Admin,
}

impl Role {
    /// Highest role named in a token's role list. Any identity is at least `User`.
    pub fn from_roles(roles: &[String]) -> Self {
        if roles.iter().any(|r| r == "admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }
}

/// Which half of a resource's route table a request hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    /// `/api/{kind}`
    Collection,
    /// `/api/{kind}/{id}`
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Map an HTTP method on a route family to an action. Unrouted methods yield `None`.
    pub fn from_method(method: &str, family: RouteFamily) -> Option<Self> {
        match (family, method) {
            (RouteFamily::Collection, "GET") => Some(Action::List),
            (RouteFamily::Collection, "POST") => Some(Action::Create),
            (RouteFamily::Single, "GET") => Some(Action::Read),
            (RouteFamily::Single, "PUT") => Some(Action::Update),
            (RouteFamily::Single, "DELETE") => Some(Action::Delete),
            _ => None,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::List | Action::Read)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Role table: guests may only read, authenticated sessions may do everything.
pub fn is_allowed(action: Action, role: Role) -> Decision {
    if action.is_read_only() || role.is_authenticated() {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// Ownership requirements applied after the resource is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OwnershipRules {
    /// Restrict updates to the owner, like deletes.
    pub update_requires_owner: bool,
}

impl OwnershipRules {
    pub fn requires_owner(&self, action: Action) -> bool {
        match action {
            Action::Delete => true,
            Action::Update => self.update_requires_owner,
            _ => false,
        }
    }

    /// Reject `action` on `resolved` unless the session user owns it (when required).
    pub fn authorize(
        &self,
        action: Action,
        resolved: &ResolvedResource,
        user_id: Option<Uuid>,
    ) -> Result<(), DomainError> {
        if self.requires_owner(action) && !resolved.is_owned_by(user_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OwnerSummary, Resource, ResourceDraft, ResourceKind, validate};

    const ALL_ACTIONS: [Action; 5] = [
        Action::List,
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
    ];

    fn resolved(owner: Uuid) -> ResolvedResource {
        let fields = validate(&ResourceDraft::new("Title", "Content")).unwrap();
        ResolvedResource::new(
            Resource::new(ResourceKind::Blog, owner, fields),
            Some(OwnerSummary {
                id: owner,
                display_name: "Owner".to_string(),
            }),
        )
    }

    #[test]
    fn test_guest_may_only_read() {
        assert_eq!(is_allowed(Action::List, Role::Guest), Decision::Allow);
        assert_eq!(is_allowed(Action::Read, Role::Guest), Decision::Allow);
        assert_eq!(is_allowed(Action::Create, Role::Guest), Decision::Deny);
        assert_eq!(is_allowed(Action::Update, Role::Guest), Decision::Deny);
        assert_eq!(is_allowed(Action::Delete, Role::Guest), Decision::Deny);
    }

    #[test]
    fn test_authenticated_roles_allowed_everything() {
        for role in [Role::User, Role::Admin] {
            for action in ALL_ACTIONS {
                assert_eq!(is_allowed(action, role), Decision::Allow);
            }
        }
    }

    #[test]
    fn test_action_from_method() {
        assert_eq!(
            Action::from_method("POST", RouteFamily::Collection),
            Some(Action::Create)
        );
        assert_eq!(
            Action::from_method("DELETE", RouteFamily::Single),
            Some(Action::Delete)
        );
        assert_eq!(Action::from_method("POST", RouteFamily::Single), None);
        assert_eq!(Action::from_method("PATCH", RouteFamily::Single), None);
    }

    #[test]
    fn test_role_from_roles() {
        assert_eq!(Role::from_roles(&["user".to_string()]), Role::User);
        assert_eq!(
            Role::from_roles(&["user".to_string(), "admin".to_string()]),
            Role::Admin
        );
        assert_eq!(Role::from_roles(&[]), Role::User);
    }

    #[test]
    fn test_delete_requires_owner() {
        let owner = Uuid::new_v4();
        let rules = OwnershipRules::default();
        let resource = resolved(owner);

        assert!(rules.authorize(Action::Delete, &resource, Some(owner)).is_ok());
        assert!(matches!(
            rules.authorize(Action::Delete, &resource, Some(Uuid::new_v4())),
            Err(DomainError::Forbidden)
        ));
        assert!(rules.authorize(Action::Delete, &resource, None).is_err());
    }

    #[test]
    fn test_update_owner_rule_is_configurable() {
        let owner = Uuid::new_v4();
        let stranger = Some(Uuid::new_v4());
        let resource = resolved(owner);

        let open = OwnershipRules::default();
        assert!(open.authorize(Action::Update, &resource, stranger).is_ok());

        let strict = OwnershipRules {
            update_requires_owner: true,
        };
        assert!(strict.authorize(Action::Update, &resource, stranger).is_err());
        assert!(strict.authorize(Action::Update, &resource, Some(owner)).is_ok());
    }
}
