//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub roles: Vec<String>,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

/// Body of `POST /api/{kind}` and `PUT /api/{kind}/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcePayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Expanded owner of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Uuid,
    pub display_name: String,
}

/// A blog or contact as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerResponse>,
    pub created_at: DateTime<Utc>,
    /// Only present on single-resource responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current_user_owner: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_response_wire_names() {
        let response = ResourceResponse {
            id: Uuid::nil(),
            kind: "blog".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            owner: Some(OwnerResponse {
                id: Uuid::nil(),
                display_name: "Full Name".to_string(),
            }),
            created_at: Utc::now(),
            is_current_user_owner: Some(true),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["owner"]["displayName"], "Full Name");
        assert_eq!(json["isCurrentUserOwner"], true);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_absent_owner_is_omitted() {
        let response = ResourceResponse {
            id: Uuid::nil(),
            kind: "contact".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            owner: None,
            created_at: Utc::now(),
            is_current_user_owner: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("owner").is_none());
        assert!(json.get("isCurrentUserOwner").is_none());
    }
}
