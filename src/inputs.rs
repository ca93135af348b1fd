//! Typed inputs for create/update mutations.
//!
//! Field names serialize in the API's camelCase convention, and every
//! optional field is skipped when `None` so server-side defaults apply on
//! creation and partial updates stay partial. Role structures and scopes
//! are passed through as raw JSON values; the server validates them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for the `createGroup` mutation.
///
/// Omitted contact fields default to the author's values server-side, and
/// omitted `user_roles` defaults to the author as sole admin.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupInput {
    /// Group name.
    pub name: String,
    /// A phone number with format "+X (XXX) XXX-XXXX" or an email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// `PHONE` or `EMAIL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    /// Group details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User admins and members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Value>,
}

/// Input for the `updateGroup` mutation. Unset fields are left untouched
/// server-side.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupInput {
    /// ID of the group to update.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Value>,
}

/// Input for the `createProject` mutation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the project is open to others on the platform; defaults to
    /// false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    /// User admins, editors and viewers; defaults to the author as sole
    /// admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Value>,
    /// Group admins, editors and viewers; defaults to none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_roles: Option<Value>,
    /// Project tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input for the `updateProject` mutation. Unset fields are left untouched
/// server-side.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    /// ID of the project to update.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_roles: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input for the `createOauth2Client` mutation.
///
/// `user_write` and `group_write` scopes are not allowed for clients;
/// omitted scopes default to `[user_read, project_read, project_write]`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOauth2ClientInput {
    /// Client name; must be unique.
    pub name: String,
    /// Plugin description.
    pub description: String,
    /// Where to redirect the user for authorization.
    pub redirect_uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Whether PKCE is required; mandatory for mobile apps and SPAs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_required: Option<bool>,
}

/// Input for the `updateOauth2Client` mutation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOauth2ClientInput {
    /// ID of the client to update.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_required: Option<bool>,
}

/// Input for the `updateUser` mutation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    /// ID of the user to update.
    pub id: String,
    /// A valid user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
}
