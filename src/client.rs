//! The public SDK surface.
//!
//! [`Client`] owns the GraphQL transport and the storage client and
//! exposes one async method per platform operation. Every call follows the
//! same pipeline: shape the variables, execute the HTTP round trip,
//! normalize the response envelope, then unwrap the payload or surface the
//! carried error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::clients::{ApiError, GraphqlClient};
use crate::config::{ApiToken, ConcurrencyPolicy, Tier};
use crate::error::ConfigError;
use crate::graphql::{input_variables, node_variables, normalize, queries, unwrap_payload};
use crate::inputs::{
    CreateGroupInput, CreateOauth2ClientInput, CreateProjectInput, UpdateGroupInput,
    UpdateOauth2ClientInput, UpdateProjectInput, UpdateUserInput,
};
use crate::transfer::{self, StorageClient, Ticket, TransferError, UploadOutcome};

/// A Big Local News API client.
///
/// Construction is fail-fast: a missing token or unrecognized tier is a
/// [`ConfigError`] and no partial client is returned. After construction
/// the endpoint and credential are fixed for the client's lifetime.
///
/// `Client` is `Clone`, `Send` and `Sync`; clones share the underlying
/// HTTP connection pools, and no mutable state exists between calls.
///
/// # Example
///
/// ```rust,no_run
/// use bln_api::{Client, Tier};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .token_str("my-personal-token")?
///     .tier(Tier::Prod)
///     .build()?;
///
/// let me = client.user().await?;
/// println!("{}", me["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    gql: GraphqlClient,
    storage: StorageClient,
    tier: Tier,
    concurrency: ConcurrencyPolicy,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    token: Option<ApiToken>,
    tier: Tier,
    endpoint: Option<String>,
    concurrency: Option<ConcurrencyPolicy>,
}

impl ClientBuilder {
    /// Sets the personal API token.
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the personal API token from a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if the string is empty.
    pub fn token_str(mut self, token: impl Into<String>) -> Result<Self, ConfigError> {
        self.token = Some(ApiToken::new(token)?);
        Ok(self)
    }

    /// Sets the deployment tier. Defaults to [`Tier::Prod`].
    #[must_use]
    pub const fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Overrides the tier's endpoint URL. Intended for tests and proxies.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the upload fan-out policy. Defaults to bounded concurrency
    /// sized to the available processors.
    #[must_use]
    pub const fn concurrency(mut self, policy: ConcurrencyPolicy) -> Self {
        self.concurrency = Some(policy);
        self
    }

    /// Builds the client, falling back to the `BLN_API_TOKEN` environment
    /// variable when no token was set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if no token is available.
    pub fn build(self) -> Result<Client, ConfigError> {
        let token = match self.token {
            Some(token) => token,
            None => ApiToken::from_env()?,
        };
        let gql = self.endpoint.map_or_else(
            || GraphqlClient::new(self.tier, &token),
            |endpoint| GraphqlClient::with_endpoint(endpoint, &token),
        );
        Ok(Client {
            gql,
            storage: StorageClient::new(),
            tier: self.tier,
            concurrency: self.concurrency.unwrap_or_default(),
        })
    }
}

/// Bulk-config document: optional `groups` and `projects` arrays, where an
/// element without an `id` is a creation and one with an `id` an update.
#[derive(Debug, Default, Deserialize)]
struct BulkConfig {
    #[serde(default)]
    groups: Vec<Value>,
    #[serde(default)]
    projects: Vec<Value>,
}

impl Client {
    /// Creates a client for the given tier.
    #[must_use]
    pub fn new(token: ApiToken, tier: Tier) -> Self {
        Self {
            gql: GraphqlClient::new(tier, &token),
            storage: StorageClient::new(),
            tier,
            concurrency: ConcurrencyPolicy::default(),
        }
    }

    /// Returns a builder for configuring a client.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns the tier this client talks to.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Full call pipeline: execute, normalize, unwrap.
    async fn call(&self, document: &str, variables: Value) -> Result<Value, ApiError> {
        let raw = self.gql.execute(document, variables).await?;
        unwrap_payload(normalize(raw))
    }

    /// Runs a query that takes no variables.
    async fn query(&self, document: &str) -> Result<Value, ApiError> {
        self.call(document, json!({})).await
    }

    /// Runs a mutation whose arguments serialize into the `input` envelope.
    async fn mutate(
        &self,
        document: &str,
        arguments: impl serde::Serialize,
    ) -> Result<Value, ApiError> {
        let arguments = serde_json::to_value(arguments)?;
        self.call(document, input_variables(arguments)).await
    }

    /// Executes a raw GraphQL document with explicit variables.
    ///
    /// When `normalize_response` is set, the response envelope is
    /// collapsed the same way the typed calls do; otherwise the raw body
    /// is returned untouched. No `{ok, err}` unwrapping happens either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] or [`ApiError::Network`] as the
    /// transport does.
    pub async fn raw(
        &self,
        query: &str,
        variables: Value,
        normalize_response: bool,
    ) -> Result<Value, ApiError> {
        let raw = self.gql.execute(query, variables).await?;
        if normalize_response {
            Ok(normalize(raw))
        } else {
            Ok(raw)
        }
    }

    // === Queries about the current user ===

    /// Returns all information accessible by the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn everything(&self) -> Result<Value, ApiError> {
        self.query(&queries::everything()).await
    }

    /// Returns information about the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn user(&self) -> Result<Value, ApiError> {
        self.query(&queries::user()).await
    }

    /// Returns the current user's group roles and groups.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn group_roles(&self) -> Result<Value, ApiError> {
        self.query(&queries::group_roles()).await
    }

    /// Returns the current user's project roles and projects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn project_roles(&self) -> Result<Value, ApiError> {
        self.query(&queries::project_roles()).await
    }

    /// Returns the current user's effective project roles and projects,
    /// including roles inherited through groups.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn effective_project_roles(&self) -> Result<Value, ApiError> {
        self.query(&queries::effective_project_roles()).await
    }

    /// Returns the current user's personal tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn personal_tokens(&self) -> Result<Value, ApiError> {
        self.query(&queries::personal_tokens()).await
    }

    /// Returns the current user's OAuth2 codes (authorized plugins).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_codes(&self) -> Result<Value, ApiError> {
        self.query(&queries::oauth2_codes()).await
    }

    /// Returns the current user's OAuth2 tokens (authorized plugins).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_tokens(&self) -> Result<Value, ApiError> {
        self.query(&queries::oauth2_tokens()).await
    }

    /// Returns the current user's owned OAuth2 clients (plugins).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_clients(&self) -> Result<Value, ApiError> {
        self.query(&queries::oauth2_clients()).await
    }

    // === Platform-wide queries ===

    /// Returns the list of user names on the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn user_names(&self) -> Result<Value, ApiError> {
        self.query(&queries::user_names()).await
    }

    /// Returns the list of group names on the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn group_names(&self) -> Result<Value, ApiError> {
        self.query(&queries::group_names()).await
    }

    /// Returns the list of open projects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn open_projects(&self) -> Result<Value, ApiError> {
        self.query(&queries::open_projects()).await
    }

    /// Returns the public OAuth2 clients (plugins) on the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_clients_public(&self) -> Result<Value, ApiError> {
        self.query(&queries::oauth2_clients_public()).await
    }

    // === Node lookups ===

    /// Returns the group with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn group(&self, id: &str) -> Result<Value, ApiError> {
        self.call(&queries::group(), node_variables(id)).await
    }

    /// Returns the project with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn project(&self, id: &str) -> Result<Value, ApiError> {
        self.call(&queries::project(), node_variables(id)).await
    }

    /// Returns the owned OAuth2 client with the given id, including its
    /// secret and issued codes/tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_client(&self, id: &str) -> Result<Value, ApiError> {
        self.call(&queries::oauth2_client(), node_variables(id)).await
    }

    /// Returns the public view of the OAuth2 client with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn oauth2_client_public(&self, id: &str) -> Result<Value, ApiError> {
        self.call(&queries::oauth2_client_public(), node_variables(id))
            .await
    }

    // === OAuth2 mutations ===

    /// Authorizes an OAuth2 client by id with a state value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn authorize_oauth2_client(
        &self,
        id: &str,
        state: &str,
    ) -> Result<Value, ApiError> {
        self.mutate(
            &queries::authorize_oauth2_client(),
            json!({"id": id, "state": state}),
        )
        .await
    }

    /// Authorizes an OAuth2 client by id with a state value and PKCE code
    /// challenge. See [`crate::auth::PkcePair`] for generating one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn authorize_with_pkce_oauth2_client(
        &self,
        id: &str,
        state: &str,
        code_challenge: &str,
    ) -> Result<Value, ApiError> {
        self.mutate(
            &queries::authorize_with_pkce_oauth2_client(),
            json!({"id": id, "state": state, "codeChallenge": code_challenge}),
        )
        .await
    }

    /// Exchanges an OAuth2 code for a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn exchange_oauth2_code_for_token(&self, code: &str) -> Result<Value, ApiError> {
        self.mutate(
            &queries::exchange_oauth2_code_for_token(),
            json!({"code": code}),
        )
        .await
    }

    /// Exchanges an OAuth2 code and PKCE code verifier for a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn exchange_oauth2_code_with_pkce_for_token(
        &self,
        code: &str,
        code_verifier: &str,
    ) -> Result<Value, ApiError> {
        self.mutate(
            &queries::exchange_oauth2_code_with_pkce_for_token(),
            json!({"code": code, "codeVerifier": code_verifier}),
        )
        .await
    }

    /// Revokes an OAuth2 token (used by clients).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn revoke_oauth2_token(&self, token: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::revoke_oauth2_token(), json!({"token": token}))
            .await
    }

    /// Unauthorizes an OAuth2 client by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn unauthorize_oauth2_client(&self, id: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::unauthorize_oauth2_client(), json!({"id": id}))
            .await
    }

    /// Creates an OAuth2 client (plugin).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_oauth2_client(
        &self,
        input: CreateOauth2ClientInput,
    ) -> Result<Value, ApiError> {
        self.mutate(&queries::create_oauth2_client(), input).await
    }

    /// Updates an OAuth2 client (plugin). Unset fields stay untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn update_oauth2_client(
        &self,
        input: UpdateOauth2ClientInput,
    ) -> Result<Value, ApiError> {
        self.mutate(&queries::update_oauth2_client(), input).await
    }

    /// Rotates the secret of an owned OAuth2 client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_new_oauth2_client_secret(&self, id: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::create_new_oauth2_client_secret(), json!({"id": id}))
            .await
    }

    /// Deletes the OAuth2 client with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn delete_oauth2_client(&self, id: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::delete_oauth2_client(), json!({"id": id}))
            .await
    }

    // === Token mutations ===

    /// Creates a personal token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_personal_token(&self) -> Result<Value, ApiError> {
        self.mutate(&queries::create_personal_token(), json!({})).await
    }

    /// Revokes a personal token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn revoke_personal_token(&self, token: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::revoke_personal_token(), json!({"token": token}))
            .await
    }

    // === Group and project mutations ===

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_group(&self, input: CreateGroupInput) -> Result<Value, ApiError> {
        self.mutate(&queries::create_group(), input).await
    }

    /// Updates a group. Unset fields stay untouched server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn update_group(&self, input: UpdateGroupInput) -> Result<Value, ApiError> {
        self.mutate(&queries::update_group(), input).await
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_project(&self, input: CreateProjectInput) -> Result<Value, ApiError> {
        self.mutate(&queries::create_project(), input).await
    }

    /// Updates a project. Unset fields stay untouched server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn update_project(&self, input: UpdateProjectInput) -> Result<Value, ApiError> {
        self.mutate(&queries::update_project(), input).await
    }

    /// Deletes the project with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn delete_project(&self, id: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::delete_project(), json!({"id": id})).await
    }

    /// Updates a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn update_user(&self, input: UpdateUserInput) -> Result<Value, ApiError> {
        self.mutate(&queries::update_user(), input).await
    }

    /// Creates a tag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_tag(&self, name: &str) -> Result<Value, ApiError> {
        self.mutate(&queries::create_tag(), json!({"name": name})).await
    }

    // === File operations ===

    /// Deletes `file_name` from the given project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn delete_file(&self, project_id: &str, file_name: &str) -> Result<Value, ApiError> {
        self.mutate(
            &queries::delete_file(),
            json!({"projectId": project_id, "fileName": file_name}),
        )
        .await
    }

    /// Requests an upload ticket for `file_name` in the given project.
    ///
    /// Most callers want [`Client::upload_file`], which runs the full
    /// ticket+PUT sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_file_upload_uri(
        &self,
        project_id: &str,
        file_name: &str,
    ) -> Result<Ticket, ApiError> {
        let payload = self
            .mutate(
                &queries::create_file_upload_uri(),
                json!({"projectId": project_id, "fileName": file_name}),
            )
            .await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Requests a download ticket for `file_name` in the given project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Mutation`] if the server rejects the call.
    pub async fn create_file_download_uri(
        &self,
        project_id: &str,
        file_name: &str,
    ) -> Result<Ticket, ApiError> {
        let payload = self
            .mutate(
                &queries::create_file_download_uri(),
                json!({"projectId": project_id, "fileName": file_name}),
            )
            .await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Uploads one local file to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError`] if the file is missing, the ticket call
    /// fails, or the storage PUT is rejected.
    pub async fn upload_file(&self, project_id: &str, path: &Path) -> Result<(), TransferError> {
        transfer::upload_file(&self.gql, &self.storage, project_id, path).await
    }

    /// Uploads a batch of local files to a project, fanning out per the
    /// configured [`ConcurrencyPolicy`].
    ///
    /// A failing file (missing locally, rejected ticket, failed PUT) is
    /// reported in its own outcome and never aborts its siblings.
    /// Outcomes come back in input order.
    pub async fn upload_files(&self, project_id: &str, paths: &[PathBuf]) -> Vec<UploadOutcome> {
        transfer::upload_files(&self.gql, &self.storage, self.concurrency, project_id, paths).await
    }

    /// Downloads `file_name` from a project into `output_dir`, defaulting
    /// to the current working directory. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError`] if the ticket call fails or the storage
    /// GET is rejected.
    pub async fn download_file(
        &self,
        project_id: &str,
        file_name: &str,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf, TransferError> {
        transfer::download_file(&self.gql, &self.storage, project_id, file_name, output_dir).await
    }

    // === Convenience lookups ===

    /// Returns the projects for which `predicate` holds, drawn from the
    /// current user's effective project roles.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if fetching the roles fails.
    pub async fn search_projects<P>(&self, predicate: P) -> Result<Vec<Value>, ApiError>
    where
        P: Fn(&Value) -> bool,
    {
        let roles = self.effective_project_roles().await?;
        Ok(collect_matching(&roles, "project", &predicate))
    }

    /// Returns the groups for which `predicate` holds, drawn from the
    /// current user's group roles.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if fetching the roles fails.
    pub async fn search_groups<P>(&self, predicate: P) -> Result<Vec<Value>, ApiError>
    where
        P: Fn(&Value) -> bool,
    {
        let roles = self.group_roles().await?;
        Ok(collect_matching(&roles, "group", &predicate))
    }

    /// Returns the files for which `predicate` holds, across all projects
    /// the current user can reach. Each file object is annotated with
    /// `projectId` and `projectName` for convenience.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if fetching the roles fails.
    pub async fn search_files<P>(&self, predicate: P) -> Result<Vec<Value>, ApiError>
    where
        P: Fn(&Value) -> bool,
    {
        let roles = self.effective_project_roles().await?;
        let mut files = Vec::new();
        let Some(roles) = roles.as_array() else {
            return Ok(files);
        };
        for role in roles {
            let project = &role["project"];
            let Some(project_files) = project["files"].as_array() else {
                continue;
            };
            for file in project_files {
                if predicate(file) {
                    let mut file = file.clone();
                    if let Some(map) = file.as_object_mut() {
                        map.insert("projectId".to_string(), project["id"].clone());
                        map.insert("projectName".to_string(), project["name"].clone());
                    }
                    files.push(file);
                }
            }
        }
        Ok(files)
    }

    /// Returns the single project with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Lookup`] if no project or more than one project
    /// matches.
    pub async fn get_project_by_id(&self, id: &str) -> Result<Value, ApiError> {
        let matches = self.search_projects(|p| p["id"] == json!(id)).await?;
        single_match(matches, &format!("with id {id}"))
    }

    /// Returns the single project with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Lookup`] if no project or more than one project
    /// matches.
    pub async fn get_project_by_name(&self, name: &str) -> Result<Value, ApiError> {
        let matches = self.search_projects(|p| p["name"] == json!(name)).await?;
        single_match(matches, &format!("named {name}"))
    }

    // === Bulk configuration ===

    /// Applies a bulk-config JSON document: optional `groups` and
    /// `projects` arrays, where an element without an `id` field is
    /// created and one with an `id` is updated.
    ///
    /// Per-element mutation failures are logged and do not abort the
    /// remaining elements.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the config file cannot be read, or
    /// [`ApiError::Json`] if it is not valid JSON or an element does not
    /// match the mutation's input shape.
    pub async fn apply_config(&self, path: &Path) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let config: BulkConfig = serde_json::from_slice(&bytes)?;

        for group in config.groups {
            let result = if group.get("id").is_some() {
                let input: UpdateGroupInput = serde_json::from_value(group.clone())?;
                self.update_group(input).await
            } else {
                let input: CreateGroupInput = serde_json::from_value(group.clone())?;
                self.create_group(input).await
            };
            if let Err(error) = result {
                tracing::error!(%error, "bulk group mutation failed");
            }
        }

        for project in config.projects {
            let result = if project.get("id").is_some() {
                let input: UpdateProjectInput = serde_json::from_value(project.clone())?;
                self.update_project(input).await
            } else {
                let input: CreateProjectInput = serde_json::from_value(project.clone())?;
                self.create_project(input).await
            };
            if let Err(error) = result {
                tracing::error!(%error, "bulk project mutation failed");
            }
        }

        Ok(())
    }
}

/// Pulls the entity under `key` out of each role object that satisfies
/// the predicate.
fn collect_matching<P>(roles: &Value, key: &str, predicate: &P) -> Vec<Value>
where
    P: Fn(&Value) -> bool,
{
    roles
        .as_array()
        .map(|roles| {
            roles
                .iter()
                .map(|role| &role[key])
                .filter(|entity| predicate(entity))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn single_match(mut matches: Vec<Value>, description: &str) -> Result<Value, ApiError> {
    match matches.len() {
        0 => Err(ApiError::Lookup(format!("No project {description} found"))),
        1 => Ok(matches.remove(0)),
        n => Err(ApiError::Lookup(format!(
            "{n} projects {description} found"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::builder()
            .token_str("test-token")
            .unwrap()
            .tier(Tier::Local)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_a_token() {
        // guard against an ambient token leaking into the test
        std::env::remove_var(crate::config::TOKEN_ENV_VAR);
        let result = Client::builder().build();
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_builder_defaults_to_prod() {
        let client = Client::builder()
            .token_str("t")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.tier(), Tier::Prod);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_client_clones_share_configuration() {
        let client = test_client();
        let clone = client.clone();
        assert_eq!(clone.tier(), Tier::Local);
    }

    #[test]
    fn test_single_match_errors() {
        let none = single_match(vec![], "named x");
        assert!(matches!(none, Err(ApiError::Lookup(m)) if m == "No project named x found"));

        let many = single_match(vec![json!({}), json!({})], "named x");
        assert!(matches!(many, Err(ApiError::Lookup(m)) if m == "2 projects named x found"));

        let one = single_match(vec![json!({"id": "1"})], "named x").unwrap();
        assert_eq!(one, json!({"id": "1"}));
    }

    #[test]
    fn test_collect_matching_extracts_entities() {
        let roles = json!([
            {"id": "r1", "role": "ADMIN", "project": {"id": "p1", "name": "a"}},
            {"id": "r2", "role": "VIEWER", "project": {"id": "p2", "name": "b"}}
        ]);
        let all = collect_matching(&roles, "project", &|_| true);
        assert_eq!(all.len(), 2);

        let named = collect_matching(&roles, "project", &|p| p["name"] == json!("b"));
        assert_eq!(named, vec![json!({"id": "p2", "name": "b"})]);
    }
}
