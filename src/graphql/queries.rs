//! GraphQL query and mutation catalog.
//!
//! Static documents for every operation the SDK exposes, composed from
//! shared fragments at call time. This module is pure data: no request
//! logic lives here.

// FRAGMENTS

const FRAGMENT_USER: &str = "\
id
name
displayName
contactMethod
contact";

const FRAGMENT_GROUP_PUBLIC: &str = "\
id
name
contactMethod
contact";

fn fragment_group() -> String {
    format!(
        "id
updatedAt
name
contactMethod
contact
description
userRoles {{
    edges {{
        node {{
            id
            role
            user {{
                {FRAGMENT_USER}
            }}
        }}
    }}
}}"
    )
}

fn fragment_file() -> String {
    "id
name
createdAt
updatedAt
size
md5
tags {
    edges {
        node {
            id
            tag {
                id
                name
            }
        }
    }
}"
    .to_string()
}

fn fragment_project() -> String {
    format!(
        "id
updatedAt
name
contactMethod
contact
description
isOpen
userRoles {{
    edges {{
        node {{
            id
            role
            user {{
                {FRAGMENT_USER}
            }}
        }}
    }}
}}
groupRoles {{
    edges {{
        node {{
            id
            role
            group {{
                {FRAGMENT_GROUP_PUBLIC}
            }}
        }}
    }}
}}
effectiveUserRoles {{
    edges {{
        node {{
            id
            role
            user {{
                {FRAGMENT_USER}
            }}
        }}
    }}
}}
files {{
    edges {{
        node {{
            {file}
        }}
    }}
}}",
        file = fragment_file()
    )
}

fn fragment_oauth2_client_public() -> String {
    format!(
        "id
name
contactMethod
contact
description
scopes
author {{
    {FRAGMENT_USER}
}}"
    )
}

fn fragment_oauth2_client_private() -> String {
    format!(
        "{public}
secret
pkceRequired
scopes
redirectUris
defaultRedirectUri
oauth2Codes {{
    edges {{
        node {{
            id
            code
            challenge
            scopes
            user {{
                {FRAGMENT_USER}
            }}
        }}
    }}
}}
oauth2Tokens {{
    edges {{
        node {{
            id
            token
            scopes
            user {{
                {FRAGMENT_USER}
            }}
        }}
    }}
}}",
        public = fragment_oauth2_client_public()
    )
}

// QUERIES

pub fn everything() -> String {
    format!(
        "query {{
    user {{
        {FRAGMENT_USER}
        groupRoles {{
            edges {{
                node {{
                    id
                    role
                    group {{
                        {group}
                    }}
                }}
            }}
        }}
        projectRoles {{
            edges {{
                node {{
                    id
                    role
                    project {{
                        {project}
                    }}
                }}
            }}
        }}
        effectiveProjectRoles {{
            edges {{
                node {{
                    id
                    role
                    project {{
                        {project}
                    }}
                }}
            }}
        }}
        personalTokens {{
            edges {{
                node {{
                    id
                    token
                }}
            }}
        }}
        oauth2Codes {{
            edges {{
                node {{
                    id
                    code
                    expiresAt
                    scopes
                    client {{
                        {client_public}
                    }}
                }}
            }}
        }}
        oauth2Tokens {{
            edges {{
                node {{
                    id
                    token
                    scopes
                    client {{
                        {client_public}
                    }}
                }}
            }}
        }}
        oauth2Clients {{
            edges {{
                node {{
                    {client_private}
                }}
            }}
        }}
    }}
}}",
        group = fragment_group(),
        project = fragment_project(),
        client_public = fragment_oauth2_client_public(),
        client_private = fragment_oauth2_client_private()
    )
}

pub fn user() -> String {
    format!(
        "query {{
    user {{
        {FRAGMENT_USER}
    }}
}}"
    )
}

pub fn group() -> String {
    format!(
        "query Node($id: ID!) {{
    node(id: $id) {{
        ... on Group {{
            {group}
        }}
    }}
}}",
        group = fragment_group()
    )
}

pub fn project() -> String {
    format!(
        "query Node($id: ID!) {{
    node(id: $id) {{
        ... on Project {{
            {project}
        }}
    }}
}}",
        project = fragment_project()
    )
}

pub fn oauth2_client() -> String {
    format!(
        "query Node($id: ID!) {{
    node(id: $id) {{
        ... on OAuth2Client {{
            {client}
        }}
    }}
}}",
        client = fragment_oauth2_client_private()
    )
}

pub fn oauth2_client_public() -> String {
    format!(
        "query Node($id: ID!) {{
    node(id: $id) {{
        ... on OAuth2Client {{
            {client}
        }}
    }}
}}",
        client = fragment_oauth2_client_public()
    )
}

pub fn group_roles() -> String {
    format!(
        "query {{
    user {{
        id
        groupRoles {{
            edges {{
                node {{
                    id
                    role
                    group {{
                        {group}
                    }}
                }}
            }}
        }}
    }}
}}",
        group = fragment_group()
    )
}

pub fn project_roles() -> String {
    format!(
        "query {{
    user {{
        id
        projectRoles {{
            edges {{
                node {{
                    id
                    role
                    project {{
                        {project}
                    }}
                }}
            }}
        }}
    }}
}}",
        project = fragment_project()
    )
}

pub fn effective_project_roles() -> String {
    format!(
        "query {{
    user {{
        id
        effectiveProjectRoles {{
            edges {{
                node {{
                    id
                    role
                    project {{
                        {project}
                    }}
                }}
            }}
        }}
    }}
}}",
        project = fragment_project()
    )
}

pub fn personal_tokens() -> String {
    "query {
    user {
        id
        personalTokens {
            edges {
                node {
                    id
                    token
                }
            }
        }
    }
}"
    .to_string()
}

pub fn oauth2_codes() -> String {
    format!(
        "query {{
    user {{
        id
        oauth2Codes {{
            edges {{
                node {{
                    id
                    code
                    expiresAt
                    scopes
                    client {{
                        {client}
                    }}
                }}
            }}
        }}
    }}
}}",
        client = fragment_oauth2_client_public()
    )
}

pub fn oauth2_tokens() -> String {
    format!(
        "query {{
    user {{
        id
        oauth2Tokens {{
            edges {{
                node {{
                    id
                    token
                    scopes
                    client {{
                        {client}
                    }}
                }}
            }}
        }}
    }}
}}",
        client = fragment_oauth2_client_public()
    )
}

pub fn oauth2_clients() -> String {
    format!(
        "query {{
    user {{
        id
        oauth2Clients {{
            edges {{
                node {{
                    {client}
                }}
            }}
        }}
    }}
}}",
        client = fragment_oauth2_client_private()
    )
}

pub fn user_names() -> String {
    "query {
    userNames
}"
    .to_string()
}

pub fn group_names() -> String {
    "query {
    groupNames
}"
    .to_string()
}

pub fn open_projects() -> String {
    format!(
        "query {{
    openProjects {{
        edges {{
            node {{
                {project}
            }}
        }}
    }}
}}",
        project = fragment_project()
    )
}

pub fn oauth2_clients_public() -> String {
    format!(
        "query {{
    oauth2Clients {{
        {client}
    }}
}}",
        client = fragment_oauth2_client_public()
    )
}

// MUTATIONS

pub fn authorize_oauth2_client() -> String {
    "mutation AuthorizeOAuth2Client($input: AuthorizeOAuth2ClientInput!) {
    authorizeOauth2Client(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn authorize_with_pkce_oauth2_client() -> String {
    "mutation AuthorizeWithPKCEOAuth2Client(
    $input: AuthorizeWithPKCEOAuth2ClientInput!
) {
    authorizeWithPkceOauth2Client(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn create_file_download_uri() -> String {
    "mutation CreateFileDownloadURI($input: FileURIInput!) {
    createFileDownloadUri(input: $input) {
        ok {
            name
            uri
            uriType
        }
        err
    }
}"
    .to_string()
}

pub fn create_file_upload_uri() -> String {
    "mutation CreateFileUploadURI($input: FileURIInput!) {
    createFileUploadUri(input: $input) {
        ok {
            name
            uri
            uriType
        }
        err
    }
}"
    .to_string()
}

pub fn create_group() -> String {
    format!(
        "mutation CreateGroup($input: CreateGroupInput!) {{
    createGroup(input: $input) {{
        ok {{
            {group}
        }}
        err
    }}
}}",
        group = fragment_group()
    )
}

pub fn create_new_oauth2_client_secret() -> String {
    format!(
        "mutation CreateNewOAuth2ClientSecret(
    $input: CreateNewOAuth2ClientSecretInput!
) {{
    createNewOauth2ClientSecret(input: $input) {{
        ok {{
            {client}
        }}
        err
    }}
}}",
        client = fragment_oauth2_client_private()
    )
}

pub fn create_oauth2_client() -> String {
    format!(
        "mutation CreateOAuth2Client($input: CreateOAuth2ClientInput!) {{
    createOauth2Client(input: $input) {{
        ok {{
            {client}
        }}
        err
    }}
}}",
        client = fragment_oauth2_client_private()
    )
}

pub fn create_personal_token() -> String {
    "mutation CreatePersonalToken {
    createPersonalToken {
        ok
        err
    }
}"
    .to_string()
}

pub fn create_project() -> String {
    format!(
        "mutation CreateProject($input: CreateProjectInput!) {{
    createProject(input: $input) {{
        ok {{
            {project}
        }}
        err
    }}
}}",
        project = fragment_project()
    )
}

pub fn create_tag() -> String {
    "mutation CreateTag($input: CreateTagInput!) {
    createTag(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn delete_file() -> String {
    "mutation DeleteFile($input: FileURIInput!) {
    deleteFile(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn delete_project() -> String {
    "mutation DeleteProject($input: DeleteProjectInput!) {
    deleteProject(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn delete_oauth2_client() -> String {
    "mutation DeleteOAuth2Client($input: DeleteOAuth2ClientInput!) {
    deleteOauth2Client(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn exchange_oauth2_code_for_token() -> String {
    "mutation ExchangeOAuth2CodeForToken($input: ExchangeOAuth2CodeForTokenInput!) {
    exchangeOauth2CodeForToken(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn exchange_oauth2_code_with_pkce_for_token() -> String {
    "mutation ExchangeOAuth2CodeWithPKCEForToken(
    $input: ExchangeOAuth2CodeWithPKCEForTokenInput!
) {
    exchangeOauth2CodeWithPkceForToken(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn revoke_oauth2_token() -> String {
    "mutation RevokeOAuth2Token($input: RevokeTokenInput!) {
    revokeOauth2Token(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn revoke_personal_token() -> String {
    "mutation RevokePersonalToken($input: RevokeTokenInput!) {
    revokePersonalToken(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn unauthorize_oauth2_client() -> String {
    "mutation UnauthorizeOAuth2Client(
    $input: UnauthorizeOAuth2ClientInput!
) {
    unauthorizeOauth2Client(input: $input) {
        ok
        err
    }
}"
    .to_string()
}

pub fn update_group() -> String {
    format!(
        "mutation UpdateGroup($input: UpdateGroupInput!) {{
    updateGroup(input: $input) {{
        ok {{
            {group}
        }}
        err
    }}
}}",
        group = fragment_group()
    )
}

pub fn update_oauth2_client() -> String {
    format!(
        "mutation UpdateOAuth2Client($input: UpdateOAuth2ClientInput!) {{
    updateOauth2Client(input: $input) {{
        ok {{
            {client}
        }}
        err
    }}
}}",
        client = fragment_oauth2_client_private()
    )
}

pub fn update_project() -> String {
    format!(
        "mutation UpdateProject($input: UpdateProjectInput!) {{
    updateProject(input: $input) {{
        ok {{
            {project}
        }}
        err
    }}
}}",
        project = fragment_project()
    )
}

pub fn update_user() -> String {
    format!(
        "mutation UpdateUser($input: UpdateUserInput!) {{
    updateUser(input: $input) {{
        ok {{
            {user}
        }}
        err
    }}
}}",
        user = FRAGMENT_USER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_expand_into_project_query() {
        let query = project();
        assert!(query.contains("... on Project"));
        assert!(query.contains("effectiveUserRoles"));
        assert!(query.contains("md5"));
    }

    #[test]
    fn test_mutations_request_the_result_envelope() {
        for document in [
            create_group(),
            create_project(),
            delete_file(),
            update_user(),
            create_file_upload_uri(),
        ] {
            assert!(document.contains("ok"), "missing ok field: {document}");
            assert!(document.contains("err"), "missing err field: {document}");
        }
    }

    #[test]
    fn test_documents_have_balanced_braces() {
        let documents = [
            everything(),
            user(),
            group(),
            project(),
            oauth2_client(),
            oauth2_client_public(),
            group_roles(),
            project_roles(),
            effective_project_roles(),
            personal_tokens(),
            oauth2_codes(),
            oauth2_tokens(),
            oauth2_clients(),
            user_names(),
            group_names(),
            open_projects(),
            oauth2_clients_public(),
            authorize_oauth2_client(),
            authorize_with_pkce_oauth2_client(),
            create_file_download_uri(),
            create_file_upload_uri(),
            create_group(),
            create_new_oauth2_client_secret(),
            create_oauth2_client(),
            create_personal_token(),
            create_project(),
            create_tag(),
            delete_file(),
            delete_project(),
            delete_oauth2_client(),
            exchange_oauth2_code_for_token(),
            exchange_oauth2_code_with_pkce_for_token(),
            revoke_oauth2_token(),
            revoke_personal_token(),
            unauthorize_oauth2_client(),
            update_group(),
            update_oauth2_client(),
            update_project(),
            update_user(),
        ];
        for document in documents {
            let open = document.matches('{').count();
            let close = document.matches('}').count();
            assert_eq!(open, close, "unbalanced braces in: {document}");
        }
    }
}
