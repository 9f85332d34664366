//!
//! # Key Vault Secret Retrieval
//!
//! Fetches the database credential pair from Azure Key Vault. The vault holds
//! two named secrets, `UsernameSafe` and `PasswordSafe`, read with an ambient
//! Azure credential: a service principal when the standard environment triple
//! is present, managed identity otherwise.
//!
//! Every failure path (credential setup, client construction, fetch, missing
//! value) surfaces as a typed `AppError::SecretError` for the caller to
//! handle; nothing is swallowed.

use std::fmt;
use std::sync::Arc;

use azure_core::credentials::{Secret, TokenCredential};
use azure_identity::{
    ClientSecretCredential, ClientSecretCredentialOptions, ManagedIdentityCredential,
};
use azure_security_keyvault_secrets::{models, SecretClient};
use log::debug;

use crate::error::AppError;

const USERNAME_SECRET: &str = "UsernameSafe";
const PASSWORD_SECRET: &str = "PasswordSafe";

/// The username/password pair used to authenticate against the database.
#[derive(Clone)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
}

// Keep the password out of logs.
impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn build_credential() -> Result<Arc<dyn TokenCredential>, AppError> {
    let tenant_id = std::env::var("AZURE_TENANT_ID").ok();
    let client_id = std::env::var("AZURE_CLIENT_ID").ok();
    let client_secret = std::env::var("AZURE_CLIENT_SECRET").ok();

    let credential: Arc<dyn TokenCredential> =
        if let (Some(tenant_id), Some(client_id), Some(client_secret)) =
            (tenant_id, client_id, client_secret)
        {
            debug!("Using service principal credential for key vault access");
            ClientSecretCredential::new(
                &tenant_id,
                client_id,
                Secret::new(client_secret),
                Some(ClientSecretCredentialOptions::default()),
            )
            .map_err(|e| AppError::SecretError(format!("Failed to build credential: {}", e)))?
        } else {
            debug!("Using managed identity credential for key vault access");
            ManagedIdentityCredential::new(None)
                .map_err(|e| AppError::SecretError(format!("Failed to build credential: {}", e)))?
        };

    Ok(credential)
}

async fn fetch_secret(client: &SecretClient, name: &str) -> Result<String, AppError> {
    let response = client
        .get_secret(name, "", None)
        .await
        .map_err(|e| AppError::SecretError(format!("Failed to fetch secret {}: {}", name, e)))?;

    let secret: models::Secret = response
        .into_body()
        .await
        .map_err(|e| AppError::SecretError(format!("Failed to decode secret {}: {}", name, e)))?;

    secret
        .value
        .ok_or_else(|| AppError::SecretError(format!("Secret {} has no value", name)))
}

/// Retrieves the database credential pair from the vault at `vault_url`.
pub async fn retrieve_db_credentials(vault_url: &str) -> Result<DbCredentials, AppError> {
    let credential = build_credential()?;

    let client = SecretClient::new(vault_url, credential, None)
        .map_err(|e| AppError::SecretError(format!("Failed to create secret client: {}", e)))?;

    let username = fetch_secret(&client, USERNAME_SECRET).await?;
    let password = fetch_secret(&client, PASSWORD_SECRET).await?;

    Ok(DbCredentials { username, password })
}
