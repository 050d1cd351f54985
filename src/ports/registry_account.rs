//! Registry account port definition.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::AppError;

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountUser {
    pub login: String,
    pub id: u64,
}

/// A package published under the account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Port for read-only account lookups.
///
/// `Ok(None)` means the registry answered 404.
pub trait RegistryAccount {
    fn current_user(&self) -> Result<Option<AccountUser>, AppError>;

    fn list_packages(&self, package_type: &str) -> Result<Option<Vec<PackageInfo>>, AppError>;

    fn package(&self, package_type: &str, name: &str) -> Result<Option<PackageInfo>, AppError>;
}
