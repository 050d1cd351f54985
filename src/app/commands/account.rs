//! Account inspection: who the token belongs to and which packages exist.

use crate::domain::AppError;
use crate::ports::{AccountUser, PackageInfo, RegistryAccount};

/// Package ecosystem inspected by default.
pub const PYPI: &str = "pypi";

/// Outcome of one registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Failed(String),
}

impl<T> From<Result<Option<T>, AppError>> for Lookup<T> {
    fn from(value: Result<Option<T>, AppError>) -> Self {
        match value {
            Ok(Some(found)) => Lookup::Found(found),
            Ok(None) => Lookup::Missing,
            Err(err) => Lookup::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub user: Lookup<AccountUser>,
    pub packages: Lookup<Vec<PackageInfo>>,
    /// Set when a specific package was requested.
    pub package: Option<(String, Lookup<PackageInfo>)>,
}

/// Run every lookup; one failing lookup never skips the others.
pub fn inspect_account<A: RegistryAccount>(account: &A, package: Option<&str>) -> AccountSummary {
    let user: Lookup<AccountUser> = account.current_user().into();
    let packages: Lookup<Vec<PackageInfo>> = account.list_packages(PYPI).into();
    let package: Option<(String, Lookup<PackageInfo>)> =
        package.map(|name| (name.to_string(), account.package(PYPI, name).into()));

    AccountSummary { user, packages, package }
}

pub fn render_account(summary: &AccountSummary) -> Vec<String> {
    let mut lines = Vec::new();

    match &summary.user {
        Lookup::Found(user) => {
            lines.push(format!("✅ User: {}", user.login));
            lines.push(format!("✅ ID: {}", user.id));
        }
        Lookup::Missing => lines.push("❌ User lookup returned 404".to_string()),
        Lookup::Failed(message) => lines.push(format!("❌ User lookup failed: {}", message)),
    }

    match &summary.packages {
        Lookup::Found(packages) if packages.is_empty() => {
            lines.push("ℹ️  No Python packages found".to_string());
        }
        Lookup::Found(packages) => {
            lines.push(format!("✅ Found {} Python package(s):", packages.len()));
            lines.extend(packages.iter().map(|pkg| format!("   - {}", describe_package(pkg))));
        }
        Lookup::Missing => {
            lines.push("❌ 404 - package listing missing or token lacks read:packages".to_string())
        }
        Lookup::Failed(message) => lines.push(format!("❌ Package listing failed: {}", message)),
    }

    if let Some((name, lookup)) = &summary.package {
        match lookup {
            Lookup::Found(pkg) => {
                lines.push(format!("✅ Package '{}' exists: {}", name, describe_package(pkg)))
            }
            Lookup::Missing => lines.push(format!("❌ Package '{}' does not exist (404)", name)),
            Lookup::Failed(message) => {
                lines.push(format!("❌ Package '{}' lookup failed: {}", name, message))
            }
        }
    }

    lines
}

fn describe_package(pkg: &PackageInfo) -> String {
    let visibility = pkg.visibility.as_deref().unwrap_or("unknown");
    let mut text = format!("{} (visibility: {})", pkg.name, visibility);
    if let Some(created) = pkg.created_at {
        text.push_str(&format!(", created {}", created.format("%Y-%m-%d")));
    }
    text
}
