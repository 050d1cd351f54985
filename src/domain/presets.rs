//! Built-in descriptor lists for known registry layouts.

use url::Url;

use crate::domain::{AppError, EndpointDescriptor, HttpMethod};

const UPLOAD_HOST: &str = "https://upload.pkg.github.com";
const INDEX_HOST: &str = "https://pkg.github.com";

/// Candidate GitHub Packages endpoints for a Python package.
///
/// REST lookups come first, followed by every upload/index URL shape probed
/// with HEAD and then with GET.
pub fn github_packages_preset(
    owner: &str,
    package: &str,
    api_url: &Url,
) -> Result<Vec<EndpointDescriptor>, AppError> {
    validate_segment("owner", owner)?;
    validate_segment("package", package)?;

    let api = api_url.as_str().trim_end_matches('/');
    let rest = [
        format!("{api}/user"),
        format!("{api}/user/packages?package_type=pypi"),
        format!("{api}/user/packages/pypi/{package}"),
    ];
    let mut descriptors = rest
        .iter()
        .map(|url| EndpointDescriptor::new(url, HttpMethod::Get))
        .collect::<Result<Vec<_>, _>>()?;

    let candidates = [
        format!("{UPLOAD_HOST}/"),
        format!("{UPLOAD_HOST}/{owner}/"),
        format!("{UPLOAD_HOST}/{owner}/{package}"),
        format!("{INDEX_HOST}/{owner}/{package}/simple"),
    ];
    for method in [HttpMethod::Head, HttpMethod::Get] {
        for url in &candidates {
            descriptors.push(EndpointDescriptor::new(url, method)?);
        }
    }

    Ok(descriptors)
}

/// Check that `value` can stand alone as one URL path segment.
pub(crate) fn validate_segment(what: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{what} must not be empty")));
    }
    if value == "." || value == ".." {
        return Err(AppError::config_error(format!("{what} '{value}' is not a valid name")));
    }
    if value.chars().any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace()) {
        return Err(AppError::config_error(format!(
            "{what} '{value}' must not contain '/', '\\', '?', '#', '%' or whitespace"
        )));
    }
    Ok(())
}
