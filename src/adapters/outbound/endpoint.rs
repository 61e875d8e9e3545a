//! Provider endpoint URLs
//!
//! Every provider exposes a fixed path template with the postal code as
//! one path segment. The key is appended through `path_segments_mut`, so
//! `/`, `?`, `#` and `%` are percent-encoded and dot segments never
//! reach the path.

use crate::domain::errors::LookupError;
use crate::domain::value_objects::LookupKey;
use url::Url;

/// Build `{base}/{prefix..}/{key}/{suffix..}`.
///
/// A trailing empty suffix segment yields a trailing slash.
pub(crate) fn endpoint_url(
    base: &str,
    prefix: &[&str],
    key: &LookupKey,
    suffix: &[&str],
) -> Result<Url, LookupError> {
    let construction = |reason: String| LookupError::RequestConstruction {
        url: base.to_string(),
        reason,
    };

    if matches!(key.as_str(), "." | "..") {
        return Err(construction(format!(
            "'{}' is not a valid postal code segment",
            key
        )));
    }

    let mut url = Url::parse(base).map_err(|e| construction(e.to_string()))?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(construction(
            "base URL must not carry a query or fragment".to_string(),
        ));
    }

    url.path_segments_mut()
        .map_err(|_| construction("base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(prefix)
        .push(key.as_str())
        .extend(suffix);

    Ok(url)
}
