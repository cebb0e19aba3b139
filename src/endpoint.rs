//! Endpoint path segments supplied by resource layers.

use std::fmt;

use tracing::warn;

/// A resource endpoint path, sanitized once at construction.
///
/// Endpoints must not end with a trailing slash: URL joining adds the
/// separator itself. A misconfigured endpoint is corrected with a warning
/// rather than failing the call, and the correction happens exactly once —
/// requests made through the endpoint afterwards see the clean form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
}

impl Endpoint {
    /// Create an endpoint, stripping one trailing slash if present.
    pub fn new<S: Into<String>>(path: S) -> Self {
        let path = path.into();
        let path = match path.strip_suffix('/') {
            Some(stripped) => {
                warn!(
                    endpoint = %path,
                    "endpoints should not end with a trailing slash"
                );
                stripped.to_string()
            }
            None => path,
        };
        Self { path }
    }

    /// The sanitized path segment.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Path for one resource under this endpoint, e.g. `incidents/PABC123`.
    pub fn join(&self, id: &str) -> String {
        format!("{}/{}", self.path, id.trim_start_matches('/'))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Endpoint {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn clean_endpoint_is_untouched() {
        let endpoint = Endpoint::new("incidents");
        assert_eq!(endpoint.as_str(), "incidents");
    }

    #[traced_test]
    #[test]
    fn trailing_slash_is_corrected_once_with_warning() {
        let endpoint = Endpoint::new("incidents/");
        assert_eq!(endpoint.as_str(), "incidents");

        // Subsequent uses see the corrected form and never re-warn.
        let _ = endpoint.as_str();
        let _ = endpoint.join("PABC123");

        assert!(logs_contain("endpoints should not end with a trailing slash"));
        logs_assert(|lines: &[&str]| {
            let warnings = lines
                .iter()
                .filter(|line| line.contains("trailing slash"))
                .count();
            if warnings == 1 {
                Ok(())
            } else {
                Err(format!("expected one correction warning, saw {warnings}"))
            }
        });
    }

    #[traced_test]
    #[test]
    fn clean_endpoint_does_not_warn() {
        let _ = Endpoint::new("services");
        assert!(!logs_contain("trailing slash"));
    }

    #[test]
    fn join_builds_sub_resource_paths() {
        let endpoint = Endpoint::new("incidents");
        assert_eq!(endpoint.join("PABC123"), "incidents/PABC123");
        assert_eq!(endpoint.join("/PABC123"), "incidents/PABC123");
    }
}
