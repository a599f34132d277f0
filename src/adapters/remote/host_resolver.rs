use crate::core::traits::remote::RemoteServices;

/// Remote address resolver over a primary/fallback host pair.
///
/// Hosts are fixed at construction and concatenated verbatim; callers
/// are expected to hand in hosts without a trailing slash.
pub struct HostResolver {
    default_host: String,
    fallback_host: String,
}

impl HostResolver {
    pub fn new(default_host: impl Into<String>, fallback_host: impl Into<String>) -> Self {
        Self {
            default_host: default_host.into(),
            fallback_host: fallback_host.into(),
        }
    }
}

impl RemoteServices for HostResolver {
    fn remote_main_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.default_host, file_name)
    }

    fn remote_fallback_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.fallback_host, file_name)
    }
}
