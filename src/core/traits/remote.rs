/// Port for remote bundle address composition.
///
/// Implementations only concatenate strings; no validation or escaping.
pub trait RemoteServices {
    /// Primary download URL for a bundle file name.
    fn remote_main_url(&self, file_name: &str) -> String;

    /// Fallback download URL, tried when the primary host is unreachable.
    fn remote_fallback_url(&self, file_name: &str) -> String;
}
