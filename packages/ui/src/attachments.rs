/// Open an incident or follow-up attachment with the platform's default
/// handler. Failures are logged, not surfaced.
pub fn open_attachment(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::error!("Failed to open attachment {url}: {e}");
    }
}
