use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub const ENTRY_DOCUMENT: &str = "index.html";

/// Serve the frontend bundle in `dir`. Paths that match no file get the
/// entry document with a 200 so client-side routes resolve.
pub fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join(ENTRY_DOCUMENT)))
}
