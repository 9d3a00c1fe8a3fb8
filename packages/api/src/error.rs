//! Server-side error type for the catalog and session checks.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("not signed in")]
    NotSignedIn,

    #[error("admin role required")]
    Forbidden,

    #[error("unknown creation: {0}")]
    UnknownCreation(String),

    #[error("failed to read catalog seed {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog seed {path}: {source}")]
    SeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
