//! Subcommand implementations.

use std::path::{Path, PathBuf};

use elegant_context_core::{ActionError, CartError, Catalog, CatalogError, DispatchError};
use thiserror::Error;
use tracing::info;

use crate::config::CliConfig;

pub mod cart;
pub mod catalog;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A cart script could not be parsed.
    #[error("Invalid cart script {path}: {reason}")]
    Script { path: PathBuf, reason: String },

    /// An action in a script had a malformed payload.
    #[error("Step {step}: {source}")]
    Action {
        step: usize,
        #[source]
        source: ActionError,
    },

    /// An action in a script was rejected by the cart.
    #[error("Step {step}: {source}")]
    Cart {
        step: usize,
        #[source]
        source: CartError,
    },
}

impl CommandError {
    pub(crate) fn at_step(step: usize, error: DispatchError) -> Self {
        match error {
            DispatchError::Action(source) => Self::Action { step, source },
            DispatchError::Cart(source) => Self::Cart { step, source },
        }
    }
}

/// Whether a path should be parsed as JSON rather than YAML.
pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub(crate) async fn read_file(path: &Path) -> Result<String, CommandError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Load the configured catalog, falling back to the demo products.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is invalid.
pub async fn load_catalog(config: &CliConfig) -> Result<Catalog, CommandError> {
    let Some(path) = config.catalog_path.as_deref() else {
        return Ok(Catalog::demo());
    };

    info!(path = %path.display(), "Loading catalog from file");
    let source = read_file(path).await?;
    let catalog = if is_json(path) {
        Catalog::from_json(&source)?
    } else {
        Catalog::from_yaml(&source)?
    };
    info!(products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
