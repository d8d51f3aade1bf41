//! Catalog listing.
//!
//! # Usage
//!
//! ```bash
//! ec-cli catalog
//!
//! # List a custom catalog priced in euros
//! EC_CATALOG_PATH=products.yaml EC_CURRENCY=EUR ec-cli catalog
//! ```

use elegant_context_core::{Catalog, CurrencyCode, Price};
use tracing::info;

use super::{CommandError, load_catalog};
use crate::config::CliConfig;

/// Log every product in the configured catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn list(config: &CliConfig) -> Result<(), CommandError> {
    let catalog = load_catalog(config).await?;
    for line in describe(&catalog, config.currency) {
        info!("{line}");
    }
    Ok(())
}

fn describe(catalog: &Catalog, currency: CurrencyCode) -> Vec<String> {
    let mut lines = vec![format!("Catalog ({} products)", catalog.len())];
    lines.extend(catalog.iter().map(|product| {
        format!(
            "  {:<6} {:<28} {:>10}",
            product.id,
            product.title,
            Price::new(product.price, currency).display()
        )
    }));
    lines
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_demo() {
        let lines = describe(&Catalog::demo(), CurrencyCode::USD);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Catalog (5 products)");
        assert!(lines[1].contains("Mauve Linen Blazer"));
        assert!(lines[1].ends_with("$89.99"));
    }
}
