//! Cart session commands.
//!
//! # Usage
//!
//! ```bash
//! # Replay a list of actions and show the resulting cart
//! ec-cli cart run session.yaml
//!
//! # Skip actions the cart rejects instead of stopping
//! ec-cli cart run session.json --keep-going
//!
//! # Walk through add, add, decrement, decrement on product p1
//! ec-cli cart demo
//! ```
//!
//! # Script Format
//!
//! A YAML or JSON list of action envelopes:
//!
//! ```yaml
//! - type: ADD_ITEM_TO_CART
//!   payload: p1
//! - type: UPDATE_ITEM_QUANTITY
//!   payload: { productId: p1, amount: -1 }
//! ```

use std::path::Path;

use elegant_context_core::{
    ActionEnvelope, CartAction, CartState, CartStore, CurrencyCode, DispatchError, Price,
    ProductLookup,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{CommandError, is_json, load_catalog, read_file};
use crate::config::CliConfig;

/// Outcome of replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    /// Rejected by the cart and passed over under `--keep-going`.
    pub skipped: usize,
    /// Tags the cart does not handle.
    pub ignored: usize,
}

/// Replay a cart script against a fresh cart.
///
/// # Errors
///
/// Returns an error if the catalog or script cannot be loaded, or if a step
/// fails (cart rejections are skipped when `keep_going` is set).
pub async fn run(
    config: &CliConfig,
    script: &Path,
    keep_going: bool,
) -> Result<(), CommandError> {
    let catalog = load_catalog(config).await?;
    let source = read_file(script).await?;
    let steps = parse_script(&source, script)?;
    info!(path = %script.display(), steps = steps.len(), "Replaying cart script");

    let mut store = CartStore::new(catalog);
    let summary = replay(&mut store, &steps, keep_going)?;

    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        ignored = summary.ignored,
        "Replay complete"
    );
    log_cart(store.state(), config.currency);
    Ok(())
}

/// Run the add/add/decrement/decrement walkthrough on product `p1`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or has no `p1`.
pub async fn demo(config: &CliConfig) -> Result<(), CommandError> {
    let catalog = load_catalog(config).await?;
    let mut store = CartStore::new(catalog);

    let steps = [
        CartAction::add("p1"),
        CartAction::add("p1"),
        CartAction::update("p1", -1),
        CartAction::update("p1", -1),
    ];
    for (index, action) in steps.iter().enumerate() {
        let step = index + 1;
        store
            .dispatch(action)
            .map_err(|e| CommandError::at_step(step, DispatchError::Cart(e)))?;
        info!(step, action = action.tag(), product_id = %action.product_id(), "Applied");
        log_cart(store.state(), config.currency);
    }
    Ok(())
}

/// Parse a script as JSON or YAML depending on the file extension.
pub(crate) fn parse_script(
    source: &str,
    path: &Path,
) -> Result<Vec<ActionEnvelope>, CommandError> {
    let parsed = if is_json(path) {
        serde_json::from_str(source).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(source).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| CommandError::Script {
        path: path.to_path_buf(),
        reason,
    })
}

/// Dispatch every step in order. Steps are numbered from 1.
pub(crate) fn replay<C: ProductLookup>(
    store: &mut CartStore<C>,
    steps: &[ActionEnvelope],
    keep_going: bool,
) -> Result<ReplaySummary, CommandError> {
    let mut summary = ReplaySummary::default();
    for (index, envelope) in steps.iter().enumerate() {
        let step = index + 1;
        let decoded = envelope
            .decode()
            .map_err(|e| CommandError::at_step(step, DispatchError::Action(e)))?;
        let Some(action) = decoded else {
            debug!(step, action = %envelope.kind, "Ignoring unrecognized action");
            summary.ignored += 1;
            continue;
        };
        match store.dispatch(&action) {
            Ok(_) => summary.applied += 1,
            Err(e) if keep_going => {
                warn!(step, error = %e, "Skipping rejected action");
                summary.skipped += 1;
            }
            Err(e) => return Err(CommandError::at_step(step, DispatchError::Cart(e))),
        }
    }
    Ok(summary)
}

fn log_cart(state: &CartState, currency: CurrencyCode) {
    for line in describe_cart(state, currency) {
        info!("{line}");
    }
}

fn describe_cart(state: &CartState, currency: CurrencyCode) -> Vec<String> {
    if state.is_empty() {
        return vec!["Cart is empty".to_owned()];
    }

    let count = state.total_quantity();
    let noun = if count == 1 { "item" } else { "items" };
    let mut lines = vec![format!("Cart ({count} {noun})")];
    lines.extend(state.items().iter().map(|item| {
        format!(
            "  {:<28} {:>4} x {:>10} = {:>10}",
            item.name,
            item.quantity,
            Price::new(item.unit_price, currency).display(),
            amount(item.line_total(), currency)
        )
    }));
    lines.push(format!("  Subtotal: {}", amount(state.subtotal(), currency)));
    lines
}

/// Format a total, which is `None` when it overflowed.
fn amount(total: Option<Decimal>, currency: CurrencyCode) -> String {
    total.map_or_else(
        || "overflow".to_owned(),
        |total| Price::new(total, currency).display(),
    )
}
