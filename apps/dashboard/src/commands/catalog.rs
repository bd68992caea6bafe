//! # Catalog Commands

use pos_core::Product;
use tracing::debug;

use crate::state::AppState;

/// All sellable products in catalog order.
pub fn list_products(state: &AppState) -> &[Product] {
    debug!("list_products command");
    state.catalog().products()
}
