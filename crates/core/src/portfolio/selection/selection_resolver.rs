//! Resolution of the "active" wallet and asset for a request.
//!
//! Selection is stateless: callers pass the owner's wallets and whatever ids
//! the presentation layer supplied, and get the active records back. The
//! wallets must already be filtered to the authenticated owner; no ownership
//! check happens here.
//!
//! Wallet and asset resolution fall back differently. A stale or missing
//! wallet id falls back to the first wallet so there is always something to
//! show. A stale or missing asset id resolves to no asset: the asset
//! selection pre-fills an edit form and never points at another holding.

use crate::assets::Asset;

/// Read access to a wallet's identity and holdings.
pub trait WalletView {
    fn wallet_id(&self) -> &str;
    fn assets(&self) -> &[Asset];
}

/// Treats an empty requested id as absent. Ids are otherwise compared
/// verbatim, so `" W1 "` does not match `"W1"`.
pub fn normalize_requested_id(raw: Option<&str>) -> Option<&str> {
    raw.filter(|id| !id.is_empty())
}

/// Picks the wallet matching `requested_id`, or the first wallet when the id
/// is absent or matches nothing. Returns `None` only when `wallets` is empty.
pub fn resolve_active_wallet<'a, W: WalletView>(
    wallets: &'a [W],
    requested_id: Option<&str>,
) -> Option<&'a W> {
    normalize_requested_id(requested_id)
        .and_then(|id| wallets.iter().find(|wallet| wallet.wallet_id() == id))
        .or_else(|| wallets.first())
}

/// Picks the asset matching `requested_asset_id` inside the active wallet.
///
/// There is no fallback: an absent or unknown id yields `None`.
pub fn resolve_active_asset<'a, W: WalletView>(
    active_wallet: Option<&'a W>,
    requested_asset_id: Option<&str>,
) -> Option<&'a Asset> {
    let wallet = active_wallet?;
    let asset_id = normalize_requested_id(requested_asset_id)?;
    wallet.assets().iter().find(|asset| asset.id == asset_id)
}
