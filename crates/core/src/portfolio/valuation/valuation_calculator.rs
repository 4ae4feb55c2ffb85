use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::portfolio::valuation::{AssetStats, WalletStats, WalletSummary};
use crate::wallets::WalletWithAssets;

/// Returns `part / whole * 100`, or zero when `whole` is not positive.
///
/// Every percentage shown to users goes through this helper so a zero cost
/// basis never produces an undefined value. A ratio outside `Decimal`'s range
/// saturates at `Decimal::MAX` / `Decimal::MIN`.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| saturated(part.is_sign_negative()))
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// `a * b`, clamped to `Decimal`'s range instead of panicking.
fn mul_saturating(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative() != b.is_sign_negative()))
}

/// `a + b`, clamped to `Decimal`'s range instead of panicking.
fn add_saturating(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative()))
}

/// `a - b`, clamped to `Decimal`'s range instead of panicking.
fn sub_saturating(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative()))
}

/// Computes value, cost and profit/loss for a single holding.
///
/// Total over all non-negative inputs: a zero quantity or purchase price
/// yields a zero percentage instead of an error, and products beyond
/// `Decimal`'s range saturate rather than panic.
pub fn compute_asset_stats(asset: &Asset) -> AssetStats {
    let total_value = mul_saturating(asset.quantity, asset.current_price);
    let total_cost = mul_saturating(asset.quantity, asset.purchase_price);
    let profit_loss = sub_saturating(total_value, total_cost);

    AssetStats {
        asset_id: asset.id.clone(),
        symbol: asset.symbol.clone(),
        name: asset.name.clone(),
        total_value,
        total_cost,
        profit_loss,
        profit_loss_percentage: percentage_of(profit_loss, total_cost),
    }
}

/// Aggregates statistics over a collection of holdings.
///
/// The per-asset breakdown keeps the input order so callers can zip it back
/// to the assets by position. An empty collection yields all zeros.
pub fn compute_wallet_stats(assets: &[Asset]) -> WalletStats {
    let asset_stats: Vec<AssetStats> = assets.iter().map(compute_asset_stats).collect();

    let (total_value, total_cost) = asset_stats
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(value, cost), stats| {
            (
                add_saturating(value, stats.total_value),
                add_saturating(cost, stats.total_cost),
            )
        });
    let total_profit_loss = sub_saturating(total_value, total_cost);

    WalletStats {
        total_value,
        total_cost,
        total_profit_loss,
        total_profit_loss_percentage: percentage_of(total_profit_loss, total_cost),
        asset_stats,
    }
}

/// Builds the list-view summary of a wallet.
pub fn summarize_wallet(wallet: WalletWithAssets) -> WalletSummary {
    let stats = compute_wallet_stats(&wallet.assets);
    WalletSummary {
        wallet: wallet.wallet,
        assets: wallet.assets,
        current_amount: stats.total_value,
        spent_amount: stats.total_cost,
        profit_loss: stats.total_profit_loss,
        stats,
    }
}
