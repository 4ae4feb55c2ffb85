use crate::assets::{Asset, AssetType};
use crate::portfolio::valuation::{
    compute_asset_stats, compute_wallet_stats, percentage_of, summarize_wallet, WalletStats,
};
use crate::wallets::{Wallet, WalletWithAssets};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn asset(id: &str, quantity: Decimal, purchase_price: Decimal, current_price: Decimal) -> Asset {
    Asset {
        id: id.to_string(),
        wallet_id: "wallet-1".to_string(),
        asset_type: AssetType::Stock,
        symbol: id.to_uppercase(),
        name: format!("Asset {}", id),
        quantity,
        purchase_price,
        current_price,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

#[test]
fn test_asset_stats_gain() {
    let stats = compute_asset_stats(&asset("a1", dec!(10), dec!(100), dec!(150)));

    assert_eq!(stats.asset_id, "a1");
    assert_eq!(stats.total_value, dec!(1500));
    assert_eq!(stats.total_cost, dec!(1000));
    assert_eq!(stats.profit_loss, dec!(500));
    assert_eq!(stats.profit_loss_percentage, dec!(50.00));
}

#[test]
fn test_asset_stats_loss() {
    let stats = compute_asset_stats(&asset("a1", dec!(4), dec!(100), dec!(50)));

    assert_eq!(stats.total_value, dec!(200));
    assert_eq!(stats.total_cost, dec!(400));
    assert_eq!(stats.profit_loss, dec!(-200));
    assert_eq!(stats.profit_loss_percentage, dec!(-50));
}

#[test]
fn test_asset_stats_zero_quantity_has_zero_percentage() {
    let stats = compute_asset_stats(&asset("a1", Decimal::ZERO, dec!(100), dec!(150)));

    assert_eq!(stats.total_value, Decimal::ZERO);
    assert_eq!(stats.total_cost, Decimal::ZERO);
    assert_eq!(stats.profit_loss, Decimal::ZERO);
    assert_eq!(stats.profit_loss_percentage, Decimal::ZERO);
}

#[test]
fn test_asset_stats_zero_purchase_price_has_zero_percentage() {
    let stats = compute_asset_stats(&asset("a1", dec!(3), Decimal::ZERO, dec!(20)));

    assert_eq!(stats.total_value, dec!(60));
    assert_eq!(stats.total_cost, Decimal::ZERO);
    assert_eq!(stats.profit_loss, dec!(60));
    assert_eq!(stats.profit_loss_percentage, Decimal::ZERO);
}

#[test]
fn test_percentage_of_guards_non_positive_whole() {
    assert_eq!(percentage_of(dec!(5), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percentage_of(dec!(5), dec!(-1)), Decimal::ZERO);
    assert_eq!(percentage_of(dec!(1), dec!(4)), dec!(25));
}

#[test]
fn test_wallet_stats_empty() {
    let stats = compute_wallet_stats(&[]);

    assert_eq!(stats, WalletStats::default());
    assert_eq!(stats.total_value, Decimal::ZERO);
    assert_eq!(stats.total_cost, Decimal::ZERO);
    assert_eq!(stats.total_profit_loss, Decimal::ZERO);
    assert_eq!(stats.total_profit_loss_percentage, Decimal::ZERO);
    assert!(stats.asset_stats.is_empty());
}

#[test]
fn test_wallet_percentage_uses_combined_totals() {
    // +500 on a 1000 cost basis and -200 on a 400 cost basis.
    let assets = vec![
        asset("gain", dec!(10), dec!(100), dec!(150)),
        asset("loss", dec!(4), dec!(100), dec!(50)),
    ];
    let stats = compute_wallet_stats(&assets);

    assert_eq!(stats.total_value, dec!(1700));
    assert_eq!(stats.total_cost, dec!(1400));
    assert_eq!(stats.total_profit_loss, dec!(300));
    assert_eq!(
        stats.total_profit_loss_percentage,
        percentage_of(dec!(300), dec!(1400))
    );
    assert_eq!(stats.total_profit_loss_percentage.round_dp(2), dec!(21.43));

    // Averaging the per-asset percentages (50 and -50) would give zero.
    assert_ne!(stats.total_profit_loss_percentage, Decimal::ZERO);
}

#[test]
fn test_wallet_stats_preserve_input_order() {
    let assets = vec![
        asset("c", dec!(1), dec!(1), dec!(1)),
        asset("a", dec!(2), dec!(2), dec!(2)),
        asset("b", dec!(3), dec!(3), dec!(3)),
    ];
    let stats = compute_wallet_stats(&assets);

    let ids: Vec<&str> = stats.asset_stats.iter().map(|s| s.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    for (asset, stats) in assets.iter().zip(&stats.asset_stats) {
        assert_eq!(compute_asset_stats(asset), *stats);
    }
}

#[test]
fn test_wallet_total_value_matches_sum_of_assets() {
    let assets = vec![
        asset("a", dec!(0.5), dec!(30000), dec!(42000.25)),
        asset("b", dec!(12), dec!(8.1), dec!(7.95)),
        asset("c", dec!(1), Decimal::ZERO, dec!(3)),
    ];
    let stats = compute_wallet_stats(&assets);

    let sum: Decimal = assets
        .iter()
        .map(|a| compute_asset_stats(a).total_value)
        .sum();
    assert_eq!(stats.total_value, sum);
}

#[test]
fn test_wallet_stats_idempotent() {
    let assets = vec![
        asset("a", dec!(3.3), dec!(7.7), dec!(1.1)),
        asset("b", dec!(1), dec!(3), dec!(10)),
    ];
    assert_eq!(compute_wallet_stats(&assets), compute_wallet_stats(&assets));
    assert_eq!(
        compute_asset_stats(&assets[0]),
        compute_asset_stats(&assets[0])
    );
}

#[test]
fn test_summarize_wallet_aliases_totals() {
    let wallet = WalletWithAssets {
        wallet: Wallet {
            id: "wallet-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Long term".to_string(),
            ..Default::default()
        },
        assets: vec![asset("a1", dec!(10), dec!(100), dec!(150))],
    };
    let summary = summarize_wallet(wallet);

    assert_eq!(summary.current_amount, dec!(1500));
    assert_eq!(summary.spent_amount, dec!(1000));
    assert_eq!(summary.profit_loss, dec!(500));
    assert_eq!(summary.stats.asset_stats.len(), 1);
    assert_eq!(summary.wallet.name, "Long term");
}

#[test]
fn test_asset_stats_exact_at_holding_limit() {
    let limit = crate::assets::MAX_HOLDING_AMOUNT;
    let stats = compute_asset_stats(&asset("big", limit, limit, limit));

    assert_eq!(stats.total_value, dec!(1_000_000_000_000_000_000_000_000));
    assert_eq!(stats.total_cost, stats.total_value);
    assert_eq!(stats.profit_loss, Decimal::ZERO);
    assert_eq!(stats.profit_loss_percentage, Decimal::ZERO);
}

#[test]
fn test_asset_stats_saturate_beyond_decimal_range() {
    let huge = dec!(1_000_000_000_000_000);
    let stats = compute_asset_stats(&asset("huge", huge, dec!(1), huge));

    assert_eq!(stats.total_value, Decimal::MAX);
    assert_eq!(stats.total_cost, huge);
    assert_eq!(stats.profit_loss, Decimal::MAX - huge);
    assert_eq!(
        stats.profit_loss_percentage,
        percentage_of(Decimal::MAX - huge, huge)
    );
    assert!(stats.profit_loss_percentage > Decimal::ZERO);
}

#[test]
fn test_wallet_totals_saturate_instead_of_overflowing() {
    let assets: Vec<Asset> = (0..100)
        .map(|i| {
            asset(
                &format!("a{}", i),
                dec!(10_000_000_000_000),
                dec!(100_000_000_000_000),
                dec!(100_000_000_000_000),
            )
        })
        .collect();
    let stats = compute_wallet_stats(&assets);

    assert_eq!(stats.asset_stats.len(), 100);
    assert_eq!(stats.total_value, Decimal::MAX);
    assert_eq!(stats.total_cost, Decimal::MAX);
    assert_eq!(stats.total_profit_loss, Decimal::ZERO);
    assert_eq!(stats.total_profit_loss_percentage, Decimal::ZERO);
}

#[test]
fn test_percentage_of_saturates_on_tiny_whole() {
    let tiny = dec!(0.0000000001);
    assert_eq!(percentage_of(dec!(100_000_000_000_000_000_000), tiny), Decimal::MAX);
    assert_eq!(percentage_of(dec!(-100_000_000_000_000_000_000), tiny), Decimal::MIN);
}
