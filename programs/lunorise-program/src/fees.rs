use crate::{constants::*, error::ErrorCode, state::PayoutCurrency};
use anchor_lang::prelude::*;

/// Fee rate for a payout currency, in basis points.
pub fn fee_rate_bps(currency: PayoutCurrency) -> u64 {
    match currency {
        PayoutCurrency::Usd => USD_FEE_BPS,
        PayoutCurrency::Ngn => NGN_FEE_BPS,
    }
}

/// Withdrawal fee in cents. Integer basis-point math, truncated toward
/// zero, so the result is always a whole number of cents.
pub fn withdrawal_fee_cents(amount_cents: u64, currency: PayoutCurrency) -> u64 {
    ((amount_cents as u128) * (fee_rate_bps(currency) as u128) / 10_000) as u64
}

/// Net payout after the fee. Never underflows: every fee rate is below
/// 10_000 bps, so the fee is strictly less than the amount.
pub fn net_payout_cents(amount_cents: u64, currency: PayoutCurrency) -> u64 {
    amount_cents - withdrawal_fee_cents(amount_cents, currency)
}

pub fn meets_minimum_withdrawal(amount_cents: u64) -> bool {
    amount_cents >= MIN_WITHDRAWAL_CENTS
}

/// Convert USD cents to settlement-token base units (6 decimals).
pub fn cents_to_token_amount(amount_cents: u64) -> Result<u64> {
    Ok(amount_cents
        .checked_mul(USD_TOKEN_UNITS_PER_CENT)
        .ok_or(ErrorCode::ArithmeticOverflow)?)
}
