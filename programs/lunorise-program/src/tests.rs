use super::*;
use crate::error::ErrorCode;
use crate::fees;
use anchor_lang::prelude::*;

fn fresh_wallet(user: Pubkey) -> Wallet {
    Wallet {
        user,
        available_cents: 0,
        pending_cents: 0,
        total_earned_cents: 0,
        created_at: 0,
        bump: 0,
    }
}

fn fresh_event(user: Pubkey, amount_cents: u64, due_at: i64) -> IncomeEvent {
    IncomeEvent {
        user,
        deposit: Pubkey::new_unique(),
        drop_number: 1,
        amount_cents,
        due_at,
        processed: false,
        processed_at: None,
        bump: 0,
    }
}

#[test]
fn usd_fee_is_eight_percent() {
    // $10.00 → $0.80 fee, $9.20 net
    assert_eq!(fees::withdrawal_fee_cents(1000, PayoutCurrency::Usd), 80);
    assert_eq!(fees::net_payout_cents(1000, PayoutCurrency::Usd), 920);
}

#[test]
fn ngn_fee_is_fifteen_percent() {
    // $10.00 → $1.50 fee, $8.50 net
    assert_eq!(fees::withdrawal_fee_cents(1000, PayoutCurrency::Ngn), 150);
    assert_eq!(fees::net_payout_cents(1000, PayoutCurrency::Ngn), 850);
}

#[test]
fn fee_truncates_to_whole_cents() {
    assert_eq!(fees::withdrawal_fee_cents(1001, PayoutCurrency::Usd), 80);
    assert_eq!(fees::net_payout_cents(1001, PayoutCurrency::Usd), 921);
}

#[test]
fn minimum_withdrawal_is_two_dollars() {
    assert!(!fees::meets_minimum_withdrawal(199));
    assert!(fees::meets_minimum_withdrawal(200));
}

#[test]
fn cents_convert_to_six_decimal_token_units() {
    assert_eq!(fees::cents_to_token_amount(1000).unwrap(), 10_000_000);
}

#[test]
fn reserve_moves_available_to_pending() {
    let mut wallet = fresh_wallet(Pubkey::new_unique());
    wallet.available_cents = 5000;

    wallet.reserve(5000).unwrap();

    assert_eq!(wallet.available_cents, 0);
    assert_eq!(wallet.pending_cents, 5000);
}

#[test]
fn reserve_rejects_insufficient_funds_untouched() {
    let mut wallet = fresh_wallet(Pubkey::new_unique());
    wallet.available_cents = 100;

    let err = wallet.reserve(6000).unwrap_err();
    assert_eq!(err, ErrorCode::InsufficientFunds.into());

    assert_eq!(wallet.available_cents, 100);
    assert_eq!(wallet.pending_cents, 0);
}

#[test]
fn second_reservation_cannot_overdraw() {
    // available = $100.00, two requests of $60.00: exactly one succeeds
    let mut wallet = fresh_wallet(Pubkey::new_unique());
    wallet.available_cents = 10_000;

    wallet.reserve(6000).unwrap();
    let err = wallet.reserve(6000).unwrap_err();
    assert_eq!(err, ErrorCode::InsufficientFunds.into());

    assert_eq!(wallet.available_cents, 4000);
    assert_eq!(wallet.pending_cents, 6000);
}

#[test]
fn refund_restores_available_balance() {
    let mut wallet = fresh_wallet(Pubkey::new_unique());
    wallet.available_cents = 1000;

    wallet.reserve(400).unwrap();
    wallet.refund_reservation(400).unwrap();

    assert_eq!(wallet.available_cents, 1000);
    assert_eq!(wallet.pending_cents, 0);
}

#[test]
fn release_retires_pending_only() {
    let mut wallet = fresh_wallet(Pubkey::new_unique());
    wallet.available_cents = 1000;

    wallet.reserve(400).unwrap();
    wallet.release_reservation(400).unwrap();

    assert_eq!(wallet.available_cents, 600);
    assert_eq!(wallet.pending_cents, 0);
}

#[test]
fn income_credit_is_exactly_once() {
    let user = Pubkey::new_unique();
    let mut wallet = fresh_wallet(user);
    let mut event = fresh_event(user, 250, 100);

    event.credit(&mut wallet, 150).unwrap();
    assert_eq!(wallet.available_cents, 250);
    assert_eq!(wallet.total_earned_cents, 250);
    assert!(event.processed);
    assert_eq!(event.processed_at, Some(150));

    // a retry must not credit again
    assert!(event.credit(&mut wallet, 200).is_err());
    assert_eq!(wallet.available_cents, 250);
    assert_eq!(wallet.total_earned_cents, 250);
}

#[test]
fn income_credit_waits_for_due_time() {
    let user = Pubkey::new_unique();
    let mut wallet = fresh_wallet(user);
    let mut event = fresh_event(user, 250, 1000);

    assert!(event.credit(&mut wallet, 999).is_err());
    assert!(!event.processed);
    assert_eq!(wallet.available_cents, 0);

    event.credit(&mut wallet, 1000).unwrap();
    assert_eq!(wallet.available_cents, 250);
}

#[test]
fn countdown_clamps_at_zero() {
    let event = fresh_event(Pubkey::new_unique(), 250, 1000);

    assert_eq!(event.seconds_until_due(200), 800);
    assert_eq!(event.seconds_until_due(1000), 0);
    assert_eq!(event.seconds_until_due(5000), 0);
}

#[test]
fn failed_withdrawal_requeues_with_backoff_then_refunds() {
    let user = Pubkey::new_unique();
    let mut wallet = fresh_wallet(user);
    wallet.available_cents = 1000;
    wallet.reserve(1000).unwrap();

    let mut withdrawal = Withdrawal {
        user,
        amount_cents: 1000,
        fee_cents: 80,
        net_cents: 920,
        currency: PayoutCurrency::Usd,
        status: WithdrawalStatus::Processing,
        retry_count: 0,
        next_attempt: 0,
        client_ref: 1,
        created_at: 0,
        processed_at: None,
        bump: 0,
    };

    let mut now = 10_000;
    for attempt in 0..MAX_WITHDRAWAL_RETRIES {
        withdrawal.record_failure(&mut wallet, now).unwrap();
        assert_eq!(withdrawal.status, WithdrawalStatus::Queued);
        assert_eq!(withdrawal.retry_count, attempt + 1);
        assert_eq!(
            withdrawal.next_attempt,
            now + RETRY_BACKOFF_BASE_SECONDS * (1 << attempt)
        );

        withdrawal.status = WithdrawalStatus::Processing;
        now = withdrawal.next_attempt;
    }

    // the attempt after the cap fails terminally and refunds
    withdrawal.record_failure(&mut wallet, now).unwrap();
    assert_eq!(withdrawal.status, WithdrawalStatus::Failed);
    assert_eq!(withdrawal.processed_at, Some(now));
    assert_eq!(wallet.pending_cents, 0);
    assert_eq!(wallet.available_cents, 1000);
}

#[test]
fn failure_requires_processing_status() {
    let user = Pubkey::new_unique();
    let mut wallet = fresh_wallet(user);

    let mut withdrawal = Withdrawal {
        user,
        amount_cents: 1000,
        fee_cents: 80,
        net_cents: 920,
        currency: PayoutCurrency::Usd,
        status: WithdrawalStatus::Queued,
        retry_count: 0,
        next_attempt: 0,
        client_ref: 1,
        created_at: 0,
        processed_at: None,
        bump: 0,
    };

    assert!(withdrawal.record_failure(&mut wallet, 0).is_err());
    assert_eq!(withdrawal.status, WithdrawalStatus::Queued);
}
