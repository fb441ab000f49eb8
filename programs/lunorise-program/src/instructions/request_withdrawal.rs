use crate::{constants::*, error::ErrorCode, fees, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(client_ref: u64)]
pub struct RequestWithdrawal<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [WALLET_SEED.as_bytes(), user.key().as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == user.key() @ ErrorCode::UnauthorizedUser
    )]
    pub wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = user,
        space = 8 + Withdrawal::INIT_SPACE,
        seeds = [
            WITHDRAWAL_SEED.as_bytes(),
            user.key().as_ref(),
            client_ref.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    pub system_program: Program<'info, System>,
}

impl<'info> RequestWithdrawal<'info> {
    /// Reserve the withdrawal amount and record the request in one
    /// transaction. The balance decrement and the record creation cannot
    /// be observed separately, and retrying with the same client_ref
    /// fails at account creation instead of reserving twice.
    pub fn request_withdrawal(
        &mut self,
        client_ref: u64,
        amount_cents: u64,
        currency: PayoutCurrency,
        bumps: &RequestWithdrawalBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProtocolPaused);
        require!(
            fees::meets_minimum_withdrawal(amount_cents),
            ErrorCode::BelowMinimumWithdrawal
        );

        let fee_cents = fees::withdrawal_fee_cents(amount_cents, currency);
        let net_cents = fees::net_payout_cents(amount_cents, currency);

        // Fails with InsufficientFunds before anything is recorded
        self.wallet.reserve(amount_cents)?;

        self.withdrawal.set_inner(Withdrawal {
            user: self.user.key(),
            amount_cents,
            fee_cents,
            net_cents,
            currency,
            status: WithdrawalStatus::Queued,
            retry_count: 0,
            next_attempt: 0,
            client_ref,
            created_at: Clock::get()?.unix_timestamp,
            processed_at: None,
            bump: bumps.withdrawal,
        });

        msg!(
            "User {} queued withdrawal of ${:.2} (fee ${:.2}, net ${:.2}, remaining available ${:.2})",
            self.user.key(),
            amount_cents as f64 / 100.0,
            fee_cents as f64 / 100.0,
            net_cents as f64 / 100.0,
            self.wallet.available_cents as f64 / 100.0
        );

        Ok(())
    }
}
