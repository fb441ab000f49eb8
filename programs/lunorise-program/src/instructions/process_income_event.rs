use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ProcessIncomeEvent<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub income_event: Account<'info, IncomeEvent>,

    #[account(
        mut,
        seeds = [WALLET_SEED.as_bytes(), income_event.user.as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == income_event.user @ ErrorCode::UnauthorizedUser
    )]
    pub wallet: Account<'info, Wallet>,
}

impl<'info> ProcessIncomeEvent<'info> {
    /// Credit one due income drop into the user's wallet. The credit and
    /// the processed flag change in the same transaction, and a processed
    /// event cannot be credited again, so retries are harmless.
    pub fn process_income_event(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.income_event.credit(&mut self.wallet, now)?;
        self.global_state.last_drop_processed = now;

        msg!(
            "Drop {} for deposit {} credited ${:.2} to user {} (available: ${:.2}, total earned: ${:.2})",
            self.income_event.drop_number,
            self.income_event.deposit,
            self.income_event.amount_cents as f64 / 100.0,
            self.wallet.user,
            self.wallet.available_cents as f64 / 100.0,
            self.wallet.total_earned_cents as f64 / 100.0
        );

        Ok(())
    }
}
