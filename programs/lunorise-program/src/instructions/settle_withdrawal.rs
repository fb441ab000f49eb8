use crate::{constants::*, error::ErrorCode, fees, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

#[derive(Accounts)]
pub struct BeginWithdrawal<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        constraint = withdrawal.status == WithdrawalStatus::Queued @ ErrorCode::WithdrawalNotQueued
    )]
    pub withdrawal: Account<'info, Withdrawal>,
}

#[derive(Accounts)]
pub struct CompleteWithdrawal<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        constraint = withdrawal.status == WithdrawalStatus::Processing @ ErrorCode::WithdrawalNotProcessing
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    #[account(
        mut,
        seeds = [WALLET_SEED.as_bytes(), withdrawal.user.as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == withdrawal.user @ ErrorCode::UnauthorizedUser
    )]
    pub wallet: Account<'info, Wallet>,

    /// CHECK: Withdrawal owner, receives the net payout
    #[account(address = withdrawal.user @ ErrorCode::UnauthorizedUser)]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        address = global_state.usd_mint @ ErrorCode::InvalidMint
    )]
    pub usd_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = usd_mint,
        associated_token::authority = recipient
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// CHECK: Treasury PDA holding the reserved funds
    #[account(
        seeds = [TREASURY_SEED.as_bytes()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(
        mut,
        associated_token::mint = usd_mint,
        associated_token::authority = treasury
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct FailWithdrawal<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub withdrawal: Account<'info, Withdrawal>,

    #[account(
        mut,
        seeds = [WALLET_SEED.as_bytes(), withdrawal.user.as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == withdrawal.user @ ErrorCode::UnauthorizedUser
    )]
    pub wallet: Account<'info, Wallet>,
}

impl<'info> BeginWithdrawal<'info> {
    /// Pick a queued withdrawal up for processing, honoring the retry
    /// backoff gate.
    pub fn begin_withdrawal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        require!(
            now >= self.withdrawal.next_attempt,
            ErrorCode::RetryBackoffActive
        );

        self.withdrawal.status = WithdrawalStatus::Processing;

        msg!(
            "Withdrawal {} processing for user {} (attempt {})",
            self.withdrawal.key(),
            self.withdrawal.user,
            self.withdrawal.retry_count + 1
        );

        Ok(())
    }
}

impl<'info> CompleteWithdrawal<'info> {
    /// Pay out the net amount and retire the reservation. The fee stays
    /// in the treasury.
    pub fn complete_withdrawal(&mut self, bumps: &CompleteWithdrawalBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.wallet.release_reservation(self.withdrawal.amount_cents)?;

        let token_amount = fees::cents_to_token_amount(self.withdrawal.net_cents)?;
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED.as_bytes(), &[bumps.treasury]]];
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.treasury_token_account.to_account_info(),
                    mint: self.usd_mint.to_account_info(),
                    to: self.recipient_token_account.to_account_info(),
                    authority: self.treasury.to_account_info(),
                },
                signer_seeds,
            ),
            token_amount,
            self.usd_mint.decimals,
        )?;

        self.withdrawal.status = WithdrawalStatus::Completed;
        self.withdrawal.processed_at = Some(now);

        msg!(
            "Withdrawal {} completed: ${:.2} net paid to {} (fee ${:.2} retained)",
            self.withdrawal.key(),
            self.withdrawal.net_cents as f64 / 100.0,
            self.withdrawal.user,
            self.withdrawal.fee_cents as f64 / 100.0
        );

        Ok(())
    }
}

impl<'info> FailWithdrawal<'info> {
    /// Record a processing failure: requeue with backoff below the retry
    /// cap, otherwise fail terminally and refund the reservation.
    pub fn fail_withdrawal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.withdrawal.record_failure(&mut self.wallet, now)?;

        match self.withdrawal.status {
            WithdrawalStatus::Queued => msg!(
                "Withdrawal {} requeued (retry {} of {}), next attempt at {}",
                self.withdrawal.key(),
                self.withdrawal.retry_count,
                MAX_WITHDRAWAL_RETRIES,
                self.withdrawal.next_attempt
            ),
            _ => msg!(
                "Withdrawal {} failed terminally, ${:.2} returned to available balance of {}",
                self.withdrawal.key(),
                self.withdrawal.amount_cents as f64 / 100.0,
                self.withdrawal.user
            ),
        }

        Ok(())
    }
}
