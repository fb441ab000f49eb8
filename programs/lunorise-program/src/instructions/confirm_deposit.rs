use crate::{constants::*, error::ErrorCode, fees, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

#[derive(Accounts)]
pub struct ConfirmDeposit<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        constraint = deposit.status == DepositStatus::Pending @ ErrorCode::DepositNotPending
    )]
    pub deposit: Account<'info, Deposit>,
}

#[derive(Accounts)]
pub struct RejectDeposit<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        constraint = deposit.status == DepositStatus::Pending @ ErrorCode::DepositNotPending
    )]
    pub deposit: Account<'info, Deposit>,

    /// CHECK: Deposit owner, receives the refund
    #[account(address = deposit.user @ ErrorCode::UnauthorizedUser)]
    pub depositor: UncheckedAccount<'info>,

    #[account(
        address = global_state.usd_mint @ ErrorCode::InvalidMint
    )]
    pub usd_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = usd_mint,
        associated_token::authority = depositor
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    /// CHECK: Treasury PDA holding deposited funds
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

impl<'info> ConfirmDeposit<'info> {
    /// Confirm a pending deposit. The confirmation timestamp anchors the
    /// deposit's income drop schedule.
    pub fn confirm_deposit(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.deposit.status = DepositStatus::Confirmed;
        self.deposit.confirmed_at = now;

        msg!(
            "Deposit {} confirmed for user {} (${:.2})",
            self.deposit.key(),
            self.deposit.user,
            self.deposit.amount_cents as f64 / 100.0
        );

        Ok(())
    }
}

impl<'info> RejectDeposit<'info> {
    /// Reject a pending deposit and refund it from the treasury.
    pub fn reject_deposit(&mut self, bumps: &RejectDepositBumps) -> Result<()> {
        let token_amount = fees::cents_to_token_amount(self.deposit.amount_cents)?;

        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED.as_bytes(), &[bumps.treasury]]];
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.treasury_token_account.to_account_info(),
                    mint: self.usd_mint.to_account_info(),
                    to: self.depositor_token_account.to_account_info(),
                    authority: self.treasury.to_account_info(),
                },
                signer_seeds,
            ),
            token_amount,
            self.usd_mint.decimals,
        )?;

        self.deposit.status = DepositStatus::Rejected;

        msg!(
            "Deposit {} rejected, ${:.2} refunded to {}",
            self.deposit.key(),
            self.deposit.amount_cents as f64 / 100.0,
            self.deposit.user
        );

        Ok(())
    }
}
