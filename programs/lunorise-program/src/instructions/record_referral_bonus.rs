use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordReferralBonus<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        constraint = deposit.status == DepositStatus::Confirmed @ ErrorCode::DepositNotConfirmed
    )]
    pub deposit: Account<'info, Deposit>,

    /// CHECK: Referrer wallet owner, credited with the bonus
    pub referrer: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [WALLET_SEED.as_bytes(), referrer.key().as_ref()],
        bump = referrer_wallet.bump,
        constraint = referrer_wallet.user == referrer.key() @ ErrorCode::UnauthorizedUser
    )]
    pub referrer_wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = authority,
        space = 8 + Referral::INIT_SPACE,
        seeds = [
            REFERRAL_SEED.as_bytes(),
            deposit.key().as_ref(),
            referrer.key().as_ref()
        ],
        bump
    )]
    pub referral: Account<'info, Referral>,

    pub system_program: Program<'info, System>,
}

impl<'info> RecordReferralBonus<'info> {
    /// Credit a referral bonus for a confirmed deposit. The (deposit,
    /// referrer) PDA guarantees at most one bonus per pair.
    pub fn record_referral_bonus(
        &mut self,
        level: u8,
        bonus_cents: u64,
        bumps: &RecordReferralBonusBumps,
    ) -> Result<()> {
        require!(level >= 1, ErrorCode::InvalidReferralLevel);
        require!(bonus_cents > 0, ErrorCode::InvalidAmount);
        require!(
            self.referrer.key() != self.deposit.user,
            ErrorCode::SelfReferral
        );

        self.referrer_wallet.credit_income(bonus_cents)?;

        self.referral.set_inner(Referral {
            referrer: self.referrer.key(),
            referred: self.deposit.user,
            deposit: self.deposit.key(),
            level,
            bonus_cents,
            created_at: Clock::get()?.unix_timestamp,
            bump: bumps.referral,
        });

        msg!(
            "Referral bonus of ${:.2} (level {}) credited to {} for deposit {}",
            bonus_cents as f64 / 100.0,
            level,
            self.referrer.key(),
            self.deposit.key()
        );

        Ok(())
    }
}
