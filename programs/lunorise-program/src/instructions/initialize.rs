use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    /// CHECK: Treasury PDA that collects deposits and withdrawal fees
    #[account(
        seeds = [TREASURY_SEED.as_bytes()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    /// USD-pegged settlement mint (6 decimals, e.g. USDC/USDT)
    #[account(
        constraint = usd_mint.decimals == USD_TOKEN_DECIMALS @ ErrorCode::InvalidMint
    )]
    pub usd_mint: Account<'info, Mint>,

    /// Treasury's settlement token account
    #[account(
        init,
        payer = authority,
        associated_token::mint = usd_mint,
        associated_token::authority = treasury
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize_global_state(&mut self, bumps: &InitializeBumps) -> Result<()> {
        let global_state = &mut self.global_state;

        global_state.authority = self.authority.key();
        global_state.is_paused = false;
        global_state.usd_mint = self.usd_mint.key();
        global_state.total_plans = 0;
        global_state.usdt_rate_ngn = DEFAULT_USDT_RATE_NGN;
        global_state.last_drop_processed = 0;
        global_state.bump = bumps.global_state;

        msg!(
            "Luno Rise protocol initialized by authority: {}",
            self.authority.key()
        );
        msg!(
            "Settlement mint: {}, treasury token account: {}",
            self.usd_mint.key(),
            self.treasury_token_account.key()
        );

        Ok(())
    }
}
