use crate::{constants::*, error::ErrorCode, fees, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

#[derive(Accounts)]
#[instruction(plan_id: u64, client_ref: u64)]
pub struct CreateDeposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        seeds = [PLAN_SEED.as_bytes(), plan_id.to_le_bytes().as_ref()],
        bump = plan.bump
    )]
    pub plan: Account<'info, Plan>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Wallet::INIT_SPACE,
        seeds = [WALLET_SEED.as_bytes(), user.key().as_ref()],
        bump
    )]
    pub wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = user,
        space = 8 + Deposit::INIT_SPACE,
        seeds = [
            DEPOSIT_SEED.as_bytes(),
            user.key().as_ref(),
            client_ref.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub deposit: Account<'info, Deposit>,

    #[account(
        address = global_state.usd_mint @ ErrorCode::InvalidMint
    )]
    pub usd_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = usd_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// CHECK: Treasury PDA that collects deposits
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
    pub system_program: Program<'info, System>,
}

impl<'info> CreateDeposit<'info> {
    pub fn create_deposit(
        &mut self,
        _plan_id: u64,
        client_ref: u64,
        amount_cents: u64,
        bumps: &CreateDepositBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProtocolPaused);
        require!(!self.plan.is_locked, ErrorCode::PlanLocked);
        require!(
            amount_cents == self.plan.deposit_usd_cents,
            ErrorCode::InvalidAmount
        );

        let now = Clock::get()?.unix_timestamp;

        // Initialize the wallet on the user's first deposit
        if self.wallet.user == Pubkey::default() {
            self.wallet.user = self.user.key();
            self.wallet.available_cents = 0;
            self.wallet.pending_cents = 0;
            self.wallet.total_earned_cents = 0;
            self.wallet.created_at = now;
            self.wallet.bump = bumps.wallet;
        }

        // Move the deposit into the treasury
        let token_amount = fees::cents_to_token_amount(amount_cents)?;
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_token_account.to_account_info(),
                    mint: self.usd_mint.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            token_amount,
            self.usd_mint.decimals,
        )?;

        self.deposit.set_inner(Deposit {
            user: self.user.key(),
            plan: self.plan.key(),
            amount_cents,
            client_ref,
            status: DepositStatus::Pending,
            confirmed_at: 0,
            created_at: now,
            bump: bumps.deposit,
        });

        msg!(
            "User {} deposited ${:.2} into plan '{}' (ref {})",
            self.user.key(),
            amount_cents as f64 / 100.0,
            self.plan.name,
            client_ref
        );

        Ok(())
    }
}
