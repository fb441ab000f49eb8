use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation errors
    #[msg("Plan name is too long")]
    NameTooLong,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Withdrawal amount is below the $2 minimum")]
    BelowMinimumWithdrawal,
    #[msg("Drop number is outside the plan's schedule")]
    InvalidDropNumber,
    #[msg("Invalid exchange rate")]
    InvalidRate,
    #[msg("Invalid referral level")]
    InvalidReferralLevel,
    #[msg("Settlement mint does not match global state")]
    InvalidMint,

    // Authorization errors
    #[msg("Unauthorized user")]
    UnauthorizedUser,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    // Balance errors
    #[msg("Insufficient funds")]
    InsufficientFunds,

    // Deposit errors
    #[msg("Plan is locked for new deposits")]
    PlanLocked,
    #[msg("Deposit is not pending")]
    DepositNotPending,
    #[msg("Deposit is not confirmed")]
    DepositNotConfirmed,

    // Income drop errors
    #[msg("Income drop already processed")]
    DropAlreadyProcessed,
    #[msg("Income drop is not yet due")]
    DropNotDue,

    // Withdrawal lifecycle errors
    #[msg("Withdrawal is not queued")]
    WithdrawalNotQueued,
    #[msg("Withdrawal is not processing")]
    WithdrawalNotProcessing,
    #[msg("Retry backoff has not elapsed")]
    RetryBackoffActive,

    // Referral errors
    #[msg("Cannot record a referral bonus for the depositor's own deposit")]
    SelfReferral,

    // Protocol errors
    #[msg("Protocol is paused")]
    ProtocolPaused,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}
