// Global seeds
pub const GLOBAL_STATE_SEED: &str = "global_state";
pub const TREASURY_SEED: &str = "treasury";

// Catalog seeds
pub const PLAN_SEED: &str = "plan";

// User related seeds
pub const WALLET_SEED: &str = "wallet";
pub const DEPOSIT_SEED: &str = "deposit";
pub const INCOME_EVENT_SEED: &str = "income_event";
pub const WITHDRAWAL_SEED: &str = "withdrawal";
pub const REFERRAL_SEED: &str = "referral";

// Maximum string lengths
pub const MAX_NAME_LENGTH: usize = 64;

// Withdrawal fee policy (basis points)
pub const USD_FEE_BPS: u64 = 800; // 8% for USD/USDT payouts
pub const NGN_FEE_BPS: u64 = 1500; // 15% for Naira payouts

// Withdrawal configuration
pub const MIN_WITHDRAWAL_CENTS: u64 = 200; // $2 minimum
pub const MAX_WITHDRAWAL_RETRIES: u8 = 3;
pub const RETRY_BACKOFF_BASE_SECONDS: i64 = 3600; // doubles per failed attempt

// Income drop cadence
pub const DROP_INTERVAL_SECONDS: i64 = 22 * 60 * 60; // one drop every 22 hours

// Settlement token configuration
pub const USD_TOKEN_DECIMALS: u8 = 6;
pub const USD_TOKEN_UNITS_PER_CENT: u64 = 10_000; // cents to 6-decimal token units

// Informational exchange rate default
pub const DEFAULT_USDT_RATE_NGN: u64 = 1600; // Naira per USD
