use crate::constants::seeds;
use crate::instructions::oracle::OracleAdapter;
use crate::instructions::rebase::{credit_holder, Holder, RebaseLedger};
use crate::instructions::registry::AssetConfig;
use crate::instructions::whitelist::WhitelistEntry;
use crate::state::{CollateralVaultAuthority, State};
use crate::utils::math_utils::Rounding;
use crate::utils::pricing::value_of;
use crate::utils::token_utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

/// Event emitted when collateral is deposited and stable tokens are minted
#[event]
pub struct TokensMintedEvent {
    /// The depositing account
    pub account: Pubkey,
    /// Collateral mint deposited
    pub asset: Pubkey,
    /// Collateral actually received by the vault, in base units
    pub amount_in: u64,
    /// Stable tokens actually credited to the account, in base units
    pub amount_out: u64,
}

/// Account structure for the mint path
///
/// The caller deposits collateral into the program vault and is credited with
/// stable tokens at the oracle price. Both legs are measured by observed
/// balance delta rather than nominal amounts, defending against
/// fee-on-transfer collateral and index-rounding on the mint side.
#[derive(Accounts)]
pub struct MintTokens<'info> {
    /// Program state; the kill switch halts new mints
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = !state.is_killed @ MintTokensErrorCode::KillSwitchActivated
    )]
    pub state: Box<Account<'info, State>>,

    /// Caller's whitelist entry; mint is whitelist-gated
    #[account(
        seeds = [seeds::WHITELIST_ENTRY, user.key().as_ref()],
        bump = whitelist_entry.bump,
        constraint = whitelist_entry.whitelisted @ MintTokensErrorCode::NotWhitelisted
    )]
    pub whitelist_entry: Box<Account<'info, WhitelistEntry>>,

    /// Registry entry of the deposited asset; removed assets are rejected
    #[account(
        seeds = [seeds::ASSET_CONFIG, collateral_mint.key().as_ref()],
        bump = asset_config.bump,
        constraint = !asset_config.removed @ MintTokensErrorCode::AssetRemoved
    )]
    pub asset_config: Box<Account<'info, AssetConfig>>,

    /// Oracle adapter registered for the asset
    #[account(
        constraint = oracle_adapter.key() == asset_config.oracle
            @ MintTokensErrorCode::OracleMismatch
    )]
    pub oracle_adapter: Box<Account<'info, OracleAdapter>>,

    /// The collateral mint being deposited
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Caller's collateral token account (source of the deposit)
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program-derived authority owning the collateral vault accounts
    #[account(
        seeds = [seeds::COLLATERAL_VAULT_AUTHORITY],
        bump = vault_authority.bump
    )]
    pub vault_authority: Box<Account<'info, CollateralVaultAuthority>>,

    /// Vault token account for the asset (destination of the deposit)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = collateral_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The global rebase ledger, credited with the minted shares
    #[account(mut, seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Box<Account<'info, RebaseLedger>>,

    /// Caller's stable token holder account, created on first mint
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Holder::INIT_SPACE,
        seeds = [seeds::HOLDER, user.key().as_ref()],
        bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    /// The depositing user (pays for account creation)
    #[account(mut)]
    pub user: Signer<'info>,

    /// Token program interface for the collateral transfer
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program for automatic token account creation
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Mints stable tokens against deposited collateral.
///
/// This instruction:
/// 1. Pulls `amount_in` of collateral from the caller into the vault and
///    measures the actual received balance delta
/// 2. Converts the received amount to stable token value at the oracle price
///    (floor rounding, staleness-bounded)
/// 3. Credits the caller's holder account and measures the actual minted delta
/// 4. Enforces `min_amount_out` against the observed delta (slippage check)
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount_in` - Nominal collateral amount to deposit, in base units
/// * `min_amount_out` - Minimum acceptable stable tokens credited
///
/// # Access Control
/// - Caller must be whitelisted
/// - Asset must be active (not removed); kill switch must be off
///
/// # Errors
/// * `InvalidAmount` - Zero deposit
/// * `AmountTooSmall` - Deposit floors to a zero stable token quote
/// * `StalePrice` - Oracle price older than the configured bound
/// * `InsufficientOutputAmount` - Observed mint below `min_amount_out`
///
/// # Events
/// * `TokensMintedEvent` - Emitted with observed amounts on both legs
pub fn mint_tokens(ctx: Context<MintTokens>, amount_in: u64, min_amount_out: u64) -> Result<()> {
    require!(amount_in > 0, MintTokensErrorCode::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .oracle_adapter
        .check_staleness(now, ctx.accounts.state.max_price_age)?;

    // Pull collateral and trust only the observed vault balance delta.
    let vault_before = ctx.accounts.vault_token_account.amount;
    transfer_tokens(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_mint,
        &ctx.accounts.user_token_account,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.user.to_account_info(),
        None,
        amount_in,
    )?;
    ctx.accounts.vault_token_account.reload()?;
    let received = ctx
        .accounts
        .vault_token_account
        .amount
        .checked_sub(vault_before)
        .ok_or(MintTokensErrorCode::MathOverflow)?;
    require!(received > 0, MintTokensErrorCode::InvalidAmount);

    let value = value_of(
        received,
        ctx.accounts.oracle_adapter.price,
        ctx.accounts.collateral_mint.decimals,
        Rounding::Floor,
    )?;
    // A dust deposit of a low-priced collateral can floor to a zero quote;
    // reject it so the collateral is never absorbed without a mint.
    require!(value > 0, MintTokensErrorCode::AmountTooSmall);

    let holder = &mut ctx.accounts.holder;
    if holder.owner == Pubkey::default() {
        holder.owner = ctx.accounts.user.key();
        holder.bump = ctx.bumps.holder;
    }

    let minted = credit_holder(&mut ctx.accounts.rebase_ledger, holder, value)?;
    require!(
        minted >= min_amount_out,
        MintTokensErrorCode::InsufficientOutputAmount
    );

    msg!(
        "Minted {} stable tokens to {} for {} collateral of {}",
        minted,
        ctx.accounts.user.key(),
        received,
        ctx.accounts.collateral_mint.key()
    );
    emit!(TokensMintedEvent {
        account: ctx.accounts.user.key(),
        asset: ctx.accounts.collateral_mint.key(),
        amount_in: received,
        amount_out: minted,
    });

    Ok(())
}

/// Error codes for the mint path
#[error_code]
pub enum MintTokensErrorCode {
    /// The program kill switch is activated
    #[msg("Kill switch is activated")]
    KillSwitchActivated,

    /// Caller is not whitelisted
    #[msg("Account is not whitelisted")]
    NotWhitelisted,

    /// Asset is marked removed
    #[msg("Asset is removed from the registry")]
    AssetRemoved,

    /// Oracle adapter does not match the registry entry
    #[msg("Oracle adapter does not match the asset registry entry")]
    OracleMismatch,

    /// Zero amount supplied or received
    #[msg("Amount must be nonzero")]
    InvalidAmount,

    /// The deposit converts to zero stable value
    #[msg("Deposit converts to zero stable token value")]
    AmountTooSmall,

    /// Observed minted amount fell short of the slippage bound
    #[msg("Minted amount is below the requested minimum")]
    InsufficientOutputAmount,

    /// Arithmetic overflow occurred
    #[msg("Math overflow")]
    MathOverflow,
}
