use crate::constants::seeds;
use crate::instructions::oracle::OracleAdapter;
use crate::instructions::rebase::{debit_holder, Holder, RebaseLedger};
use crate::instructions::redemption::{RedemptionQueue, RedemptionRequest};
use crate::instructions::registry::AssetConfig;
use crate::instructions::whitelist::WhitelistEntry;
use crate::state::State;
use crate::utils::math_utils::Rounding;
use crate::utils::pricing::amount_of;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Event emitted when a redemption request is successfully created
#[event]
pub struct RedemptionRequestedEvent {
    /// User the collateral is owed to
    pub user: Pubkey,
    /// Collateral asset requested
    pub asset: Pubkey,
    /// Index assigned to the request in the user's per-asset queue
    pub index: u64,
    /// Stable tokens burned
    pub token_amount: u64,
    /// Collateral amount owed, in base units
    pub collateral_amount: u64,
    /// Unix timestamp after which the request is claimable
    pub claimable_after: u64,
}

/// Account structure for creating a redemption request
///
/// Burns stable tokens from the caller and enqueues a time-locked collateral
/// obligation. The request PDA is derived from the queue position, so the
/// caller passes the expected index and the program checks it against the
/// queue cursor, which makes request creation replay-safe.
#[derive(Accounts)]
#[instruction(token_amount: u64, index: u64)]
pub struct RequestTokens<'info> {
    /// Program state; the kill switch halts new requests
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = !state.is_killed @ RequestTokensErrorCode::KillSwitchActivated
    )]
    pub state: Box<Account<'info, State>>,

    /// Caller's whitelist entry; redemption requests are whitelist-gated
    #[account(
        seeds = [seeds::WHITELIST_ENTRY, user.key().as_ref()],
        bump = whitelist_entry.bump,
        constraint = whitelist_entry.whitelisted @ RequestTokensErrorCode::NotWhitelisted
    )]
    pub whitelist_entry: Box<Account<'info, WhitelistEntry>>,

    /// Registry entry of the requested asset; removed assets are rejected
    #[account(
        mut,
        seeds = [seeds::ASSET_CONFIG, collateral_mint.key().as_ref()],
        bump = asset_config.bump,
        constraint = !asset_config.removed @ RequestTokensErrorCode::AssetRemoved
    )]
    pub asset_config: Box<Account<'info, AssetConfig>>,

    /// Oracle adapter registered for the asset
    #[account(
        constraint = oracle_adapter.key() == asset_config.oracle
            @ RequestTokensErrorCode::OracleMismatch
    )]
    pub oracle_adapter: Box<Account<'info, OracleAdapter>>,

    /// The collateral mint being requested
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The global rebase ledger, debited by the burn
    #[account(mut, seeds = [seeds::REBASE_LEDGER], bump = rebase_ledger.bump)]
    pub rebase_ledger: Box<Account<'info, RebaseLedger>>,

    /// Caller's stable token holder account
    #[account(
        mut,
        seeds = [seeds::HOLDER, user.key().as_ref()],
        bump = holder.bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    /// The caller's per-asset queue, created on first request
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + RedemptionQueue::INIT_SPACE,
        seeds = [
            seeds::REDEMPTION_QUEUE,
            user.key().as_ref(),
            collateral_mint.key().as_ref()
        ],
        bump
    )]
    pub queue: Box<Account<'info, RedemptionQueue>>,

    /// The redemption request account, created at the queue's next index
    #[account(
        init,
        payer = user,
        space = 8 + RedemptionRequest::INIT_SPACE,
        seeds = [
            seeds::REDEMPTION_REQUEST,
            user.key().as_ref(),
            collateral_mint.key().as_ref(),
            index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub redemption_request: Box<Account<'info, RedemptionRequest>>,

    /// User requesting the redemption (pays for account creation)
    #[account(mut)]
    pub user: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Creates a redemption request.
///
/// This instruction:
/// 1. Burns `token_amount` of the stable token from the caller
/// 2. Converts the burned value to a collateral amount at the oracle price
///    (floor rounding, staleness-bounded); the amount is fixed here, at
///    request time
/// 3. Appends a request maturing at `now + claim_delay` to the caller's
///    per-asset FIFO queue
/// 4. Increases the asset's pending-claims ledger by the full nominal amount
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `token_amount` - Stable tokens to burn, in base units
/// * `index` - Expected queue position; must equal `queue.next_index`
///
/// # Events
/// * `RedemptionRequestedEvent` - Emitted with the assigned index
pub fn request_tokens(ctx: Context<RequestTokens>, token_amount: u64, index: u64) -> Result<()> {
    require!(token_amount > 0, RequestTokensErrorCode::InvalidAmount);

    let queue = &mut ctx.accounts.queue;
    if queue.user == Pubkey::default() {
        queue.user = ctx.accounts.user.key();
        queue.asset_mint = ctx.accounts.collateral_mint.key();
        queue.bump = ctx.bumps.queue;
    }
    require_eq!(
        index,
        queue.next_index,
        RequestTokensErrorCode::InvalidRequestIndex
    );

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .oracle_adapter
        .check_staleness(now, ctx.accounts.state.max_price_age)?;

    let collateral_amount = amount_of(
        token_amount,
        ctx.accounts.oracle_adapter.price,
        ctx.accounts.collateral_mint.decimals,
        Rounding::Floor,
    )?;
    require!(
        collateral_amount > 0,
        RequestTokensErrorCode::AmountTooSmall
    );

    debit_holder(
        &mut ctx.accounts.rebase_ledger,
        &mut ctx.accounts.holder,
        token_amount,
    )?;

    let claimable_after = (now as u64)
        .checked_add(ctx.accounts.state.claim_delay)
        .ok_or(RequestTokensErrorCode::MathOverflow)?;

    let request = &mut ctx.accounts.redemption_request;
    request.user = ctx.accounts.user.key();
    request.asset_mint = ctx.accounts.collateral_mint.key();
    request.index = index;
    request.amount = collateral_amount;
    request.claimed = 0;
    request.claimable_after = claimable_after;
    request.bump = ctx.bumps.redemption_request;

    queue.next_index = queue
        .next_index
        .checked_add(1)
        .ok_or(RequestTokensErrorCode::MathOverflow)?;

    let asset_config = &mut ctx.accounts.asset_config;
    asset_config.pending_claims = asset_config
        .pending_claims
        .checked_add(collateral_amount)
        .ok_or(RequestTokensErrorCode::MathOverflow)?;

    msg!(
        "Redemption requested: user={}, asset={}, index={}, burned={}, owed={}, claimable_after={}",
        request.user,
        request.asset_mint,
        index,
        token_amount,
        collateral_amount,
        claimable_after
    );
    emit!(RedemptionRequestedEvent {
        user: request.user,
        asset: request.asset_mint,
        index,
        token_amount,
        collateral_amount,
        claimable_after,
    });

    Ok(())
}

/// Error codes for redemption request creation
#[error_code]
pub enum RequestTokensErrorCode {
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

    /// Zero token amount supplied
    #[msg("Amount must be nonzero")]
    InvalidAmount,

    /// The burn converts to zero collateral
    #[msg("Token amount converts to zero collateral")]
    AmountTooSmall,

    /// Provided index does not match the queue cursor
    #[msg("Invalid index: does not match the queue's next index")]
    InvalidRequestIndex,

    /// Arithmetic overflow occurred
    #[msg("Math overflow")]
    MathOverflow,
}
