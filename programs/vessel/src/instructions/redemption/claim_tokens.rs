use crate::constants::seeds;
use crate::instructions::coverage::CoverageTracker;
use crate::instructions::redemption::{plan_settlement, RedemptionQueue, RedemptionRequest};
use crate::instructions::registry::AssetConfig;
use crate::state::{CollateralVaultAuthority, State};
use crate::utils::token_utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

/// Event emitted when matured redemption requests are settled
#[event]
pub struct TokensClaimedEvent {
    /// The claiming user
    pub user: Pubkey,
    /// Collateral asset claimed
    pub asset: Pubkey,
    /// Number of requests settled in this call
    pub requests_settled: u64,
    /// Sum of nominal amounts of the settled requests
    pub amount_requested: u64,
    /// Coverage-adjusted collateral actually transferred
    pub amount_claimed: u64,
}

/// Account structure for claiming matured redemption requests
///
/// The request accounts themselves are passed as `remaining_accounts`, in
/// queue order starting exactly at the cursor; each address is re-derived and
/// checked, so the walk cannot skip ahead or reorder. Claims work for removed
/// assets: existing obligations stay honorable.
#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    /// Program state account
    #[account(seeds = [seeds::STATE], bump = state.bump)]
    pub state: Box<Account<'info, State>>,

    /// Registry entry of the asset; `removed` is deliberately unconstrained
    #[account(
        mut,
        seeds = [seeds::ASSET_CONFIG, collateral_mint.key().as_ref()],
        bump = asset_config.bump
    )]
    pub asset_config: Box<Account<'info, AssetConfig>>,

    /// Coverage checkpoint series pinning each request's payout ratio
    #[account(seeds = [seeds::COVERAGE_TRACKER], bump = coverage_tracker.bump)]
    pub coverage_tracker: Box<Account<'info, CoverageTracker>>,

    /// The caller's per-asset queue cursor
    #[account(
        mut,
        seeds = [
            seeds::REDEMPTION_QUEUE,
            user.key().as_ref(),
            collateral_mint.key().as_ref()
        ],
        bump = queue.bump
    )]
    pub queue: Box<Account<'info, RedemptionQueue>>,

    /// Program-derived authority owning the collateral vault accounts
    #[account(
        seeds = [seeds::COLLATERAL_VAULT_AUTHORITY],
        bump = vault_authority.bump
    )]
    pub vault_authority: Box<Account<'info, CollateralVaultAuthority>>,

    /// The collateral mint being claimed
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault token account for the asset (source of the payout)
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Caller's collateral token account (destination of the payout)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = collateral_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The claiming user
    #[account(mut)]
    pub user: Signer<'info>,

    /// Token program interface for the collateral transfer
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program for automatic token account creation
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Claims everything currently claimable for (caller, asset).
///
/// Walks the FIFO queue from `first_unclaimed_index` through the request
/// accounts supplied as `remaining_accounts`:
/// - Each request's payout is its nominal amount scaled by the coverage ratio
///   in effect at its maturation timestamp (floor rounding)
/// - The walk stops at the first unmatured request; requests are settled
///   whole, in order, with no skipping
/// - `pending_claims` decreases by the full nominal sum, not the haircut sum:
///   the coverage shortfall is permanently absorbed, never re-queued
///
/// Fails with `NoTokensClaimable` when nothing matured, and with
/// `InsufficientCollateral` when the vault cannot fund the payout (a hard
/// backstop that the coverage-ratio mechanism should normally prevent).
///
/// # Events
/// * `TokensClaimedEvent` - Emitted with nominal and coverage-adjusted totals
pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp as u64;
    let user_key = ctx.accounts.user.key();
    let mint_key = ctx.accounts.collateral_mint.key();
    let queue = &mut ctx.accounts.queue;

    // Collect the pending prefix of the queue from the supplied accounts.
    // Strict FIFO: the account at each position must be the request PDA for
    // exactly that queue index.
    let mut pending: Vec<Account<RedemptionRequest>> = Vec::new();
    for (offset, request_info) in ctx.remaining_accounts.iter().enumerate() {
        let index = queue
            .first_unclaimed_index
            .checked_add(offset as u64)
            .ok_or(ClaimTokensErrorCode::MathOverflow)?;
        if index >= queue.next_index {
            break;
        }

        let (expected, _) = Pubkey::find_program_address(
            &[
                seeds::REDEMPTION_REQUEST,
                user_key.as_ref(),
                mint_key.as_ref(),
                &index.to_le_bytes(),
            ],
            &crate::ID,
        );
        require_keys_eq!(
            request_info.key(),
            expected,
            ClaimTokensErrorCode::RequestAccountMismatch
        );

        pending.push(Account::try_from(request_info)?);
    }

    let requests: Vec<&RedemptionRequest> = pending.iter().map(|request| &**request).collect();
    let plan = plan_settlement(&requests, &ctx.accounts.coverage_tracker, now)?;
    let requests_settled = plan.requests_settled();
    let amount_requested = plan.amount_requested;
    let amount_being_claimed = plan.amount_claimed;

    require!(requests_settled > 0, ClaimTokensErrorCode::NoTokensClaimable);
    require!(
        amount_being_claimed <= ctx.accounts.vault_token_account.amount,
        ClaimTokensErrorCode::InsufficientCollateral
    );

    for (request, payable) in pending.iter_mut().zip(plan.payouts.iter()) {
        request.claimed = *payable;
        request.exit(&crate::ID)?;
    }

    if amount_being_claimed > 0 {
        let vault_authority_seeds = &[
            seeds::COLLATERAL_VAULT_AUTHORITY,
            &[ctx.accounts.vault_authority.bump],
        ];
        let signer_seeds = &[&vault_authority_seeds[..]];
        transfer_tokens(
            &ctx.accounts.token_program,
            &ctx.accounts.collateral_mint,
            &ctx.accounts.vault_token_account,
            &ctx.accounts.user_token_account,
            &ctx.accounts.vault_authority.to_account_info(),
            Some(signer_seeds),
            amount_being_claimed,
        )?;
    }

    queue.first_unclaimed_index = queue
        .first_unclaimed_index
        .checked_add(requests_settled)
        .ok_or(ClaimTokensErrorCode::MathOverflow)?;

    // The pending-claims ledger releases the full nominal obligation.
    let asset_config = &mut ctx.accounts.asset_config;
    asset_config.pending_claims = asset_config
        .pending_claims
        .checked_sub(amount_requested)
        .ok_or(ClaimTokensErrorCode::MathOverflow)?;

    msg!(
        "Claim settled: user={}, asset={}, requests={}, requested={}, paid={}",
        user_key,
        mint_key,
        requests_settled,
        amount_requested,
        amount_being_claimed
    );
    emit!(TokensClaimedEvent {
        user: user_key,
        asset: mint_key,
        requests_settled,
        amount_requested,
        amount_claimed: amount_being_claimed,
    });

    Ok(())
}

/// Error codes for claim processing
#[error_code]
pub enum ClaimTokensErrorCode {
    /// Nothing matured at the time of the call
    #[msg("No tokens claimable")]
    NoTokensClaimable,

    /// A supplied request account is not the PDA for the expected queue index
    #[msg("Request account does not match the expected queue position")]
    RequestAccountMismatch,

    /// The vault cannot fund the coverage-adjusted payout
    #[msg("Insufficient collateral in the vault")]
    InsufficientCollateral,

    /// Arithmetic overflow occurred
    #[msg("Math overflow")]
    MathOverflow,
}
