use crate::constants::seeds;
use crate::instructions::coverage::CoverageTracker;
use crate::instructions::redemption::{plan_settlement, RedemptionQueue, RedemptionRequest};
use anchor_lang::prelude::*;

/// Event emitted when a claimable-amount query is completed
#[event]
pub struct GetClaimableAmountEvent {
    /// The queried user
    pub user: Pubkey,
    /// Collateral asset queried
    pub asset: Pubkey,
    /// Number of matured requests found
    pub matured_requests: u64,
    /// Coverage-adjusted collateral claimable right now
    pub claimable: u64,
}

/// Account structure for querying a user's currently claimable collateral
///
/// The request accounts are passed as `remaining_accounts` in queue order
/// starting at the cursor, exactly as for claiming; the walk here mutates
/// nothing.
#[derive(Accounts)]
#[instruction(user: Pubkey, asset_mint: Pubkey)]
pub struct GetClaimableAmount<'info> {
    /// Coverage checkpoint series pinning each request's payout ratio
    #[account(seeds = [seeds::COVERAGE_TRACKER], bump = coverage_tracker.bump)]
    pub coverage_tracker: Account<'info, CoverageTracker>,

    /// The user's per-asset queue cursor
    #[account(
        seeds = [
            seeds::REDEMPTION_QUEUE,
            user.as_ref(),
            asset_mint.as_ref()
        ],
        bump = queue.bump
    )]
    pub queue: Account<'info, RedemptionQueue>,
}

/// Returns the collateral a user could claim for an asset right now.
///
/// Walks the queue from `first_unclaimed_index`, stops at the first unmatured
/// request, and sums coverage-adjusted payouts without settling anything. The
/// result matches what a claim in the same slot would transfer.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `user` - The user whose queue is being inspected
/// * `asset_mint` - Collateral asset of the queue
pub fn get_claimable_amount(
    ctx: Context<GetClaimableAmount>,
    user: Pubkey,
    asset_mint: Pubkey,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp as u64;
    let queue = &ctx.accounts.queue;

    let mut pending: Vec<Account<RedemptionRequest>> = Vec::new();
    for (offset, request_info) in ctx.remaining_accounts.iter().enumerate() {
        let index = queue
            .first_unclaimed_index
            .checked_add(offset as u64)
            .ok_or(GetClaimableAmountErrorCode::MathOverflow)?;
        if index >= queue.next_index {
            break;
        }

        let (expected, _) = Pubkey::find_program_address(
            &[
                seeds::REDEMPTION_REQUEST,
                user.as_ref(),
                asset_mint.as_ref(),
                &index.to_le_bytes(),
            ],
            &crate::ID,
        );
        require_keys_eq!(
            request_info.key(),
            expected,
            GetClaimableAmountErrorCode::RequestAccountMismatch
        );

        pending.push(Account::try_from(request_info)?);
    }

    let requests: Vec<&RedemptionRequest> = pending.iter().map(|request| &**request).collect();
    let plan = plan_settlement(&requests, &ctx.accounts.coverage_tracker, now)?;
    let matured_requests = plan.requests_settled();
    let claimable = plan.amount_claimed;

    msg!(
        "Claimable Info - User: {}, Asset: {}, Matured: {}, Claimable: {}",
        user,
        asset_mint,
        matured_requests,
        claimable
    );
    emit!(GetClaimableAmountEvent {
        user,
        asset: asset_mint,
        matured_requests,
        claimable,
    });

    Ok(claimable)
}

/// Error codes for claimable-amount queries
#[error_code]
pub enum GetClaimableAmountErrorCode {
    /// A supplied request account is not the PDA for the expected queue index
    #[msg("Request account does not match the expected queue position")]
    RequestAccountMismatch,

    /// Arithmetic overflow occurred
    #[msg("Math overflow")]
    MathOverflow,
}
