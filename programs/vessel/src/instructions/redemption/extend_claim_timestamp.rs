use crate::constants::seeds;
use crate::instructions::redemption::{RedemptionQueue, RedemptionRequest};
use crate::state::State;
use anchor_lang::prelude::*;

#[event]
pub struct ClaimTimestampExtendedEvent {
    pub user: Pubkey,
    pub asset: Pubkey,
    pub index: u64,
    pub old_claimable_after: u64,
    pub new_claimable_after: u64,
}

/// Account structure for pushing a request's maturation further into the future.
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct ExtendClaimTimestamp<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ ExtendClaimTimestampErrorCode::Unauthorized
    )]
    pub state: Box<Account<'info, State>>,

    /// The owner's per-asset queue; used to reject already-settled requests
    #[account(
        seeds = [
            seeds::REDEMPTION_QUEUE,
            user.key().as_ref(),
            redemption_request.asset_mint.as_ref()
        ],
        bump = queue.bump
    )]
    pub queue: Box<Account<'info, RedemptionQueue>>,

    /// The request being delayed
    #[account(
        mut,
        seeds = [
            seeds::REDEMPTION_REQUEST,
            user.key().as_ref(),
            redemption_request.asset_mint.as_ref(),
            index.to_le_bytes().as_ref()
        ],
        bump = redemption_request.bump
    )]
    pub redemption_request: Box<Account<'info, RedemptionRequest>>,

    /// Owner of the request
    /// CHECK: Validated through the request PDA derivation
    pub user: UncheckedAccount<'info>,

    /// The signer authorizing the extension, must be the admin
    pub admin: Signer<'info>,
}

/// Pushes a specific request's `claimable_after` strictly later, e.g. pending
/// manual review. FIFO ordering is unaffected: the request only moves further
/// into the future, and claims still walk the queue strictly in order.
pub fn extend_claim_timestamp(
    ctx: Context<ExtendClaimTimestamp>,
    index: u64,
    new_claimable_after: u64,
) -> Result<()> {
    let request = &mut ctx.accounts.redemption_request;
    require!(
        index >= ctx.accounts.queue.first_unclaimed_index,
        ExtendClaimTimestampErrorCode::AlreadySettled
    );
    require!(
        new_claimable_after > request.claimable_after,
        ExtendClaimTimestampErrorCode::TimestampNotLater
    );

    let old_claimable_after = request.claimable_after;
    request.claimable_after = new_claimable_after;

    msg!(
        "Claim timestamp extended: user={}, asset={}, index={}, {} -> {}",
        request.user,
        request.asset_mint,
        index,
        old_claimable_after,
        new_claimable_after
    );
    emit!(ClaimTimestampExtendedEvent {
        user: request.user,
        asset: request.asset_mint,
        index,
        old_claimable_after,
        new_claimable_after,
    });

    Ok(())
}

#[error_code]
pub enum ExtendClaimTimestampErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Request has already been settled")]
    AlreadySettled,

    #[msg("New timestamp must be strictly later than the current one")]
    TimestampNotLater,
}
