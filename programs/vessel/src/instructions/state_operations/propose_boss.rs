use crate::constants::seeds;
use crate::state::State;
use anchor_lang::prelude::*;

/// Error codes for the propose_boss instruction
#[error_code]
pub enum ProposeBossErrorCode {
    /// The default address can never hold the boss role
    InvalidBossAddress,
}

/// Event emitted when a successor boss is nominated
#[event]
pub struct BossProposedEvent {
    /// Boss at the time of the nomination
    pub current_boss: Pubkey,
    /// Account nominated to take over
    pub proposed_boss: Pubkey,
}

/// Account structure for nominating a successor boss
#[derive(Accounts)]
pub struct ProposeBoss<'info> {
    /// Program state account; `has_one` ties the signer to the stored boss
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        has_one = boss
    )]
    pub state: Account<'info, State>,

    /// The current boss nominating a successor
    pub boss: Signer<'info>,
}

/// Nominates a successor for the boss role.
///
/// Ownership moves in two steps so a typoed address cannot brick the program:
/// the boss records a nominee here, and the nominee claims the role by signing
/// `accept_boss`. A later nomination simply overwrites a pending one.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_boss` - The account nominated to receive boss authority
pub fn propose_boss(ctx: Context<ProposeBoss>, new_boss: Pubkey) -> Result<()> {
    require!(
        new_boss != Pubkey::default(),
        ProposeBossErrorCode::InvalidBossAddress
    );

    ctx.accounts.state.proposed_boss = new_boss;

    msg!(
        "Boss succession proposed: {} -> {}",
        ctx.accounts.boss.key(),
        new_boss
    );
    emit!(BossProposedEvent {
        current_boss: ctx.accounts.boss.key(),
        proposed_boss: new_boss
    });

    Ok(())
}
