use crate::constants::{seeds, DEFAULT_MAX_PRICE_AGE, ONE};
use crate::state::State;
use anchor_lang::prelude::*;

/// Error codes for the initialize instruction.
#[error_code]
pub enum InitializeErrorCode {
    /// Error when attempting to initialize when boss is already set.
    BossAlreadySet,
    /// Tax rate exceeds 100%.
    #[msg("Tax rate must not exceed 1e18 (100%)")]
    InvalidTaxRate,
}

/// Account structure for initializing the program state.
///
/// This struct defines the accounts required to set up the program's global
/// state, including the boss's public key and the economic parameters.
///
/// # Preconditions
/// - The `state` account must not exist prior to execution; it will be initialized here.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The program state account, initialized with the boss's public key.
    ///
    /// # Note
    /// - Space is allocated as `8 + State::INIT_SPACE` bytes, where 8 bytes are for the discriminator.
    /// - Seeded with `"state"` and a bump for PDA derivation.
    #[account(
        init,
        payer = boss,
        space = 8 + State::INIT_SPACE,
        seeds = [seeds::STATE],
        bump
    )]
    pub state: Account<'info, State>,

    /// The signer funding and authorizing the state initialization, becomes the boss.
    #[account(mut)]
    pub boss: Signer<'info>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Initializes the program state.
///
/// Sets the boss as the initial holder of every role (admin, custodian,
/// whitelister, rebase manager, fee collector) and stores the economic
/// parameters. Role holders are rotated afterwards through the dedicated
/// `set_*` instructions.
///
/// # Arguments
/// - `ctx`: Context containing the accounts to initialize the state.
/// - `claim_delay`: Seconds between a redemption request and its claimability.
/// - `tax_rate`: Fraction of each rebase increase minted to the fee collector (1e18 = 100%).
///
/// # Returns
/// A `Result` indicating success or failure.
pub fn initialize(ctx: Context<Initialize>, claim_delay: u64, tax_rate: u128) -> Result<()> {
    let state = &mut ctx.accounts.state;
    if state.boss != Pubkey::default() {
        return err!(InitializeErrorCode::BossAlreadySet);
    }
    require!(tax_rate <= ONE, InitializeErrorCode::InvalidTaxRate);

    let boss = ctx.accounts.boss.key();
    state.boss = boss;
    state.proposed_boss = Pubkey::default();
    state.admin = boss;
    state.custodian = boss;
    state.whitelister = boss;
    state.rebase_manager = boss;
    state.fee_collector = boss;
    state.claim_delay = claim_delay;
    state.tax_rate = tax_rate;
    state.max_price_age = DEFAULT_MAX_PRICE_AGE;
    state.is_killed = false;
    state.bump = ctx.bumps.state;

    msg!(
        "State initialized: boss={}, claim_delay={}s, tax_rate={}",
        boss,
        claim_delay,
        tax_rate
    );

    Ok(())
}
