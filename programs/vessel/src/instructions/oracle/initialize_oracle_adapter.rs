use crate::constants::seeds;
use crate::instructions::oracle::OracleAdapter;
use crate::state::State;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

#[event]
pub struct OracleAdapterInitializedEvent {
    pub adapter: Pubkey,
    pub asset_mint: Pubkey,
    pub authority: Pubkey,
    pub initial_price: u128,
}

/// Account structure for creating an oracle adapter.
///
/// Adapters are seeded with an `id` so an asset can have several adapters over
/// its lifetime; the registry entry points at exactly one of them and is
/// re-pointed via `modify_oracle_for_asset`.
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct InitializeOracleAdapter<'info> {
    /// Program state account containing the admin authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = admin.key() == state.admin @ InitializeOracleAdapterErrorCode::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// The adapter account, created here
    #[account(
        init,
        payer = admin,
        space = 8 + OracleAdapter::INIT_SPACE,
        seeds = [
            seeds::ORACLE_ADAPTER,
            collateral_mint.key().as_ref(),
            id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub oracle_adapter: Account<'info, OracleAdapter>,

    /// The collateral mint this adapter prices
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// The signer authorizing the creation, must be the admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Solana System program for account creation and rent payment
    pub system_program: Program<'info, System>,
}

/// Creates an oracle adapter for a collateral asset.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `id` - Adapter id, part of the PDA derivation
/// * `authority` - Account permitted to post price updates
/// * `initial_price` - Starting price with 1e18 precision, must be nonzero
pub fn initialize_oracle_adapter(
    ctx: Context<InitializeOracleAdapter>,
    _id: u64,
    authority: Pubkey,
    initial_price: u128,
) -> Result<()> {
    require!(
        initial_price > 0,
        InitializeOracleAdapterErrorCode::InvalidPrice
    );

    let adapter = &mut ctx.accounts.oracle_adapter;
    adapter.asset_mint = ctx.accounts.collateral_mint.key();
    adapter.authority = authority;
    adapter.price = initial_price;
    adapter.last_updated = Clock::get()?.unix_timestamp;
    adapter.bump = ctx.bumps.oracle_adapter;

    emit!(OracleAdapterInitializedEvent {
        adapter: adapter.key(),
        asset_mint: adapter.asset_mint,
        authority,
        initial_price,
    });

    Ok(())
}

#[error_code]
pub enum InitializeOracleAdapterErrorCode {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Initial price must be nonzero")]
    InvalidPrice,
}
