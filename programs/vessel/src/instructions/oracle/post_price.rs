use crate::instructions::oracle::OracleAdapter;
use anchor_lang::prelude::*;

#[event]
pub struct PricePostedEvent {
    pub adapter: Pubkey,
    pub asset_mint: Pubkey,
    pub price: u128,
    pub timestamp: i64,
}

/// Account structure for posting a price to an oracle adapter.
#[derive(Accounts)]
pub struct PostPrice<'info> {
    /// The adapter being updated
    #[account(mut, has_one = authority @ PostPriceErrorCode::Unauthorized)]
    pub oracle_adapter: Account<'info, OracleAdapter>,

    /// The adapter's price authority
    pub authority: Signer<'info>,
}

/// Posts a new price and refreshes the staleness clock.
pub fn post_price(ctx: Context<PostPrice>, price: u128) -> Result<()> {
    require!(price > 0, PostPriceErrorCode::InvalidPrice);

    let adapter = &mut ctx.accounts.oracle_adapter;
    adapter.price = price;
    adapter.last_updated = Clock::get()?.unix_timestamp;

    emit!(PricePostedEvent {
        adapter: adapter.key(),
        asset_mint: adapter.asset_mint,
        price,
        timestamp: adapter.last_updated,
    });

    Ok(())
}

#[error_code]
pub enum PostPriceErrorCode {
    #[msg("Unauthorized: oracle authority signature required")]
    Unauthorized,

    #[msg("Price must be nonzero")]
    InvalidPrice,
}
