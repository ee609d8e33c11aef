use crate::constants::seeds;
use crate::instructions::registry::AssetConfig;
use crate::state::{CollateralVaultAuthority, State};
use crate::utils::token_utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

/// Event emitted when the custodian sweeps surplus collateral
#[event]
pub struct FundsWithdrawnEvent {
    /// Collateral asset withdrawn
    pub asset: Pubkey,
    /// Amount swept to the custodian, in base units
    pub amount: u64,
    /// Collateral still reserved for pending claims
    pub reserved: u64,
}

/// Account structure for the custodial surplus sweep
///
/// Only collateral beyond what pending claims reserve can leave the vault;
/// works for removed assets too.
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    /// Program state account containing the custodian authorization
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = custodian.key() == state.custodian @ WithdrawFundsErrorCode::Unauthorized
    )]
    pub state: Box<Account<'info, State>>,

    /// Registry entry of the asset; `removed` is deliberately unconstrained
    #[account(
        seeds = [seeds::ASSET_CONFIG, collateral_mint.key().as_ref()],
        bump = asset_config.bump
    )]
    pub asset_config: Box<Account<'info, AssetConfig>>,

    /// Program-derived authority owning the collateral vault accounts
    #[account(
        seeds = [seeds::COLLATERAL_VAULT_AUTHORITY],
        bump = vault_authority.bump
    )]
    pub vault_authority: Box<Account<'info, CollateralVaultAuthority>>,

    /// The collateral mint being swept
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault token account for the asset (source of the sweep)
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Custodian's token account (destination of the sweep)
    #[account(
        init_if_needed,
        payer = custodian,
        associated_token::mint = collateral_mint,
        associated_token::authority = custodian,
        associated_token::token_program = token_program
    )]
    pub custodian_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The signer authorizing the sweep, must be the custodian
    #[account(mut)]
    pub custodian: Signer<'info>,

    /// Token program interface for the collateral transfer
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program for automatic token account creation
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Withdraws excess collateral to the custodian.
///
/// The withdrawable surplus is the vault balance minus the asset's pending
/// claims, floored at zero: collateral reserved for already-requested (even
/// unmatured) redemptions can never be custodied away.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - Collateral to sweep, in base units
pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    let required = ctx.accounts.asset_config.pending_claims;
    let withdrawable = ctx
        .accounts
        .vault_token_account
        .amount
        .saturating_sub(required);
    require!(withdrawable > 0, WithdrawFundsErrorCode::NothingWithdrawable);
    require!(
        amount > 0 && amount <= withdrawable,
        WithdrawFundsErrorCode::InsufficientWithdrawable
    );

    let vault_authority_seeds = &[
        seeds::COLLATERAL_VAULT_AUTHORITY,
        &[ctx.accounts.vault_authority.bump],
    ];
    let signer_seeds = &[&vault_authority_seeds[..]];
    transfer_tokens(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_mint,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.custodian_token_account,
        &ctx.accounts.vault_authority.to_account_info(),
        Some(signer_seeds),
        amount,
    )?;

    msg!(
        "Custodian withdrew {} of {} ({} reserved for pending claims)",
        amount,
        ctx.accounts.collateral_mint.key(),
        required
    );
    emit!(FundsWithdrawnEvent {
        asset: ctx.accounts.collateral_mint.key(),
        amount,
        reserved: required,
    });

    Ok(())
}

#[error_code]
pub enum WithdrawFundsErrorCode {
    #[msg("Unauthorized: custodian signature required")]
    Unauthorized,

    #[msg("Nothing withdrawable: vault balance does not exceed pending claims")]
    NothingWithdrawable,

    #[msg("Requested amount exceeds the withdrawable surplus")]
    InsufficientWithdrawable,
}
