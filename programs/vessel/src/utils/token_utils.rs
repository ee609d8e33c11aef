use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// Generic collateral transfer that handles both user-signed and PDA-signed moves.
///
/// Uses `transfer_checked` so the mint's decimals are validated by the token
/// program. Callers that need to defend against fee-on-transfer behavior must
/// reload the destination account and trust the observed balance delta, never
/// the nominal `amount`.
///
/// # Arguments
/// * `token_program` - Token program owning both accounts
/// * `mint` - Mint of the transferred asset
/// * `from_account` - Source token account
/// * `to_account` - Destination token account
/// * `authority` - Authority over the source account
/// * `signer_seeds` - PDA seeds for program-signed transfers (`None` for user-signed)
/// * `amount` - Amount of tokens to transfer, in base units
pub fn transfer_tokens<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    from_account: &InterfaceAccount<'info, TokenAccount>,
    to_account: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    signer_seeds: Option<&[&[&[u8]]]>,
    amount: u64,
) -> Result<()> {
    let transfer_accounts = TransferChecked {
        from: from_account.to_account_info(),
        mint: mint.to_account_info(),
        to: to_account.to_account_info(),
        authority: authority.to_account_info(),
    };

    let transfer_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(
            token_program.key(),
            transfer_accounts,
            seeds,
        ),
        None => CpiContext::new(token_program.key(), transfer_accounts),
    };

    token_interface::transfer_checked(transfer_ctx, amount, mint.decimals)
}
