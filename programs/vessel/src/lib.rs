use anchor_lang::prelude::*;
use instructions::*;

// Program ID declaration
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod instructions;
pub mod state;
pub mod utils;

/// The main program module for the Vessel protocol.
///
/// This module defines the entry points for all program instructions. Vessel is a
/// collateral-backed stable token: users deposit supported collateral assets and
/// receive a yield-bearing, rebasing token priced by per-asset oracle adapters.
/// Redemptions go through a FIFO queue with a configurable maturation delay, and
/// payouts are scaled by a coverage ratio pinned at each request's maturation time.
///
/// Core functionalities include:
/// - Minting against whitelisted collateral at oracle prices (`mint_tokens`).
/// - Yield distribution through rebase index updates with a tax siphon
///   (`set_rebase_index`), with per-holder opt-out (`disable_rebase`).
/// - Time-locked FIFO redemptions (`request_tokens`, `claim_tokens`).
/// - Custodial sweep of collateral not reserved for pending claims
///   (`withdraw_funds`).
/// - Role administration under a boss/admin split with a two-step boss transfer.
///
/// # Security
/// - Access controls are enforced per instruction; treasury-sensitive settings
///   (tax rate, custodian, fee collector) are boss-only.
/// - PDA accounts are used for all program state and vault authorities.
/// - Events are emitted for significant actions for off-chain traceability.
#[program]
pub mod vessel {
    use super::*;

    /// Initializes the program state.
    ///
    /// Delegates to `initialization::initialize`.
    /// All roles start assigned to the boss and are reassigned afterwards.
    ///
    /// # Arguments
    /// - `ctx`: Context for `Initialize`.
    /// - `claim_delay`: Seconds before a redemption request matures.
    /// - `tax_rate`: 1e18-scaled fraction of rebase gains diverted to the fee collector.
    pub fn initialize(ctx: Context<Initialize>, claim_delay: u64, tax_rate: u128) -> Result<()> {
        initialization::initialize(ctx, claim_delay, tax_rate)
    }

    pub fn initialize_rebase_ledger(ctx: Context<InitializeRebaseLedger>) -> Result<()> {
        initialization::initialize_rebase_ledger(ctx)
    }

    pub fn initialize_coverage_tracker(ctx: Context<InitializeCoverageTracker>) -> Result<()> {
        initialization::initialize_coverage_tracker(ctx)
    }

    pub fn initialize_vault_authority(ctx: Context<InitializeVaultAuthority>) -> Result<()> {
        initialization::initialize_vault_authority(ctx)
    }

    /// Registers a collateral asset with its oracle adapter.
    ///
    /// Delegates to `registry::add_supported_asset`.
    /// Fails if the asset was ever registered before; use `restore_asset` for
    /// previously removed assets. Only the admin can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `AddSupportedAsset`.
    pub fn add_supported_asset(ctx: Context<AddSupportedAsset>) -> Result<()> {
        registry::add_supported_asset(ctx)
    }

    /// Marks a collateral asset as removed.
    ///
    /// Delegates to `registry::remove_supported_asset`.
    /// New mints and redemption requests stop; existing claims and custodial
    /// withdrawals keep working. Only the admin can call this instruction.
    pub fn remove_supported_asset(ctx: Context<RemoveSupportedAsset>) -> Result<()> {
        registry::remove_supported_asset(ctx)
    }

    /// Restores a previously removed collateral asset.
    ///
    /// Delegates to `registry::restore_asset`.
    pub fn restore_asset(ctx: Context<RestoreAsset>) -> Result<()> {
        registry::restore_asset(ctx)
    }

    /// Points a collateral asset at a different oracle adapter.
    ///
    /// Delegates to `registry::modify_oracle_for_asset`.
    /// The new adapter must serve the same collateral mint.
    pub fn modify_oracle_for_asset(ctx: Context<ModifyOracleForAsset>) -> Result<()> {
        registry::modify_oracle_for_asset(ctx)
    }

    /// Creates an oracle adapter for a collateral asset.
    ///
    /// Delegates to `oracle::initialize_oracle_adapter`.
    /// Only the admin can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `InitializeOracleAdapter`.
    /// - `id`: Adapter id, part of the PDA derivation.
    /// - `authority`: Account permitted to post price updates.
    /// - `initial_price`: Starting price with 1e18 precision.
    pub fn initialize_oracle_adapter(
        ctx: Context<InitializeOracleAdapter>,
        id: u64,
        authority: Pubkey,
        initial_price: u128,
    ) -> Result<()> {
        oracle::initialize_oracle_adapter(ctx, id, authority, initial_price)
    }

    /// Posts a new price to an oracle adapter.
    ///
    /// Delegates to `oracle::post_price`.
    /// Only the adapter's authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `PostPrice`.
    /// - `price`: New price with 1e18 precision, must be nonzero.
    pub fn post_price(ctx: Context<PostPrice>, price: u128) -> Result<()> {
        oracle::post_price(ctx, price)
    }

    /// Mints stable tokens against deposited collateral.
    ///
    /// Delegates to `minting::mint_tokens`.
    /// The deposit is measured by vault balance delta, valued at the oracle
    /// price, and credited to the caller's rebase ledger position. The caller
    /// must be whitelisted and the oracle price fresh.
    ///
    /// # Arguments
    /// - `ctx`: Context for `MintTokens`.
    /// - `amount_in`: Collateral to deposit, in base units.
    /// - `min_amount_out`: Minimum stable tokens acceptable, slippage guard.
    pub fn mint_tokens(
        ctx: Context<MintTokens>,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<()> {
        minting::mint_tokens(ctx, amount_in, min_amount_out)
    }

    /// Burns stable tokens and enqueues a time-locked redemption request.
    ///
    /// Delegates to `redemption::request_tokens`.
    /// The collateral amount is fixed at request time from the current oracle
    /// price; maturation happens `claim_delay` seconds later.
    ///
    /// # Arguments
    /// - `ctx`: Context for `RequestTokens`.
    /// - `token_amount`: Stable tokens to burn, in base units.
    /// - `index`: Expected queue position, must equal the queue's `next_index`.
    pub fn request_tokens(
        ctx: Context<RequestTokens>,
        token_amount: u64,
        index: u64,
    ) -> Result<()> {
        redemption::request_tokens(ctx, token_amount, index)
    }

    /// Claims all matured redemption requests for the caller and asset.
    ///
    /// Delegates to `redemption::claim_tokens`.
    /// Request accounts are supplied as remaining accounts in queue order;
    /// payouts are scaled by the coverage ratio at each request's maturation.
    ///
    /// # Arguments
    /// - `ctx`: Context for `ClaimTokens`.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        redemption::claim_tokens(ctx)
    }

    /// Postpones a pending redemption request's maturation.
    ///
    /// Delegates to `redemption::extend_claim_timestamp`.
    /// Only the admin can call this instruction, and only to a strictly later
    /// timestamp.
    ///
    /// # Arguments
    /// - `ctx`: Context for `ExtendClaimTimestamp`.
    /// - `index`: Queue index of the request to postpone.
    /// - `new_claimable_after`: New maturation timestamp.
    pub fn extend_claim_timestamp(
        ctx: Context<ExtendClaimTimestamp>,
        index: u64,
        new_claimable_after: u64,
    ) -> Result<()> {
        redemption::extend_claim_timestamp(ctx, index, new_claimable_after)
    }

    /// Records a new coverage ratio checkpoint.
    ///
    /// Delegates to `coverage::set_coverage_ratio`.
    /// Checkpoints are append-only and never retroactive: requests that
    /// matured earlier keep the ratio that was in effect at their maturation.
    ///
    /// # Arguments
    /// - `ctx`: Context for `SetCoverageRatio`.
    /// - `ratio`: 1e18-scaled ratio in (0, 1e18].
    pub fn set_coverage_ratio(ctx: Context<SetCoverageRatio>, ratio: u128) -> Result<()> {
        coverage::set_coverage_ratio(ctx, ratio)
    }

    /// Drops checkpoint history older than the one governing `watermark`.
    ///
    /// Delegates to `coverage::compact_coverage_checkpoints`. The admin
    /// asserts that no unsettled request matures before the watermark.
    pub fn compact_coverage_checkpoints(
        ctx: Context<CompactCoverageCheckpoints>,
        watermark: u64,
    ) -> Result<()> {
        coverage::compact_coverage_checkpoints(ctx, watermark)
    }

    /// Applies a rebase index update, diverting taxed gains to the fee collector.
    ///
    /// Delegates to `rebase::set_rebase_index`.
    /// Only the rebase manager can call this instruction. The index applied on
    /// chain is tax-adjusted downward so that rebasing holders receive the
    /// net gain while the fee collector is minted the tax.
    ///
    /// # Arguments
    /// - `ctx`: Context for `SetRebaseIndex`.
    /// - `new_index`: Requested gross index, 1e18-scaled, monotonic.
    /// - `nonce`: Must be exactly one above the ledger's stored nonce.
    pub fn set_rebase_index(
        ctx: Context<SetRebaseIndex>,
        new_index: u128,
        nonce: u64,
    ) -> Result<()> {
        rebase::set_rebase_index(ctx, new_index, nonce)
    }

    /// Opts the caller out of (or back into) rebasing.
    ///
    /// Delegates to `rebase::disable_rebase`.
    /// An opted-out holder's balance is frozen at its current value and stops
    /// tracking index updates until opted back in.
    ///
    /// # Arguments
    /// - `ctx`: Context for `DisableRebase`.
    /// - `disable`: True to opt out, false to opt back in.
    pub fn disable_rebase(ctx: Context<DisableRebase>, disable: bool) -> Result<()> {
        rebase::disable_rebase(ctx, disable)
    }

    /// Sweeps surplus collateral to the custodian.
    ///
    /// Delegates to `custody::withdraw_funds`.
    /// Only collateral beyond the asset's pending claims can leave the vault.
    /// Only the custodian can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `WithdrawFunds`.
    /// - `amount`: Collateral to sweep, in base units.
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        custody::withdraw_funds(ctx, amount)
    }

    /// Sets a user's whitelist status for minting.
    ///
    /// Delegates to `whitelist::set_whitelist_status`.
    /// Only the whitelister can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `SetWhitelistStatus`.
    /// - `user`: The user whose minting access is being set.
    /// - `whitelisted`: Whether the user may mint.
    pub fn set_whitelist_status(
        ctx: Context<SetWhitelistStatus>,
        user: Pubkey,
        whitelisted: bool,
    ) -> Result<()> {
        whitelist::set_whitelist_status(ctx, user, whitelisted)
    }

    /// Proposes a new boss, step one of the two-step ownership transfer.
    ///
    /// Delegates to `state_operations::propose_boss`.
    pub fn propose_boss(ctx: Context<ProposeBoss>, new_boss: Pubkey) -> Result<()> {
        state_operations::propose_boss(ctx, new_boss)
    }

    /// Completes the boss transfer, signed by the proposed boss.
    ///
    /// Delegates to `state_operations::accept_boss`.
    pub fn accept_boss(ctx: Context<AcceptBoss>) -> Result<()> {
        state_operations::accept_boss(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        state_operations::set_admin(ctx, new_admin)
    }

    pub fn set_custodian(ctx: Context<SetCustodian>, new_custodian: Pubkey) -> Result<()> {
        state_operations::set_custodian(ctx, new_custodian)
    }

    pub fn set_whitelister(ctx: Context<SetWhitelister>, new_whitelister: Pubkey) -> Result<()> {
        state_operations::set_whitelister(ctx, new_whitelister)
    }

    pub fn set_rebase_manager(
        ctx: Context<SetRebaseManager>,
        new_rebase_manager: Pubkey,
    ) -> Result<()> {
        state_operations::set_rebase_manager(ctx, new_rebase_manager)
    }

    pub fn set_fee_collector(
        ctx: Context<SetFeeCollector>,
        new_fee_collector: Pubkey,
    ) -> Result<()> {
        state_operations::set_fee_collector(ctx, new_fee_collector)
    }

    pub fn set_claim_delay(ctx: Context<SetClaimDelay>, new_claim_delay: u64) -> Result<()> {
        state_operations::set_claim_delay(ctx, new_claim_delay)
    }

    /// Updates the rebase tax rate, boss-only.
    ///
    /// Delegates to `state_operations::set_tax_rate`.
    pub fn set_tax_rate(ctx: Context<SetTaxRate>, new_tax_rate: u128) -> Result<()> {
        state_operations::set_tax_rate(ctx, new_tax_rate)
    }

    pub fn set_max_price_age(ctx: Context<SetMaxPriceAge>, new_max_price_age: u64) -> Result<()> {
        state_operations::set_max_price_age(ctx, new_max_price_age)
    }

    /// Controls the emergency kill switch.
    ///
    /// Delegates to `state_operations::set_kill_switch`.
    /// Boss or admin can enable; only the boss can disable. When enabled,
    /// mints and new redemption requests halt while claims stay open.
    ///
    /// # Arguments
    /// - `ctx`: Context for `SetKillSwitch`.
    /// - `enable`: Whether to enable or disable the kill switch.
    pub fn set_kill_switch(ctx: Context<SetKillSwitch>, enable: bool) -> Result<()> {
        state_operations::set_kill_switch(ctx, enable)
    }

    /// Returns a holder's current stable token balance.
    ///
    /// Delegates to `market_info::get_balance`.
    pub fn get_balance(ctx: Context<GetBalance>, owner: Pubkey) -> Result<u64> {
        market_info::get_balance(ctx, owner)
    }

    /// Returns the current rebase index.
    ///
    /// Delegates to `market_info::get_rebase_index`.
    pub fn get_rebase_index(ctx: Context<GetRebaseIndex>) -> Result<u128> {
        market_info::get_rebase_index(ctx)
    }

    /// Returns the collateral a user could claim for an asset right now.
    ///
    /// Delegates to `market_info::get_claimable_amount`.
    /// Request accounts are supplied as remaining accounts in queue order,
    /// exactly as for `claim_tokens`; nothing is mutated.
    pub fn get_claimable_amount(
        ctx: Context<GetClaimableAmount>,
        user: Pubkey,
        asset_mint: Pubkey,
    ) -> Result<u64> {
        market_info::get_claimable_amount(ctx, user, asset_mint)
    }
}
