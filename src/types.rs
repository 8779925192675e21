multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Phase — derived from block time, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalPhase {
    /// Before the proposal deadline. New stakes accepted.
    Open,
    /// Deadline passed. Existing stakes keep vesting and claiming.
    Closed,
}

// ============================================================
// Stake — one deposit, the unit of entitlement accrual
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Stake<M: ManagedTypeApi> {
    /// EGLD deposited, held in ledger custody.
    pub principal: BigUint<M>,
    /// Staker-chosen lock in seconds. Claims are blocked until it elapses.
    pub lock_period: u64,
    /// Block timestamp of the deposit. Vesting starts here.
    pub stake_timestamp: u64,
    /// Incentive tokens already paid out for this stake. Only ever grows.
    pub claimed_amount: BigUint<M>,
}
