#![no_std]

multiversx_sc::imports!();

pub mod proposal_proxy;
pub mod types;

use types::{ProposalPhase, Stake};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
const BPS_DENOMINATOR: u64 = 10_000;

/// Weight bonus for a full-distribution-period lock: +100% (10000 basis
/// points). Locks beyond the distribution period earn nothing extra.
const MAX_LOCK_BONUS_BPS: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenListingProposal {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        incentive_token: EgldOrEsdtTokenIdentifier,
        incentive_amount: BigUint,
        distribution_period: u64,
        proposal_deadline: u64,
        admin: ManagedAddress,
    ) {
        require!(
            incentive_amount > 0u64,
            "Incentive amount must be positive"
        );
        require!(
            distribution_period > 0,
            "Distribution period must be positive"
        );
        let now = self.blockchain().get_block_timestamp();
        require!(proposal_deadline > now, "Deadline must be in the future");

        self.incentive_token().set(&incentive_token);
        self.incentive_amount().set(&incentive_amount);
        self.distribution_period().set(distribution_period);
        self.proposal_deadline().set(proposal_deadline);
        self.admin().set(&admin);
        self.deployer().set(&self.blockchain().get_caller());
        self.total_staked().set(BigUint::zero());
        self.total_claimed().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fundIncentivePool
    // One-shot escrow of the full incentive pool. Only the
    // deployer (the factory) may fund, and only with exactly
    // the configured token and amount.
    // ========================================================

    #[payable("*")]
    #[endpoint(fundIncentivePool)]
    fn fund_incentive_pool(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.deployer().get(),
            "Only deployer can fund"
        );
        require!(!self.pool_funded().get(), "Pool already funded");

        let (token, _nonce, amount) = self.call_value().egld_or_single_esdt().into_tuple();
        require!(
            token == self.incentive_token().get(),
            "Wrong incentive token"
        );
        require!(
            amount == self.incentive_amount().get(),
            "Wrong incentive amount"
        );

        self.pool_funded().set(true);
        self.pool_funded_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: stakeOnProposal
    // The EGLD payment is the stake principal. The staker picks
    // the lock period; rewards for this stake cannot be claimed
    // before it elapses.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(stakeOnProposal)]
    fn stake_on_proposal(&self, lock_period: u64) {
        require!(self.pool_funded().get(), "Incentive pool not funded");

        let now = self.blockchain().get_block_timestamp();
        require!(
            now < self.proposal_deadline().get(),
            "Staking window closed"
        );

        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, "Stake amount must be positive");

        let caller = self.blockchain().get_caller();
        let stake = Stake {
            principal: amount.clone(),
            lock_period,
            stake_timestamp: now,
            claimed_amount: BigUint::zero(),
        };
        let weight = self.stake_weight(&stake);

        self.stakes(&caller).push(&stake);
        self.stakers().insert(caller.clone());
        self.total_staked().update(|t| *t += &amount);
        self.total_stake_weight().update(|w| *w += &weight);

        self.stake_event(&caller, &amount, lock_period, now);
    }

    // ========================================================
    // ENDPOINT: claimRewards
    // Pays every newly vested, previously unclaimed unit across
    // all of the caller's unlocked stakes, capped at the pool's
    // remaining balance. A claim that nets zero is rejected and
    // leaves no trace.
    // ========================================================

    #[endpoint(claimRewards)]
    fn claim_rewards(&self) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut remaining = self.remaining_pool();
        let mut payout = BigUint::zero();
        let stake_count = self.stakes(&caller).len();

        for i in 1..=stake_count {
            if remaining == 0u64 {
                break;
            }
            let mut stake = self.stakes(&caller).get(i);
            let claimable = self.claimable_amount(&stake, now);
            if claimable == 0u64 {
                continue;
            }

            // Last claimer bears the rounding loss: never pay past the pool.
            let paid = if claimable > remaining {
                remaining.clone()
            } else {
                claimable
            };

            stake.claimed_amount += &paid;
            self.stakes(&caller).set(i, &stake);
            remaining -= &paid;
            payout += &paid;
        }

        require!(payout > 0u64, "Nothing vested to claim");

        self.total_claimed().update(|t| *t += &payout);
        let token = self.incentive_token().get();
        self.send().direct(&caller, &token, 0, &payout);

        self.claim_event(&caller, &payout, now);
    }

    // ========================================================
    // ENDPOINT: sweepUnclaimed
    // Reserved admin capability. Only after every possible stake
    // has fully vested and every recorded lock has elapsed may
    // the admin recover what was never claimed.
    // ========================================================

    #[endpoint(sweepUnclaimed)]
    fn sweep_unclaimed(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), "Only admin can sweep");

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.expiry_timestamp(),
            "Proposal has not expired"
        );

        let remaining = self.remaining_pool();
        require!(remaining > 0u64, "Nothing to sweep");

        self.swept_amount().update(|s| *s += &remaining);
        let token = self.incentive_token().get();
        self.send().direct(&caller, &token, 0, &remaining);

        self.sweep_event(&caller, &remaining, now);
    }

    // ========================================================
    // INTERNAL: entitlement & vesting math
    // Entitlement is recomputed from the live registry on every
    // evaluation; new stakes dilute unclaimed entitlements until
    // the deadline closes entry.
    // ========================================================

    /// Weight of a stake: principal boosted by up to 100% for locking
    /// through the whole distribution period.
    fn stake_weight(&self, stake: &Stake<Self::Api>) -> BigUint {
        let period = self.distribution_period().get();
        let capped_lock = core::cmp::min(stake.lock_period, period);
        let bonus_bps = capped_lock * MAX_LOCK_BONUS_BPS / period;
        &stake.principal * (BPS_DENOMINATOR + bonus_bps)
    }

    /// Share of the fixed pool this stake is entitled to right now.
    /// Integer floor division keeps the sum of entitlements <= pool.
    fn entitled_amount(&self, stake: &Stake<Self::Api>) -> BigUint {
        let total_weight = self.total_stake_weight().get();
        if total_weight == 0u64 {
            return BigUint::zero();
        }
        let pool = self.incentive_amount().get();
        (pool * self.stake_weight(stake)) / total_weight
    }

    /// Linear vesting of the entitlement over the distribution period.
    fn vested_amount(&self, stake: &Stake<Self::Api>, now: u64) -> BigUint {
        if now <= stake.stake_timestamp {
            return BigUint::zero();
        }
        let entitled = self.entitled_amount(stake);
        let period = self.distribution_period().get();
        let elapsed = now - stake.stake_timestamp;
        if elapsed >= period {
            entitled
        } else {
            (entitled * elapsed) / period
        }
    }

    /// Newly claimable units: zero while the lock runs, otherwise the
    /// vested amount minus what was already paid. Dilution can leave
    /// claimed above vested for a while; the floor is zero, never a
    /// clawback.
    fn claimable_amount(&self, stake: &Stake<Self::Api>, now: u64) -> BigUint {
        if now < stake.stake_timestamp + stake.lock_period {
            return BigUint::zero();
        }
        let vested = self.vested_amount(stake, now);
        if vested > stake.claimed_amount {
            vested - &stake.claimed_amount
        } else {
            BigUint::zero()
        }
    }

    /// Pool units not yet claimed or swept.
    fn remaining_pool(&self) -> BigUint {
        let pool = self.incentive_amount().get();
        let distributed = &self.total_claimed().get() + &self.swept_amount().get();
        if pool > distributed {
            pool - distributed
        } else {
            BigUint::zero()
        }
    }

    /// The sweep gate: latest of (deadline + period) and, per recorded
    /// stake, full vesting plus full lock.
    fn expiry_timestamp(&self) -> u64 {
        let period = self.distribution_period().get();
        let mut expiry = self.proposal_deadline().get() + period;

        for staker in self.stakers().iter() {
            let count = self.stakes(&staker).len();
            for i in 1..=count {
                let stake = self.stakes(&staker).get(i);
                let stake_expiry =
                    stake.stake_timestamp + core::cmp::max(stake.lock_period, period);
                if stake_expiry > expiry {
                    expiry = stake_expiry;
                }
            }
        }
        expiry
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposalConfig)]
    fn get_proposal_config(
        &self,
    ) -> MultiValue5<EgldOrEsdtTokenIdentifier, BigUint, u64, u64, ManagedAddress> {
        (
            self.incentive_token().get(),
            self.incentive_amount().get(),
            self.distribution_period().get(),
            self.proposal_deadline().get(),
            self.admin().get(),
        )
            .into()
    }

    #[view(getLedgerStats)]
    fn get_ledger_stats(&self) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, u64> {
        let staker_count = self.stakers().len() as u64;
        (
            self.total_staked().get(),
            self.incentive_amount().get(),
            self.total_claimed().get(),
            self.swept_amount().get(),
            staker_count,
        )
            .into()
    }

    #[view(getStakes)]
    fn get_stakes(&self, staker: &ManagedAddress) -> MultiValueEncoded<Stake<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let count = self.stakes(staker).len();
        for i in 1..=count {
            result.push(self.stakes(staker).get(i));
        }
        result
    }

    #[view(getStakeCount)]
    fn get_stake_count(&self, staker: &ManagedAddress) -> u64 {
        self.stakes(staker).len() as u64
    }

    #[view(getStakers)]
    fn get_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.stakers().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, staker) in self.stakers().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(staker);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(getClaimableRewards)]
    fn get_claimable_rewards(&self, staker: &ManagedAddress) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut remaining = self.remaining_pool();
        let mut total = BigUint::zero();
        let count = self.stakes(staker).len();

        for i in 1..=count {
            if remaining == 0u64 {
                break;
            }
            let stake = self.stakes(staker).get(i);
            let claimable = self.claimable_amount(&stake, now);
            if claimable == 0u64 {
                continue;
            }
            let capped = if claimable > remaining {
                remaining.clone()
            } else {
                claimable
            };
            remaining -= &capped;
            total += &capped;
        }
        total
    }

    #[view(getEntitledRewards)]
    fn get_entitled_rewards(&self, staker: &ManagedAddress) -> BigUint {
        let mut total = BigUint::zero();
        let count = self.stakes(staker).len();
        for i in 1..=count {
            let stake = self.stakes(staker).get(i);
            total += self.entitled_amount(&stake);
        }
        total
    }

    #[view(getProposalPhase)]
    fn get_proposal_phase(&self) -> ProposalPhase {
        let now = self.blockchain().get_block_timestamp();
        if now < self.proposal_deadline().get() {
            ProposalPhase::Open
        } else {
            ProposalPhase::Closed
        }
    }

    #[view(getExpiryTimestamp)]
    fn get_expiry_timestamp(&self) -> u64 {
        self.expiry_timestamp()
    }

    #[view(getTotalStakeWeight)]
    fn get_total_stake_weight(&self) -> BigUint {
        self.total_stake_weight().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("poolFunded")]
    fn pool_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] lock_period: u64,
        timestamp: u64,
    );

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );

    #[event("sweep")]
    fn sweep_event(
        &self,
        #[indexed] admin: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("incentiveToken")]
    fn incentive_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("incentiveAmount")]
    fn incentive_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("distributionPeriod")]
    fn distribution_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalDeadline")]
    fn proposal_deadline(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("deployer")]
    fn deployer(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("poolFunded")]
    fn pool_funded(&self) -> SingleValueMapper<bool>;

    // ── Stake registry ──

    #[storage_mapper("stakes")]
    fn stakes(&self, staker: &ManagedAddress) -> VecMapper<Stake<Self::Api>>;

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Aggregates ──

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalClaimed")]
    fn total_claimed(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("sweptAmount")]
    fn swept_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalStakeWeight")]
    fn total_stake_weight(&self) -> SingleValueMapper<BigUint>;
}
