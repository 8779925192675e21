use multiversx_sc::proxy_imports::*;

use crate::types::{ProposalPhase, Stake};

pub struct TokenListingProposalProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TokenListingProposalProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TokenListingProposalProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TokenListingProposalProxyMethods { wrapped_tx: tx }
    }
}

pub struct TokenListingProposalProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> TokenListingProposalProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        incentive_token: Arg0,
        incentive_amount: Arg1,
        distribution_period: Arg2,
        proposal_deadline: Arg3,
        admin: Arg4,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&incentive_token)
            .argument(&incentive_amount)
            .argument(&distribution_period)
            .argument(&proposal_deadline)
            .argument(&admin)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> TokenListingProposalProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> TokenListingProposalProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn fund_incentive_pool(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("fundIncentivePool")
            .original_result()
    }

    pub fn stake_on_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        lock_period: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("stakeOnProposal")
            .argument(&lock_period)
            .original_result()
    }

    pub fn claim_rewards(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimRewards")
            .original_result()
    }

    pub fn sweep_unclaimed(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("sweepUnclaimed")
            .original_result()
    }

    pub fn get_proposal_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<EgldOrEsdtTokenIdentifier<Env::Api>, BigUint<Env::Api>, u64, u64, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalConfig")
            .original_result()
    }

    pub fn get_ledger_stats(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLedgerStats")
            .original_result()
    }

    pub fn get_stakes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Stake<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakes")
            .argument(&staker)
            .original_result()
    }

    pub fn get_stake_count<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakeCount")
            .argument(&staker)
            .original_result()
    }

    pub fn get_stakers<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakers")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_claimable_rewards<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClaimableRewards")
            .argument(&staker)
            .original_result()
    }

    pub fn get_entitled_rewards<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        staker: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntitledRewards")
            .argument(&staker)
            .original_result()
    }

    pub fn get_proposal_phase(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalPhase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalPhase")
            .original_result()
    }

    pub fn get_expiry_timestamp(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getExpiryTimestamp")
            .original_result()
    }

    pub fn get_total_stake_weight(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalStakeWeight")
            .original_result()
    }
}
