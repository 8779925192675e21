#![no_std]

multiversx_sc::imports!();

pub mod factory_proxy;

use token_listing_proposal::proposal_proxy;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MasterChefFactory {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, proposal_template_address: ManagedAddress) {
        self.proposal_template_address()
            .set(&proposal_template_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fundIncentives
    // Pre-funding step: incentive tokens accumulate in the
    // factory balance until deployProposal escrows them into a
    // new ledger.
    // ========================================================

    #[payable("*")]
    #[endpoint(fundIncentives)]
    fn fund_incentives(&self) {
        let caller = self.blockchain().get_caller();
        let (token, _nonce, amount) = self.call_value().egld_or_single_esdt().into_tuple();
        require!(amount > 0u64, "Funding amount must be positive");

        self.fund_incentives_event(&caller, &token, &amount);
    }

    // ========================================================
    // ENDPOINT: deployProposal
    // Deploys a new listing-proposal ledger from the template
    // and escrows its full incentive pool in the same
    // transaction. A ledger can never exist unfunded.
    // ========================================================

    #[endpoint(deployProposal)]
    fn deploy_proposal(
        &self,
        incentive_token: EgldOrEsdtTokenIdentifier,
        incentive_amount: BigUint,
        distribution_period: u64,
        proposal_deadline: u64,
        admin: ManagedAddress,
    ) -> ManagedAddress {
        require!(
            incentive_amount > 0u64,
            "Incentive amount must be positive"
        );
        let balance = self.blockchain().get_sc_balance(&incentive_token, 0);
        require!(
            balance >= incentive_amount,
            "Insufficient factory balance"
        );

        // Config validation happens in the ledger's init; a failed init
        // aborts the whole transaction.
        let proposal_address = self
            .tx()
            .typed(proposal_proxy::TokenListingProposalProxy)
            .init(
                &incentive_token,
                &incentive_amount,
                distribution_period,
                proposal_deadline,
                &admin,
            )
            .from_source(self.proposal_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.tx()
            .to(&proposal_address)
            .typed(proposal_proxy::TokenListingProposalProxy)
            .fund_incentive_pool()
            .egld_or_single_esdt(&incentive_token, 0, &incentive_amount)
            .sync_call();

        self.deployed_proposals().push(&proposal_address);

        self.proposal_deployed_event(
            &proposal_address,
            &incentive_token,
            &incentive_amount,
            &admin,
            proposal_deadline,
            distribution_period,
        );

        proposal_address
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getDeployedProposals)]
    fn get_deployed_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.deployed_proposals().len() as u64;
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            result.push(self.deployed_proposals().get(i as usize));
        }
        result
    }

    #[view(getDeployedProposalCount)]
    fn get_deployed_proposal_count(&self) -> u64 {
        self.deployed_proposals().len() as u64
    }

    #[view(getProposalTemplateAddress)]
    fn get_proposal_template_address(&self) -> ManagedAddress {
        self.proposal_template_address().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fundIncentives")]
    fn fund_incentives_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("proposalDeployed")]
    fn proposal_deployed_event(
        &self,
        #[indexed] proposal: &ManagedAddress,
        #[indexed] incentive_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] incentive_amount: &BigUint,
        #[indexed] admin: &ManagedAddress,
        #[indexed] proposal_deadline: u64,
        distribution_period: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalTemplateAddress")]
    fn proposal_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("deployedProposals")]
    fn deployed_proposals(&self) -> VecMapper<ManagedAddress>;
}
