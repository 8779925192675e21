// Smoke test for the TokenListingProposal ledger contract.
//
// Endpoint-level behavior is covered by the scenario tests in
// token_listing_proposal_blackbox_test.rs; this only verifies the contract
// object instantiates with DebugApi and the ABI is generated correctly.

use multiversx_sc_scenario::api::DebugApi;

type ProposalContract = token_listing_proposal::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    // Verify the contract object can be instantiated with DebugApi
    let _: fn() -> ProposalContract = token_listing_proposal::contract_obj;
}
