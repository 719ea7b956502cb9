//! State Transition Verification
//!
//! The `verify` function is the canonical way to decide whether a proposed
//! set of inputs, outputs, intent and signers forms a legal transaction.
//!
//! Verification is pure: it reads its arguments, allocates nothing shared and
//! returns the same verdict for the same arguments on every node.

use std::collections::HashSet;

use tracing::{debug, trace};

use lib_types::PartyId;

use crate::errors::{RejectionReason, VerifyResult};
use crate::intent::TransactionIntent;
use crate::state::StateRecord;

/// Verify a proposed state transition
///
/// # Rules
///
/// 1. **Cardinality**: Issue is 0 -> 1, Move is 1 -> 1, Redeem is 1 -> 0
/// 2. **Positive outputs**: every output quantity must be > 0
/// 3. **Provenance** (Move): issuer and quantity are carried over unchanged,
///    and the holder actually changes
/// 4. **Authorization**: Issue needs the issuer, Move the current holder,
///    Redeem both issuer and holder in `signers`
///
/// Rules are checked in that order and the first failure wins. Signer
/// membership is only consulted once the structure is sound.
///
/// # Arguments
///
/// * `inputs` - States consumed by the transaction
/// * `outputs` - States produced by the transaction
/// * `intent` - Declared intent
/// * `signers` - Identities the host has already authenticated
///
/// # Returns
///
/// * `Ok(())` - Transaction is legal
/// * `Err(RejectionReason)` - Why it was rejected
pub fn verify(
    inputs: &[StateRecord],
    outputs: &[StateRecord],
    intent: TransactionIntent,
    signers: &HashSet<PartyId>,
) -> VerifyResult {
    // =========================================================================
    // Rule 1: Cardinality
    // =========================================================================
    let shape = match (intent, inputs, outputs) {
        (TransactionIntent::Issue, [], [output]) => Shape::Issue { output },
        (TransactionIntent::Move, [input], [output]) => Shape::Move { input, output },
        (TransactionIntent::Redeem, [input], []) => Shape::Redeem { input },
        (intent, _, _) => {
            return Err(reject(intent.malformed(), intent, "cardinality"));
        }
    };

    // =========================================================================
    // Rule 2: Positive outputs
    // =========================================================================
    if outputs.iter().any(|output| output.quantity() <= 0) {
        return Err(reject(
            RejectionReason::UnknownIntentOrInvalidQuantity,
            intent,
            "output quantity must be positive",
        ));
    }

    // =========================================================================
    // Rules 3 + 4: Per-intent provenance and authorization
    // =========================================================================
    let verdict = match shape {
        Shape::Issue { output } => verify_issue(output, signers),
        Shape::Move { input, output } => verify_move(input, output, signers),
        Shape::Redeem { input } => verify_redeem(input, signers),
    };

    match verdict {
        Ok(()) => {
            trace!(%intent, inputs = inputs.len(), outputs = outputs.len(), "transaction verified");
            Ok(())
        }
        Err(rule) => Err(reject(intent.malformed(), intent, rule)),
    }
}

/// Verify a proposal whose intent is still a raw wire tag
///
/// An unrecognised tag is a rejection, not an error.
pub fn verify_tagged(
    inputs: &[StateRecord],
    outputs: &[StateRecord],
    intent_tag: &str,
    signers: &HashSet<PartyId>,
) -> VerifyResult {
    let intent = intent_tag.parse::<TransactionIntent>().map_err(|reason| {
        debug!(tag = intent_tag, ?reason, "transaction rejected: unknown intent");
        reason
    })?;
    verify(inputs, outputs, intent, signers)
}

/// Borrowed view of a transaction that passed the cardinality rule
enum Shape<'a> {
    Issue { output: &'a StateRecord },
    Move { input: &'a StateRecord, output: &'a StateRecord },
    Redeem { input: &'a StateRecord },
}

/// Per-intent checks return the name of the violated rule
type RuleResult = Result<(), &'static str>;

fn verify_issue(output: &StateRecord, signers: &HashSet<PartyId>) -> RuleResult {
    if !signers.contains(&output.issuer()) {
        return Err("issuer must sign");
    }
    Ok(())
}

fn verify_move(input: &StateRecord, output: &StateRecord, signers: &HashSet<PartyId>) -> RuleResult {
    if input.issuer() != output.issuer() {
        return Err("issuer must be preserved");
    }
    if input.quantity() != output.quantity() {
        return Err("quantity must be preserved");
    }
    if input.holder() == output.holder() {
        return Err("holder must change");
    }
    if !signers.contains(&input.holder()) {
        return Err("current holder must sign");
    }
    Ok(())
}

fn verify_redeem(input: &StateRecord, signers: &HashSet<PartyId>) -> RuleResult {
    if !signers.contains(&input.issuer()) {
        return Err("issuer must sign");
    }
    if !signers.contains(&input.holder()) {
        return Err("holder must sign");
    }
    Ok(())
}

fn reject(reason: RejectionReason, intent: TransactionIntent, rule: &'static str) -> RejectionReason {
    debug!(%intent, rule, ?reason, "transaction rejected");
    reason
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(b: u8) -> PartyId {
        PartyId::new([b; 32])
    }

    fn record(issuer: u8, holder: u8, quantity: i64) -> StateRecord {
        StateRecord::new(party(issuer), party(holder), quantity).unwrap()
    }

    fn signers(parties: &[u8]) -> HashSet<PartyId> {
        parties.iter().map(|b| party(*b)).collect()
    }

    const A: u8 = 0xA;
    const B: u8 = 0xB;
    const C: u8 = 0xC;
    const D: u8 = 0xD;

    // =========================================================================
    // ISSUE
    // =========================================================================

    #[test]
    fn test_issue_ok() {
        let result = verify(&[], &[record(A, B, 10)], TransactionIntent::Issue, &signers(&[A]));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_issue_issuer_not_signer() {
        let result = verify(&[], &[record(A, B, 10)], TransactionIntent::Issue, &signers(&[]));
        assert_eq!(result, Err(RejectionReason::IssueMalformed));

        let result = verify(&[], &[record(A, B, 10)], TransactionIntent::Issue, &signers(&[B]));
        assert_eq!(result, Err(RejectionReason::IssueMalformed));
    }

    #[test]
    fn test_issue_other_parties_may_also_sign() {
        let result = verify(&[], &[record(A, B, 10)], TransactionIntent::Issue, &signers(&[A, B, C]));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_issue_two_outputs() {
        let outputs = [record(A, B, 10), record(A, C, 10)];
        let result = verify(&[], &outputs, TransactionIntent::Issue, &signers(&[A]));
        assert_eq!(result, Err(RejectionReason::IssueMalformed));
    }

    #[test]
    fn test_issue_no_outputs() {
        let result = verify(&[], &[], TransactionIntent::Issue, &signers(&[A]));
        assert_eq!(result, Err(RejectionReason::IssueMalformed));
    }

    #[test]
    fn test_issue_with_input() {
        let result = verify(
            &[record(A, C, 10)],
            &[record(A, B, 10)],
            TransactionIntent::Issue,
            &signers(&[A]),
        );
        assert_eq!(result, Err(RejectionReason::IssueMalformed));
    }

    #[test]
    fn test_issue_zero_quantity() {
        let result = verify(&[], &[record(A, B, 0)], TransactionIntent::Issue, &signers(&[A]));
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));
    }

    #[test]
    fn test_issue_negative_quantity_without_signer() {
        let result = verify(&[], &[record(A, B, -3)], TransactionIntent::Issue, &signers(&[]));
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));
    }

    // =========================================================================
    // MOVE
    // =========================================================================

    #[test]
    fn test_move_ok() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, C, 10)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_move_signed_by_new_holder_only() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, C, 10)],
            TransactionIntent::Move,
            &signers(&[C]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_issuer_changed() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(D, C, 10)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_quantity_changed() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, C, 9)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_to_self() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, B, 10)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_without_inputs() {
        let result = verify(&[], &[record(A, C, 10)], TransactionIntent::Move, &signers(&[B]));
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_without_outputs() {
        let result = verify(&[record(A, B, 10)], &[], TransactionIntent::Move, &signers(&[B]));
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_split_not_supported() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, C, 5), record(A, D, 5)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    #[test]
    fn test_move_zero_output_quantity() {
        let result = verify(
            &[record(A, B, 0)],
            &[record(A, C, 0)],
            TransactionIntent::Move,
            &signers(&[B]),
        );
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));

        let result = verify(
            &[record(A, B, 10)],
            &[record(A, C, -10)],
            TransactionIntent::Move,
            &signers(&[]),
        );
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));
    }

    // =========================================================================
    // REDEEM
    // =========================================================================

    #[test]
    fn test_redeem_ok() {
        let result = verify(&[record(A, B, 10)], &[], TransactionIntent::Redeem, &signers(&[A, B]));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_redeem_issuer_only() {
        let result = verify(&[record(A, B, 10)], &[], TransactionIntent::Redeem, &signers(&[A]));
        assert_eq!(result, Err(RejectionReason::RedeemMalformed));
    }

    #[test]
    fn test_redeem_holder_only() {
        let result = verify(&[record(A, B, 10)], &[], TransactionIntent::Redeem, &signers(&[B]));
        assert_eq!(result, Err(RejectionReason::RedeemMalformed));
    }

    #[test]
    fn test_redeem_with_output() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, B, 10)],
            TransactionIntent::Redeem,
            &signers(&[A, B]),
        );
        assert_eq!(result, Err(RejectionReason::RedeemMalformed));
    }

    #[test]
    fn test_redeem_without_input() {
        let result = verify(&[], &[], TransactionIntent::Redeem, &signers(&[A, B]));
        assert_eq!(result, Err(RejectionReason::RedeemMalformed));
    }

    #[test]
    fn test_redeem_self_issued() {
        // Issuer holding its own tokens signs once for both roles
        let result = verify(&[record(A, A, 10)], &[], TransactionIntent::Redeem, &signers(&[A]));
        assert_eq!(result, Ok(()));
    }

    // =========================================================================
    // RAW TAGS
    // =========================================================================

    #[test]
    fn test_unknown_tag() {
        let result = verify_tagged(&[], &[record(A, B, 10)], "Mint", &signers(&[A]));
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));
    }

    #[test]
    fn test_known_tag_delegates() {
        let result = verify_tagged(&[record(A, B, 10)], &[record(A, C, 10)], "Move", &signers(&[B]));
        assert_eq!(result, Ok(()));
    }

    // =========================================================================
    // INVARIANT VIOLATION REJECTION TESTS
    // =========================================================================

    /// Invariant: structural failures win over missing signatures
    #[test]
    fn invariant_structure_checked_before_signers() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(D, C, 10)],
            TransactionIntent::Move,
            &signers(&[]),
        );
        assert_eq!(result, Err(RejectionReason::MoveMalformed));

        let result = verify(&[], &[record(A, B, 0)], TransactionIntent::Issue, &signers(&[]));
        assert_eq!(result, Err(RejectionReason::UnknownIntentOrInvalidQuantity));
    }

    /// Invariant: each intent only ever reports its own malformed reason
    #[test]
    fn invariant_reason_matches_intent() {
        let outputs = [record(A, B, 10), record(A, C, 10)];
        for intent in TransactionIntent::ALL {
            let result = verify(&[], &outputs, intent, &signers(&[A, B]));
            assert_eq!(result, Err(intent.malformed()));
        }
    }

    /// Invariant: a wrong output count is reported before any bad quantity
    #[test]
    fn invariant_cardinality_before_quantity() {
        let result = verify(
            &[record(A, B, 10)],
            &[record(A, B, 0)],
            TransactionIntent::Redeem,
            &signers(&[A, B]),
        );
        assert_eq!(result, Err(RejectionReason::RedeemMalformed));

        let result = verify(
            &[],
            &[record(A, B, 5), record(A, B, 0)],
            TransactionIntent::Issue,
            &signers(&[A, B]),
        );
        assert_eq!(result, Err(RejectionReason::IssueMalformed));

        let result = verify(&[], &[record(A, B, 0)], TransactionIntent::Move, &signers(&[A, B]));
        assert_eq!(result, Err(RejectionReason::MoveMalformed));
    }

    // =========================================================================
    // GOLDEN VECTORS
    // =========================================================================

    /// Golden vector: issue, move, redeem lifecycle of one unit
    #[test]
    fn golden_lifecycle() {
        let issued = record(A, B, 10);
        assert_eq!(
            verify(&[], &[issued.clone()], TransactionIntent::Issue, &signers(&[A])),
            Ok(())
        );

        let moved = issued.supersede(party(C)).unwrap();
        assert_eq!(
            verify(&[issued], &[moved.clone()], TransactionIntent::Move, &signers(&[B])),
            Ok(())
        );

        assert_eq!(
            verify(&[moved], &[], TransactionIntent::Redeem, &signers(&[A, C])),
            Ok(())
        );
    }

    // =========================================================================
    // DETERMINISM TESTS
    // =========================================================================

    /// Verify verdicts are deterministic
    #[test]
    fn determinism_verdict() {
        let inputs = [record(A, B, 10)];
        let outputs = [record(A, C, 10)];
        let signer_set = signers(&[B]);

        let first = verify(&inputs, &outputs, TransactionIntent::Move, &signer_set);
        for _ in 0..10 {
            let again = verify(&inputs, &outputs, TransactionIntent::Move, &signer_set);
            assert_eq!(again, first, "Verification must be deterministic");
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = StateRecord> {
            (1u8..=4, 1u8..=4, -2i64..=12)
                .prop_map(|(issuer, holder, quantity)| record(issuer, holder, quantity))
        }

        fn arb_intent() -> impl Strategy<Value = TransactionIntent> {
            prop_oneof![
                Just(TransactionIntent::Issue),
                Just(TransactionIntent::Move),
                Just(TransactionIntent::Redeem),
            ]
        }

        fn arb_signers() -> impl Strategy<Value = HashSet<PartyId>> {
            proptest::collection::hash_set((1u8..=4).prop_map(party), 0..4)
        }

        proptest! {
            /// Same arguments, same verdict
            #[test]
            fn prop_verify_is_deterministic(
                inputs in proptest::collection::vec(arb_record(), 0..3),
                outputs in proptest::collection::vec(arb_record(), 0..3),
                intent in arb_intent(),
                signer_set in arb_signers(),
            ) {
                let first = verify(&inputs, &outputs, intent, &signer_set);
                let second = verify(&inputs, &outputs, intent, &signer_set);
                prop_assert_eq!(first, second);
            }

            /// Accepted transactions never create non-positive outputs
            #[test]
            fn prop_accepted_outputs_positive(
                inputs in proptest::collection::vec(arb_record(), 0..3),
                outputs in proptest::collection::vec(arb_record(), 0..3),
                intent in arb_intent(),
                signer_set in arb_signers(),
            ) {
                if verify(&inputs, &outputs, intent, &signer_set).is_ok() {
                    prop_assert!(outputs.iter().all(|o| o.quantity() > 0));
                    prop_assert_eq!((inputs.len(), outputs.len()), intent.cardinality());
                }
            }

            /// Accepted moves conserve issuer and quantity and change holder
            #[test]
            fn prop_accepted_move_conserves(
                input in arb_record(),
                output in arb_record(),
                signer_set in arb_signers(),
            ) {
                let inputs = [input];
                let outputs = [output];
                if verify(&inputs, &outputs, TransactionIntent::Move, &signer_set).is_ok() {
                    prop_assert_eq!(inputs[0].issuer(), outputs[0].issuer());
                    prop_assert_eq!(inputs[0].quantity(), outputs[0].quantity());
                    prop_assert_ne!(inputs[0].holder(), outputs[0].holder());
                    prop_assert!(signer_set.contains(&inputs[0].holder()));
                }
            }
        }
    }
}
