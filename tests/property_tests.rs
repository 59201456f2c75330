//! Property-based tests for the transition table and the disclosure rule.

use proptest::prelude::*;

use complaint_service::{CaseViewer, ComplaintStatus, Visibility};

fn status_strategy() -> impl Strategy<Value = ComplaintStatus> {
    prop::sample::select(ComplaintStatus::ALL.to_vec())
}

fn visibility_strategy() -> impl Strategy<Value = Visibility> {
    prop::sample::select(vec![Visibility::Private, Visibility::Victim, Visibility::Public])
}

fn viewer_strategy() -> impl Strategy<Value = CaseViewer> {
    prop::sample::select(vec![
        CaseViewer::StationOfficer,
        CaseViewer::OwningVictim,
        CaseViewer::Other,
    ])
}

proptest! {
    #[test]
    fn no_status_succeeds_itself(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    #[test]
    fn closed_is_unreachable_as_a_source(to in status_strategy()) {
        prop_assert!(!ComplaintStatus::Closed.can_transition_to(to));
    }

    #[test]
    fn every_non_terminal_status_can_close(from in status_strategy()) {
        if !from.is_terminal() {
            prop_assert!(from.can_transition_to(ComplaintStatus::Closed));
        }
    }

    #[test]
    fn successor_sets_agree_with_the_predicate(
        from in status_strategy(),
        to in status_strategy(),
    ) {
        prop_assert_eq!(from.successors().contains(&to), from.can_transition_to(to));
    }

    /// Any walk along successor edges ends at `Closed` or can continue;
    /// once `Closed` is entered the walk is over.
    #[test]
    fn walks_never_leave_closed(seed in prop::collection::vec(0usize..2, 1..20)) {
        let mut status = ComplaintStatus::Pending;
        for pick in seed {
            let successors = status.successors();
            if successors.is_empty() {
                prop_assert_eq!(status, ComplaintStatus::Closed);
                break;
            }
            status = successors[pick % successors.len()];
        }
    }

    #[test]
    fn officers_are_never_filtered(visibility in visibility_strategy()) {
        prop_assert!(visibility.disclosable_to(CaseViewer::StationOfficer));
    }

    #[test]
    fn disclosure_is_monotone_in_the_viewer(visibility in visibility_strategy()) {
        // Anything a stranger may see, the victim may see; anything the
        // victim may see, a station officer may see.
        if visibility.disclosable_to(CaseViewer::Other) {
            prop_assert!(visibility.disclosable_to(CaseViewer::OwningVictim));
        }
        if visibility.disclosable_to(CaseViewer::OwningVictim) {
            prop_assert!(visibility.disclosable_to(CaseViewer::StationOfficer));
        }
    }

    #[test]
    fn private_entries_reach_officers_only(viewer in viewer_strategy()) {
        prop_assert_eq!(
            Visibility::Private.disclosable_to(viewer),
            viewer == CaseViewer::StationOfficer
        );
    }
}
