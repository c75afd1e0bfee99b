//! Property-based tests for the score/state/share reconciliation logic.

use proptest::prelude::*;

use purity::answers::AnswerState;
use purity::catalog::{Catalog, Question};
use purity::controller::{Controller, Profile};
use purity::scoring::{checked_count, compute_score};
use purity::share::decode_score;

/// Canonical-shaped catalog: `total` entries, first one locked, with the
/// given default-checked ids.
fn build_catalog(total: u32, default_checked: &[u32]) -> Catalog {
    let questions = (1..=total)
        .map(|id| Question {
            id,
            text: format!("Prompt {id}"),
            default_checked: default_checked.contains(&id),
            disabled: id == 1,
        })
        .collect();
    Catalog::new(questions).unwrap()
}

fn controller(total: u32) -> Controller {
    Controller::new(
        build_catalog(total, &[]),
        Profile::shareable(),
        "https://purity.example/test",
    )
}

/// Strategy: catalog size (locked entry plus 1-100 enabled).
fn total_strategy() -> impl Strategy<Value = u32> {
    2..=101u32
}

/// Strategy: a subset of ids to toggle, possibly with repeats.
fn toggles_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1..=101u32, 0..40)
}

proptest! {
    // 1. After submit: score + checked_count == enabled_count, for any
    //    sequence of toggles.
    #[test]
    fn score_plus_checked_is_enabled(total in total_strategy(), toggles in toggles_strategy()) {
        let mut c = controller(total);
        for id in toggles {
            c.toggle(id);
        }
        c.submit();
        let cat = c.catalog();
        let score = c.score().unwrap();
        let checked = checked_count(cat, c.answers());
        prop_assert_eq!(score + checked, cat.enabled_count());
    }

    // 2. Any toggle of an enabled question after submit clears the score.
    #[test]
    fn toggle_after_submit_invalidates(total in total_strategy(), id in 2..=101u32) {
        prop_assume!(id <= total);
        let mut c = controller(total);
        c.submit();
        prop_assert!(c.score().is_some());
        c.toggle(id);
        prop_assert_eq!(c.score(), None);
    }

    // 3. Toggling the locked question changes nothing.
    #[test]
    fn toggle_disabled_is_inert(total in total_strategy(), toggles in toggles_strategy()) {
        let mut c = controller(total);
        for id in toggles {
            c.toggle(id);
        }
        c.submit();
        let before_answers = c.answers().clone();
        let before_score = c.score();
        let before_status = c.copy_status().map(str::to_string);
        c.toggle(1);
        prop_assert_eq!(c.answers(), &before_answers);
        prop_assert_eq!(c.score(), before_score);
        prop_assert_eq!(c.copy_status().map(str::to_string), before_status);
    }

    // 4. reset() restores the exact default-seeded answers and clears
    //    score and shared view.
    #[test]
    fn reset_restores_defaults(
        total in total_strategy(),
        defaults in prop::collection::vec(1..=101u32, 0..10),
        toggles in toggles_strategy(),
    ) {
        let catalog = build_catalog(total, &defaults);
        let mut c = Controller::new(catalog.clone(), Profile::shareable(), "https://p.example/t");
        for id in toggles {
            c.toggle(id);
        }
        c.submit();
        c.reset();
        prop_assert_eq!(c.answers(), &AnswerState::from_defaults(&catalog));
        prop_assert_eq!(c.score(), None);
        prop_assert!(!c.shared_view());
        prop_assert_eq!(c.copy_status(), None);
    }

    // 5. Decode accepts exactly the finite values within [0, max].
    #[test]
    fn decode_in_range_only(value in -200.0..300.0f64) {
        let query = format!("?score={value}");
        let decoded = decode_score(Some(&query), 100);
        if (0.0..=100.0).contains(&value) {
            prop_assert_eq!(decoded, Some(value.round() as u32));
        } else {
            prop_assert_eq!(decoded, None);
        }
    }

    // 6. Score is monotone: checking one more enabled question never
    //    raises the score.
    #[test]
    fn checking_never_raises_score(total in total_strategy(), id in 2..=101u32) {
        prop_assume!(id <= total);
        let catalog = build_catalog(total, &[]);
        let mut answers = AnswerState::from_defaults(&catalog);
        let before = compute_score(&catalog, &answers);
        answers.flip(id);
        let after = compute_score(&catalog, &answers);
        prop_assert_eq!(after, before - 1);
    }

    // 7. Toggle is an involution on the committed score: toggling the same
    //    question twice and resubmitting reproduces the original score.
    #[test]
    fn double_toggle_roundtrips_score(total in total_strategy(), id in 2..=101u32) {
        prop_assume!(id <= total);
        let mut c = controller(total);
        c.submit();
        let original = c.score();
        c.toggle(id);
        c.toggle(id);
        c.submit();
        prop_assert_eq!(c.score(), original);
    }
}

// 8. Decode applies nearest-integer rounding, not truncation.
#[test]
fn decode_rounds_fractional_scores() {
    assert_eq!(decode_score(Some("?score=55.6"), 100), Some(56));
    assert_eq!(decode_score(Some("?score=55.4"), 100), Some(55));
    assert_eq!(decode_score(Some("?score=0.5"), 100), Some(1));
}

// 9. Spec end-to-end walkthrough: 100 enabled + 1 locked, 30 checked.
#[test]
fn end_to_end_thirty_checked_scores_seventy() {
    let mut c = controller(101);
    for id in 2..=31 {
        c.toggle(id);
    }
    c.submit();
    assert_eq!(c.score(), Some(70));
    assert_eq!(c.share_link(), "https://purity.example/test?score=70");
    let snap = c.snapshot();
    assert_eq!(snap.checked_count, 30);
    assert_eq!(snap.enabled_count, 100);
    assert_eq!(snap.share_text, "I scored 70/100 on this purity test.");
}

// 10. Fresh open with no query: absent score, defaults, zero checked.
#[test]
fn fresh_open_shows_defaults() {
    let mut c = controller(101);
    c.open(None);
    let snap = c.snapshot();
    assert_eq!(snap.score, None);
    assert!(!snap.shared_view);
    assert_eq!(snap.checked_count, 0);
    assert_eq!(snap.questions.len(), 101);
}
