use crate::DateSelection;

use super::selection_from;

/// Deterministic stream of identifiers with many repetitions, enough to hit
/// both branches of a toggle.
fn pseudo_random_dates(seed: u64, count: usize) -> impl Iterator<Item = String> {
    let mut state = seed;

    (0..count).map(move |_| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let day = (state >> 33) % 40;
        format!("2024-{:02}-{:02}", 1 + day / 28, 1 + day % 28)
    })
}

fn assert_invariants<D: Ord + std::fmt::Debug>(selection: &DateSelection<D>) {
    assert!(
        selection.dates().windows(2).all(|w| w[0] < w[1]),
        "not strictly increasing: {:?}",
        selection.dates(),
    );
}

#[test]
fn invariants_hold_after_each_toggle() {
    for seed in 0..8 {
        let mut selection = DateSelection::new();

        for date in pseudo_random_dates(seed, 500) {
            selection.toggle_date(date);
            assert_invariants(&selection);
        }
    }
}

#[test]
fn toggle_twice_restores_state() {
    let start = selection_from(pseudo_random_dates(42, 100));
    let initial = start.dates().to_vec();
    let mut selection = start;

    for date in pseudo_random_dates(7, 50) {
        selection.toggle_date(date.clone());
        selection.toggle_date(date);
        assert_eq!(selection.dates(), initial.as_slice());
    }
}

#[test]
fn membership_matches_toggle_parity() {
    let inputs: Vec<_> = pseudo_random_dates(3, 300).collect();
    let selection = selection_from(inputs.iter().cloned());

    for date in &inputs {
        let toggles = inputs.iter().filter(|x| *x == date).count();
        assert_eq!(selection.contains(date), toggles % 2 == 1, "{date}");
    }
}
