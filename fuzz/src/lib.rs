//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use std::collections::BTreeSet;
use std::fmt::Debug;

use arbitrary::Arbitrary;
use chrono::{Datelike, NaiveDate};

use date_selection::DateSelection;

/// Longer inputs mostly exercise the same paths.
const MAX_STEPS: usize = 1024;

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub steps: Vec<Step>,
}

/// One action performed on the selections
#[derive(Arbitrary, Clone, Debug)]
pub enum Step {
    /// Toggle a day, given as a number of days since 0001-01-01, both as a
    /// typed date and as its ISO representation.
    Day(i32),
    /// Toggle a day twice in a row, which must not alter the selection.
    DayTwice(i32),
    /// Toggle an arbitrary identifier.
    Raw(String),
}

fn day_from_ce(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days)
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_list();

        for step in &self.steps {
            let date = match step {
                Step::Day(days) | Step::DayTwice(days) => day_from_ce(*days),
                Step::Raw(_) => None,
            };

            if let Some(date) = date {
                debug.entry(&format_args!("{step:?} = {date}"));
            } else {
                debug.entry(step);
            }
        }

        debug.finish()
    }
}

/// Selections under test along with a reference model for each of them.
#[derive(Default)]
struct State {
    typed: DateSelection<NaiveDate>,
    iso: DateSelection<String>,
    raw: DateSelection<String>,
    model_typed: BTreeSet<NaiveDate>,
    model_raw: BTreeSet<String>,
}

fn toggle_model<T: Ord>(model: &mut BTreeSet<T>, value: T) {
    if !model.remove(&value) {
        model.insert(value);
    }
}

fn assert_sorted_unique<D: Ord + Debug>(dates: &[D]) {
    assert!(
        dates.windows(2).all(|w| w[0] < w[1]),
        "selection is not strictly increasing: {dates:?}",
    );
}

impl State {
    fn toggle_day(&mut self, date: NaiveDate) {
        self.typed.toggle_date(date);
        self.iso.toggle_date(date.format("%Y-%m-%d").to_string());
        toggle_model(&mut self.model_typed, date);
    }

    fn check(&self) {
        assert_sorted_unique(self.typed.dates());
        assert_sorted_unique(self.iso.dates());
        assert_sorted_unique(self.raw.dates());

        assert!(self.typed.iter().eq(&self.model_typed));
        assert!(self.raw.iter().eq(&self.model_raw));

        // ISO strings only sort chronologically with 4-digit years
        if self.typed.iter().all(|d| (1000..=9999).contains(&d.year())) {
            assert!(self
                .typed
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .eq(self.iso.iter().cloned()));
        }
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_toggle(data: Data) -> bool {
    if data.steps.is_empty() || data.steps.len() > MAX_STEPS {
        return false;
    }

    let mut state = State::default();

    for step in data.steps {
        match step {
            Step::Day(days) => {
                let Some(date) = day_from_ce(days) else {
                    return false;
                };

                state.toggle_day(date);
            }
            Step::DayTwice(days) => {
                let Some(date) = day_from_ce(days) else {
                    return false;
                };

                let before = state.typed.dates().to_vec();
                state.toggle_day(date);
                state.toggle_day(date);
                assert_eq!(state.typed.dates(), before.as_slice());
            }
            Step::Raw(value) => {
                state.raw.toggle_date(value.clone());
                toggle_model(&mut state.model_raw, value);
            }
        }

        state.check();
    }

    true
}
