use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::{DateSelection, Error, SelectionHandle};

#[test]
fn clones_share_the_selection() {
    let handle = SelectionHandle::new();
    let other = handle.clone();

    handle.toggle_date("2024-03-01".to_string());
    other.toggle_date("2024-01-15".to_string());

    assert_eq!(handle.dates(), ["2024-01-15", "2024-03-01"]);
    assert_eq!(other.len(), 2);

    other.toggle_date("2024-03-01".to_string());
    assert!(!handle.contains(&"2024-03-01".to_string()));
}

#[test]
fn wrap_existing_selection() {
    let mut selection = DateSelection::new();
    selection.toggle_date("2024-05-05");

    let handle = SelectionHandle::from(selection);
    assert_eq!(handle.read(|s| s.dates().to_vec()), ["2024-05-05"]);
}

#[test]
fn into_inner_requires_last_handle() {
    let handle: SelectionHandle<&str> = SelectionHandle::default();
    let other = handle.clone();
    handle.toggle_date("2024-05-05");

    let handle = handle.into_inner().expect_err("handle is still shared");
    drop(other);

    let selection = handle.into_inner().expect("last handle");
    assert_eq!(selection.into_dates(), ["2024-05-05"]);
}

#[test]
fn observers_through_handle() {
    let handle: SelectionHandle<&str> = SelectionHandle::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let id = handle.subscribe({
        let calls = calls.clone();
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });

    handle.toggle_date("2024-01-01");
    handle.toggle_date("2024-01-02");
    handle.unsubscribe(id).unwrap();
    handle.toggle_date("2024-01-03");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(handle.unsubscribe(id), Err(Error::UnknownSubscription(id)));
}

#[test]
fn concurrent_toggles_keep_invariants() {
    let handle = SelectionHandle::new();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let handle = handle.clone();

            thread::spawn(move || {
                for day in 1..=28 {
                    // Each worker toggles every day of its own month once and
                    // every day of January twice.
                    handle.toggle_date(format!("2024-{:02}-{day:02}", worker + 2));
                    handle.toggle_date(format!("2024-01-{day:02}"));
                    handle.toggle_date(format!("2024-01-{day:02}"));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    let dates = handle.dates();
    assert_eq!(dates.len(), 4 * 28);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert!(dates.iter().all(|d| !d.starts_with("2024-01")));
}

#[test]
fn panicking_observer_does_not_break_toggles() {
    let handle: SelectionHandle<&str> = SelectionHandle::new();
    handle.subscribe(|change| assert_ne!(*change.date, "2024-06-06"));

    let result = thread::spawn({
        let handle = handle.clone();
        move || handle.toggle_date("2024-06-06")
    })
    .join();

    assert!(result.is_err());
    assert!(handle.contains(&"2024-06-06"));

    handle.toggle_date("2024-07-07");
    assert_eq!(handle.dates(), ["2024-06-06", "2024-07-07"]);
}
