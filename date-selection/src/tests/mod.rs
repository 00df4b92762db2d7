mod properties;
mod shared;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a selection by toggling each of the given dates in order.
fn selection_from<D: Ord>(dates: impl IntoIterator<Item = D>) -> crate::DateSelection<D> {
    let mut selection = crate::DateSelection::new();

    for date in dates {
        selection.toggle_date(date);
    }

    selection
}
