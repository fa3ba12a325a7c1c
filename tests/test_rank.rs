//! Ranking tests: ordering, ties, missing counters, permutation.

mod common;

use common::{names, snapshot};
use covmap::transform::{rank, rank_by};
use covmap::Metric;

#[test]
fn orders_by_cases_descending() {
    let records = vec![
        snapshot("A", Some(10)),
        snapshot("B", Some(50)),
        snapshot("C", Some(30)),
    ];

    let ranked = rank(&records);
    assert_eq!(names(&ranked), vec!["B", "C", "A"]);
    assert_eq!(ranked[0].total(Metric::Cases), Some(50));
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(rank(&[]).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let records = vec![snapshot("A", Some(1)), snapshot("B", Some(2))];
    let _ = rank(&records);
    assert_eq!(names(&records), vec!["A", "B"]);
}

#[test]
fn ties_break_by_name_ascending() {
    let records = vec![
        snapshot("Zambia", Some(5)),
        snapshot("Austria", Some(5)),
        snapshot("Mali", Some(9)),
        snapshot("Chad", Some(5)),
    ];

    let ranked = rank(&records);
    assert_eq!(names(&ranked), vec!["Mali", "Austria", "Chad", "Zambia"]);

    // Same result whatever the input order.
    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(names(&rank(&reversed)), names(&ranked));
}

#[test]
fn missing_counts_rank_last() {
    let records = vec![
        snapshot("NoData", None),
        snapshot("Zero", Some(0)),
        snapshot("Some", Some(3)),
        snapshot("AlsoNoData", None),
    ];

    let ranked = rank(&records);
    assert_eq!(names(&ranked), vec!["Some", "Zero", "AlsoNoData", "NoData"]);
}

#[test]
fn output_is_a_sorted_permutation() {
    let records: Vec<_> = [7, 3, 3, 42, 0, 19, 7, 1000, 5]
        .iter()
        .enumerate()
        .map(|(i, &cases)| snapshot(&format!("R{}", i), Some(cases)))
        .collect();

    let ranked = rank(&records);
    assert_eq!(ranked.len(), records.len());
    for record in &records {
        assert_eq!(ranked.iter().filter(|r| *r == record).count(), 1);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].total(Metric::Cases) >= pair[1].total(Metric::Cases));
    }
}

#[test]
fn rank_by_uses_the_chosen_metric() {
    let records = common::countries();

    let by_deaths = rank_by(&records, Metric::Deaths);
    assert_eq!(
        names(&by_deaths),
        vec!["USA", "Brazil", "India", "Diamond Princess"]
    );

    // India has no recovered figure, so it drops to the bottom.
    let by_recovered = rank_by(&records, Metric::Recovered);
    assert_eq!(
        names(&by_recovered),
        vec!["USA", "Brazil", "Diamond Princess", "India"]
    );
}

#[test]
fn rank_matches_rank_by_cases() {
    let records = common::countries();
    assert_eq!(rank(&records), rank_by(&records, Metric::Cases));
    assert_eq!(
        names(&rank(&records)),
        vec!["USA", "India", "Brazil", "Diamond Princess"]
    );
}
