mod common;

use common::{balance, balance_stmt, d, income, income_stmt};
use roic_core::{AlignmentPolicy, align_periods};

#[test]
fn date_intersection_keeps_common_dates_most_recent_first() {
    let is = income_stmt([
        income(d(2021, 12, 31), 1.0, 0.2),
        income(d(2022, 12, 31), 1.0, 0.2),
        income(d(2023, 12, 31), 1.0, 0.2),
        income(d(2024, 12, 31), 1.0, 0.2),
    ]);
    let bs = balance_stmt([
        balance(d(2020, 12, 31), 1.0, 0.0, 0.0),
        balance(d(2022, 12, 31), 1.0, 0.0, 0.0),
        balance(d(2023, 12, 31), 1.0, 0.0, 0.0),
        balance(d(2024, 12, 31), 1.0, 0.0, 0.0),
    ]);

    let pairs = align_periods(&is, &bs, AlignmentPolicy::DateIntersection, 2);
    let dates: Vec<_> = pairs.iter().map(|p| p.income.period_end).collect();
    assert_eq!(dates, vec![d(2024, 12, 31), d(2023, 12, 31)]);
    for p in &pairs {
        assert_eq!(p.balance.unwrap().period_end, p.income.period_end);
    }

    let all = align_periods(&is, &bs, AlignmentPolicy::DateIntersection, 10);
    assert_eq!(all.len(), 3);
}

#[test]
fn positional_pairs_by_rank_even_when_dates_differ() {
    let is = income_stmt([
        income(d(2023, 12, 31), 1.0, 0.2),
        income(d(2024, 12, 31), 1.0, 0.2),
    ]);
    let bs = balance_stmt([balance(d(2024, 11, 30), 1.0, 0.0, 0.0)]);

    let pairs = align_periods(&is, &bs, AlignmentPolicy::Positional, 5);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].income.period_end, d(2024, 12, 31));
    assert_eq!(pairs[0].balance.unwrap().period_end, d(2024, 11, 30));
    assert!(pairs[1].balance.is_none());
}

#[test]
fn disjoint_dates_yield_nothing_under_intersection() {
    let is = income_stmt([income(d(2024, 12, 31), 1.0, 0.2)]);
    let bs = balance_stmt([balance(d(2024, 6, 30), 1.0, 0.0, 0.0)]);
    assert!(align_periods(&is, &bs, AlignmentPolicy::DateIntersection, 5).is_empty());
}
