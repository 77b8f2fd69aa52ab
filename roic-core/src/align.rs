use roic_types::{AlignmentPolicy, FinancialStatement, StatementSnapshot};

/// One income-statement period and its balance-sheet counterpart.
///
/// `balance` is `None` only under positional alignment when the balance
/// sheet has fewer columns than the income statement.
#[derive(Debug, Clone, Copy)]
pub struct AlignedPeriod<'a> {
    /// Income-statement snapshot; its date labels the period.
    pub income: &'a StatementSnapshot,
    /// Matching balance-sheet snapshot.
    pub balance: Option<&'a StatementSnapshot>,
}

/// Pair the most recent `num_years` periods of both statements.
///
/// `DateIntersection` keeps only period-end dates present in both
/// statements. `Positional` pairs columns by rank, trusting the provider to
/// keep both statements on the same period boundaries.
#[must_use]
pub fn align_periods<'a>(
    income: &'a FinancialStatement,
    balance: &'a FinancialStatement,
    policy: AlignmentPolicy,
    num_years: usize,
) -> Vec<AlignedPeriod<'a>> {
    match policy {
        AlignmentPolicy::DateIntersection => income
            .most_recent_first()
            .filter_map(|is| {
                balance.get(&is.period_end).map(|bs| AlignedPeriod {
                    income: is,
                    balance: Some(bs),
                })
            })
            .take(num_years)
            .collect(),
        AlignmentPolicy::Positional => {
            let mut bs_iter = balance.most_recent_first();
            income
                .most_recent_first()
                .take(num_years)
                .map(|is| {
                    let bs = bs_iter.next();
                    if let Some(bs) = bs
                        && bs.period_end != is.period_end
                    {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            income_period = %is.period_end,
                            balance_period = %bs.period_end,
                            "positional alignment paired different period ends"
                        );
                    }
                    AlignedPeriod {
                        income: is,
                        balance: bs,
                    }
                })
                .collect()
        }
    }
}
