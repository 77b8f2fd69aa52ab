use crate::Roic;
use crate::router::macros::roic_router_method;

impl Roic {
    roic_router_method! {
        /// Fetch every annual income-statement period for `symbol`.
        method: income_statement,
        accessor: as_income_statement_provider,
        capability: "income-statement",
        not_found: "income statement",
        call: income_statement
    }

    roic_router_method! {
        /// Fetch every annual balance-sheet period for `symbol`.
        method: balance_sheet,
        accessor: as_balance_sheet_provider,
        capability: "balance-sheet",
        not_found: "balance sheet",
        call: balance_sheet
    }
}
