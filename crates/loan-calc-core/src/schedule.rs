use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{AmortizationRow, Money};

/// Months grouped into one chart point / one year of the roll-up.
pub const MONTHS_PER_YEAR: u32 = 12;

/// A downsampled schedule row, rounded to whole currency units for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: u32,
    pub balance: Money,
    pub principal: Money,
    pub interest: Money,
}

/// Principal and interest paid during one loan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

fn whole(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Keep every `interval`-th row (starting with the first) plus the final row.
pub fn chart_points(schedule: &[AmortizationRow], interval: usize) -> Vec<ChartPoint> {
    let interval = interval.max(1);
    let last = schedule.len().saturating_sub(1);

    schedule
        .iter()
        .enumerate()
        .filter(|(i, _)| i % interval == 0 || *i == last)
        .map(|(_, row)| ChartPoint {
            month: row.month,
            balance: whole(row.balance),
            principal: whole(row.principal),
            interest: whole(row.interest),
        })
        .collect()
}

/// Roll the schedule up into loan years. A trailing partial year is kept.
pub fn yearly_summary(schedule: &[AmortizationRow]) -> Vec<YearSummary> {
    schedule
        .chunks(MONTHS_PER_YEAR as usize)
        .zip(1..)
        .map(|(rows, year)| YearSummary {
            year,
            principal_paid: rows.iter().map(|r| r.principal).sum(),
            interest_paid: rows.iter().map(|r| r.interest).sum(),
            closing_balance: rows.last().map(|r| r.balance).unwrap_or(Decimal::ZERO),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::calculate_loan;
    use crate::types::LoanInputs;
    use rust_decimal_macros::dec;

    fn schedule(months: u32) -> Vec<AmortizationRow> {
        let inputs = LoanInputs {
            loan_amount: dec!(120000),
            interest_rate: dec!(6),
            loan_term_months: months,
            down_payment: Decimal::ZERO,
        };
        calculate_loan(&inputs).unwrap().result.amortization_schedule
    }

    #[test]
    fn test_chart_points_yearly_plus_final() {
        let points = chart_points(&schedule(30), 12);
        let months: Vec<u32> = points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![1, 13, 25, 30]);
        assert_eq!(points.last().unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_chart_points_final_row_not_duplicated() {
        let points = chart_points(&schedule(25), 12);
        let months: Vec<u32> = points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![1, 13, 25]);
    }

    #[test]
    fn test_chart_points_rounds_to_whole_units() {
        let points = chart_points(&schedule(12), 12);
        // First month interest: 120000 * 0.005 = 600
        assert_eq!(points[0].interest, dec!(600));
        assert!(points.iter().all(|p| p.balance.fract().is_zero() && p.principal.fract().is_zero()));
    }

    #[test]
    fn test_chart_points_zero_interval_keeps_all() {
        assert_eq!(chart_points(&schedule(5), 0).len(), 5);
        assert!(chart_points(&[], 12).is_empty());
    }

    #[test]
    fn test_yearly_summary_partial_year() {
        let rows = schedule(30);
        let years = yearly_summary(&rows);
        assert_eq!(years.len(), 3);
        assert_eq!(years[2].year, 3);
        assert_eq!(years[2].closing_balance, Decimal::ZERO);

        let principal: Decimal = years.iter().map(|y| y.principal_paid).sum();
        assert!((principal - dec!(120000)).abs() < dec!(0.000001));
    }
}
