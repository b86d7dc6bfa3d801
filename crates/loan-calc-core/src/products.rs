//! Static catalogue of calculator products offered to brokers.
//!
//! Each product fixes the starting values and slider/select limits of one
//! embedded calculator. The table is compiled in and never mutated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{LoanInputs, Money, Percent};

/// Product used when a requested key is not in the catalogue.
pub const DEFAULT_PRODUCT_KEY: &str = "sba-7a";

/// Starting values and advisory limits for one calculator product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorDefaults {
    pub key: &'static str,
    pub name: &'static str,
    pub default_amount: Money,
    pub default_term: u32,
    pub default_rate: Percent,
    pub min_amount: Money,
    pub max_amount: Money,
    pub term_options: &'static [u32],
}

impl CalculatorDefaults {
    /// Inputs a freshly rendered calculator starts from.
    pub fn default_inputs(&self) -> LoanInputs {
        LoanInputs {
            loan_amount: self.default_amount,
            interest_rate: self.default_rate,
            loan_term_months: self.default_term,
            down_payment: Decimal::ZERO,
        }
    }

    pub fn allows_term(&self, months: u32) -> bool {
        self.term_options.contains(&months)
    }

    pub fn amount_in_range(&self, amount: Money) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

static CALCULATOR_DEFAULTS: &[CalculatorDefaults] = &[
    CalculatorDefaults {
        key: "sba-7a",
        name: "SBA 7(a) Loan Calculator",
        default_amount: dec!(500000),
        default_term: 120,
        default_rate: dec!(11.5),
        min_amount: dec!(5000),
        max_amount: dec!(5000000),
        term_options: &[60, 84, 120, 180, 300],
    },
    CalculatorDefaults {
        key: "sba-504",
        name: "SBA 504 Loan Calculator",
        default_amount: dec!(1000000),
        default_term: 240,
        default_rate: dec!(6.5),
        min_amount: dec!(125000),
        max_amount: dec!(5500000),
        term_options: &[120, 180, 240, 300],
    },
    CalculatorDefaults {
        key: "equipment",
        name: "Equipment Financing Calculator",
        default_amount: dec!(250000),
        default_term: 60,
        default_rate: dec!(9.5),
        min_amount: dec!(10000),
        max_amount: dec!(5000000),
        term_options: &[36, 48, 60, 84],
    },
    CalculatorDefaults {
        key: "working-capital",
        name: "Working Capital Loan Calculator",
        default_amount: dec!(100000),
        default_term: 24,
        default_rate: dec!(15),
        min_amount: dec!(5000),
        max_amount: dec!(500000),
        term_options: &[6, 12, 18, 24, 36],
    },
    CalculatorDefaults {
        key: "franchise",
        name: "Franchise Loan Calculator",
        default_amount: dec!(350000),
        default_term: 120,
        default_rate: dec!(11),
        min_amount: dec!(50000),
        max_amount: dec!(5000000),
        term_options: &[60, 84, 120, 180],
    },
    CalculatorDefaults {
        key: "business-acquisition",
        name: "Business Acquisition Loan Calculator",
        default_amount: dec!(750000),
        default_term: 120,
        default_rate: dec!(10.5),
        min_amount: dec!(50000),
        max_amount: dec!(5000000),
        term_options: &[60, 84, 120, 180, 240],
    },
    CalculatorDefaults {
        key: "commercial-property",
        name: "Commercial Property Loan Calculator",
        default_amount: dec!(2000000),
        default_term: 300,
        default_rate: dec!(7.5),
        min_amount: dec!(100000),
        max_amount: dec!(50000000),
        term_options: &[120, 180, 240, 300, 360],
    },
    CalculatorDefaults {
        key: "multi-family",
        name: "Multi-Family Property Loan Calculator",
        default_amount: dec!(3000000),
        default_term: 300,
        default_rate: dec!(7.25),
        min_amount: dec!(250000),
        max_amount: dec!(50000000),
        term_options: &[180, 240, 300, 360],
    },
    CalculatorDefaults {
        key: "office-retail",
        name: "Office/Retail Space Loan Calculator",
        default_amount: dec!(1500000),
        default_term: 240,
        default_rate: dec!(7.75),
        min_amount: dec!(150000),
        max_amount: dec!(25000000),
        term_options: &[120, 180, 240, 300],
    },
    CalculatorDefaults {
        key: "line-of-credit",
        name: "Line of Credit Calculator",
        default_amount: dec!(250000),
        default_term: 12,
        default_rate: dec!(12),
        min_amount: dec!(10000),
        max_amount: dec!(1000000),
        term_options: &[6, 12, 18, 24, 36],
    },
    CalculatorDefaults {
        key: "invoice-financing",
        name: "Invoice Financing Calculator",
        default_amount: dec!(100000),
        default_term: 3,
        default_rate: dec!(18),
        min_amount: dec!(5000),
        max_amount: dec!(500000),
        term_options: &[1, 3, 6, 12],
    },
    CalculatorDefaults {
        key: "merchant-cash-advance",
        name: "Merchant Cash Advance Calculator",
        default_amount: dec!(50000),
        default_term: 12,
        default_rate: dec!(35),
        min_amount: dec!(5000),
        max_amount: dec!(500000),
        term_options: &[3, 6, 9, 12, 18],
    },
    CalculatorDefaults {
        key: "construction-loan",
        name: "Construction Loan Calculator",
        default_amount: dec!(2500000),
        default_term: 24,
        default_rate: dec!(8.5),
        min_amount: dec!(100000),
        max_amount: dec!(25000000),
        term_options: &[12, 18, 24, 36],
    },
    CalculatorDefaults {
        key: "bridge-loan",
        name: "Bridge Loan Calculator",
        default_amount: dec!(1000000),
        default_term: 12,
        default_rate: dec!(10),
        min_amount: dec!(50000),
        max_amount: dec!(10000000),
        term_options: &[6, 12, 18, 24],
    },
    CalculatorDefaults {
        key: "land-loan",
        name: "Land Loan Calculator",
        default_amount: dec!(500000),
        default_term: 180,
        default_rate: dec!(9),
        min_amount: dec!(25000),
        max_amount: dec!(10000000),
        term_options: &[60, 120, 180, 240],
    },
    CalculatorDefaults {
        key: "term-loan",
        name: "Term Loan Calculator",
        default_amount: dec!(300000),
        default_term: 60,
        default_rate: dec!(11),
        min_amount: dec!(10000),
        max_amount: dec!(5000000),
        term_options: &[12, 24, 36, 60, 84, 120],
    },
    CalculatorDefaults {
        key: "asset-based",
        name: "Asset-Based Lending Calculator",
        default_amount: dec!(500000),
        default_term: 36,
        default_rate: dec!(13),
        min_amount: dec!(50000),
        max_amount: dec!(10000000),
        term_options: &[12, 24, 36, 48, 60],
    },
    CalculatorDefaults {
        key: "inventory-financing",
        name: "Inventory Financing Calculator",
        default_amount: dec!(200000),
        default_term: 12,
        default_rate: dec!(14),
        min_amount: dec!(10000),
        max_amount: dec!(2000000),
        term_options: &[6, 12, 18, 24, 36],
    },
];

/// Every product in catalogue order.
pub fn calculator_catalogue() -> &'static [CalculatorDefaults] {
    CALCULATOR_DEFAULTS
}

/// Strict lookup by product key.
pub fn find_calculator_defaults(key: &str) -> Option<&'static CalculatorDefaults> {
    CALCULATOR_DEFAULTS.iter().find(|d| d.key == key)
}

/// Look up a product, falling back to [`DEFAULT_PRODUCT_KEY`] for unknown keys.
pub fn get_calculator_defaults(key: &str) -> &'static CalculatorDefaults {
    find_calculator_defaults(key).unwrap_or(&CALCULATOR_DEFAULTS[0])
}
