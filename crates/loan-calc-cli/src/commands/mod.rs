pub mod loan;
pub mod products;
