//! 账单金额计算

pub mod calculator;

pub use calculator::{InvoiceTotals, build_items, line_total, round_amount, totals};
