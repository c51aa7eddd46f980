//! 账单金额计算
//!
//! 所有金额运算走 `Decimal`，只在出入口转换 f64，避免二进制浮点
//! 累加误差。金额统一保留两位小数，四舍五入 (half-up)。
//!
//! 计算本身永不失败：非法输入 (NaN/无穷) 按 0 计入并记录告警，
//! 拒绝非法输入是存储层校验的职责。

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use shared::models::{InvoiceItem, InvoiceItemInput};

/// 金额小数位数
pub const MONEY_DP: u32 = 2;

/// 账单汇总金额
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    /// 所有行金额之和
    pub subtotal: f64,
    /// subtotal + tax (tax 是固定金额，不是税率)
    pub total: f64,
}

fn money(value: f64) -> Decimal {
    match Decimal::from_f64(value) {
        Some(d) => d,
        None => {
            tracing::warn!(value, "Non-finite amount treated as zero in invoice math");
            Decimal::ZERO
        }
    }
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// 单行金额: quantity × price，保留两位小数
pub fn line_total(quantity: i64, price: f64) -> f64 {
    round_money(Decimal::from(quantity) * money(price))
        .to_f64()
        .unwrap_or(0.0)
}

/// 单个金额规整到两位小数 (入库前的税额等)
///
/// 存储的 tax 必须和 subtotal/total 同精度，否则
/// `total == subtotal + tax` 对亚分税额不成立。
pub fn round_amount(value: f64) -> f64 {
    round_money(money(value)).to_f64().unwrap_or(0.0)
}

/// 从客户端提交的行项目派生完整行项目 (服务端计算 total)
pub fn build_items(inputs: &[InvoiceItemInput]) -> Vec<InvoiceItem> {
    inputs
        .iter()
        .map(|input| InvoiceItem {
            service_id: input.service_id.clone(),
            service_name: input.service_name.clone(),
            quantity: input.quantity,
            price: input.price,
            total: line_total(input.quantity, input.price),
        })
        .collect()
}

/// 汇总账单金额
///
/// 行金额在 `Decimal` 域中累加后再加税，最后各自保留两位小数。
pub fn totals(items: &[InvoiceItem], tax: f64) -> InvoiceTotals {
    let subtotal = round_money(
        items
            .iter()
            .map(|item| money(item.total))
            .sum::<Decimal>(),
    );
    let total = round_money(subtotal + money(tax));

    InvoiceTotals {
        subtotal: subtotal.to_f64().unwrap_or(0.0),
        total: total.to_f64().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(quantity: i64, price: f64) -> InvoiceItemInput {
        InvoiceItemInput {
            service_id: "1".to_string(),
            service_name: "Room Service".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2, 15.0), 30.0);
        assert_eq!(line_total(3, 9.99), 29.97);
        assert_eq!(line_total(0, 100.0), 0.0);
    }

    #[test]
    fn test_line_total_rounds_half_up() {
        // 3 × 0.335 = 1.005 → 1.01
        assert_eq!(line_total(3, 0.335), 1.01);
    }

    #[test]
    fn test_totals_reference_case() {
        // 2 × 15.00 + 1 × 25.00 = 55.00, tax 5.50 → 60.50
        let items = build_items(&[input(2, 15.0), input(1, 25.0)]);
        let t = totals(&items, 5.5);
        assert_eq!(t.subtotal, 55.0);
        assert_eq!(t.total, 60.5);
    }

    #[test]
    fn test_totals_avoid_float_drift() {
        // 0.1 + 0.2 三倍场景，朴素 f64 累加会得到 0.30000000000000004
        let items = build_items(&[input(1, 0.1), input(1, 0.2)]);
        let t = totals(&items, 0.0);
        assert_eq!(t.subtotal, 0.3);
        assert_eq!(t.total, 0.3);
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(0.005), 0.01);
        assert_eq!(round_amount(1.234), 1.23);
        assert_eq!(round_amount(5.5), 5.5);
        assert_eq!(round_amount(f64::NAN), 0.0);
    }

    #[test]
    fn test_totals_empty_items() {
        let t = totals(&[], 5.0);
        assert_eq!(t.subtotal, 0.0);
        assert_eq!(t.total, 5.0);
    }

    #[test]
    fn test_total_is_subtotal_plus_tax() {
        let items = build_items(&[input(3, 12.25), input(2, 7.5), input(1, 99.99)]);
        for tax in [0.0, 1.25, 10.0, 42.42] {
            let t = totals(&items, tax);
            assert!((t.total - (t.subtotal + tax)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_finite_amounts_contribute_zero() {
        let items = build_items(&[input(1, f64::NAN), input(2, 10.0)]);
        assert_eq!(items[0].total, 0.0);

        let t = totals(&items, f64::INFINITY);
        assert_eq!(t.subtotal, 20.0);
        assert_eq!(t.total, 20.0);
    }

    #[test]
    fn test_build_items_overrides_client_total() {
        let items = build_items(&[input(4, 2.5)]);
        assert_eq!(items[0].total, 10.0);
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[0].price, 2.5);
    }
}
