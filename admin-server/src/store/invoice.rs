//! Invoice Repository
//!
//! 账单仓库。行项目在写入前校验，金额一律由服务端重新计算，
//! 客户端提交的 total/subtotal 不会被采信。

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::models::{Invoice, InvoiceCreate, InvoiceItemInput, InvoiceUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::billing;
use crate::store::{Entity, Stores};
use crate::utils::validation::{require_finite, require_text};

impl Entity for Invoice {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// 行项目校验: 数量为正、单价有限且非负
fn validate_items(items: &[InvoiceItemInput]) -> AppResult<()> {
    for (index, item) in items.iter().enumerate() {
        if item.quantity <= 0 {
            return Err(AppError::new(ErrorCode::InvoiceInvalidItem)
                .with_detail("index", index as i64)
                .with_detail("reason", "quantity must be positive"));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(AppError::new(ErrorCode::InvoiceInvalidItem)
                .with_detail("index", index as i64)
                .with_detail("reason", "price must be a non-negative number"));
        }
    }
    Ok(())
}

fn validate_tax(tax: f64) -> AppResult<()> {
    require_finite(tax, "tax")?;
    if tax < 0.0 {
        return Err(AppError::validation("Tax must not be negative").with_detail("field", "tax"));
    }
    Ok(())
}

pub async fn find_all(stores: &Stores) -> Vec<Invoice> {
    stores.invoices.list().await
}

pub async fn find_by_id(stores: &Stores, id: &str) -> Option<Invoice> {
    stores.invoices.get(&id.to_string()).await
}

pub async fn create(stores: &Stores, data: InvoiceCreate) -> AppResult<Invoice> {
    require_text(&data.customer_id, "customerId")?;
    require_text(&data.customer_name, "customerName")?;
    if data.items.is_empty() {
        return Err(AppError::new(ErrorCode::InvoiceEmptyItems));
    }
    validate_items(&data.items)?;

    let tax = data.tax.unwrap_or(0.0);
    validate_tax(tax)?;
    // 税额与汇总同精度入库，保证 total == subtotal + tax
    let tax = billing::round_amount(tax);

    let items = billing::build_items(&data.items);
    let totals = billing::totals(&items, tax);

    let now = shared::util::now();
    let invoice = Invoice {
        id: Uuid::new_v4().to_string(),
        customer_id: data.customer_id,
        customer_name: data.customer_name,
        items,
        subtotal: totals.subtotal,
        tax,
        total: totals.total,
        status: data.status,
        payment_method: data.payment_method,
        notes: data.notes,
        created_at: now,
        updated_at: now,
    };

    Ok(stores.invoices.insert(invoice).await)
}

pub async fn update(stores: &Stores, id: &str, data: InvoiceUpdate) -> AppResult<Invoice> {
    if let Some(customer_name) = &data.customer_name {
        require_text(customer_name, "customerName")?;
    }
    let new_items = match &data.items {
        Some(items) => {
            if items.is_empty() {
                return Err(AppError::new(ErrorCode::InvoiceEmptyItems));
            }
            validate_items(items)?;
            Some(billing::build_items(items))
        }
        None => None,
    };
    if let Some(tax) = data.tax {
        validate_tax(tax)?;
    }

    stores
        .invoices
        .update_with(&id.to_string(), |invoice| {
            if let Some(v) = data.customer_id {
                invoice.customer_id = v;
            }
            if let Some(v) = data.customer_name {
                invoice.customer_name = v;
            }
            if let Some(v) = new_items {
                invoice.items = v;
            }
            if let Some(v) = data.tax {
                invoice.tax = billing::round_amount(v);
            }
            if let Some(v) = data.status {
                invoice.status = v;
            }
            if let Some(v) = data.payment_method {
                invoice.payment_method = Some(v);
            }
            if let Some(v) = data.notes {
                invoice.notes = Some(v);
            }

            // 任何字段变化后都重算汇总，保证 subtotal/total 不变式
            let totals = billing::totals(&invoice.items, invoice.tax);
            invoice.subtotal = totals.subtotal;
            invoice.total = totals.total;
        })
        .await
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id))
}

pub async fn delete(stores: &Stores, id: &str) -> bool {
    stores.invoices.remove(&id.to_string()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::InvoiceStatus;

    fn item(quantity: i64, price: f64) -> InvoiceItemInput {
        InvoiceItemInput {
            service_id: "1".to_string(),
            service_name: "Room Service".to_string(),
            quantity,
            price,
        }
    }

    fn invoice_payload() -> InvoiceCreate {
        InvoiceCreate {
            customer_id: "1".to_string(),
            customer_name: "Jordan Ellis".to_string(),
            items: vec![item(2, 15.0), item(1, 25.0)],
            tax: Some(5.5),
            status: InvoiceStatus::Pending,
            payment_method: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_computes_totals() {
        let stores = Stores::new();
        let invoice = create(&stores, invoice_payload()).await.unwrap();

        assert_eq!(invoice.subtotal, 55.0);
        assert_eq!(invoice.tax, 5.5);
        assert_eq!(invoice.total, 60.5);
        assert_eq!(invoice.items[0].total, 30.0);
    }

    #[tokio::test]
    async fn test_sub_cent_tax_is_rounded_before_storage() {
        // 亚分税额按半进位规整入库，三元组不变式保持成立
        let stores = Stores::new();
        let mut payload = invoice_payload();
        payload.items = vec![item(1, 10.0)];
        payload.tax = Some(0.005);
        let invoice = create(&stores, payload).await.unwrap();

        assert_eq!(invoice.tax, 0.01);
        assert_eq!(invoice.subtotal, 10.0);
        assert_eq!(invoice.total, 10.01);
        assert!((invoice.total - (invoice.subtotal + invoice.tax)).abs() < 1e-9);

        // 更新路径同样规整
        let updated = update(
            &stores,
            &invoice.id,
            InvoiceUpdate {
                tax: Some(1.234),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.tax, 1.23);
        assert!((updated.total - (updated.subtotal + updated.tax)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_create_defaults_tax_to_zero() {
        let stores = Stores::new();
        let mut payload = invoice_payload();
        payload.tax = None;
        let invoice = create(&stores, payload).await.unwrap();

        assert_eq!(invoice.tax, 0.0);
        assert_eq!(invoice.total, invoice.subtotal);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_items() {
        let stores = Stores::new();
        let mut payload = invoice_payload();
        payload.items.clear();
        assert_eq!(
            create(&stores, payload).await.unwrap_err().code,
            ErrorCode::InvoiceEmptyItems
        );
    }

    #[tokio::test]
    async fn test_create_rejects_bad_items() {
        let stores = Stores::new();

        let mut zero_qty = invoice_payload();
        zero_qty.items = vec![item(0, 10.0)];
        assert_eq!(
            create(&stores, zero_qty).await.unwrap_err().code,
            ErrorCode::InvoiceInvalidItem
        );

        let mut nan_price = invoice_payload();
        nan_price.items = vec![item(1, f64::NAN)];
        assert_eq!(
            create(&stores, nan_price).await.unwrap_err().code,
            ErrorCode::InvoiceInvalidItem
        );
    }

    #[tokio::test]
    async fn test_update_items_recomputes_totals() {
        let stores = Stores::new();
        let invoice = create(&stores, invoice_payload()).await.unwrap();

        let updated = update(
            &stores,
            &invoice.id,
            InvoiceUpdate {
                items: Some(vec![item(3, 10.0)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.subtotal, 30.0);
        assert_eq!(updated.total, 35.5); // 税额沿用 5.50
    }

    #[tokio::test]
    async fn test_update_tax_only_recomputes_total() {
        let stores = Stores::new();
        let invoice = create(&stores, invoice_payload()).await.unwrap();

        let updated = update(
            &stores,
            &invoice.id,
            InvoiceUpdate {
                tax: Some(10.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.subtotal, 55.0);
        assert_eq!(updated.total, 65.0);
    }

    #[tokio::test]
    async fn test_update_missing_invoice() {
        let stores = Stores::new();
        let err = update(&stores, "missing", InvoiceUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotFound);
    }
}
