//! Service Usage Repository
//!
//! 服务消费记录，关联预订与服务。bookingId / serviceId 只作为
//! 数字引用保存，不做跨仓库的存在性检查。

use chrono::{DateTime, Utc};

use shared::models::{ServiceUsage, ServiceUsageCreate, ServiceUsageUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};

impl Entity for ServiceUsage {
    type Id = i64;

    fn id(&self) -> i64 {
        self.usage_id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

fn validate_quantity(quantity: i64) -> AppResult<()> {
    if quantity <= 0 {
        return Err(
            AppError::validation("Quantity must be positive").with_detail("field", "quantity")
        );
    }
    Ok(())
}

pub async fn find_all(stores: &Stores) -> Vec<ServiceUsage> {
    stores.service_usage.list().await
}

pub async fn find_by_id(stores: &Stores, id: i64) -> Option<ServiceUsage> {
    stores.service_usage.get(&id).await
}

pub async fn create(stores: &Stores, data: ServiceUsageCreate) -> AppResult<ServiceUsage> {
    validate_quantity(data.quantity)?;

    let now = shared::util::now();
    let usage = ServiceUsage {
        usage_id: stores.usage_ids.next_id(),
        booking_id: data.booking_id,
        service_id: data.service_id,
        quantity: data.quantity,
        created_at: now,
        updated_at: now,
    };

    Ok(stores.service_usage.insert(usage).await)
}

pub async fn update(stores: &Stores, id: i64, data: ServiceUsageUpdate) -> AppResult<ServiceUsage> {
    if let Some(quantity) = data.quantity {
        validate_quantity(quantity)?;
    }

    stores
        .service_usage
        .update_with(&id, |usage| {
            if let Some(v) = data.booking_id {
                usage.booking_id = v;
            }
            if let Some(v) = data.service_id {
                usage.service_id = v;
            }
            if let Some(v) = data.quantity {
                usage.quantity = v;
            }
        })
        .await
        .ok_or_else(|| AppError::new(ErrorCode::UsageNotFound).with_detail("usageId", id))
}

pub async fn delete(stores: &Stores, id: i64) -> bool {
    stores.service_usage.remove(&id).await
}
