//! Service Repository
//!
//! 酒店服务目录 (客房送餐 / 洗衣 / 接送等)。

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::models::{Service, ServiceCreate, ServiceUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};
use crate::utils::validation::require_text;

impl Entity for Service {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// 服务价格允许为 0 (赠送项目)，但必须有限且非负
fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::new(ErrorCode::ServiceInvalidPrice));
    }
    Ok(())
}

pub async fn find_all(stores: &Stores) -> Vec<Service> {
    stores.services.list().await
}

pub async fn find_by_id(stores: &Stores, id: &str) -> Option<Service> {
    stores.services.get(&id.to_string()).await
}

pub async fn create(stores: &Stores, data: ServiceCreate) -> AppResult<Service> {
    require_text(&data.name, "name")?;
    require_text(&data.description, "description")?;
    require_text(&data.category, "category")?;
    validate_price(data.price)?;

    let now = shared::util::now();
    let service = Service {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        description: data.description,
        price: data.price,
        category: data.category,
        status: data.status,
        image_url: data.image_url,
        created_at: now,
        updated_at: now,
    };

    Ok(stores.services.insert(service).await)
}

pub async fn update(stores: &Stores, id: &str, data: ServiceUpdate) -> AppResult<Service> {
    if let Some(name) = &data.name {
        require_text(name, "name")?;
    }
    if let Some(category) = &data.category {
        require_text(category, "category")?;
    }
    if let Some(price) = data.price {
        validate_price(price)?;
    }

    stores
        .services
        .update_with(&id.to_string(), |service| {
            if let Some(v) = data.name {
                service.name = v;
            }
            if let Some(v) = data.description {
                service.description = v;
            }
            if let Some(v) = data.price {
                service.price = v;
            }
            if let Some(v) = data.category {
                service.category = v;
            }
            if let Some(v) = data.status {
                service.status = v;
            }
            if let Some(v) = data.image_url {
                service.image_url = Some(v);
            }
        })
        .await
        .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound).with_detail("id", id))
}

pub async fn delete(stores: &Stores, id: &str) -> bool {
    stores.services.remove(&id.to_string()).await
}
