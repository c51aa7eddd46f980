//! Customer Repository

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::models::{Customer, CustomerCreate, CustomerStatus, CustomerUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};
use crate::utils::validation::{is_valid_email, is_valid_phone, require_text};

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    if !is_valid_email(email) {
        return Err(AppError::new(ErrorCode::CustomerInvalidEmail).with_detail("field", "email"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> AppResult<()> {
    if !is_valid_phone(phone) {
        return Err(AppError::new(ErrorCode::CustomerInvalidPhone).with_detail("field", "phone"));
    }
    Ok(())
}

pub async fn find_all(stores: &Stores) -> Vec<Customer> {
    stores.customers.list().await
}

pub async fn find_by_id(stores: &Stores, id: &str) -> Option<Customer> {
    stores.customers.get(&id.to_string()).await
}

pub async fn create(stores: &Stores, data: CustomerCreate) -> AppResult<Customer> {
    require_text(&data.name, "name")?;
    require_text(&data.email, "email")?;
    require_text(&data.phone, "phone")?;
    validate_email(&data.email)?;
    validate_phone(&data.phone)?;

    let now = shared::util::now();
    let customer = Customer {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        email: data.email,
        phone: data.phone,
        address: data.address,
        status: data.status.unwrap_or(CustomerStatus::Active),
        created_at: now,
        updated_at: now,
    };

    Ok(stores.customers.insert(customer).await)
}

pub async fn update(stores: &Stores, id: &str, data: CustomerUpdate) -> AppResult<Customer> {
    if let Some(name) = &data.name {
        require_text(name, "name")?;
    }
    if let Some(email) = &data.email {
        validate_email(email)?;
    }
    if let Some(phone) = &data.phone {
        validate_phone(phone)?;
    }

    stores
        .customers
        .update_with(&id.to_string(), |customer| {
            if let Some(v) = data.name {
                customer.name = v;
            }
            if let Some(v) = data.email {
                customer.email = v;
            }
            if let Some(v) = data.phone {
                customer.phone = v;
            }
            if let Some(v) = data.address {
                customer.address = Some(v);
            }
            if let Some(v) = data.status {
                customer.status = v;
            }
        })
        .await
        .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id))
}

pub async fn delete(stores: &Stores, id: &str) -> bool {
    stores.customers.remove(&id.to_string()).await
}
