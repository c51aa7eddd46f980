//! Booking Repository
//!
//! 预订仓库。状态与入住/退房日期之间不做一致性检查，也不做
//! 同房间日期冲突检测 (待产品决策)。

use chrono::{DateTime, Utc};

use shared::models::{Booking, BookingCreate, BookingStatus, BookingUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};
use crate::utils::validation::require_finite;

impl Entity for Booking {
    type Id = i64;

    fn id(&self) -> i64 {
        self.booking_id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

pub async fn find_all(stores: &Stores) -> Vec<Booking> {
    stores.bookings.list().await
}

pub async fn find_by_id(stores: &Stores, id: i64) -> Option<Booking> {
    stores.bookings.get(&id).await
}

pub async fn create(stores: &Stores, data: BookingCreate) -> AppResult<Booking> {
    require_finite(data.total_price, "totalPrice")?;
    if data.total_price < 0.0 {
        return Err(AppError::validation("Total price must not be negative")
            .with_detail("field", "totalPrice"));
    }

    let now = shared::util::now();
    let booking = Booking {
        booking_id: stores.booking_ids.next_id(),
        customer_id: data.customer_id,
        room_id: data.room_id,
        check_in_date: data.check_in_date,
        check_out_date: data.check_out_date,
        total_price: data.total_price,
        status: data.status.unwrap_or(BookingStatus::Pending),
        created_at: now,
        updated_at: now,
    };

    Ok(stores.bookings.insert(booking).await)
}

pub async fn update(stores: &Stores, id: i64, data: BookingUpdate) -> AppResult<Booking> {
    if let Some(total_price) = data.total_price {
        require_finite(total_price, "totalPrice")?;
        if total_price < 0.0 {
            return Err(AppError::validation("Total price must not be negative")
                .with_detail("field", "totalPrice"));
        }
    }

    stores
        .bookings
        .update_with(&id, |booking| {
            if let Some(v) = data.customer_id {
                booking.customer_id = v;
            }
            if let Some(v) = data.room_id {
                booking.room_id = v;
            }
            if let Some(v) = data.check_in_date {
                booking.check_in_date = v;
            }
            if let Some(v) = data.check_out_date {
                booking.check_out_date = v;
            }
            if let Some(v) = data.total_price {
                booking.total_price = v;
            }
            if let Some(v) = data.status {
                booking.status = v;
            }
        })
        .await
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound).with_detail("bookingId", id))
}

pub async fn delete(stores: &Stores, id: i64) -> bool {
    stores.bookings.remove(&id).await
}
