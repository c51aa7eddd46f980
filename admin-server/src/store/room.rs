//! Room Repository
//!
//! 房间仓库：CRUD + 房间号唯一性约束。

use chrono::{DateTime, Utc};

use shared::models::{Room, RoomCreate, RoomStatus, RoomUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};
use crate::utils::validation::{is_valid_price, is_valid_room_num, require_text};

impl Entity for Room {
    type Id = i64;

    fn id(&self) -> i64 {
        self.room_id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

pub async fn find_all(stores: &Stores) -> Vec<Room> {
    stores.rooms.list().await
}

pub async fn find_by_id(stores: &Stores, id: i64) -> Option<Room> {
    stores.rooms.get(&id).await
}

/// 按房型查找第一个匹配的房间 (忽略大小写)
pub async fn find_by_room_type(stores: &Stores, room_type: &str) -> Option<Room> {
    stores
        .rooms
        .find(|r| r.room_type.eq_ignore_ascii_case(room_type))
        .await
}

fn validate_room_num(room_num: &str) -> AppResult<()> {
    require_text(room_num, "roomNum")?;
    if !is_valid_room_num(room_num) {
        return Err(AppError::validation(
            "Room number must contain only letters and digits",
        )
        .with_detail("field", "roomNum"));
    }
    Ok(())
}

fn validate_price(price: f64) -> AppResult<()> {
    if !is_valid_price(price) {
        return Err(AppError::new(ErrorCode::RoomInvalidPrice));
    }
    Ok(())
}

pub async fn create(stores: &Stores, data: RoomCreate) -> AppResult<Room> {
    validate_room_num(&data.room_num)?;
    require_text(&data.room_type, "roomType")?;
    require_text(&data.description, "description")?;
    validate_price(data.price)?;

    let now = shared::util::now();
    let room = Room {
        room_id: stores.room_ids.next_id(),
        room_num: data.room_num,
        room_type: data.room_type,
        price: data.price,
        status: data.status.unwrap_or(RoomStatus::Available),
        description: data.description,
        created_at: now,
        updated_at: now,
    };

    // 唯一性检查与写入在同一把写锁下完成
    stores
        .rooms
        .with_records(|records| {
            if records.iter().any(|r| r.room_num == room.room_num) {
                return Err(AppError::new(ErrorCode::RoomNumberExists)
                    .with_detail("roomNum", room.room_num.clone()));
            }
            records.push(room.clone());
            Ok(room)
        })
        .await
}

pub async fn update(stores: &Stores, id: i64, data: RoomUpdate) -> AppResult<Room> {
    if let Some(room_num) = &data.room_num {
        validate_room_num(room_num)?;
    }
    if let Some(room_type) = &data.room_type {
        require_text(room_type, "roomType")?;
    }
    if let Some(description) = &data.description {
        require_text(description, "description")?;
    }
    if let Some(price) = data.price {
        validate_price(price)?;
    }

    stores
        .rooms
        .with_records(|records| {
            if let Some(new_num) = &data.room_num
                && records
                    .iter()
                    .any(|r| r.room_id != id && r.room_num == *new_num)
            {
                return Err(AppError::new(ErrorCode::RoomNumberExists)
                    .with_detail("roomNum", new_num.clone()));
            }

            let room = records
                .iter_mut()
                .find(|r| r.room_id == id)
                .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("roomId", id))?;

            if let Some(v) = data.room_num {
                room.room_num = v;
            }
            if let Some(v) = data.room_type {
                room.room_type = v;
            }
            if let Some(v) = data.price {
                room.price = v;
            }
            if let Some(v) = data.status {
                room.status = v;
            }
            if let Some(v) = data.description {
                room.description = v;
            }
            room.touch(Utc::now());

            Ok(room.clone())
        })
        .await
}

pub async fn delete(stores: &Stores, id: i64) -> bool {
    stores.rooms.remove(&id).await
}
