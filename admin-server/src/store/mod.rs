//! 内存实体存储层
//!
//! 所有实体保存在进程内存中，进程退出即丢失。每类实体一个
//! [`EntityStore`]，读写通过 `tokio::sync::RwLock` 串行化。
//!
//! # 模块结构
//!
//! - [`entity`] - 泛型实体存储与 ID 生成
//! - 每个实体一个仓库模块 ([`room`], [`booking`], ...)
//! - [`seed`] - 启动示例数据

pub mod booking;
pub mod customer;
pub mod entity;
pub mod invoice;
pub mod room;
pub mod seed;
pub mod service;
pub mod service_usage;
pub mod user;

pub use entity::{Entity, EntityStore, IdGen};

use shared::models::{Booking, Customer, Invoice, Room, Service, ServiceUsage, User};

/// 所有实体存储的集合
///
/// 每个存储相互独立；不做跨实体的引用完整性检查。
#[derive(Debug, Default)]
pub struct Stores {
    pub rooms: EntityStore<Room>,
    pub bookings: EntityStore<Booking>,
    pub customers: EntityStore<Customer>,
    pub users: EntityStore<User>,
    pub services: EntityStore<Service>,
    pub invoices: EntityStore<Invoice>,
    pub service_usage: EntityStore<ServiceUsage>,

    /// 数字主键生成器 (房间 / 预订 / 服务消费记录)
    pub room_ids: IdGen,
    pub booking_ids: IdGen,
    pub usage_ids: IdGen,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}
