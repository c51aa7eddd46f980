//! Server State
//!
//! 服务器共享状态，注入到所有 HTTP 处理器

use std::sync::Arc;

use crate::core::Config;
use crate::store::{Stores, seed};

/// 服务器状态
///
/// Clone 很廉价：所有存储都在 `Arc` 后面，克隆只增加引用计数。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub stores: Arc<Stores>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// `seed_data` 开启时加载示例数据集 (每个实体 5 条记录)
    pub async fn initialize(config: &Config) -> Self {
        let stores = if config.seed_data {
            seed::seeded_stores().await
        } else {
            Stores::new()
        };

        tracing::info!(
            rooms = stores.rooms.len().await,
            bookings = stores.bookings.len().await,
            customers = stores.customers.len().await,
            "Entity stores initialized"
        );

        Self {
            config: config.clone(),
            stores: Arc::new(stores),
        }
    }

    /// 空状态 (无种子数据)，测试用
    pub fn empty(config: Config) -> Self {
        Self {
            config,
            stores: Arc::new(Stores::new()),
        }
    }
}
