//! Hotel Admin Server - 酒店后台管理服务
//!
//! # 架构概述
//!
//! 本模块是 Admin Server 的主入口，提供以下核心功能：
//!
//! - **实体存储** (`store`): 内存实体仓库 (房间/预订/客户/员工/服务/账单)
//! - **认证** (`auth`): 静态 Bearer Token 认证
//! - **账单计算** (`billing`): 金额精度安全的账单汇总
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # Bearer Token 认证
//! ├── store/         # 内存实体仓库与种子数据
//! ├── billing/       # 账单金额计算
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 校验、日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod billing;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use store::Stores;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __
   / / / /___  / /____  / /
  / /_/ / __ \/ __/ _ \/ /
 / __  / /_/ / /_/  __/ /
/_/ /_/\____/\__/\___/_/
    ___       __          _
   /   | ____/ /___ ___  (_)___
  / /| |/ __  / __ `__ \/ / __ \
 / ___ / /_/ / / / / / / / / / /
/_/  |_\__,_/_/ /_/ /_/_/_/ /_/
    "#
    );
}

/// 设置运行环境: dotenv + 日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
