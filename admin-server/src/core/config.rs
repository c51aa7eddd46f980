/// 服务器配置 - 后台管理服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | API_TOKEN | (无) | 静态 API 令牌，未设置时所有受保护接口返回 503 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，未设置时只输出到控制台 |
/// | SEED_DATA | true | 启动时是否加载示例数据 |
///
/// # 示例
///
/// ```ignore
/// API_TOKEN=secret HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 静态 API 令牌。None 表示服务未配置认证，受保护接口一律 503
    pub api_token: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 启动时是否加载示例数据
    pub seed_data: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            // 空字符串视为未配置
            api_token: std::env::var("API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            seed_data: std::env::var("SEED_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(api_token: Option<impl Into<String>>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.api_token = api_token.map(Into::into);
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
