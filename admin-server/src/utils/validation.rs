//! 字段级校验助手
//!
//! 校验规则与现有管理前端保持一致：前端放行的值这里也放行。

use std::sync::LazyLock;

use regex::Regex;
use shared::{AppError, AppResult, ErrorCode};

/// 房间号: 仅字母和数字，非空
static ROOM_NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("invalid room number regex"));

/// 邮箱: 宽松格式，local@domain.tld，不含空白
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// 电话: 可选 + 前缀，之后至少 10 位数字/空格/连字符
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s-]{10,}$").expect("invalid phone regex"));

pub fn is_valid_room_num(value: &str) -> bool {
    ROOM_NUM_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// 价格必须是有限的正数
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// 必填文本字段: 去除首尾空白后非空
pub fn require_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, format!("{} is required", field))
                .with_detail("field", field),
        );
    }
    Ok(())
}

/// 必填数字字段: 有限值
pub fn require_finite(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{} must be a finite number", field),
        )
        .with_detail("field", field));
    }
    Ok(())
}
