//! User Repository
//!
//! 员工账户仓库。密码在上游散列，这里按不透明字符串保存；
//! 查询接口一律返回不含密码的 [`UserResponse`]。

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::models::{User, UserCreate, UserResponse, UserStatus, UserUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::store::{Entity, Stores};
use crate::utils::validation::{is_valid_email, is_valid_phone, require_text};

impl Entity for User {
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
        return Err(AppError::new(ErrorCode::UserInvalidEmail).with_detail("field", "email"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> AppResult<()> {
    if !is_valid_phone(phone) {
        return Err(
            AppError::validation("Invalid phone number format").with_detail("field", "phone")
        );
    }
    Ok(())
}

pub async fn find_all(stores: &Stores) -> Vec<UserResponse> {
    stores
        .users
        .list()
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect()
}

pub async fn find_by_id(stores: &Stores, id: &str) -> Option<UserResponse> {
    stores
        .users
        .get(&id.to_string())
        .await
        .map(UserResponse::from)
}

pub async fn create(stores: &Stores, data: UserCreate) -> AppResult<UserResponse> {
    require_text(&data.username, "username")?;
    require_text(&data.password, "password")?;
    require_text(&data.first_name, "firstName")?;
    require_text(&data.last_name, "lastName")?;
    validate_email(&data.email)?;
    validate_phone(&data.phone)?;

    let now = shared::util::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        username: data.username,
        email: data.email,
        password: data.password,
        role: data.role,
        first_name: data.first_name,
        last_name: data.last_name,
        phone: data.phone,
        status: UserStatus::Active,
        last_login: now,
        created_at: now,
        updated_at: now,
    };

    Ok(stores.users.insert(user).await.into())
}

pub async fn update(stores: &Stores, id: &str, data: UserUpdate) -> AppResult<UserResponse> {
    if let Some(email) = &data.email {
        validate_email(email)?;
    }
    if let Some(phone) = &data.phone {
        validate_phone(phone)?;
    }
    if let Some(password) = &data.password {
        require_text(password, "password")?;
    }

    stores
        .users
        .update_with(&id.to_string(), |user| {
            if let Some(v) = data.email {
                user.email = v;
            }
            if let Some(v) = data.password {
                user.password = v;
            }
            if let Some(v) = data.role {
                user.role = v;
            }
            if let Some(v) = data.first_name {
                user.first_name = v;
            }
            if let Some(v) = data.last_name {
                user.last_name = v;
            }
            if let Some(v) = data.phone {
                user.phone = v;
            }
            if let Some(v) = data.status {
                user.status = v;
            }
        })
        .await
        .map(UserResponse::from)
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound).with_detail("id", id))
}

pub async fn delete(stores: &Stores, id: &str) -> bool {
    stores.users.remove(&id.to_string()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn user_payload() -> UserCreate {
        UserCreate {
            username: "mchen".to_string(),
            email: "m.chen@hotel.example".to_string(),
            password: "$argon2id$stub".to_string(),
            role: UserRole::Receptionist,
            first_name: "Mei".to_string(),
            last_name: "Chen".to_string(),
            phone: "+1 555-880-1100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_response_without_password() {
        let stores = Stores::new();
        let user = create(&stores, user_payload()).await.unwrap();

        assert_eq!(user.status, UserStatus::Active);
        // 序列化后不能出现密码字段
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let stores = Stores::new();
        let mut bad = user_payload();
        bad.email = "m.chen@hotel".to_string();
        assert_eq!(
            create(&stores, bad).await.unwrap_err().code,
            ErrorCode::UserInvalidEmail
        );
    }

    #[tokio::test]
    async fn test_update_role_and_status() {
        let stores = Stores::new();
        let user = create(&stores, user_payload()).await.unwrap();

        let updated = update(
            &stores,
            &user.id,
            UserUpdate {
                role: Some(UserRole::Manager),
                status: Some(UserStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.role, UserRole::Manager);
        assert_eq!(updated.status, UserStatus::Inactive);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let stores = Stores::new();
        let err = update(&stores, "ghost", UserUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
