use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{model::auth::UserPasswordRow, ConnectionPool};
use crate::redis::RedisClient;

fn auth_key(access_token: &AccessToken) -> String {
    format!("auth:{}", access_token.0)
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let value = self.kv.get(&auth_key(access_token)).await?;
        value
            .map(|raw| {
                raw.parse::<i64>()
                    .map(UserId::new)
                    .map_err(|e| AppError::ConversionEntityError(e.to_string()))
            })
            .transpose()
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserPasswordRow> = sqlx::query_as(
            r#"
                SELECT
                    user_id,
                    password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &row.password_hash)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        self.kv
            .set_ex(
                &auth_key(&access_token),
                &event.user_id.raw().to_string(),
                self.ttl,
            )
            .await?;
        Ok(access_token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.kv.delete(&auth_key(&access_token)).await
    }
}
