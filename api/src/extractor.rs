use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{auth::AccessToken, id::UserId};
use registry::AppRegistry;
use shared::error::AppError;

// Resolves the bearer token of the incoming request to a user id.
// Token verification itself lives behind the auth repository; handlers
// only ever see an already-authenticated user.
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[axum::async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, registry)
                .await
                .map_err(|_| AppError::UnauthenticatedError)?;

        let access_token = AccessToken(bearer.token().to_string());
        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            user_id,
        })
    }
}
