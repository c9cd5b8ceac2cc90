use async_trait::async_trait;
use derive_new::new;
use kernel::model::{enrollment::Enrollment, id::UserId};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::enrollment::EnrollmentRow, ConnectionPool};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
                SELECT
                    enrollment_id,
                    user_id
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Enrollment::from))
    }
}
