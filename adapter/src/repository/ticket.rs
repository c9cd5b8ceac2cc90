use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::EnrollmentId, ticket::Ticket};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::TicketRow, ConnectionPool};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    // チケットとチケット種別を同時に取得する
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    t.ticket_id,
                    t.enrollment_id,
                    t.status,
                    tt.ticket_type_id,
                    tt.ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
                WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Ticket::try_from).transpose()
    }
}
