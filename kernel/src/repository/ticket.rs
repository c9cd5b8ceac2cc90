use crate::model::{id::EnrollmentId, ticket::Ticket};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    // A ticket is unique per enrollment; the ticket type is resolved
    // together with it.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>>;
}
