use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    id::UserId,
    ticket::{Ticket, TicketStatus},
};
use crate::repository::{enrollment::EnrollmentRepository, ticket::TicketRepository};

// Decides whether a user's enrollment and ticket entitle them to book a
// hotel room at all. The checks run in a fixed order and the first
// failure wins. Reason strings are diagnostic; callers branch on the
// error kind only.
#[derive(new)]
pub struct EntitlementResolver {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl EntitlementResolver {
    pub async fn resolve(&self, user_id: UserId) -> AppResult<Ticket> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::ForbiddenOperation("user does not have an enrollment".into())
            })?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.enrollment_id)
            .await?
            .ok_or_else(|| AppError::ForbiddenOperation("user does not have a ticket".into()))?;

        if ticket.ticket_type.is_remote {
            return Err(AppError::ForbiddenOperation("ticket is remote".into()));
        }
        if !ticket.ticket_type.includes_hotel {
            return Err(AppError::ForbiddenOperation(
                "ticket does not include hotel".into(),
            ));
        }
        if ticket.status != TicketStatus::Paid {
            return Err(AppError::ForbiddenOperation("ticket is not paid".into()));
        }

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::support::{
        enrollment, paid_hotel_ticket, InMemoryEnrollmentRepository, InMemoryTicketRepository,
    };

    const USER_ID: i64 = 1;
    const ENROLLMENT_ID: i64 = 10;

    fn resolver(
        enrollments: Vec<crate::model::enrollment::Enrollment>,
        tickets: Vec<Ticket>,
    ) -> EntitlementResolver {
        EntitlementResolver::new(
            Arc::new(InMemoryEnrollmentRepository::new(enrollments)),
            Arc::new(InMemoryTicketRepository::new(tickets)),
        )
    }

    #[tokio::test]
    async fn fails_when_user_has_no_enrollment() {
        let resolver = resolver(vec![], vec![paid_hotel_ticket(ENROLLMENT_ID)]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn fails_when_enrollment_has_no_ticket() {
        let resolver = resolver(vec![enrollment(ENROLLMENT_ID, USER_ID)], vec![]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn fails_when_ticket_is_remote() {
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.ticket_type.is_remote = true;
        let resolver = resolver(vec![enrollment(ENROLLMENT_ID, USER_ID)], vec![ticket]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn fails_when_ticket_excludes_hotel() {
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.ticket_type.includes_hotel = false;
        let resolver = resolver(vec![enrollment(ENROLLMENT_ID, USER_ID)], vec![ticket]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn fails_when_ticket_is_not_paid() {
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.status = TicketStatus::Reserved;
        let resolver = resolver(vec![enrollment(ENROLLMENT_ID, USER_ID)], vec![ticket]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn remote_check_fires_before_payment_check() {
        // A ticket that is both remote and unpaid must fail on the
        // remote gate, not the payment gate.
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.ticket_type.is_remote = true;
        ticket.status = TicketStatus::Reserved;
        let resolver = resolver(vec![enrollment(ENROLLMENT_ID, USER_ID)], vec![ticket]);

        let res = resolver.resolve(UserId::new(USER_ID)).await;
        match res {
            Err(AppError::ForbiddenOperation(reason)) => {
                assert_eq!(reason, "ticket is remote");
            }
            other => panic!("expected forbidden, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolves_paid_hotel_ticket() {
        let resolver = resolver(
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![paid_hotel_ticket(ENROLLMENT_ID)],
        );

        let ticket = resolver.resolve(UserId::new(USER_ID)).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.ticket_type.includes_hotel);
    }
}
