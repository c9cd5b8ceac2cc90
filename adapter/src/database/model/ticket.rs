use std::str::FromStr;

use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

// One ticket joined with its type; the status column carries the
// RESERVED/PAID wire string.
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        let status = TicketStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown ticket status: {status}"))
        })?;
        Ok(Ticket {
            ticket_id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                ticket_type_id,
                ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
        })
    }
}
