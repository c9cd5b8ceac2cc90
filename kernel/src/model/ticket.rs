use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use strum::EnumString;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}
