use crate::model::id::{EnrollmentId, UserId};

// Registration of a user for the event. Holding one is the precondition
// for any ticket or booking action.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
}
