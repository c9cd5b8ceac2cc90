macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i64);

        impl $id_type {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn raw(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $id_type {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketId);
define_id!(TicketTypeId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(BookingId);
