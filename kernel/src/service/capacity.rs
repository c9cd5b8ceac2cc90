use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{id::RoomId, room::RoomOccupancy};
use crate::repository::hotel::HotelRepository;

// Reports live occupancy for a room. Deciding what to do with a full
// room is the caller's concern.
#[derive(new)]
pub struct RoomCapacityChecker {
    hotel_repository: Arc<dyn HotelRepository>,
}

impl RoomCapacityChecker {
    pub async fn check(&self, room_id: RoomId) -> AppResult<RoomOccupancy> {
        self.hotel_repository
            .find_room_occupancy(room_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("room ({room_id}) was not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::support::{room, InMemoryHotelRepository};

    #[tokio::test]
    async fn fails_when_room_does_not_exist() {
        let checker = RoomCapacityChecker::new(Arc::new(InMemoryHotelRepository::new(
            vec![],
            vec![room(1, 5)],
        )));

        let res = checker.check(RoomId::new(999)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn reports_capacity_and_current_count() {
        let hotel_repository =
            InMemoryHotelRepository::new(vec![], vec![room(1, 5)]).with_booked(RoomId::new(1), 3);
        let checker = RoomCapacityChecker::new(Arc::new(hotel_repository));

        let occupancy = checker.check(RoomId::new(1)).await.unwrap();
        assert_eq!(occupancy.capacity, 5);
        assert_eq!(occupancy.current_count, 3);
        assert!(!occupancy.is_full());
    }
}
