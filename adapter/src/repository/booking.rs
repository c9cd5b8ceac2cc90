use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, ReassignBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
    room::RoomOccupancy,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{booking::BookingRow, hotel::RoomOccupancyRow},
    ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の部屋が存在し、満室ではないか
        // - このユーザーの有効な予約がまだ存在しないか
        //
        // サービス層で同じ判定は済んでいるが、同じ部屋・同じユーザーへ
        // 並行リクエストが競合した場合の最後の砦としてトランザクション内で
        // 再チェックする
        {
            let occupancy = self.find_room_occupancy_in_tx(&mut tx, event.room_id).await?;

            let occupancy = match occupancy {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "room ({}) was not found",
                        event.room_id
                    )))
                }
                Some(o) => o,
            };

            if occupancy.is_full() {
                return Err(AppError::ForbiddenOperation("room is full".into()));
            }

            let existing: Option<(BookingId,)> = sqlx::query_as(
                r#"
                    SELECT booking_id
                    FROM bookings
                    WHERE user_id = $1
                    LIMIT 1
                "#,
            )
            .bind(event.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if existing.is_some() {
                return Err(AppError::ForbiddenOperation(
                    "user already has a booking".into(),
                ));
            }
        }

        // 予約処理を行う、すなわち bookings テーブルにレコードを追加する
        let row: (BookingId,) = sqlx::query_as(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.0)
    }

    // 既存予約の部屋を付け替える
    async fn reassign_room(&self, event: ReassignBookingRoom) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 移動先の部屋の存在と空きをトランザクション内で再チェックする
        {
            let occupancy = self.find_room_occupancy_in_tx(&mut tx, event.room_id).await?;

            let occupancy = match occupancy {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "room ({}) was not found",
                        event.room_id
                    )))
                }
                Some(o) => o,
            };

            if occupancy.is_full() {
                return Err(AppError::ForbiddenOperation("room is full".into()));
            }
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    room_id = $1,
                    updated_at = NOW()
                WHERE booking_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // ユーザー ID に紐づく現在の予約情報を取得する
    async fn find_active_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.user_id,
                    r.room_id,
                    r.room_name,
                    r.capacity,
                    r.hotel_id,
                    r.created_at AS room_created_at,
                    r.updated_at AS room_updated_at
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.room_id
                WHERE b.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }
}

impl BookingRepositoryImpl {
    // create, reassign_room メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn find_room_occupancy_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
    ) -> AppResult<Option<RoomOccupancy>> {
        let row: Option<RoomOccupancyRow> = sqlx::query_as(
            r#"
                SELECT
                    r.capacity AS capacity,
                    COUNT(b.booking_id) AS current_count
                FROM rooms AS r
                LEFT OUTER JOIN bookings AS b ON b.room_id = r.room_id
                WHERE r.room_id = $1
                GROUP BY r.room_id, r.capacity
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(RoomOccupancy::from))
    }
}
