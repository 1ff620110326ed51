use sqlx::PgExecutor;

use crate::{error::AppResult, models::ReservationWithProperty};

/// Completed stays for a guest, oldest first.
///
/// Only reservations that ended before today are returned. Grouping on the
/// reservation and property keys keeps one row per stay however many reviews
/// the property has.
pub async fn get_reservations_for_guest<'e, E>(
    executor: E,
    guest_id: i32,
    limit: i64,
) -> AppResult<Vec<ReservationWithProperty>>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, ReservationWithProperty>(
        r#"
        SELECT reservations.id AS reservation_id,
               reservations.guest_id,
               reservations.start_date,
               reservations.end_date,
               properties.*,
               AVG(property_reviews.rating)::float8 AS average_rating
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = $1
        AND reservations.end_date < now()::date
        GROUP BY reservations.id, properties.id
        ORDER BY reservations.start_date
        LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(limit)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
