use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{book_session, show_user_reservations};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new().route("/", post(book_session));

    Router::new()
        .nest("/bookings", booking_routers)
        .route("/users/:user_id/reservations", get(show_user_reservations))
}
