use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::session::show_session_list;

pub fn build_session_routers() -> Router<AppRegistry> {
    let session_routers = Router::new().route("/", get(show_session_list));

    Router::new().nest("/sessions", session_routers)
}
