use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::class::show_class_list;

pub fn build_class_routers() -> Router<AppRegistry> {
    let class_routers = Router::new().route("/", get(show_class_list));

    Router::new().nest("/classes", class_routers)
}
