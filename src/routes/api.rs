//! The /api surface. Paths mirror the original site's endpoints verbatim,
//! including the mixed naming (/topics vs /addTopics vs /serviceTopic).

use crate::handlers::{news, query, services, staff, topics, welcome};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/general/query", post(query::general_query))
        .route("/welcome", post(welcome::increment_welcome))
        .route("/test", get(query::list_test))
        .route("/news", get(news::list_news))
        .route("/service", get(services::list_services))
        .route("/serviceTopic", get(services::list_service_topics))
        .route("/topics", get(topics::list_topics))
        .route("/addTopics", post(topics::add_topic))
        .route("/removeTopics", delete(topics::remove_topic))
        .route("/updateTopics", put(topics::update_topic))
        .route("/login", post(staff::login))
        .route("/staff", get(staff::list_counselors))
        .route("/allstaff", get(staff::list_all_staff))
        .route("/profile", get(staff::get_profile))
        .with_state(state)
}
