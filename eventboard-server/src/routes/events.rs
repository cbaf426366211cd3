//! Event endpoints: list, detail, create, edit, delete, share
//!
//! The store is only updated after the gateway call succeeded. A handler whose
//! client went away is dropped at its await point and never reaches the store.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use eventboard_core::event::{is_known_category, is_known_priority};
use eventboard_core::share::{ShareLinks, share_links};
use eventboard_core::{CategoryFilter, EventDraft, EventRecord, FilterState};
use serde::Deserialize;

use crate::routes::{AppError, JsonBody};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/share", get(share_event))
        .route("/filter", get(get_filter))
}

/// Filter changes sent with the list request. Absent fields leave the current filter alone.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /events - Refresh from the collection and return the visible events
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EventRecord>>, AppError> {
    let events = state.gateway.list().await?;

    let mut store = state.store.write().await;
    store.set_events(events);
    if let Some(category) = query.category {
        store.set_category_filter(CategoryFilter::parse(&category));
    }
    if let Some(search) = query.search {
        store.set_search_key(search);
    }

    Ok(Json(store.visible()))
}

/// GET /filter - Current category filter and search key
async fn get_filter(State(state): State<AppState>) -> Json<FilterState> {
    Json(state.store.read().await.filter().clone())
}

/// GET /events/:id
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    Ok(Json(state.gateway.get(&id).await?))
}

/// POST /events
async fn create_event(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<EventDraft>,
) -> Result<(StatusCode, Json<EventRecord>), AppError> {
    let record = draft.validate()?.into_record(None);
    warn_on_unknown_values(&record);

    let created = state.gateway.create(record).await?;
    tracing::info!(id = %created.id, title = %created.title, "created event");

    state.store.write().await.upsert_event(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /events/:id
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<EventDraft>,
) -> Result<Json<EventRecord>, AppError> {
    let record = draft.validate()?.into_record(Some(id.clone()));
    warn_on_unknown_values(&record);

    let updated = state.gateway.update(&id, record).await?;
    tracing::info!(id = %updated.id, "updated event");

    state.store.write().await.upsert_event(updated.clone());
    Ok(Json(updated))
}

/// DELETE /events/:id
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.gateway.delete(&id).await?;
    tracing::info!(%id, "deleted event");

    state.store.write().await.delete_event(&id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /events/:id/share
async fn share_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareLinks>, AppError> {
    let event = state.gateway.get(&id).await?;
    Ok(Json(share_links(&event, &state.public_url)))
}

/// Out-of-list values are stored as given but won't filter reliably.
fn warn_on_unknown_values(record: &EventRecord) {
    if !is_known_category(&record.category) {
        tracing::warn!(category = %record.category, "unknown category");
    }
    if !is_known_priority(&record.priority) {
        tracing::warn!(priority = %record.priority, "unknown priority");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use eventboard_core::{EventBoardError, EventBoardResult, EventGateway, MemoryGateway};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use url::Url;

    use super::*;

    /// Gateway whose every call fails as if the service were down.
    struct FailingGateway;

    #[async_trait]
    impl EventGateway for FailingGateway {
        async fn list(&self) -> EventBoardResult<Vec<EventRecord>> {
            Err(EventBoardError::Remote("503: Service unavailable".to_string()))
        }

        async fn get(&self, _id: &str) -> EventBoardResult<EventRecord> {
            Err(EventBoardError::Remote("503: Service unavailable".to_string()))
        }

        async fn create(&self, _record: EventRecord) -> EventBoardResult<EventRecord> {
            Err(EventBoardError::Remote("503: Service unavailable".to_string()))
        }

        async fn update(&self, _id: &str, _record: EventRecord) -> EventBoardResult<EventRecord> {
            Err(EventBoardError::Remote("503: Service unavailable".to_string()))
        }

        async fn delete(&self, _id: &str) -> EventBoardResult<()> {
            Err(EventBoardError::Remote("503: Service unavailable".to_string()))
        }
    }

    fn make_event(id: &str, title: &str, date: &str, category: &str) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            date: date.to_string(),
            time: "09:00".to_string(),
            location: "Hall".to_string(),
            category: category.to_string(),
            priority: "Low".to_string(),
            picture: None,
        }
    }

    fn make_state(events: Vec<EventRecord>) -> AppState {
        AppState::new(
            Arc::new(MemoryGateway::with_events(events)),
            Url::parse("https://events.example.com").unwrap(),
        )
    }

    async fn send(
        state: &AppState,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = router().with_state(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(
        state: &AppState,
        method: &str,
        uri: &str,
        body: &str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router().with_state(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_is_sorted_and_filtered() {
        let state = make_state(vec![
            make_event("1", "Gala", "2024-12-25", "Party"),
            make_event("2", "Meetup", "2024-01-01", "Tech"),
        ]);

        let (status, body) = send(&state, "GET", "/events", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["2", "1"]);

        let (_, body) = send(&state, "GET", "/events?category=Tech", None).await;
        assert_eq!(ids(&body), vec!["2"]);

        // The filter sticks until changed
        let (_, body) = send(&state, "GET", "/events", None).await;
        assert_eq!(ids(&body), vec!["2"]);

        let (_, filter) = send(&state, "GET", "/filter", None).await;
        assert_eq!(filter, json!({ "category": "Tech", "search_key": "" }));

        let (_, body) = send(&state, "GET", "/events?category=All&search=gala", None).await;
        assert_eq!(ids(&body), vec!["1"]);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let state = make_state(vec![]);
        let draft = json!({
            "title": "Gala",
            "date": "25/12/2024",
            "time": "08:00 pm",
            "location": "Opera",
            "category": "Party",
            "priority": "High"
        });

        let (status, created) = send(&state, "POST", "/events", Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["date"], "2024-12-25");
        assert_eq!(created["time"], "20:00");

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&state, "GET", &format!("/events/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        assert!(state.store.read().await.get(id).is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let state = make_state(vec![]);
        let (status, body) = send(&state, "POST", "/events", Some(json!({
            "title": "",
            "date": "2024-12-25",
            "time": "20:00",
            "location": "Opera"
        })))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid event: title required");
        assert!(state.store.read().await.events().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_missing_update() {
        let state = make_state(vec![make_event("1", "Gala", "2024-12-25", "Party")]);
        let draft = json!({
            "title": "Winter gala",
            "date": "2024-12-26",
            "time": "19:00",
            "location": "Opera",
            "category": "Party",
            "priority": "High",
            "picture": "https://example.com/gala.png"
        });

        let (status, updated) = send(&state, "PUT", "/events/1", Some(draft.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Winter gala");
        assert_eq!(updated["id"], "1");

        let (status, _) = send(&state, "PUT", "/events/ghost", Some(draft)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_removes_remote_and_local() {
        let state = make_state(vec![make_event("1", "Gala", "2024-12-25", "Party")]);
        send(&state, "GET", "/events", None).await;
        assert!(state.store.read().await.get("1").is_some());

        let (status, _) = send(&state, "DELETE", "/events/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.store.read().await.get("1").is_none());

        let (status, body) = send(&state, "GET", "/events/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Event not found: 1");

        let (status, _) = send(&state, "DELETE", "/events/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_share_links() {
        let state = make_state(vec![make_event("abc", "Gala", "2024-12-25", "Party")]);

        let (status, links) = send(&state, "GET", "/events/abc/share", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(links["page"], "https://events.example.com/events/abc");
        assert!(links["facebook"].as_str().unwrap().contains("facebook.com"));
    }

    #[tokio::test]
    async fn test_create_names_every_absent_field() {
        let state = make_state(vec![]);
        let (status, body) = send(&state, "POST", "/events", Some(json!({
            "title": "Gala",
            "date": "2024-12-25"
        })))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid event: time, location required");
    }

    #[tokio::test]
    async fn test_unreadable_body_is_a_json_error() {
        let state = make_state(vec![]);

        let (status, body) = send_raw(&state, "POST", "/events", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("JSON"));

        let (status, body) = send_raw(&state, "PUT", "/events/1", r#"{"title": 42}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_failed_list_leaves_store_unchanged() {
        let state = AppState::new(
            Arc::new(FailingGateway),
            Url::parse("https://events.example.com").unwrap(),
        );
        {
            let mut store = state.store.write().await;
            store.set_events(vec![make_event("1", "Gala", "2024-12-25", "Party")]);
            store.set_search_key("gala");
        }

        let (status, body) =
            send(&state, "GET", "/events?category=Tech&search=meetup", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Remote service error: 503: Service unavailable");

        let store = state.store.read().await;
        assert_eq!(store.events(), &[make_event("1", "Gala", "2024-12-25", "Party")]);
        assert_eq!(store.filter(), &FilterState::new(CategoryFilter::All, "gala"));
    }

    #[tokio::test]
    async fn test_failed_create_does_not_touch_store() {
        let state = AppState::new(
            Arc::new(FailingGateway),
            Url::parse("https://events.example.com").unwrap(),
        );
        let draft = json!({
            "title": "Gala",
            "date": "2024-12-25",
            "time": "20:00",
            "location": "Opera"
        });

        let (status, body) = send(&state, "POST", "/events", Some(draft)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].is_string());
        assert!(state.store.read().await.events().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_and_priority_are_stored_as_given() {
        let state = make_state(vec![]);
        let draft = json!({
            "title": "Seed swap",
            "date": "2024-04-01",
            "time": "10:00",
            "location": "Allotment",
            "category": "Gardening",
            "priority": "Urgent"
        });

        let (status, created) = send(&state, "POST", "/events", Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["category"], "Gardening");
        assert_eq!(created["priority"], "Urgent");

        let id = created["id"].as_str().unwrap();
        let (_, fetched) = send(&state, "GET", &format!("/events/{id}"), None).await;
        assert_eq!(fetched["category"], "Gardening");

        let (_, listed) = send(&state, "GET", "/events?category=Gardening", None).await;
        assert_eq!(ids(&listed), vec![id]);
    }
}
