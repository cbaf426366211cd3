//! Appwrite databases REST API.
//!
//! Documents live at `{endpoint}/databases/{db}/collections/{col}/documents/{id}`.
//! Requests carry the project id (and the API key, when configured) as headers.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::config::AppConfig;
use crate::constants::LIST_PAGE_SIZE;
use crate::document::{DocumentData, DocumentList, decode_record};
use crate::error::{EventBoardError, EventBoardResult};
use crate::event::EventRecord;
use crate::remote::EventGateway;

/// Error body returned by the service on non-2xx responses.
#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Serialize)]
struct CreateDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: DocumentData,
}

#[derive(Serialize)]
struct UpdateDocument {
    data: DocumentData,
}

pub struct AppwriteGateway {
    http: reqwest::Client,
    documents_url: Url,
}

impl AppwriteGateway {
    pub fn new(config: &AppConfig) -> EventBoardResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-appwrite-project",
            header_value(&config.project_id, "project id")?,
        );
        if let Some(key) = &config.api_key {
            headers.insert("x-appwrite-key", header_value(key, "API key")?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| EventBoardError::Config(format!("Could not build HTTP client: {e}")))?;

        let mut documents_url = config.endpoint.clone();
        documents_url
            .path_segments_mut()
            .map_err(|_| {
                EventBoardError::Config(format!("Endpoint can't be a base URL: {}", config.endpoint))
            })?
            .pop_if_empty()
            .extend([
                "databases",
                config.database_id.as_str(),
                "collections",
                config.collection_id.as_str(),
                "documents",
            ]);

        Ok(AppwriteGateway {
            http,
            documents_url,
        })
    }

    fn document_url(&self, id: &str) -> Url {
        let mut url = self.documents_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url
    }

    async fn fetch_page(&self, offset: usize) -> EventBoardResult<DocumentList> {
        let limit = json!({ "method": "limit", "values": [LIST_PAGE_SIZE] }).to_string();
        let offset = json!({ "method": "offset", "values": [offset] }).to_string();

        let resp = self
            .http
            .get(self.documents_url.clone())
            .query(&[("queries[]", limit), ("queries[]", offset)])
            .send()
            .await?;

        let body: Value = check(resp, None).await?.json().await?;
        Ok(DocumentList::from_value(body)?)
    }
}

#[async_trait]
impl EventGateway for AppwriteGateway {
    async fn list(&self) -> EventBoardResult<Vec<EventRecord>> {
        tracing::debug!(url = %self.documents_url, "listing documents");

        let mut records = Vec::new();
        let mut offset = 0;
        loop {
            let page = self.fetch_page(offset).await?;
            let total = page.total as usize;
            let page_len = page.documents.len();

            records.extend(page.into_records());
            offset += page_len;

            if page_len == 0 || offset >= total {
                break;
            }
        }

        tracing::debug!(count = records.len(), "listed documents");
        Ok(records)
    }

    async fn get(&self, id: &str) -> EventBoardResult<EventRecord> {
        tracing::debug!(id, "fetching document");

        let resp = self.http.get(self.document_url(id)).send().await?;
        let body: Value = check(resp, Some(id)).await?.json().await?;
        Ok(decode_record(body)?)
    }

    async fn create(&self, mut record: EventRecord) -> EventBoardResult<EventRecord> {
        record.ensure_id();
        tracing::debug!(id = %record.id, title = %record.title, "creating document");

        let body = CreateDocument {
            document_id: &record.id,
            data: DocumentData::from(&record),
        };
        let resp = self
            .http
            .post(self.documents_url.clone())
            .json(&body)
            .send()
            .await?;

        let body: Value = check(resp, None).await?.json().await?;
        Ok(decode_record(body)?)
    }

    async fn update(&self, id: &str, record: EventRecord) -> EventBoardResult<EventRecord> {
        tracing::debug!(id, title = %record.title, "updating document");

        let body = UpdateDocument {
            data: DocumentData::from(&record),
        };
        let resp = self
            .http
            .patch(self.document_url(id))
            .json(&body)
            .send()
            .await?;

        let body: Value = check(resp, Some(id)).await?.json().await?;
        Ok(decode_record(body)?)
    }

    async fn delete(&self, id: &str) -> EventBoardResult<()> {
        tracing::debug!(id, "deleting document");

        let resp = self.http.delete(self.document_url(id)).send().await?;
        check(resp, Some(id)).await?;
        Ok(())
    }
}

fn header_value(value: &str, name: &str) -> EventBoardResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| EventBoardError::Config(format!("Invalid {name}: not a valid header value")))
}

/// Map non-2xx responses to errors. A 404 on a single document is `NotFound`.
async fn check(resp: Response, id: Option<&str>) -> EventBoardResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(EventBoardError::NotFound(id.to_string()));
    }

    let message = match resp.json::<ErrorResponse>().await {
        Ok(err) => err.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    tracing::warn!(%status, %message, "document service request failed");
    Err(EventBoardError::Remote(format!("{status}: {message}")))
}
