//! HTTP implementation of the schedule API.

use log::debug;
use serde::de::DeserializeOwned;

use super::{ScheduleApi, CALENDAR_ENDPOINT, CONTRACTOR_ENDPOINT, GANTT_ENDPOINT};
use crate::{
    error::{HttpResultExt, Result},
    models::{CalendarRecord, ContractorRecord, TaskCreate, TaskRecord, TaskUpdate, WriteResponse},
};

/// `reqwest`-backed client for the PHP schedule endpoints.
#[derive(Debug, Clone)]
pub struct HttpScheduleApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScheduleApi {
    /// Creates a client rooted at `base_url` (e.g. `https://office.example/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<Vec<T>> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .http_context(&format!("Failed to fetch {what}"))?
            .error_for_status()
            .http_context(&format!("Failed to fetch {what}"))?
            .json()
            .await
            .http_context(&format!("Failed to decode {what}"))
    }
}

impl ScheduleApi for HttpScheduleApi {
    async fn fetch_tasks(&self) -> Result<Vec<TaskRecord>> {
        self.get_list(GANTT_ENDPOINT, "tasks").await
    }

    async fn fetch_contractors(&self) -> Result<Vec<ContractorRecord>> {
        self.get_list(CONTRACTOR_ENDPOINT, "contractors").await
    }

    async fn fetch_calendar(&self) -> Result<Vec<CalendarRecord>> {
        self.get_list(CALENDAR_ENDPOINT, "calendar").await
    }

    async fn update_task(&self, update: &TaskUpdate) -> Result<()> {
        let url = self.endpoint(GANTT_ENDPOINT);
        debug!("PUT {url} L_ID={}", update.id);
        let response: WriteResponse = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .http_context("Failed to send task update")?
            .error_for_status()
            .http_context("Task update failed")?
            .json()
            .await
            .http_context("Failed to decode task update response")?;
        response.into_result("task update")
    }

    async fn create_task(&self, create: &TaskCreate) -> Result<()> {
        let url = self.endpoint(GANTT_ENDPOINT);
        debug!("POST {url} C_P_ID={}", create.lane_id);
        let response: WriteResponse = self
            .client
            .post(&url)
            .json(create)
            .send()
            .await
            .http_context("Failed to send task creation")?
            .error_for_status()
            .http_context("Task creation failed")?
            .json()
            .await
            .http_context("Failed to decode task creation response")?;
        response.into_result("task creation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let api = HttpScheduleApi::new("https://office.example/api/");
        assert_eq!(
            api.endpoint(GANTT_ENDPOINT),
            "https://office.example/api/gantt_api.php"
        );
        let api = HttpScheduleApi::new("http://localhost:8080");
        assert_eq!(
            api.endpoint(CALENDAR_ENDPOINT),
            "http://localhost:8080/calender_api.php"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let api = HttpScheduleApi::new("http://127.0.0.1:9");
        let err = api.fetch_tasks().await.unwrap_err();
        assert!(matches!(err, crate::TimelineError::Http { .. }));
    }
}
