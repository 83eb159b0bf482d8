use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::Config;
use crate::error::StoreError;
use crate::filter::FilterCriteria;
use crate::model::{Category, CategoryPayload, DashboardStats, Task, TaskPayload, UserProfile};
use crate::session::Session;
use crate::store::{decode_list_body, AdviceSource, ListResult, TaskStore};

/// Transport-level timeout. The controllers impose none of their own.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP implementation of the task-store boundary.
///
/// Holds the base URL and an optional bearer token; both are injected at
/// construction so nothing here reads ambient state.
pub struct HttpStore {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct LoginResponse {
    access: String,
}

#[derive(Deserialize)]
struct AdviceResponse {
    #[serde(default)]
    advice: Option<String>,
}

fn parse<T: DeserializeOwned>(resp: ureq::Response) -> Result<T, StoreError> {
    let body = resp
        .into_string()
        .map_err(|e| StoreError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

impl HttpStore {
    pub fn new(config: &Config, session: Option<&Session>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self {
            agent,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: session.map(|s| s.token.clone()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: ureq::Request) -> ureq::Request {
        match &self.token {
            Some(token) => req.set("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let resp = self.authorize(self.agent.get(&self.url(path))).call()?;
        parse(resp)
    }

    fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl serde::Serialize,
    ) -> Result<T, StoreError> {
        let resp = self
            .authorize(self.agent.post(&self.url(path)))
            .send_json(body)?;
        parse(resp)
    }

    fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl serde::Serialize,
    ) -> Result<T, StoreError> {
        let resp = self
            .authorize(self.agent.put(&self.url(path)))
            .send_json(body)?;
        parse(resp)
    }

    fn delete(&self, path: &str) -> Result<(), StoreError> {
        self.authorize(self.agent.delete(&self.url(path))).call()?;
        Ok(())
    }

    /// Exchange credentials for an access token.
    pub fn login(&self, username: &str, password: &str) -> Result<String, StoreError> {
        let resp: LoginResponse = self.post(
            "/accounts/login/",
            json!({ "username": username, "password": password }),
        )?;
        Ok(resp.access)
    }

    /// Register a new account. The store logs the user in separately.
    pub fn signup(&self, username: &str, password: &str) -> Result<(), StoreError> {
        let resp = self
            .authorize(self.agent.post(&self.url("/accounts/signup/")))
            .send_json(json!({ "username": username, "password": password }))?;
        // Body is informational only
        let _ = resp.into_string();
        Ok(())
    }

    pub fn me(&self) -> Result<UserProfile, StoreError> {
        self.get("/accounts/me/")
    }
}

impl TaskStore for HttpStore {
    fn list_tasks(&self, criteria: &FilterCriteria, page: u64) -> Result<ListResult, StoreError> {
        let mut req = self.agent.get(&self.url("/api/tasks/"));
        for (key, value) in criteria.to_query(page) {
            req = req.query(key, &value);
        }
        let resp = self.authorize(req).call()?;
        match parse::<serde_json::Value>(resp) {
            Ok(body) => Ok(decode_list_body(body)),
            // Non-JSON body is the same protocol error as an unknown shape
            Err(StoreError::Shape(e)) => {
                tracing::warn!(error = %e, "task list response was not JSON, treating as empty");
                Ok(ListResult::empty())
            }
            Err(e) => Err(e),
        }
    }

    fn create_task(&self, payload: &TaskPayload) -> Result<Task, StoreError> {
        self.post("/api/tasks/", payload)
    }

    fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task, StoreError> {
        self.put(&format!("/api/tasks/{}/", id), payload)
    }

    fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("/api/tasks/{}/", id))
    }

    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.get("/api/tasks/categories/")
    }

    fn create_category(&self, payload: &CategoryPayload) -> Result<Category, StoreError> {
        self.post("/api/tasks/categories/", payload)
    }

    fn update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> Result<Category, StoreError> {
        self.put(&format!("/api/tasks/categories/{}/", id), payload)
    }

    fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        self.delete(&format!("/api/tasks/categories/{}/", id))
    }

    fn dashboard(&self) -> Result<DashboardStats, StoreError> {
        self.get("/api/tasks/dashboard/")
    }
}

impl AdviceSource for HttpStore {
    fn advice(&self, title: &str, category: &str) -> Result<Option<String>, StoreError> {
        let resp: AdviceResponse = self.post(
            "/api/advice/",
            json!({ "title": title, "category": category }),
        )?;
        Ok(resp.advice)
    }
}
