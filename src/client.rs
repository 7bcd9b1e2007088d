use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::model::{ErrorBody, LogEntry, ReportRequest, ReportResponse, SaveAck};

/// Stateless wrapper over the log backend's HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct LogClient {
    base_url: String,
}

impl LogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn log_url(&self, date: &str) -> String {
        self.url(&format!("/log/{date}"))
    }

    /// `Ok(None)` when the backend has no entry for `date`.
    ///
    /// Any non-2xx answer counts as absence; only transport and decode
    /// failures are errors.
    pub async fn get_by_date(&self, date: &str) -> Result<Option<LogEntry>, ClientError> {
        let resp = Request::get(&self.log_url(date))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Ok(None);
        }
        decode_json(resp).await.map(Some)
    }

    pub async fn upsert(&self, entry: &LogEntry) -> Result<SaveAck, ClientError> {
        let resp = Request::post(&self.url("/log"))
            .json(entry)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        // Acks are informational; a body we can't read is still a successful write.
        Ok(resp.json::<SaveAck>().await.unwrap_or_default())
    }

    pub async fn generate_report(&self, start: &str, end: &str) -> Result<String, ClientError> {
        let body = ReportRequest {
            start_date: start.to_string(),
            end_date: end.to_string(),
        };
        let resp = Request::post(&self.url("/generate-report"))
            .json(&body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        let report: ReportResponse = decode_json(resp).await?;
        Ok(report.report)
    }
}

async fn ensure_ok(resp: Response) -> Result<Response, ClientError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.unwrap_or_default();
    Err(application_error(status, &status_text, &body))
}

async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Builds the error for a non-2xx response, preferring the backend's `detail`.
pub fn application_error(status: u16, status_text: &str, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .ok()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            if status_text.trim().is_empty() {
                "request failed".to_string()
            } else {
                status_text.to_string()
            }
        });
    ClientError::Application { status, detail }
}
