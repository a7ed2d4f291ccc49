//! HTTP client for the fenseek backend.

use crate::error::{ClientError, ClientResult};
use crate::traits::BackendService;
use crate::types::{
    AnalysisOptions, AnalysisResult, GameFilters, GamePage, GameRecord, SearchHit, UserInfo,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Network client for the backend API. Sessions are cookie-based; the
/// builder enables a cookie store so one login call authenticates every
/// later admin call on the same client.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }

        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `ClientError::Api`, carrying the
    /// server's message when it sent one.
    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        let message = if message.trim().is_empty() || message.trim_start().starts_with('<') {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            message
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Read a JSON body, reporting shape mismatches as `InvalidData` rather
    /// than a bare transport error.
    async fn json_body<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidData(e.to_string()))
    }

    async fn text_body(response: reqwest::Response) -> ClientResult<String> {
        Ok(response.text().await?)
    }
}

#[async_trait]
impl BackendService for BackendClient {
    async fn find_similar(&self, fen: &str, limit: usize) -> ClientResult<Vec<SearchHit>> {
        let response = self
            .http
            .get(self.url("/api/search"))
            .query(&[("fen", fen), ("limit", &limit.to_string())])
            .send()
            .await?;
        Self::json_body(Self::check(response).await?).await
    }

    async fn analyze(&self, fen: &str, options: AnalysisOptions) -> ClientResult<AnalysisResult> {
        let body = serde_json::json!({
            "fen": fen,
            "depth": options.depth,
            "variants": options.variants,
            "maxThinkingTime": options.max_thinking_time,
        });
        let response = self
            .http
            .post(self.url("/api/analysis"))
            .json(&body)
            .send()
            .await?;
        Self::json_body(Self::check(response).await?).await
    }

    async fn list_games(
        &self,
        page: usize,
        size: usize,
        filters: &GameFilters,
    ) -> ClientResult<GamePage> {
        let mut query: Vec<(&str, String)> =
            vec![("page", page.to_string()), ("size", size.to_string())];
        query.extend(filters.query_pairs());

        let response = self
            .http
            .get(self.url("/api/game"))
            .query(&query)
            .send()
            .await?;
        Self::json_body(Self::check(response).await?).await
    }

    async fn get_game(&self, id: &str) -> ClientResult<Option<GameRecord>> {
        let response = self
            .http
            .get(self.url(&format!("/api/game/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(
            Self::json_body(Self::check(response).await?).await?,
        ))
    }

    async fn delete_game(&self, id: &str) -> ClientResult<String> {
        let response = self
            .http
            .delete(self.url(&format!("/api/admin/games/{id}")))
            .send()
            .await?;
        Self::text_body(Self::check(response).await?).await
    }

    async fn upload_pgn_file(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("pgnFile", part);
        let response = self
            .http
            .post(self.url("/api/admin/upload-pgn-file"))
            .multipart(form)
            .send()
            .await?;
        Self::text_body(Self::check(response).await?).await
    }

    async fn upload_pgn_text(&self, pgn: &str) -> ClientResult<String> {
        let response = self
            .http
            .post(self.url("/api/admin/upload-pgn-string"))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(pgn.to_string())
            .send()
            .await?;
        Self::text_body(Self::check(response).await?).await
    }

    async fn rebuild_index(&self) -> ClientResult<String> {
        let response = self
            .http
            .post(self.url("/api/admin/rebuild"))
            .send()
            .await?;
        Self::text_body(Self::check(response).await?).await
    }

    async fn clear_index(&self) -> ClientResult<String> {
        let response = self.http.post(self.url("/api/admin/clear")).send().await?;
        Self::text_body(Self::check(response).await?).await
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;
        Self::json_body(Self::check(response).await?).await
    }

    async fn logout(&self) -> ClientResult<()> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn auth_status(&self) -> ClientResult<Option<UserInfo>> {
        let response = self.http.get(self.url("/api/auth/status")).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        // The status endpoint answers 200 with an empty object for an
        // anonymous session.
        #[derive(serde::Deserialize)]
        struct StatusResponse {
            #[serde(default)]
            username: Option<String>,
            #[serde(default)]
            role: Option<String>,
        }
        let status: StatusResponse = Self::json_body(Self::check(response).await?).await?;
        Ok(status.username.map(|username| UserInfo {
            username,
            role: status.role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base_urls() {
        assert!(matches!(
            BackendClient::new("localhost:8080"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            BackendClient::new("ftp://example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn trims_trailing_slashes_when_joining_paths() {
        let client = BackendClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.url("/api/search"), "http://localhost:8080/api/search");
    }
}
