use crate::adapters::AdapterError;
use crate::app_config::AppConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct SessionSettings {
    scheme: String,
    request_timeout: Duration,
}

impl SessionSettings {
    pub fn new(scheme: impl Into<String>, request_timeout: Duration) -> Self {
        SessionSettings {
            scheme: scheme.into(),
            request_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        SessionSettings::new(config.devices().scheme(), config.devices().request_timeout())
    }
}

/// A logged-in conversation with the web UI of a single phone. Phones ship with self-signed certificates, so those are accepted.
#[derive(Debug)]
pub struct WebSession {
    client: Client,
    base_url: String,
}

impl WebSession {
    pub fn open(settings: &SessionSettings, address: &str) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .cookie_store(true)
            .timeout(settings.request_timeout)
            .build()?;

        Ok(WebSession {
            client,
            base_url: format!("{}://{}", settings.scheme, address),
        })
    }

    #[instrument(skip(self, form), fields(base_url = %self.base_url))]
    pub async fn submit(&self, path: &str, form: &[(&str, &str)]) -> Result<(), AdapterError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).form(form).send().await?;
        let status = response.status();
        debug!(%status, "Submitted form");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AdapterError::AuthenticationRejected { url }),
            status if !status.is_success() => Err(AdapterError::UnexpectedStatus { status, url }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn settings() -> SessionSettings {
        SessionSettings::new("http", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn submit_posts_an_url_encoded_form() -> Result<(), AdapterError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/form")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("name".into(), "value".into()),
                Matcher::UrlEncoded("empty".into(), "".into()),
            ]))
            .with_status(200)
            .create_async()
            .await;

        let session = WebSession::open(&settings(), &server.host_with_port())?;
        session.submit("/form", &[("name", "value"), ("empty", "")]).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn submit_keeps_the_session_cookie() -> Result<(), AdapterError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("set-cookie", "session=abc123; Path=/")
            .create_async()
            .await;
        let mock = server.mock("POST", "/next").match_header("cookie", "session=abc123").with_status(200).create_async().await;

        let session = WebSession::open(&settings(), &server.host_with_port())?;
        session.submit("/login", &[]).await?;
        session.submit("/next", &[]).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn submit_maps_an_unauthorized_status() -> Result<(), AdapterError> {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/login").with_status(401).create_async().await;

        let session = WebSession::open(&settings(), &server.host_with_port())?;
        let result = session.submit("/login", &[]).await;

        assert!(matches!(result, Err(AdapterError::AuthenticationRejected { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn submit_maps_a_server_error() -> Result<(), AdapterError> {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/form").with_status(500).create_async().await;

        let session = WebSession::open(&settings(), &server.host_with_port())?;
        let result = session.submit("/form", &[]).await;

        match result {
            Err(AdapterError::UnexpectedStatus { status, .. }) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("Expected an unexpected status error, found {:?}", other),
        }
        Ok(())
    }
}
