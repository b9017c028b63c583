/**
 * Portal API Client
 *
 * Async wrapper over the portal's HTTP API. Holds the client session,
 * attaches the bearer token when one is held, and turns non-success
 * responses into `ClientError::Api` carrying the server's message.
 *
 * Register and login store the returned token and user in the session (and
 * the session file, when configured); logout clears both.
 */

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::client::session::ClientSession;
use crate::shared::{
    AuthResponse, ErrorBody, JoinResponse, LoginRequest, MessageResponse, NewProgram, NewResource,
    Program, ProgramChanges, PublicUser, RegisterRequest, Resource, ResourceChanges, SeedResponse,
};

/// Typed client for the portal API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: ClientSession,
}

impl ApiClient {
    /// Create a client, restoring the saved session if there is one
    pub fn new(config: ClientConfig) -> Self {
        let session = config
            .session_file()
            .map(|path| ClientSession::load(path))
            .unwrap_or_default();
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Register a new student account and sign in as it
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> Result<PublicUser, ClientError> {
        let body = RegisterRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response: AuthResponse = self.send_json(Method::POST, "/auth/register", &body).await?;
        self.sign_in(response)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, ClientError> {
        let body = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response: AuthResponse = self.send_json(Method::POST, "/auth/login", &body).await?;
        self.sign_in(response)
    }

    /// Forget the token locally; tokens are not revocable server-side
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.clear();
        self.persist()
    }

    /// Fetch the signed-in user from the server
    pub async fn me(&self) -> Result<PublicUser, ClientError> {
        if !self.session.is_authenticated() {
            return Err(ClientError::NotAuthenticated);
        }
        self.send(self.request(Method::GET, "/auth/me")).await
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>, ClientError> {
        self.send(self.request(Method::GET, "/resources")).await
    }

    pub async fn create_resource(&self, fields: &NewResource) -> Result<Resource, ClientError> {
        self.send_json(Method::POST, "/resources", fields).await
    }

    pub async fn update_resource(&self, id: Uuid, changes: &ResourceChanges) -> Result<Resource, ClientError> {
        self.send_json(Method::PUT, &format!("/resources/{}", id), changes).await
    }

    pub async fn delete_resource(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/resources/{}", id))).await
    }

    pub async fn list_programs(&self) -> Result<Vec<Program>, ClientError> {
        self.send(self.request(Method::GET, "/programs")).await
    }

    pub async fn create_program(&self, fields: &NewProgram) -> Result<Program, ClientError> {
        self.send_json(Method::POST, "/programs", fields).await
    }

    pub async fn update_program(&self, id: Uuid, changes: &ProgramChanges) -> Result<Program, ClientError> {
        self.send_json(Method::PUT, &format!("/programs/{}", id), changes).await
    }

    pub async fn delete_program(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/programs/{}", id))).await
    }

    /// Take a seat; the returned program carries the server's counters
    pub async fn join_program(&self, id: Uuid) -> Result<JoinResponse, ClientError> {
        self.send(self.request(Method::POST, &format!("/programs/{}/join", id))).await
    }

    pub async fn seed(&self, seed_key: &str) -> Result<SeedResponse, ClientError> {
        let request = self
            .request(Method::POST, "/seed")
            .header("x-seed-key", seed_key);
        self.send(request).await
    }

    fn sign_in(&mut self, response: AuthResponse) -> Result<PublicUser, ClientError> {
        let user = response.user.clone();
        self.session.sign_in(response);
        self.persist()?;
        tracing::info!("Signed in as {}", user.email);
        Ok(user)
    }

    fn persist(&self) -> Result<(), ClientError> {
        match self.config.session_file() {
            Some(path) => self.session.save(path),
            None => Ok(()),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.config.api_url(path));
        match self.session.authorization_header() {
            Some(value) => request.header(reqwest::header::AUTHORIZATION, value),
            None => request,
        }
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(method, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("Request failed").to_string()
                } else {
                    text
                }
            });

        tracing::warn!("API request failed: {} {}", status.as_u16(), message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
