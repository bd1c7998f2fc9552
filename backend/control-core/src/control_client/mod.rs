use crate::config::ControlConfig;
use crate::error::ControlError;
use crate::token::TokenStore;

use common::HttpStatusCode;

use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Typed request/response transport to the local control service.
///
/// Every call re-reads the control token, sends one request and decodes one
/// response. No retries, no background work.
#[derive(Debug, Clone)]
pub struct ControlClient {
    base_url: Url,
    token_header: HeaderName,
    client: Client,
    tokens: TokenStore,
}

impl ControlClient {
    pub fn new(config: &ControlConfig, tokens: TokenStore) -> Result<Self, ControlError> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)?;
        let token_header = HeaderName::from_bytes(config.token_header.as_bytes())
            .map_err(|e| ControlError::configuration(format!("Invalid token header: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url,
            token_header,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send `payload` (if any) to `path` and decode the JSON response.
    ///
    /// # Errors
    /// - Token load failures, unchanged
    /// - [`ControlError::Serialization`] if the payload cannot be encoded or the
    ///   2xx body is not a JSON object decodable as `Resp`
    /// - [`ControlError::Transport`] if the service cannot be reached
    /// - [`ControlError::ControlApi`] for any non-2xx status; the body is ignored
    pub async fn request<Req, Resp>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Req>,
    ) -> Result<Resp, ControlError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let token = self.tokens.load()?;

        let body = payload.map(serde_json::to_vec).transpose()?;

        let url = self.base_url.join(path)?;

        let mut token_value = HeaderValue::from_str(token.expose()).map_err(|_| {
            ControlError::configuration(format!(
                "Control token in {} contains characters not allowed in an HTTP header",
                self.tokens.path().display()
            ))
        })?;
        token_value.set_sensitive(true);

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(self.token_header.clone(), token_value);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body);
        }

        debug!("Control request: {method} {path}");
        let response = request.send().await.map_err(|e| {
            warn!("Control service unreachable for {method} {path}: {e}");
            ControlError::from_reqwest(&e)
        })?;

        let status = HttpStatusCode(response.status().as_u16());
        if !status.is_success() {
            warn!("Control API rejected {method} {path}: HTTP {status}");
            return Err(ControlError::control_api(status.0));
        }

        let bytes = response.bytes().await?;
        let decoded: Resp = decode_object(&bytes).map_err(|e| {
            warn!("Undecodable control response for {method} {path}: {e}");
            ControlError::serialization(format!("{method} {path}: {e}"))
        })?;

        debug!("Control response for {method} {path}: HTTP {status}");
        Ok(decoded)
    }

    /// [`request`](Self::request) without a body.
    pub async fn send<Resp>(&self, method: Method, path: &str) -> Result<Resp, ControlError>
    where
        Resp: DeserializeOwned,
    {
        self.request::<(), Resp>(method, path, None).await
    }
}

/// Every control response is a JSON object. Arrays are rejected up front so
/// they never decode positionally or into all-default fields.
fn decode_object<Resp: DeserializeOwned>(bytes: &[u8]) -> Result<Resp, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)?;
    serde_json::from_value(Value::Object(object))
}
