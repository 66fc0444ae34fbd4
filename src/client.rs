use log::debug;
use serde_json::Value;
pub use reqwest::{blocking::Client, Method, StatusCode};

use crate::error::CheckError;
use crate::models::{Operation, UserData};
use crate::settings::Settings;

/// Status and raw body of a single round trip.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub text: String,
}

impl Reply {
    pub fn expect_status(&self, op: Operation, expected: StatusCode)
        -> Result<(), CheckError>
    {
        if self.status != expected {
            return Err(CheckError::UnexpectedStatus {
                op,
                expected,
                actual: self.status,
                body: self.text.clone(),
            });
        }
        Ok(())
    }

    pub fn json(&self, op: Operation) -> Result<Value, CheckError> {
        serde_json::from_str(&self.text).map_err(|source| CheckError::JsonError {
            op,
            text: self.text.clone(),
            source,
        })
    }
}

pub struct UsersApi {
    client: Client,
    url: String,
}

impl UsersApi {
    pub fn new(url: &str) -> Result<Self, CheckError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.trim_end_matches('/').into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CheckError> {
        Self::new(&settings.base_url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}/{}", self.url, id)
    }

    pub fn create(&self, user: &UserData) -> Result<Reply, CheckError> {
        self.send(Method::POST, self.url.clone(), Some(user))
    }

    pub fn fetch(&self, id: &str) -> Result<Reply, CheckError> {
        self.send(Method::GET, self.user_url(id), None)
    }

    pub fn replace(&self, id: &str, user: &UserData) -> Result<Reply, CheckError> {
        self.send(Method::PUT, self.user_url(id), Some(user))
    }

    pub fn delete(&self, id: &str) -> Result<Reply, CheckError> {
        self.send(Method::DELETE, self.user_url(id), None)
    }

    fn send(&self, method: Method, url: String, body: Option<&UserData>)
        -> Result<Reply, CheckError>
    {
        debug!("{} request to {}", method, url);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send()?;
        let status = resp.status();
        let text = resp.text()?;
        debug!("Response [{}] of '{}': {}", status, url, text);
        Ok(Reply { status, text })
    }
}
