use super::StreamErr;
use crate::event::Id;

use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use url::Url;

/// The body of an open stream connection.  Dropping it closes the connection.
pub type ByteStream = BoxStream<'static, Result<Bytes, StreamErr>>;

/// Opens a streaming connection filtered to a set of users.
pub trait Connector: Send + Sync {
    fn connect(&self, follow: &[Id]) -> BoxFuture<'_, Result<ByteStream, StreamErr>>;
}

/// Connects to the Twitter filter endpoint with HTTP basic auth.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    client: Client,
    url: Url,
    username: String,
    password: String,
}

impl HttpConnector {
    pub fn new(url: Url, username: String, password: String) -> Result<Self, StreamErr> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url,
            username,
            password,
        })
    }
}

impl Connector for HttpConnector {
    fn connect(&self, follow: &[Id]) -> BoxFuture<'_, Result<ByteStream, StreamErr>> {
        let follow = follow
            .iter()
            .map(Id::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let request = self
            .client
            .post(self.url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .form(&[("follow", follow)]);

        async move {
            let response = request.send().await?;
            if response.status() != StatusCode::OK {
                return Err(StreamErr::Status(response.status().as_u16()));
            }
            Ok(response.bytes_stream().map_err(StreamErr::from).boxed())
        }
        .boxed()
    }
}
