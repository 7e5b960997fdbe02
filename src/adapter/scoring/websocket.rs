//! Scoring feed websocket stream.
//!
//! Connects to the scoring server's push stream for one event and yields
//! parsed notifications. The stream does NOT automatically reconnect: when
//! the server closes the connection or an error occurs,
//! `next_notification()` returns `None` and the stream is finished. Callers
//! wanting a fresh stream construct a new one.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use super::messages::FeedMessage;
use crate::domain::Notification;
use crate::error::Result;
use crate::port::NotificationStream;

/// The literal text frame the server sends as a keepalive.
const KEEPALIVE: &str = "pong";

/// Websocket-backed [`NotificationStream`] for one event's feed.
pub struct ScoringStream {
    url: String,
    connection: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl ScoringStream {
    /// Create a stream for the given websocket URL
    /// (e.g. `ws://localhost:18080/api/v2/stream/?code=test3`).
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            connection: None,
        }
    }
}

#[async_trait]
impl NotificationStream for ScoringStream {
    async fn connect(&mut self) -> Result<()> {
        info!(url = %self.url, "Connecting to feed stream");

        let (connection, response) = connect_async(&self.url).await?;
        info!(status = %response.status(), "Feed stream connected");

        self.connection = Some(connection);
        Ok(())
    }

    /// Read frames until one yields a notification or the stream ends.
    ///
    /// - The keepalive sentinel is recognized before any parse attempt and
    ///   surfaced as [`Notification::Keepalive`].
    /// - Unparseable text frames are logged and skipped; a malformed frame
    ///   must not terminate the stream.
    /// - Protocol pings are answered with pongs.
    /// - A close frame, a transport error, or a failed pong ends the stream.
    async fn next_notification(&mut self) -> Option<Notification> {
        let connection = self.connection.as_mut()?;

        while let Some(frame) = connection.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    if text == KEEPALIVE {
                        debug!("Keepalive received");
                        return Some(Notification::Keepalive);
                    }
                    match FeedMessage::parse(&text) {
                        Ok(notification) => {
                            debug!(raw = %text, "Feed notification received");
                            return Some(notification);
                        }
                        Err(e) => {
                            warn!(error = %e, raw = %text, "Failed to parse feed frame");
                        }
                    }
                }
                Ok(Message::Ping(data)) => {
                    debug!("Ping received");
                    if let Err(e) = connection.send(Message::Pong(data)).await {
                        error!(error = %e, "Failed to answer ping");
                        break;
                    }
                }
                Ok(Message::Close(frame)) => {
                    info!(frame = ?frame, "Feed stream closed by server");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Feed stream error");
                    break;
                }
            }
        }

        self.connection = None;
        None
    }

    fn source_name(&self) -> &'static str {
        "scoring-stream"
    }
}
