//! App orchestration module.
//!
//! Wires the adapters to the translation pipeline: verifies the scoring
//! server is reachable, connects the bus, then runs one feed stream task per
//! configured event.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{error, info, warn};

use crate::adapter::mqtt::MqttPublisher;
use crate::adapter::scoring::{ScoringClient, ScoringStream};
use crate::config::Config;
use crate::error::Result;
use crate::port::{MatchLookup, NotificationStream, Publisher};
use crate::translator::Translator;

/// Main application struct.
pub struct App;

impl App {
    /// Run the bridge until every feed stream has closed.
    ///
    /// Startup failures (unreachable scoring server, unknown event, broker
    /// connection refused) are fatal; once streaming, failures are local to
    /// one notification and the bridge keeps listening.
    pub async fn run(config: Config) -> Result<()> {
        let client = Arc::new(ScoringClient::new(config.scoring.api_base()));

        // Connection check before opening any stream: the API must be
        // reachable and every configured event must exist.
        let version = client.get_version().await?;
        info!(version = %version, "Scoring API reachable");

        for event in &config.scoring.events {
            let details = client.get_event(event).await?;
            info!(event = %event, name = %details.name, "Event verified");
        }

        let publisher: Arc<dyn Publisher> = Arc::new(MqttPublisher::connect(&config.broker).await?);

        let mut tasks = Vec::new();
        for event in config.scoring.events.clone() {
            let stream = ScoringStream::new(config.scoring.stream_url(&event));
            let lookup: Arc<dyn MatchLookup> = client.clone();
            let translator = Translator::new(event, lookup, publisher.clone());
            tasks.push(tokio::spawn(async move {
                if let Err(e) = run_stream(stream, &translator).await {
                    error!(event = %translator.event(), error = %e, "Feed stream failed");
                }
            }));
        }

        join_all(tasks).await;
        warn!("All feed streams closed");

        Ok(())
    }
}

/// Consume one stream, translating every notification it yields.
///
/// Translation failures are logged and the loop continues; only the stream
/// ending (server close or transport error) terminates it.
pub async fn run_stream<S: NotificationStream>(
    mut stream: S,
    translator: &Translator,
) -> Result<()> {
    stream.connect().await?;

    while let Some(notification) = stream.next_notification().await {
        match translator.handle(&notification).await {
            Ok(publications) if publications.is_empty() => {}
            Ok(publications) => {
                info!(
                    event = %translator.event(),
                    count = publications.len(),
                    "Match outcomes published"
                );
            }
            Err(e) => {
                error!(event = %translator.event(), error = %e, "Failed to translate notification");
            }
        }
    }

    info!(source = stream.source_name(), "Notification stream ended");
    Ok(())
}
