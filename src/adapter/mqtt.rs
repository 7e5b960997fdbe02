//! MQTT bus publisher.
//!
//! Wraps an MQTT client behind the [`Publisher`] port. The client's event
//! loop runs on its own task: it answers broker keepalives, logs inbound
//! messages on the optional monitor topic, and keeps retrying the broker
//! connection so a broker outage degrades publishing without taking the
//! bridge down.

use std::time::Duration;

use async_trait::async_trait;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tracing::{error, info};
use url::Url;

use crate::config::BrokerConfig;
use crate::error::{Error, Result};
use crate::port::Publisher;

const KEEP_ALIVE: Duration = Duration::from_secs(30);
const RETRY_DELAY: Duration = Duration::from_secs(5);
const EVENT_CAPACITY: usize = 16;

/// MQTT-backed [`Publisher`].
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MqttPublisher {
    /// Connect to the broker named by `config` and spawn the event loop.
    ///
    /// When `monitor_topic` is configured, the publisher also subscribes to
    /// it and logs every inbound message.
    pub async fn connect(config: &BrokerConfig) -> Result<Self> {
        let url = Url::parse(&config.url)?;
        match url.scheme() {
            "mqtt" | "tcp" => {}
            scheme => {
                return Err(Error::Connection(format!(
                    "unsupported broker scheme '{scheme}'"
                )));
            }
        }
        let host = url
            .host_str()
            .ok_or_else(|| Error::Connection("broker URL has no host".into()))?;
        let port = url.port().unwrap_or(1883);

        info!(host = %host, port = port, "Connecting to broker");

        let mut options = MqttOptions::new(config.client_id.clone(), host, port);
        options.set_keep_alive(KEEP_ALIVE);

        let (client, event_loop) = AsyncClient::new(options, EVENT_CAPACITY);
        tokio::spawn(drive(event_loop));

        if let Some(topic) = &config.monitor_topic {
            client
                .subscribe(topic, QoS::AtLeastOnce)
                .await
                .map_err(|e| Error::Broker(e.to_string()))?;
            info!(topic = %topic, "Monitoring bus topic");
        }

        Ok(Self { client })
    }
}

/// Drive the client event loop until the process exits.
///
/// Polling is what makes the client make progress; on a connection error the
/// next poll reconnects, so this loop only backs off and keeps going.
async fn drive(mut event_loop: EventLoop) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                info!("Broker connected");
            }
            Ok(Event::Incoming(Packet::Publish(message))) => {
                info!(
                    topic = %message.topic,
                    payload = %String::from_utf8_lossy(&message.payload),
                    "Bus message"
                );
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Broker connection error");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<()> {
        self.client
            .publish(topic, QoS::AtLeastOnce, false, payload)
            .await
            .map_err(|e| Error::Broker(e.to_string()))
    }

    fn bus_name(&self) -> &'static str {
        "mqtt"
    }
}
