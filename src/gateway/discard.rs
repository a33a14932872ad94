use async_trait::async_trait;
use tracing::debug;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

#[derive(Debug, Default)]
pub struct DiscardPublisher {}

#[async_trait]
impl EventPublisher for DiscardPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        debug!(event_id = event.event_id.as_str(), "discarding domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_discard_events() {
        let publisher = create_publisher(GatewayPublisherVia::Discard).await;
        let event = DomainEvent::deleted("books", "shelf", "1", &HashMap::new(), &1).expect("build event");
        let _ = publisher.publish(&event).await.expect("should discard");
    }
}
