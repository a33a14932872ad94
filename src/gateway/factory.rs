use crate::gateway::discard::DiscardPublisher;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::LogPublisher;

pub(crate) async fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new("shelf.events"))
        }
        GatewayPublisherVia::Discard => {
            Box::new(DiscardPublisher::default())
        }
    }
}
