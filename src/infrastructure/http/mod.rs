//! HTTP implementation of the service gateway.

mod http_gateway;

pub use http_gateway::HttpShortenerGateway;
