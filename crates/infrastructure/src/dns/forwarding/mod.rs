mod exchange;
mod forwarder;

pub use forwarder::UpstreamForwarder;
