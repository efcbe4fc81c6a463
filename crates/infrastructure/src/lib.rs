//! Ferrous CNAME Infrastructure Layer
//!
//! Adapters for the application ports: the hickory-backed wire codec, the
//! JSON rule store and the UDP upstream forwarder.

pub mod dns;
pub mod rules;
