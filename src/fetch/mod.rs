//! Request construction and HTTP execution.
//!
//! A request starts life as a [`template::RequestTemplate`] (URL plus
//! ordered parameters) and is cloned by [`http_client::Fetcher`] at send
//! time, so a shared base template can never be corrupted by an in-flight
//! request.

pub mod http_client;
pub mod template;
