//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource type. Each module adds
//! methods to one of the clients in [`crate::client`].

mod issues;
mod labels;
mod metadata;
mod myself;
mod organizations;
mod request_attachments;
mod server;
mod sprints;
mod transitions;
