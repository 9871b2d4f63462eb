//! # Confluence API Client
//!
//! Confluence Cloud content services built on the shared
//! [`atlas_core::ApiClient`] transport. Sites hosted under `/wiki` should be
//! passed with that prefix so resource paths resolve below it.

mod client;
mod endpoints;
pub mod models;

pub use client::ConfluenceClient;
pub use models::{AttachmentOptions, Content, ContentPage, ContentVersion};
