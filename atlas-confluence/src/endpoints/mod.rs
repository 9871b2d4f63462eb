//! # Confluence API Endpoints

mod attachments;
