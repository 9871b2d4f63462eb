use serde::Deserialize;
use serde_json::Value;

/// A page, blog post or attachment
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
  pub id: String,
  #[serde(rename = "type")]
  pub content_type: String,
  pub status: Option<String>,
  pub title: String,
  pub version: Option<ContentVersion>,
  /// Attachment metadata such as `mediaType`; expanded by default
  pub metadata: Option<Value>,
  /// Attachment details such as `fileSize`
  pub extensions: Option<Value>,
  #[serde(rename = "_links")]
  pub links: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVersion {
  pub number: u32,
  pub when: Option<String>,
  pub message: Option<String>,
  #[serde(default)]
  pub minor_edit: bool,
}

/// A page of content results
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPage {
  pub results: Vec<Content>,
  pub start: u32,
  pub limit: u32,
  pub size: u32,
  #[serde(rename = "_links")]
  pub links: Option<Value>,
}

/// Filters for attachment listings
#[derive(Debug, Clone, Default)]
pub struct AttachmentOptions {
  pub expand: Vec<String>,
  pub file_name: String,
  pub media_type: String,
}
