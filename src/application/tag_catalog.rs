use tracing::{debug, warn};

use crate::application::ports::TagsApi;
use crate::domain::tags::Tag;

pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "Tags could not be loaded.";

/// Tags offered to the selector, together with how fetching them went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagCatalog {
    #[default]
    Loading,
    Ready(Vec<Tag>),
    Unavailable {
        reason: String,
    },
}

impl TagCatalog {
    pub async fn fetch(api: &dyn TagsApi) -> Self {
        match api.list_tags().await {
            Ok(tags) => {
                debug!(count = tags.len(), "tag catalog loaded");
                Self::Ready(tags)
            }
            Err(err) => {
                warn!(error = %err, "failed to load tag catalog");
                Self::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Tags available for selection; empty unless the catalog loaded.
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Ready(tags) => tags,
            Self::Loading | Self::Unavailable { .. } => &[],
        }
    }

    pub fn label_for(&self, id: i64) -> Option<&str> {
        self.tags()
            .iter()
            .find(|tag| tag.id == id)
            .map(|tag| tag.name.as_str())
    }

    /// Banner text to show above the selector, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable { .. } => Some(CATALOG_UNAVAILABLE_MESSAGE),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}
