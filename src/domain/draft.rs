//! The post being assembled by the share form.

use vidz_api_types::CreatePostRequest;

use super::error::DomainError;
use super::tags::TagSelection;

/// Longest description the form stores, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPost {
    title: String,
    video_url: String,
    description: String,
    instructor_name: String,
    tags: TagSelection,
}

impl DraftPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructor_name(&self) -> &str {
        &self.instructor_name
    }

    pub fn tags(&self) -> &TagSelection {
        &self.tags
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_video_url(&mut self, value: impl Into<String>) {
        self.video_url = value.into();
    }

    /// Store the description, dropping everything past
    /// [`DESCRIPTION_MAX_CHARS`].
    pub fn set_description(&mut self, value: &str) {
        self.description = clamp_description(value).to_owned();
    }

    pub fn set_instructor_name(&mut self, value: impl Into<String>) {
        self.instructor_name = value.into();
    }

    /// Replace the selection with the complete set reported by the selector.
    pub fn replace_tags(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.tags = TagSelection::from_ids(ids);
    }

    /// Helper line shown under the description input.
    pub fn description_helper_text(&self) -> String {
        format!(
            "{}/{DESCRIPTION_MAX_CHARS} characters",
            self.description.chars().count()
        )
    }

    /// Check the fields a submit cannot go without, in form order.
    pub fn check_required(&self) -> Result<(), DomainError> {
        let required = [
            ("Title", &self.title),
            ("Video URL", &self.video_url),
            ("Instructor name", &self.instructor_name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(DomainError::missing_field(field));
            }
        }
        Ok(())
    }

    pub fn to_request(&self, user_id: i64) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title.clone(),
            video_url: self.video_url.clone(),
            description: self.description.clone(),
            user_id,
            instructor_name: self.instructor_name.clone(),
            tags: self.tags.ids().to_vec(),
        }
    }
}

/// Prefix of `value` holding at most [`DESCRIPTION_MAX_CHARS`] characters.
pub fn clamp_description(value: &str) -> &str {
    match value.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((cut, _)) => &value[..cut],
        None => value,
    }
}
