use vidz_api_types::TagResponse;

/// Selectable tag from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl From<TagResponse> for Tag {
    fn from(value: TagResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Set of selected tag ids, kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection(Vec<i64>);

impl TagSelection {
    /// Build a selection from the full set reported by a selector. Repeated
    /// ids collapse onto their first occurrence.
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut selected = Vec::new();
        for id in ids {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        Self(selected)
    }

    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_drops_repeated_ids() {
        let selection = TagSelection::from_ids([4, 1, 4, 9, 1]);
        assert_eq!(selection.ids(), &[4, 1, 9]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn tag_from_response_keeps_id_and_label() {
        let tag = Tag::from(TagResponse {
            id: 7,
            name: "calculus".into(),
        });
        assert_eq!(tag.id, 7);
        assert_eq!(tag.name, "calculus");
    }
}
