//! Report definition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::DataSource;
use crate::filter::FilterPredicate;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// Single-key sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field id to sort by
    pub field: String,
    /// Sort direction
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Descending,
        }
    }
}

/// The caller-supplied shape of a definition, before the store assigns
/// identity and timestamps. Also the full-replacement payload for updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    /// Display name, must be non-empty
    pub name: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target record collection
    pub data_source: DataSource,
    /// Ordered, unique field ids; column order of the result
    pub fields: Vec<String>,
    /// Flat predicate list, combined with AND
    #[serde(default)]
    pub filters: Vec<FilterPredicate>,
    /// Optional single-key sort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl ReportDraft {
    /// Creates a minimal draft with no filters or sort
    pub fn new(
        name: impl Into<String>,
        data_source: DataSource,
        fields: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_source,
            fields: fields.into_iter().map(Into::into).collect(),
            filters: Vec::new(),
            sort: None,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a filter predicate
    pub fn with_filter(mut self, predicate: FilterPredicate) -> Self {
        self.filters.push(predicate);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A saved report definition, owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Store-assigned identity
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_source: DataSource,
    pub fields: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterPredicate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Stamped by the execution service's run path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<DateTime<Utc>>,
}

impl ReportDefinition {
    /// Materializes a draft into a saved definition
    pub fn from_draft(draft: ReportDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            data_source: draft.data_source,
            fields: draft.fields,
            filters: draft.filters,
            sort: draft.sort,
            created_at,
            last_run_at: None,
        }
    }

    /// Replaces every caller-editable field from a draft.
    ///
    /// Identity, creation time, and the run stamp survive; nothing is merged.
    pub fn replace_from(&mut self, draft: ReportDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.data_source = draft.data_source;
        self.fields = draft.fields;
        self.filters = draft.filters;
        self.sort = draft.sort;
    }

    /// Returns the draft view of this definition
    pub fn as_draft(&self) -> ReportDraft {
        ReportDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            data_source: self.data_source,
            fields: self.fields.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
        }
    }
}
