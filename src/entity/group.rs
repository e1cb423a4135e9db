//! Group entity and request payloads

use serde::{Deserialize, Serialize};

/// Browser window group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group id, assigned by the agent on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Group display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Display sort order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_num: Option<i32>,
}

/// Body for `/group/add`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAddRequest {
    /// Group display name
    pub group_name: String,
    /// Display sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_num: Option<i32>,
}

impl GroupAddRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            sort_num: None,
        }
    }

    pub fn with_sort_num(mut self, sort_num: i32) -> Self {
        self.sort_num = Some(sort_num);
        self
    }
}

/// Body for `/group/edit`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEditRequest {
    /// Group id
    pub id: String,
    /// New display name
    pub group_name: String,
    /// New sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_num: Option<i32>,
}

impl GroupEditRequest {
    pub fn new(id: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_name: group_name.into(),
            sort_num: None,
        }
    }
}
