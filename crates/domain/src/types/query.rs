//! Query parameters accepted by the list and find endpoints

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE};

/// Paging and sorting for list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_no: i32,
    pub page_size: i32,
    pub sort_by: Vec<String>,
    pub is_ascending: bool,
}

impl PageRequest {
    pub fn new(page_no: i32, page_size: i32) -> Self {
        Self { page_no, page_size, ..Self::default() }
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by.push(field.into());
        self
    }

    pub fn descending(mut self) -> Self {
        self.is_ascending = false;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE_NO,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: Vec::new(),
            is_ascending: true,
        }
    }
}

/// Matching mode of the find endpoints
///
/// `is_exact` selects equality over partial matching, `is_logical_conjunction`
/// combines the criteria with AND instead of OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub is_exact: bool,
    pub is_logical_conjunction: bool,
}

impl SearchOptions {
    /// Partial matching, any criterion may match
    pub fn loose() -> Self {
        Self { is_exact: false, is_logical_conjunction: false }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { is_exact: true, is_logical_conjunction: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionFilter {
    pub name: Option<String>,
    pub action_id: Option<i64>,
    pub resource_id: Option<i64>,
    pub ids: Vec<i64>,
    pub options: SearchOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ids: Vec<i64>,
    pub options: SearchOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedAuthorizationFilter {
    pub tenant_id: Option<i64>,
    pub permission_id: Option<i64>,
    pub role_id: Option<i64>,
    pub user_id: Option<i64>,
    pub is_logical_conjunction: bool,
}

impl LinkedAuthorizationFilter {
    /// Filter matching every given criterion
    pub fn all() -> Self {
        Self { is_logical_conjunction: true, ..Self::default() }
    }

    pub fn tenant(mut self, tenant_id: i64) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn permission(mut self, permission_id: i64) -> Self {
        self.permission_id = Some(permission_id);
        self
    }

    pub fn role(mut self, role_id: i64) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_defaults() {
        let page = PageRequest::default();
        assert_eq!((page.page_no, page.page_size, page.is_ascending), (1, 10, true));

        let opts = SearchOptions::default();
        assert!(opts.is_exact && opts.is_logical_conjunction);
    }

    #[test]
    fn linked_authorization_filter_builder_sets_criteria() {
        let filter = LinkedAuthorizationFilter::all().tenant(1).role(7);
        assert_eq!(filter.tenant_id, Some(1));
        assert_eq!(filter.role_id, Some(7));
        assert_eq!(filter.user_id, None);
        assert!(filter.is_logical_conjunction);
    }
}
