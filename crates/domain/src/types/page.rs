//! Paged result container

use serde::{Deserialize, Deserializer, Serialize};

/// One page of results as returned by the list endpoints
///
/// `results` may be absent (or null) on the wire, which decodes to an empty
/// list. The server is trusted for `total_results >= results.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    pub current_page: i32,
    pub total_pages: i32,
    pub total_results: i32,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, current_page: i32, total_results: i32, total_pages: i32) -> Self {
        Self { current_page, total_pages, total_results, results }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, 0)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Action;
    use crate::utils::json::JsonEntity;

    #[test]
    fn decodes_page_of_actions() {
        let json = json!({
            "currentPage": 1,
            "totalResults": 3,
            "totalPages": 1,
            "results": [{"name": "add"}, {"name": "delete"}, {"name": "update"}]
        });

        let page = Action::page_from_json(&json).unwrap();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_results, 3);
        assert_eq!(page.total_pages, 1);
        let names: Vec<_> = page.results.iter().filter_map(|a| a.name.as_deref()).collect();
        assert_eq!(names, ["add", "delete", "update"]);
        assert!(page.results.iter().all(|a| a.id.is_none()));
    }

    #[test]
    fn missing_or_null_results_decode_to_empty_list() {
        let absent = json!({"currentPage": 2, "totalResults": 0, "totalPages": 0});
        let null = json!({"currentPage": 2, "totalResults": 0, "totalPages": 0, "results": null});

        let page: Page<i64> = serde_json::from_value(absent).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.current_page, 2);

        let page: Page<i64> = serde_json::from_value(null).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn map_keeps_paging_metadata() {
        let page = Page::new(vec![1_i64, 2, 3], 1, 3, 1).map(|id| id * 10);
        assert_eq!(page.results, vec![10, 20, 30]);
        assert_eq!(page.total_results, 3);
        assert!(page.is_last());
    }

    #[test]
    fn malformed_results_are_rejected() {
        let json = json!({"currentPage": 1, "totalResults": 1, "totalPages": 1, "results": {"name": "x"}});
        assert!(Action::page_from_json(&json).is_err());
    }
}
