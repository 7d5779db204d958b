//! REST endpoint definitions and wire types.

use serde::{Deserialize, Serialize};

use shelf_core::{PageRequest, ResourceKind};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Paths and id parameter of one backend resource.
#[derive(Debug)]
pub(crate) struct Endpoints {
    pub list: &'static str,
    pub get: &'static str,
    pub save: &'static str,
    pub delete: &'static str,
    /// Query parameter carrying the record id on get and delete.
    pub id_param: &'static str,
}

const BOOK: Endpoints = Endpoints {
    list: "/api/book/getBooks",
    get: "/api/book/getBook",
    save: "/api/book/saveBook",
    delete: "/api/book/deleteBook",
    id_param: "id",
};

const CHECKOUT: Endpoints = Endpoints {
    list: "/api/checkout/getCheckouts",
    get: "/api/checkout/getCheckout",
    save: "/api/checkout/saveCheckout",
    delete: "/api/checkout/deleteCheckout",
    id_param: "checkOutId",
};

pub(crate) fn endpoints(kind: ResourceKind) -> &'static Endpoints {
    match kind {
        ResourceKind::Book => &BOOK,
        ResourceKind::Checkout => &CHECKOUT,
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the list endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageQuery<'a> {
    pub page_index: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'static str>,
}

impl<'a> From<&'a PageRequest> for PageQuery<'a> {
    fn from(request: &'a PageRequest) -> Self {
        Self {
            page_index: request.page_index(),
            page_size: request.page_size(),
            sort: request.sort().map(|s| s.column.as_str()),
            direction: request.sort().map(|s| s.direction.as_str()),
        }
    }
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Sort;

    #[test]
    fn page_query_omits_absent_sort() {
        let request = PageRequest::new(2, 10).unwrap();
        let value = serde_json::to_value(PageQuery::from(&request)).unwrap();
        assert_eq!(value, serde_json::json!({"pageIndex": 2, "pageSize": 10}));
    }

    #[test]
    fn page_query_carries_sort_and_direction() {
        let request = PageRequest::default().with_sort(Some(Sort::descending("year")));
        let query = PageQuery::from(&request);
        assert_eq!(query.sort, Some("year"));
        assert_eq!(query.direction, Some("desc"));
    }

    #[test]
    fn checkout_ids_use_check_out_id() {
        assert_eq!(endpoints(ResourceKind::Checkout).id_param, "checkOutId");
        assert_eq!(endpoints(ResourceKind::Book).id_param, "id");
    }
}
