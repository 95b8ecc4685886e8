// src/endpoints/accounts.rs
//! Account List API.

use super::{listing_query, Endpoint};
use crate::error::RequestError;
use crate::query::vocabulary::{ACCOUNT_SORT_PROPERTY, SORT_ORDER};
use crate::query::RequestPlan;

/// `accounts/list`: the account and its sub-accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListParams {
    pub size: Option<i64>,
    pub start_index: Option<i64>,
    pub search_text: Option<String>,
    /// Name, country, city, address, zip, fax, phone or notes.
    pub sort_property: Option<String>,
    pub sort_order: Option<String>,
}

impl Endpoint for AccountListParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let mut query = listing_query(self.size, self.start_index, self.search_text.as_deref());
        query
            .insert_term(&ACCOUNT_SORT_PROPERTY, self.sort_property.as_deref())
            .insert_term(&SORT_ORDER, self.sort_order.as_deref());

        Ok(RequestPlan::at(["accounts", "list"]).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_sort_keys_keep_vendor_casing() {
        let params = AccountListParams {
            sort_property: Some("ZIP".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };
        let plan = params.plan().unwrap();
        let request = crate::query::CompiledRequest::assemble(
            plan,
            crate::query::Authentication::ApiKey,
            "K",
        )
        .unwrap();
        assert_eq!(request.query().get("sortProperty"), Some("zip"));
        assert_eq!(request.query().get("sortOrder"), Some("DESC"));
    }

    #[test]
    fn site_only_sort_keys_are_dropped() {
        let params = AccountListParams {
            sort_property: Some("peakPower".to_string()),
            ..Default::default()
        };
        let request = params.compile("K").unwrap();
        assert!(request.query().is_empty());
    }
}
