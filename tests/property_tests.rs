// tests/property_tests.rs
//! Property tests for the sanitizers and the query encoding.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;
use solaredge_urls::query::sanitize_site_ids;
use solaredge_urls::query::vocabulary::SITE_STATUS;
use solaredge_urls::{Endpoint, ErrorKind, SiteListParams, StorageDataParams};
use url::Url;

fn first_occurrences(ids: &[i64]) -> Vec<i64> {
    let mut seen = Vec::new();
    for &id in ids {
        if id >= 0 && !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

fn arb_start() -> impl Strategy<Value = NaiveDateTime> {
    (2015i32..2030, 1u32..=12, 1u32..=28, 0u32..24).prop_map(|(y, m, d, h)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn sanitizer_keeps_distinct_non_negative_ids_in_order(ids in prop::collection::vec(-20i64..40, 0..16)) {
        let expected = first_occurrences(&ids);
        match sanitize_site_ids(&ids) {
            Ok(joined) => {
                let parsed: Vec<i64> = joined.split(',').map(|id| id.parse().unwrap()).collect();
                prop_assert_eq!(parsed, expected);
            }
            Err(err) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            }
        }
    }

    #[test]
    fn unknown_status_values_are_omitted(raw in "[a-zA-Z_]{1,12}") {
        prop_assume!(SITE_STATUS.normalize(&raw).is_none());

        let params = SiteListParams {
            status: vec![raw],
            ..Default::default()
        };
        let request = params.compile("KEY").unwrap();
        prop_assert_eq!(request.query().get("status"), None);
    }

    #[test]
    fn query_values_survive_url_encoding(
        search in "\\PC{1,24}",
        key in "[A-Za-z0-9]{1,32}",
    ) {
        let params = SiteListParams {
            search_text: Some(search.clone()),
            ..Default::default()
        };
        let rendered = params.url(&key).unwrap();
        let parsed = Url::parse(&rendered).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        prop_assert_eq!(pairs.len(), 2);
        prop_assert_eq!(&pairs[0], &("searchText".to_string(), search));
        prop_assert_eq!(&pairs[1], &("api_key".to_string(), key));
    }

    #[test]
    fn storage_week_ceiling_is_inclusive(start in arb_start(), extra_secs in 0i64..=7 * 24 * 3600) {
        let within = StorageDataParams {
            site_id: 1,
            start_time: Some(start),
            end_time: Some(start + TimeDelta::seconds(extra_secs)),
            serials: vec![],
        };
        prop_assert!(within.url("KEY").is_ok());

        let beyond = StorageDataParams {
            end_time: Some(start + TimeDelta::days(7) + TimeDelta::seconds(1 + extra_secs)),
            ..within
        };
        prop_assert_eq!(beyond.url("KEY").unwrap_err().kind(), ErrorKind::RangeTooLarge);
    }
}
