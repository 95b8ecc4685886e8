// tests/concurrent_builds.rs
//! Builders share no state: parallel calls with the same input agree byte for byte.

use chrono::NaiveDate;
use solaredge_urls::{Endpoint, EnergyDetailsParams, SiteListParams};
use std::sync::Arc;
use std::thread;

#[test]
fn parallel_builds_are_identical() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let end = NaiveDate::from_ymd_opt(2024, 6, 15).and_then(|d| d.and_hms_opt(12, 0, 0));

    let details = Arc::new(EnergyDetailsParams {
        site_id: 42,
        start_time: start,
        end_time: end,
        time_unit: Some("quarter_of_an_hour".to_string()),
        meters: ["purchased", "feedin", "consumption", "production", "selfconsumption"]
            .iter()
            .map(|m| m.to_string())
            .collect(),
    });
    let listing = Arc::new(SiteListParams {
        search_text: Some("Zürich, CH".to_string()),
        status: vec!["disabled".to_string(), "active".to_string()],
        ..Default::default()
    });

    let expected = (details.url("KEY").unwrap(), listing.url("KEY").unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let details = Arc::clone(&details);
            let listing = Arc::clone(&listing);
            thread::spawn(move || {
                (0..50)
                    .map(|_| (details.url("KEY").unwrap(), listing.url("KEY").unwrap()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}
