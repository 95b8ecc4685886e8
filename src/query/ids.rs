// src/query/ids.rs
//! Sanitizers for the identifiers embedded in request paths.

use crate::error::RequestError;

/// Rejects negative site ids.
pub fn require_site_id(site_id: i64) -> Result<i64, RequestError> {
    if site_id < 0 {
        return Err(RequestError::invalid(
            "siteId",
            format!("{} is negative, site ids must be >= 0", site_id),
        ));
    }
    Ok(site_id)
}

/// Rejects blank serial numbers where the path needs one.
pub fn require_serial_number(serial_number: &str) -> Result<&str, RequestError> {
    let trimmed = serial_number.trim();
    if trimmed.is_empty() {
        return Err(RequestError::invalid(
            "serialNumber",
            "a non-empty serial number is required",
        ));
    }
    Ok(trimmed)
}

/// Joins the distinct non-negative ids with `,`, keeping first occurrences.
///
/// Fails when the list is empty or nothing survives filtering; every bulk
/// operation needs at least one usable id.
pub fn sanitize_site_ids(site_ids: &[i64]) -> Result<String, RequestError> {
    if site_ids.is_empty() {
        return Err(RequestError::invalid(
            "siteIds",
            "at least one site id must be given",
        ));
    }

    let mut kept: Vec<i64> = Vec::with_capacity(site_ids.len());
    for &id in site_ids {
        if id >= 0 && !kept.contains(&id) {
            kept.push(id);
        }
    }

    if kept.is_empty() {
        return Err(RequestError::invalid(
            "siteIds",
            "no valid site ids found, site ids must be >= 0",
        ));
    }

    Ok(kept
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(","))
}

/// Distinct non-blank serial numbers joined with `,`, or `None` if none remain.
pub fn dedup_serials<S: AsRef<str>>(serials: &[S]) -> Option<String> {
    let mut kept: Vec<&str> = Vec::new();
    for serial in serials {
        let serial = serial.as_ref().trim();
        if !serial.is_empty() && !kept.contains(&serial) {
            kept.push(serial);
        }
    }
    (!kept.is_empty()).then(|| kept.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn sanitizer_keeps_first_occurrence_order() {
        assert_eq!(sanitize_site_ids(&[3, -1, 3, 2, 2]).unwrap(), "3,2");
        assert_eq!(sanitize_site_ids(&[0]).unwrap(), "0");
    }

    #[test]
    fn sanitizer_rejects_empty_and_all_negative() {
        let err = sanitize_site_ids(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = sanitize_site_ids(&[-1, -7]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn site_id_must_be_non_negative() {
        assert_eq!(require_site_id(0).unwrap(), 0);
        assert!(require_site_id(-1).is_err());
    }

    #[test]
    fn serial_number_must_not_be_blank() {
        assert_eq!(require_serial_number(" 7F1234-56 ").unwrap(), "7F1234-56");
        assert!(require_serial_number("   ").is_err());
    }

    #[test]
    fn serials_are_deduplicated() {
        assert_eq!(
            dedup_serials(&["B1", "", "B2", "B1"]).as_deref(),
            Some("B1,B2")
        );
        assert_eq!(dedup_serials::<&str>(&[]), None);
        assert_eq!(dedup_serials(&[" "]), None);
    }
}
