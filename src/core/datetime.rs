use chrono::NaiveDate;

/*-------------------------------------------------------------------------------------------------
  Publication Date Format
-------------------------------------------------------------------------------------------------*/

const SERVICE_TAGS_DATE_FORMAT: &str = "%Y%m%d";

/// Parse the `YYYYMMDD` publication date embedded in a Service Tags filename. Returns `None` when
/// the digits do not form a calendar date.
pub fn parse_publication_date(digits: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(digits, SERVICE_TAGS_DATE_FORMAT).ok()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
