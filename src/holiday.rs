use chrono::naive::NaiveDate;
use chrono::Datelike;
use serde::Deserialize;

/// A named public holiday as returned by the holiday service.
#[derive(Debug, Clone, Deserialize)]
pub struct Holiday {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: HolidayDate,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayDate {
    pub iso: String,
}

/// Top-level payload of `GET /holidays`. The service is not entirely
/// consistent about the nested fields, so everything below `meta` falls
/// back to empty instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct HolidaysResponse {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub response: ResponseBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub code: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl Holiday {
    /// Calendar date of this holiday. The `iso` field may carry a time and
    /// offset suffix; only the leading `YYYY-MM-DD` is decomposed.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        let date_part = self.iso_str().split('T').next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    fn iso_str(&self) -> &str {
        self.date.iso.as_str()
    }
}

/// First holiday whose date decomposes to (`day`, `month0`, `year`), if any.
/// `month0` is 0-based as the grid indexes months. Holidays with an
/// undecodable date never match.
pub fn find_holiday(day: u32, month0: u32, year: i32, holidays: &[Holiday]) -> Option<&Holiday> {
    holidays.iter().find(|h| match h.naive_date() {
        Some(date) => date.day() == day && date.month0() == month0 && date.year() == year,
        None => false,
    })
}

pub fn is_holiday(day: u32, month0: u32, year: i32, holidays: &[Holiday]) -> bool {
    find_holiday(day, month0, year, holidays).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(name: &str, iso: &str) -> Holiday {
        Holiday {
            name: name.to_owned(),
            description: String::new(),
            date: HolidayDate {
                iso: iso.to_owned(),
            },
            types: Vec::new(),
        }
    }

    #[test]
    fn lookup_matches_exact_triple() {
        let holidays = vec![
            holiday("New Year", "2024-01-01"),
            holiday("Independence Day", "2024-09-07"),
        ];

        assert!(is_holiday(7, 8, 2024, &holidays));
        assert_eq!(
            find_holiday(7, 8, 2024, &holidays).map(|h| h.name.as_str()),
            Some("Independence Day")
        );

        // Same day in a different month or year is no match.
        assert!(!is_holiday(7, 7, 2024, &holidays));
        assert!(!is_holiday(7, 8, 2023, &holidays));
        assert!(!is_holiday(1, 0, 2025, &holidays));
    }

    #[test]
    fn lookup_on_empty_list() {
        assert!(!is_holiday(1, 0, 2024, &[]));
        assert!(find_holiday(1, 0, 2024, &[]).is_none());
    }

    #[test]
    fn lookup_takes_first_match() {
        let holidays = vec![
            holiday("Carnival", "2024-02-13"),
            holiday("Carnival (observed)", "2024-02-13"),
        ];
        assert_eq!(
            find_holiday(13, 1, 2024, &holidays).map(|h| h.name.as_str()),
            Some("Carnival")
        );
    }

    #[test]
    fn iso_with_time_suffix() {
        let h = holiday("Christmas", "2024-12-25T00:00:00-03:00");
        assert_eq!(h.naive_date(), NaiveDate::from_ymd_opt(2024, 12, 25));
        assert!(is_holiday(25, 11, 2024, &[h]));
    }

    #[test]
    fn malformed_iso_never_matches() {
        let h = holiday("Broken", "not-a-date");
        assert_eq!(h.naive_date(), None);
        assert!(!is_holiday(1, 0, 2024, &[h]));
    }

    #[test]
    fn payload_parses_holiday_fields() {
        let body = r#"{
            "meta": { "code": 200 },
            "response": {
                "holidays": [
                    {
                        "name": "Independence Day",
                        "description": "Brazilian independence from Portugal.",
                        "date": { "iso": "2024-09-07" },
                        "type": ["National holiday"]
                    }
                ]
            }
        }"#;

        let payload: HolidaysResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payload.meta.code, 200);
        assert_eq!(payload.response.holidays.len(), 1);

        let h = &payload.response.holidays[0];
        assert_eq!(h.name, "Independence Day");
        assert_eq!(h.types, vec!["National holiday"]);
        assert_eq!(h.naive_date(), NaiveDate::from_ymd_opt(2024, 9, 7));
    }

    #[test]
    fn payload_missing_holidays_is_empty_not_error() {
        let payload: HolidaysResponse =
            serde_json::from_str(r#"{ "meta": { "code": 200 }, "response": {} }"#).unwrap();
        assert!(payload.response.holidays.is_empty());

        let payload: HolidaysResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.response.holidays.is_empty());
    }
}
