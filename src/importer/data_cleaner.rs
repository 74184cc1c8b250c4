// ==========================================
// Traffic KPI Core - Data Cleaner
// ==========================================
// Cell-level coercion: multi-format date parsing and
// locale-aware numeric parsing
// ==========================================

use crate::domain::types::NumberLocale;
use chrono::NaiveDate;

// ==========================================
// DataCleaner
// ==========================================
pub struct DataCleaner {
    locale: NumberLocale,
}

impl DataCleaner {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    /// Trim a text cell
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// Empty/whitespace-only values become None
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Parse a date cell into a NaiveDate.
    ///
    /// # Recognized forms (priority order)
    /// 1. YYYY-M-D (year first)
    /// 2. D/M/YYYY
    /// 3. D-M-YYYY
    /// 4. D.M.YYYY
    /// 5. generic fallback (YYYY/M/D, YYYYMMDD, English month names)
    ///
    /// All separator forms after the first are read day-first; no
    /// ambiguity resolution is attempted for values like 03/04/2024.
    pub fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        const PRIORITY_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
        for format in PRIORITY_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(date);
            }
        }

        // Generic fallback for stray platform formats
        const FALLBACK_FORMATS: &[&str] = &["%Y/%m/%d", "%Y%m%d", "%B %d, %Y", "%b %d, %Y"];
        for format in FALLBACK_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(date);
            }
        }

        None
    }

    /// Parse a numeric cell, stripping currency markers and locale
    /// separators. Returns None when the cleaned value is not a number.
    pub fn try_parse_number(&self, value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        let without_currency: String = trimmed
            .replace("R$", "")
            .replace('$', "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let cleaned = match self.locale {
            // "," thousands separator, "." decimal mark
            NumberLocale::EnUs => without_currency.replace(',', ""),
            // "." thousands separator, "," decimal mark
            NumberLocale::PtBr => without_currency.replace('.', "").replace(',', "."),
        };

        cleaned.parse::<f64>().ok()
    }

    /// Numeric coercion with a silent zero default. Requiredness is
    /// validated one layer up, in the record validator.
    pub fn parse_number(&self, value: &str) -> f64 {
        self.try_parse_number(value).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> DataCleaner {
        DataCleaner::new(NumberLocale::EnUs)
    }

    #[test]
    fn test_parse_date_iso() {
        let date = cleaner().parse_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        // unpadded month/day
        let date = cleaner().parse_date("2024-1-5").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_date_day_first_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(cleaner().parse_date("01/02/2024"), Some(expected));
        assert_eq!(cleaner().parse_date("01-02-2024"), Some(expected));
        assert_eq!(cleaner().parse_date("01.02.2024"), Some(expected));
    }

    #[test]
    fn test_parse_date_round_trip_same_day() {
        // All four textual forms of one calendar day agree
        let forms = ["2024-03-07", "07/03/2024", "07-03-2024", "07.03.2024"];
        let parsed: Vec<NaiveDate> = forms
            .iter()
            .map(|f| cleaner().parse_date(f).unwrap())
            .collect();
        assert!(parsed.iter().all(|d| *d == parsed[0]));
    }

    #[test]
    fn test_parse_date_fallback_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(cleaner().parse_date("2024/03/07"), Some(expected));
        assert_eq!(cleaner().parse_date("20240307"), Some(expected));
        assert_eq!(cleaner().parse_date("March 7, 2024"), Some(expected));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(cleaner().parse_date(""), None);
        assert_eq!(cleaner().parse_date("not a date"), None);
        assert_eq!(cleaner().parse_date("32/13/2024"), None);
    }

    #[test]
    fn test_parse_number_en_us() {
        let cleaner = cleaner();
        assert_eq!(cleaner.try_parse_number("300.50"), Some(300.5));
        assert_eq!(cleaner.try_parse_number("1,234.56"), Some(1234.56));
        assert_eq!(cleaner.try_parse_number("$ 99.90"), Some(99.9));
        assert_eq!(cleaner.try_parse_number("1000"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_pt_br() {
        let cleaner = DataCleaner::new(NumberLocale::PtBr);
        assert_eq!(cleaner.try_parse_number("R$ 1.234,56"), Some(1234.56));
        assert_eq!(cleaner.try_parse_number("300,50"), Some(300.5));
        assert_eq!(cleaner.try_parse_number("1.000"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_invalid_defaults_to_zero() {
        assert_eq!(cleaner().try_parse_number("abc"), None);
        assert_eq!(cleaner().parse_number("abc"), 0.0);
        assert_eq!(cleaner().parse_number(""), 0.0);
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = cleaner();
        assert_eq!(cleaner.normalize_null(Some("  ".to_string())), None);
        assert_eq!(cleaner.normalize_null(None), None);
        assert_eq!(
            cleaner.normalize_null(Some(" value ".to_string())),
            Some("value".to_string())
        );
    }
}
