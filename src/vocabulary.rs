//! Compiled-in vocabulary tables
//!
//! All terms are lowercase; matching lowercases the paragraph instead.

/// Cities named in Northern Ireland Assembly transcripts
pub const CITIES: &[&str] = &[
    "armagh", "belfast", "derry", "lisburn", "newry", "dublin", "london", "brussels",
];

pub const TOWNS: &[&str] = &[
    "antrim",
    "ballymena",
    "banbridge",
    "bangor",
    "carrickfergus",
    "coleraine",
    "cookstown",
    "craigavon",
    "downpatrick",
    "dungannon",
    "enniskillen",
    "larne",
    "limavady",
    "magherafelt",
    "newtownards",
    "omagh",
    "portadown",
    "strabane",
];

pub const COUNTRIES: &[&str] = &[
    "northern ireland",
    "republic of ireland",
    "great britain",
    "united kingdom",
    "england",
    "scotland",
    "wales",
    "france",
    "germany",
    "spain",
    "italy",
    "united states",
    "canada",
    "china",
    "india",
];

/// Phrases addressing or referring to the chair
pub const SPEAKER_REFERENCES: &[&str] = &[
    "mr speaker",
    "madam speaker",
    "deputy speaker",
    "the speaker",
    "ceann comhairle",
];

pub const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Terms whose occurrences are reported at warning level by default
pub const CITY_WARNING_EXCEPTIONS: &[&str] = &["belfast"];

pub fn is_month_name(token: &str) -> bool {
    MONTHS.iter().any(|m| m.eq_ignore_ascii_case(token))
}

/// A day-of-month token: digits only, value 0 to 31
pub fn is_day_number(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.parse::<u8>().is_ok_and(|d| d <= 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names_case_insensitive() {
        assert!(is_month_name("August"));
        assert!(is_month_name("DECEMBER"));
        assert!(!is_month_name("aug"));
        assert!(!is_month_name("augusts"));
    }

    #[test]
    fn test_day_numbers() {
        assert!(is_day_number("0"));
        assert!(is_day_number("15"));
        assert!(is_day_number("31"));
        assert!(!is_day_number("32"));
        assert!(!is_day_number("+5"));
        assert!(!is_day_number("1st"));
        assert!(!is_day_number("2020"));
    }

    #[test]
    fn test_tables_are_lowercase() {
        for table in [CITIES, TOWNS, COUNTRIES, SPEAKER_REFERENCES, MONTHS] {
            for term in table {
                assert_eq!(*term, term.to_lowercase());
            }
        }
    }
}
