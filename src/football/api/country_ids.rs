//! Maps human country names to upstream country ids

use crate::constants::upstream::DEFAULT_COUNTRY_ID;

/// Upstream id with the country's short name in English, Spanish, German,
/// French and Italian (lowercase)
const COUNTRY_NAMES: &[(&str, [&str; 5])] = &[
    ("41", ["england", "inglaterra", "england", "angleterre", "inghilterra"]),
    ("6", ["spain", "españa", "spanien", "espagne", "spagna"]),
    ("5", ["germany", "alemania", "deutschland", "allemagne", "germania"]),
    ("3", ["france", "francia", "frankreich", "france", "francia"]),
    ("4", ["italy", "italia", "italien", "italie", "italia"]),
];

/// Resolves a country name to the upstream country id, case-insensitively.
/// Unrecognized names resolve to the default id instead of failing.
pub fn country_id_for_name(country_name: &str) -> &'static str {
    let needle = country_name.to_lowercase();
    COUNTRY_NAMES
        .iter()
        .find(|(_, names)| names.contains(&needle.as_str()))
        .map(|(id, _)| *id)
        .unwrap_or(DEFAULT_COUNTRY_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_names() {
        assert_eq!(country_id_for_name("England"), "41");
        assert_eq!(country_id_for_name("Spain"), "6");
        assert_eq!(country_id_for_name("Germany"), "5");
        assert_eq!(country_id_for_name("France"), "3");
        assert_eq!(country_id_for_name("Italy"), "4");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(country_id_for_name("ITALY"), "4");
        assert_eq!(country_id_for_name("gErMaNy"), "5");
        assert_eq!(country_id_for_name("ESPAÑA"), "6");
    }

    #[test]
    fn test_other_languages() {
        assert_eq!(country_id_for_name("Deutschland"), "5");
        assert_eq!(country_id_for_name("Angleterre"), "41");
        assert_eq!(country_id_for_name("Spagna"), "6");
        assert_eq!(country_id_for_name("Frankreich"), "3");
        assert_eq!(country_id_for_name("Italie"), "4");
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(country_id_for_name("Atlantis"), DEFAULT_COUNTRY_ID);
        assert_eq!(country_id_for_name(""), DEFAULT_COUNTRY_ID);
    }
}
