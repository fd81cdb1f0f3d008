// ==========================================
// Parts Inventory - Category matcher
// ==========================================
// Resolves free-text category values to a known category id through
// layered matching: exact -> normalized -> partial -> heuristic variants.
// A miss is a miss: callers turn None into a row error, never a default
// category (no silent miscategorization).
// ==========================================

use crate::domain::category::Category;

/// Strip whitespace/hyphens/underscores and lowercase.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Substring containment in either direction.
fn partial_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Resolve `input` to a category id, or `None` when every layer misses.
///
/// Layers, each attempted only if the previous yields nothing; within a
/// layer the first match in `known` order wins, so resolution is fully
/// deterministic for a given input and category list:
///
/// 1. exact id (case-insensitive)
/// 2. exact name (case-insensitive)
/// 3. normalized equality, plus name with spaces as hyphens and id with
///    hyphens as spaces tested against the raw input
/// 4. substring containment in either direction against name or id
/// 5. heuristic variants of the input: trailing "s" stripped, "s" appended,
///    then "filter"/"oil"/"air"/"cabin" removed (each independently,
///    trimmed), tested by containment in either direction
pub fn match_category(input: &str, known: &[Category]) -> Option<String> {
    let raw = input.trim().to_lowercase();
    if raw.is_empty() {
        return None;
    }

    // Layer 1: exact id
    if let Some(cat) = known.iter().find(|c| c.id.to_lowercase() == raw) {
        return Some(cat.id.clone());
    }

    // Layer 2: exact name
    if let Some(cat) = known.iter().find(|c| c.name.to_lowercase() == raw) {
        return Some(cat.id.clone());
    }

    // Layer 3: separator-insensitive equality
    let norm_input = normalize(&raw);
    for cat in known {
        let id_lower = cat.id.to_lowercase();
        let name_lower = cat.name.to_lowercase();
        if normalize(&id_lower) == norm_input
            || normalize(&name_lower) == norm_input
            || name_lower.replace(' ', "-") == raw
            || id_lower.replace('-', " ") == raw
        {
            return Some(cat.id.clone());
        }
    }

    // Layer 4: substring / partial
    for cat in known {
        if partial_match(&raw, &cat.name.to_lowercase())
            || partial_match(&raw, &cat.id.to_lowercase())
        {
            return Some(cat.id.clone());
        }
    }

    // Layer 5: heuristic variants, in a fixed order; first variant that
    // produces a match anywhere wins
    for variant in input_variants(&raw) {
        for cat in known {
            if partial_match(&variant, &cat.name.to_lowercase())
                || partial_match(&variant, &cat.id.to_lowercase())
            {
                return Some(cat.id.clone());
            }
        }
    }

    None
}

/// Generate heuristic input variants (spec order: strip "s", append "s",
/// then remove each of the filter-domain substrings). Variants equal to the
/// input or empty are dropped: an empty variant would containment-match
/// every category.
fn input_variants(raw: &str) -> Vec<String> {
    let mut variants = Vec::new();

    if let Some(stripped) = raw.strip_suffix('s') {
        variants.push(stripped.to_string());
    }
    variants.push(format!("{raw}s"));

    for noise in ["filter", "oil", "air", "cabin"] {
        let removed = raw.replace(noise, "");
        let removed = removed.trim().to_string();
        if removed != raw {
            variants.push(removed);
        }
    }

    variants.retain(|v| !v.is_empty());
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::builtin_categories;

    fn air_only() -> Vec<Category> {
        vec![Category::builtin("air-filters", "Air Filters")]
    }

    #[test]
    fn test_exact_id_match() {
        let known = builtin_categories();
        assert_eq!(
            match_category("oil-filters", &known),
            Some("oil-filters".to_string())
        );
        assert_eq!(
            match_category("OIL-FILTERS", &known),
            Some("oil-filters".to_string())
        );
    }

    #[test]
    fn test_exact_name_match() {
        let known = builtin_categories();
        assert_eq!(
            match_category("Cabin Filters", &known),
            Some("cabin-filters".to_string())
        );
    }

    #[test]
    fn test_hyphen_space_insensitive() {
        let known = air_only();
        assert_eq!(
            match_category("air filters", &known),
            Some("air-filters".to_string())
        );
        assert_eq!(
            match_category("air_filters", &known),
            Some("air-filters".to_string())
        );
    }

    #[test]
    fn test_singular_form_matches() {
        let known = air_only();
        assert_eq!(
            match_category("air filter", &known),
            Some("air-filters".to_string())
        );
    }

    #[test]
    fn test_partial_match() {
        let known = air_only();
        assert_eq!(
            match_category("filters", &known),
            Some("air-filters".to_string())
        );
    }

    #[test]
    fn test_heuristic_variant_trailing_s() {
        let known = vec![Category::builtin("oil-filters", "Oil Filters")];
        // "oils" only matches once the trailing "s" is stripped
        assert_eq!(
            match_category("oils", &known),
            Some("oil-filters".to_string())
        );
    }

    #[test]
    fn test_heuristic_variant_noise_removal() {
        let known = vec![Category::builtin("wipers", "Wipers")];
        // removing "filter" leaves "wiper", which "wipers" contains
        assert_eq!(
            match_category("wiperfilter", &known),
            Some("wipers".to_string())
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let known = air_only();
        assert_eq!(match_category("xyz", &known), None);
        assert_eq!(match_category("unknown-zone", &known), None);
    }

    #[test]
    fn test_empty_input_never_matches() {
        let known = builtin_categories();
        assert_eq!(match_category("", &known), None);
        assert_eq!(match_category("   ", &known), None);
    }

    #[test]
    fn test_first_category_in_order_wins() {
        let known = vec![
            Category::custom("filters-a", "Filters A"),
            Category::custom("filters-b", "Filters B"),
        ];
        // "filters" partial-matches both; list order decides
        assert_eq!(
            match_category("filters", &known),
            Some("filters-a".to_string())
        );
    }

    #[test]
    fn test_deterministic() {
        let known = builtin_categories();
        let first = match_category("air filter", &known);
        for _ in 0..10 {
            assert_eq!(match_category("air filter", &known), first);
        }
    }
}
