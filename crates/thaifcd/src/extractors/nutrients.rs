// ABOUTME: Maps nutrient row labels from detail tables onto the site's canonical key names.
// ABOUTME: Rules live in one ordered table; the first matching rule wins.

use crate::record::Section;

/// How a rule matches the lowercased row label.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Label equals one of these forms.
    Exact(&'static [&'static str]),
    /// Label starts with this form.
    Prefix(&'static str),
    /// Label contains one of these forms.
    Contains(&'static [&'static str]),
}

impl Pattern {
    fn matches(&self, label: &str) -> bool {
        match self {
            Pattern::Exact(forms) => forms.iter().any(|form| label == *form),
            Pattern::Prefix(prefix) => label.starts_with(prefix),
            Pattern::Contains(needles) => needles.iter().any(|needle| label.contains(needle)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    pattern: Pattern,
    key: &'static str,
}

/// Label rules in priority order, grouped the way the site orders its tables.
const RULES: &[Rule] = &[
    // Main nutrients
    Rule {
        pattern: Pattern::Exact(&["energy"]),
        key: "Energy",
    },
    Rule {
        pattern: Pattern::Exact(&["water"]),
        key: "Water",
    },
    Rule {
        pattern: Pattern::Exact(&["protein"]),
        key: "Protein",
    },
    Rule {
        pattern: Pattern::Exact(&["fat"]),
        key: "Fat",
    },
    Rule {
        pattern: Pattern::Prefix("carbohydrate"),
        key: "Carbohydrate",
    },
    Rule {
        pattern: Pattern::Contains(&["dietary fibre", "dietary fiber"]),
        key: "Dietary fibre",
    },
    Rule {
        pattern: Pattern::Exact(&["ash"]),
        key: "Ash",
    },
    // Minerals
    Rule {
        pattern: Pattern::Exact(&["sodium"]),
        key: "Sodium",
    },
    Rule {
        pattern: Pattern::Exact(&["potassium"]),
        key: "Potassium",
    },
    Rule {
        pattern: Pattern::Exact(&["calcium"]),
        key: "Calcium",
    },
    Rule {
        pattern: Pattern::Exact(&["iron"]),
        key: "Iron",
    },
    Rule {
        pattern: Pattern::Exact(&["iodine"]),
        key: "Iodine",
    },
    // Vitamins
    Rule {
        pattern: Pattern::Exact(&["retinol"]),
        key: "Retinol",
    },
    Rule {
        pattern: Pattern::Contains(&["total vitamin a"]),
        key: "Total vitamin A (RAE)",
    },
    Rule {
        pattern: Pattern::Exact(&["thiamin", "thiamine"]),
        key: "Thiamin",
    },
    Rule {
        pattern: Pattern::Exact(&["riboflavin"]),
        key: "Riboflavin",
    },
    Rule {
        pattern: Pattern::Exact(&["niacin"]),
        key: "Niacin",
    },
    Rule {
        pattern: Pattern::Exact(&["vitamin e"]),
        key: "Vitamin E",
    },
];

/// Resolve a table row label to its canonical nutrient key.
///
/// Matching is case-insensitive over the trimmed label; rules are tried in
/// table order and the first hit wins. Labels no rule recognizes return
/// `None` and their rows are dropped. The section the row sits under is
/// accepted for future section-sensitive rules but does not affect matching
/// today.
pub fn canonical_key(label: &str, _section: Option<Section>) -> Option<&'static str> {
    let needle = label.trim().to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.pattern.matches(&needle))
        .map(|rule| rule.key)
}
