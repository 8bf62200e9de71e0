/// Skincare terms accepted by the free-text LLM entry point.
pub const SKINCARE_KEYWORDS: [&str; 45] = [
    "skincare",
    "skin health",
    "skin type",
    "skincare routine",
    "skincare products",
    "moisturizer",
    "cleanser",
    "toner",
    "serum",
    "sunscreen",
    "exfoliation",
    "hydration",
    "acne treatment",
    "anti-aging",
    "hyperpigmentation",
    "sensitive skin",
    "dry skin",
    "oily skin",
    "combination skin",
    "skin barrier",
    "collagen",
    "retinol",
    "vitamin C",
    "hyaluronic acid",
    "niacinamide",
    "peptides",
    "AHAs",
    "BHAs",
    "natural skincare",
    "dermatologist",
    "facial",
    "skin concerns",
    "dark spots",
    "redness",
    "blemishes",
    "eczema",
    "psoriasis",
    "rosacea",
    "dermatitis",
    "pore size",
    "skin texture",
    "skin tone",
    "under-eye care",
    "skin detox",
    "allergic reactions",
];

/// Case-insensitive substring scan against [`SKINCARE_KEYWORDS`].
///
/// No stemming and no word boundaries: a keyword buried inside a longer
/// word still counts.
pub fn is_in_scope(text: &str) -> bool {
    let haystack = text.to_lowercase();

    SKINCARE_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}
