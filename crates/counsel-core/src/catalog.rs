//! Canonical option lists offered by the add forms.

/// Practice areas offered when adding a law-firm client.
pub const PRACTICE_AREAS: &[&str] = &[
    "Personal Injury",
    "Criminal Defense",
    "Family Law",
    "Estate Planning",
    "Business Law",
    "Real Estate",
    "Immigration",
    "Bankruptcy",
    "Employment Law",
    "Intellectual Property",
    "Tax Law",
    "Civil Litigation",
];

/// Practice areas offered when adding a lead (a prefix of [`PRACTICE_AREAS`]).
pub const LEAD_PRACTICE_AREAS: &[&str] = &[
    "Personal Injury",
    "Criminal Defense",
    "Family Law",
    "Estate Planning",
    "Business Law",
    "Real Estate",
    "Immigration",
    "Bankruptcy",
];

/// Find the canonical spelling of a practice area, ignoring case.
///
/// Practice areas are free-form labels on stored records, so an unknown value
/// returns `None` rather than an error.
#[must_use]
pub fn canonical_practice_area(raw: &str) -> Option<&'static str> {
    let needle = raw.trim();
    PRACTICE_AREAS
        .iter()
        .copied()
        .find(|area| area.eq_ignore_ascii_case(needle))
}
