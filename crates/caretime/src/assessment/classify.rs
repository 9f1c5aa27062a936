use super::domain::CareLevel;

/// Lower bounds of each care-level band in total certification minutes.
/// Bands are half-open: a total belongs to the highest band whose lower
/// bound it reaches.
const CARE_LEVEL_TABLE: [(u32, CareLevel); 7] = [
    (0, CareLevel::NotApplicable),
    (25, CareLevel::Support1),
    (32, CareLevel::Support2OrCare1),
    (50, CareLevel::Care2),
    (70, CareLevel::Care3),
    (90, CareLevel::Care4),
    (110, CareLevel::Care5),
];

/// Maps truncated total minutes to a care level.
pub fn classify(total_minutes: u32) -> CareLevel {
    CARE_LEVEL_TABLE
        .iter()
        .rev()
        .find(|(lower, _)| total_minutes >= *lower)
        .map(|(_, level)| *level)
        .unwrap_or(CareLevel::NotApplicable)
}
