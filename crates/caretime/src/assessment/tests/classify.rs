use crate::assessment::classify::classify;
use crate::assessment::domain::CareLevel;

#[test]
fn classification_bands_are_half_open() {
    assert_eq!(classify(0), CareLevel::NotApplicable);
    assert_eq!(classify(24), CareLevel::NotApplicable);
    assert_eq!(classify(25), CareLevel::Support1);
    assert_eq!(classify(31), CareLevel::Support1);
    assert_eq!(classify(32), CareLevel::Support2OrCare1);
    assert_eq!(classify(49), CareLevel::Support2OrCare1);
    assert_eq!(classify(50), CareLevel::Care2);
    assert_eq!(classify(69), CareLevel::Care2);
    assert_eq!(classify(70), CareLevel::Care3);
    assert_eq!(classify(89), CareLevel::Care3);
    assert_eq!(classify(90), CareLevel::Care4);
    assert_eq!(classify(109), CareLevel::Care4);
    assert_eq!(classify(110), CareLevel::Care5);
}

#[test]
fn top_band_is_unbounded() {
    assert_eq!(classify(500), CareLevel::Care5);
    assert_eq!(classify(u32::MAX), CareLevel::Care5);
}
