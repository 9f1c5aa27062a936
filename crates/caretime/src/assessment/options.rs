//! Option labels from the nationwide certification survey form. The rule
//! trees branch on these exact strings, so they live in one place instead of
//! being scattered through the calculators.

pub(crate) const INDEPENDENT: &str = "自立（介助なし）";
pub(crate) const WATCHED: &str = "見守り等";
pub(crate) const PARTIAL_ASSIST: &str = "一部介助";
pub(crate) const FULL_ASSIST: &str = "全介助";

pub(crate) const CAN: &str = "できる";
pub(crate) const ABSENT: &str = "ない";

pub(crate) const ROLL_UNAIDED: &str = "つかまらないでできる";
pub(crate) const ROLL_WITH_SUPPORT: &str = "何かにつかまればできる";
pub(crate) const STAND_UNAIDED: &str = "支えなしでできる";
pub(crate) const STAND_WITH_SUPPORT: &str = "何か支えがあればできる";

pub(crate) const VISION_NORMAL: &str = "普通（日常生活に支障がない）";
pub(crate) const VISION_ONE_METER: &str = "約1m離れた視力確認表の図が見える";
pub(crate) const HEARING_NORMAL: &str = "普通";
pub(crate) const HEARING_LOUD: &str = "普通の声がやっと聴き取れる";

pub(crate) const OUTING_WEEKLY: &str = "週1回以上";
pub(crate) const OUTING_MONTHLY: &str = "月1回以上";

pub(crate) const COMMUNICATES: &str = "調査対象者が意思を他者に伝達できる";
pub(crate) const COMMUNICATES_SOMETIMES: &str = "ときどき伝達できる";
pub(crate) const COMMUNICATES_RARELY: &str = "ほとんど伝達できない";

pub(crate) const DECIDES_EXCEPT_SPECIAL: &str = "特別な場合を除いてできる";
pub(crate) const DECIDES_WITH_DIFFICULTY: &str = "日常的に困難";

pub(crate) const PARALYSIS_ONE_LIMB: &str = "いずれか一肢のみ";
pub(crate) const PARALYSIS_BOTH_LEGS: &str = "両下肢のみ";
pub(crate) const PARALYSIS_ONE_SIDE: &str = "左上下肢あるいは右上下肢のみ";
pub(crate) const PARALYSIS_ALL_LIMBS: &str = "その他の四肢の麻痺";

pub(crate) const CONTRACTURE_SHOULDER: &str = "肩関節";
pub(crate) const CONTRACTURE_HIP: &str = "股関節";
