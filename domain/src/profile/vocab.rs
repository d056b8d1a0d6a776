//! Fixed intake vocabularies.
//!
//! The intake form offers a closed set of concern and lifestyle options;
//! profiles carry the selected values verbatim, in selection order. The
//! mock rules and the prompt builder both operate on these exact strings.

/// Health concern options, in intake display order.
pub const CONCERNS: &[&str] = &[
    "피로",
    "소화불량",
    "수면장애",
    "스트레스",
    "관절통",
    "두통",
    "면역력저하",
    "피부건조",
    "탈모",
    "기타",
];

/// Lifestyle options, in intake display order.
pub const LIFESTYLE: &[&str] = &[
    "운동_정기적",
    "운동_가끔",
    "운동_안함",
    "수면_양호",
    "수면_보통",
    "수면_나쁨",
    "스트레스_높음",
    "스트레스_보통",
    "스트레스_낮음",
    "야근_자주",
    "야근_가끔",
    "야근_안함",
];

/// Whether `value` is one of the known concern options.
pub fn is_known_concern(value: &str) -> bool {
    CONCERNS.contains(&value)
}

/// Whether `value` is one of the known lifestyle options.
pub fn is_known_lifestyle(value: &str) -> bool {
    LIFESTYLE.contains(&value)
}
