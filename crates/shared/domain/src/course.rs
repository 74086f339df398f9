use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Courses offered by the university.
///
/// The string form is the catalogue label, shared by `Display`, `FromStr` and serde.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize
)]
pub enum Course {
    #[strum(serialize = "Maths")]
    #[serde(rename = "Maths")]
    Maths,
    #[strum(serialize = "Physics")]
    #[serde(rename = "Physics")]
    Physics,
    #[strum(serialize = "Computer Science")]
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[strum(serialize = "Advanced English")]
    #[serde(rename = "Advanced English")]
    AdvancedEnglish,
    #[strum(serialize = "Babi-Foot")]
    #[serde(rename = "Babi-Foot")]
    BabiFoot,
}
