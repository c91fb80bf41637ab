use serde::{Deserialize, Serialize};

/// Discrete grade tier derived from a numeric average.
///
/// Serialized with the exact labels clients display ("A+", "A", ...), which
/// also act as the keys of the summary's grade histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    F,
}

impl Grade {
    /// Maps an average to its tier. Inclusive lower bounds, highest first.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::APlus
        } else if average >= 75.0 {
            Grade::A
        } else if average >= 60.0 {
            Grade::B
        } else if average >= 50.0 {
            Grade::C
        } else {
            Grade::F
        }
    }

    /// Fixed remark attached to each tier.
    pub fn remark(self) -> &'static str {
        match self {
            Grade::APlus => "Outstanding",
            Grade::A => "Very Good",
            Grade::B => "Good",
            Grade::C => "Satisfactory",
            Grade::F => "Needs Improvement",
        }
    }
}

/// Raw marks for one student as submitted by a client.
///
/// Ephemeral: built per request at the HTTP boundary, consumed by the
/// processor, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub marks: Vec<i32>,
}

/// Computed outcome for one student. Immutable once produced; owned by the
/// containing report after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    pub name: String,
    /// The submitted marks, echoed back unchanged.
    pub marks: Vec<i32>,
    pub average: f64,
    pub grade: Grade,
    /// Positional label ("Subject 3") of the first maximum mark. With no
    /// marks this stays "Subject 1", kept as the service has always behaved.
    pub best_subject: String,
    pub remark: String,
}
