// Category decision.
//
// A profile first has to clear the passing threshold on its cumulative
// score — which includes the dropout penalty — and only then are the
// Education and Other category scores compared. The penalty is deliberately
// absent from that comparison: a profile can look education-leaning on
// category scores and still be rejected outright by penalty keywords.

use std::fmt;

/// The outcome of classifying one scored profile. Computed once,
/// never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Education,
    Other,
    Rejected,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Education => "Education",
            Classification::Other => "Other",
            Classification::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide a profile's category.
///
/// `total` is the cumulative score (all contributions, penalty included);
/// `education` and `other` are those two sets' own contributions. Ties go
/// to Other: the threshold already filtered low-signal profiles, and an
/// ambiguous one should not default into the narrower Education bucket.
pub fn classify(total: i64, education: i64, other: i64, passing_threshold: i64) -> Classification {
    if total < passing_threshold {
        Classification::Rejected
    } else if education > other {
        Classification::Education
    } else {
        Classification::Other
    }
}
