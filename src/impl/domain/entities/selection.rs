/// Calendar month a collection is scoped to. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

/// What a feed was requested for. Results for one selection must never be
/// shown under another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub period: Period,
    pub family_id: Option<String>,
}

// --

impl Period {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }
}

impl Selection {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            family_id: None,
        }
    }

    pub fn with_family(period: Period, family_id: impl Into<String>) -> Self {
        Self {
            period,
            family_id: Some(family_id.into()),
        }
    }
}
