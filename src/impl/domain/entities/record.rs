use chrono::NaiveDateTime;

/// Description the backend uses for legacy salary entries. Also the first
/// signal the classifier checks for salary-like incomes.
pub const SALARY_DESCRIPTION: &str = "Salário";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Income,
    Expense,
}

/// Backend collection a unified record was read from, and therefore the
/// collection any mutation of it must be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OriginKind {
    Salary,
    RecurringIncome,
    OneOffIncome,
    Expense,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordCategory {
    pub id: String,
    pub name: String,
}

/// Optional fields that survive normalization only because they are the
/// signals used to route a record back to its collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordMarkers {
    pub salary_id: Option<String>,
    pub source_id: Option<String>,
    pub recurring_id: Option<String>,
    /// Raw backend `type` of the entry ("fixed", "flex", "variable", ...).
    pub entry_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedRecord {
    /// Unique within `origin_kind` only. Use [`UnifiedRecord::key`] to key
    /// records of a merged feed.
    pub id: String,
    pub description: String,
    /// Non-negative magnitude. Direction is given by `kind`.
    pub value: f64,
    /// ISO-8601 date or date-time. Empty when the source had none.
    pub date: String,
    pub person_id: Option<String>,
    pub kind: RecordKind,
    pub origin_kind: OriginKind,
    pub category: Option<RecordCategory>,
    pub category_name: Option<String>,
    /// Category id sent alongside `category_name`. May be set without an
    /// embedded `category`.
    pub category_id: Option<String>,
    pub markers: RecordMarkers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub origin_kind: OriginKind,
    pub id: String,
}

// --

impl RecordKind {
    pub fn glyph(&self) -> char {
        match self {
            RecordKind::Income => '+',
            RecordKind::Expense => '-',
        }
    }
}

impl OriginKind {
    pub fn kind(&self) -> RecordKind {
        match self {
            OriginKind::Expense => RecordKind::Expense,
            OriginKind::Salary | OriginKind::RecurringIncome | OriginKind::OneOffIncome => {
                RecordKind::Income
            }
        }
    }

    /// Remote resource segment the collection lives under.
    pub fn resource(&self) -> &'static str {
        match self {
            OriginKind::Salary => "salaries",
            OriginKind::RecurringIncome => "incomes",
            OriginKind::OneOffIncome => "extras",
            OriginKind::Expense => "expenses",
        }
    }
}

impl std::fmt::Display for OriginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource())
    }
}

impl UnifiedRecord {
    /// Empty record of the given origin, with `kind` derived from it.
    pub fn new(origin_kind: OriginKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            value: 0.0,
            date: String::new(),
            person_id: None,
            kind: origin_kind.kind(),
            origin_kind,
            category: None,
            category_name: None,
            category_id: None,
            markers: RecordMarkers::default(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            origin_kind: self.origin_kind,
            id: self.id.clone(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.origin_kind.kind() == self.kind
    }

    /// Parsed `date`, or `None` if it is empty or not ISO-8601.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        crate::domain::logic::utils::parse_iso_timestamp(&self.date)
    }
}
