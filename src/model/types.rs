use crate::error::JobDataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four categorical axes a job is classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKind {
    Employer,
    Location,
    PositionType,
    CoreCompetency,
}

impl DimensionKind {
    /// Every dimension, in column order of the source file.
    pub const ALL: [DimensionKind; 4] = [
        DimensionKind::Employer,
        DimensionKind::Location,
        DimensionKind::PositionType,
        DimensionKind::CoreCompetency,
    ];

    /// Selector key used by query callers (`"positionType"`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Location => "location",
            Self::PositionType => "positionType",
            Self::CoreCompetency => "coreCompetency",
        }
    }

    /// Human-readable label shown next to the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Employer => "Employer",
            Self::Location => "Location",
            Self::PositionType => "Position Type",
            Self::CoreCompetency => "Skill",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DimensionKind {
    type Err = JobDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| JobDataError::InvalidDimensionKind(s.to_string()))
    }
}

/// A single distinct value within a dimension.
///
/// Two entities are equal iff kind and value are equal (exact, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DimensionEntity {
    kind: DimensionKind,
    value: String,
}

impl DimensionEntity {
    pub fn new(kind: DimensionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for DimensionEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A filterable field of a job: its name or one of its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Dimension(DimensionKind),
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Dimension(DimensionKind::Employer),
        Column::Dimension(DimensionKind::Location),
        Column::Dimension(DimensionKind::PositionType),
        Column::Dimension(DimensionKind::CoreCompetency),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dimension(kind) => kind.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Dimension(kind) => kind.label(),
        }
    }
}

impl FromStr for Column {
    type Err = JobDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Column::Name.key() {
            return Ok(Column::Name);
        }
        s.parse().map(Column::Dimension)
    }
}

/// A job posting. Identity is structural; there is no synthetic id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    name: String,
    employer: DimensionEntity,
    location: DimensionEntity,
    position_type: DimensionEntity,
    core_competency: DimensionEntity,
}

impl Job {
    pub fn new(
        name: impl Into<String>,
        employer: impl Into<String>,
        location: impl Into<String>,
        position_type: impl Into<String>,
        core_competency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            employer: DimensionEntity::new(DimensionKind::Employer, employer),
            location: DimensionEntity::new(DimensionKind::Location, location),
            position_type: DimensionEntity::new(DimensionKind::PositionType, position_type),
            core_competency: DimensionEntity::new(DimensionKind::CoreCompetency, core_competency),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employer(&self) -> &DimensionEntity {
        &self.employer
    }

    pub fn location(&self) -> &DimensionEntity {
        &self.location
    }

    pub fn position_type(&self) -> &DimensionEntity {
        &self.position_type
    }

    pub fn core_competency(&self) -> &DimensionEntity {
        &self.core_competency
    }

    /// The entity this job references for `kind`.
    pub fn dimension(&self, kind: DimensionKind) -> &DimensionEntity {
        match kind {
            DimensionKind::Employer => &self.employer,
            DimensionKind::Location => &self.location,
            DimensionKind::PositionType => &self.position_type,
            DimensionKind::CoreCompetency => &self.core_competency,
        }
    }

    /// The string value of a column.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Dimension(kind) => self.dimension(kind).value(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
