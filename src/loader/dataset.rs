use crate::model::{DimensionEntity, DimensionKind, Job};
use std::collections::HashSet;

/// Distinct entities of one dimension, in first-seen order.
#[derive(Debug, Clone)]
pub struct DimensionIndex {
    kind: DimensionKind,
    entities: Vec<DimensionEntity>,
    seen: HashSet<String>,
}

impl DimensionIndex {
    pub fn new(kind: DimensionKind) -> Self {
        Self {
            kind,
            entities: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Appends `entity` unless an equal one is already present.
    /// Returns true if it was new.
    pub fn insert(&mut self, entity: &DimensionEntity) -> bool {
        debug_assert_eq!(entity.kind(), self.kind);
        if !self.seen.insert(entity.value().to_string()) {
            return false;
        }
        self.entities.push(entity.clone());
        true
    }

    pub fn contains(&self, entity: &DimensionEntity) -> bool {
        entity.kind() == self.kind && self.seen.contains(entity.value())
    }

    pub fn entities(&self) -> &[DimensionEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// The fully loaded job data: every job plus one index per dimension.
///
/// Built only through [`Dataset::push`], so every job's dimension entities are
/// present in the matching index.
#[derive(Debug, Clone)]
pub struct Dataset {
    jobs: Vec<Job>,
    employers: DimensionIndex,
    locations: DimensionIndex,
    position_types: DimensionIndex,
    core_competencies: DimensionIndex,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            employers: DimensionIndex::new(DimensionKind::Employer),
            locations: DimensionIndex::new(DimensionKind::Location),
            position_types: DimensionIndex::new(DimensionKind::PositionType),
            core_competencies: DimensionIndex::new(DimensionKind::CoreCompetency),
        }
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: Job) {
        for kind in DimensionKind::ALL {
            let entity = job.dimension(kind);
            self.index_mut(kind).insert(entity);
        }
        self.jobs.push(job);
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn index(&self, kind: DimensionKind) -> &DimensionIndex {
        match kind {
            DimensionKind::Employer => &self.employers,
            DimensionKind::Location => &self.locations,
            DimensionKind::PositionType => &self.position_types,
            DimensionKind::CoreCompetency => &self.core_competencies,
        }
    }

    fn index_mut(&mut self, kind: DimensionKind) -> &mut DimensionIndex {
        match kind {
            DimensionKind::Employer => &mut self.employers,
            DimensionKind::Location => &mut self.locations,
            DimensionKind::PositionType => &mut self.position_types,
            DimensionKind::CoreCompetency => &mut self.core_competencies,
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl FromIterator<Job> for Dataset {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for job in iter {
            dataset.push(job);
        }
        dataset
    }
}
