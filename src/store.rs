// ABOUTME: Repository traits decoupling the engine from persistence, plus in-memory impls
// ABOUTME: Snapshot-in, snapshot-out interfaces with documented last-write-wins semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Repository boundary.
//!
//! The core functions operate purely on snapshots passed in and return new
//! or updated snapshots; these traits are the seam where adapters plug in
//! real persistence. The engine provides no ordering guarantee for
//! concurrent writers: saves are **last write wins**, and any optimistic
//! locking or version/ETag check belongs to the persistence adapter, not to
//! this crate.
//!
//! The in-memory implementations back tests and demo adapters.

use crate::models::{DietPlan, PatientSnapshot};
use std::collections::HashMap;
use uuid::Uuid;

/// Storage interface for patient snapshots
pub trait PatientRepository {
    /// Fetch a patient snapshot by id
    fn get(&self, id: Uuid) -> Option<PatientSnapshot>;

    /// Store a snapshot, replacing any previous version (last write wins)
    fn save(&mut self, patient: PatientSnapshot);

    /// Remove a patient; returns whether anything was removed
    fn delete(&mut self, id: Uuid) -> bool;
}

/// Storage interface for generated diet plans
pub trait DietPlanRepository {
    /// Fetch a plan by id
    fn get(&self, id: Uuid) -> Option<DietPlan>;

    /// All plans belonging to a patient, ordered by start date
    fn find_by_patient(&self, patient_id: Uuid) -> Vec<DietPlan>;

    /// Store a plan, replacing any previous version (last write wins)
    fn save(&mut self, plan: DietPlan);

    /// Remove a plan; returns whether anything was removed
    fn delete(&mut self, id: Uuid) -> bool;
}

/// HashMap-backed patient store for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryPatientRepository {
    patients: HashMap<Uuid, PatientSnapshot>,
}

impl InMemoryPatientRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRepository for InMemoryPatientRepository {
    fn get(&self, id: Uuid) -> Option<PatientSnapshot> {
        self.patients.get(&id).cloned()
    }

    fn save(&mut self, patient: PatientSnapshot) {
        self.patients.insert(patient.id, patient);
    }

    fn delete(&mut self, id: Uuid) -> bool {
        self.patients.remove(&id).is_some()
    }
}

/// HashMap-backed plan store for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryDietPlanRepository {
    plans: HashMap<Uuid, DietPlan>,
}

impl InMemoryDietPlanRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DietPlanRepository for InMemoryDietPlanRepository {
    fn get(&self, id: Uuid) -> Option<DietPlan> {
        self.plans.get(&id).cloned()
    }

    fn find_by_patient(&self, patient_id: Uuid) -> Vec<DietPlan> {
        let mut plans: Vec<DietPlan> = self
            .plans
            .values()
            .filter(|plan| plan.patient_id == patient_id)
            .cloned()
            .collect();
        plans.sort_by_key(|plan| plan.start_date);
        plans
    }

    fn save(&mut self, plan: DietPlan) {
        self.plans.insert(plan.id, plan);
    }

    fn delete(&mut self, id: Uuid) -> bool {
        self.plans.remove(&id).is_some()
    }
}
