// src/sched/scheduler.rs

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use tracing::{debug, info};

use crate::errors::{Result, SchedError};
use crate::graph::topo::Cycle;
use crate::graph::{DirectedGraph, Reachability, TopologicalSort, UnionFind};
use crate::sched::IdentityMap;

/// Dependency scheduler over opaque task identifiers.
///
/// Owns an [`IdentityMap`] plus a [`DirectedGraph`] and a [`UnionFind`] over
/// the same dense index space. Every registration grows all three in
/// lock-step: the graph records edge direction for ordering, the union-find
/// discards it for grouping.
///
/// Build-then-query, in-memory only. Tasks and dependencies are only ever
/// added; [`Scheduler::schedule`] may be called repeatedly and recomputes
/// from current state each time. Not safe for unsynchronised concurrent
/// mutation; callers sharing a scheduler across threads must serialise
/// access externally.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    ids: IdentityMap<T>,
    graph: DirectedGraph,
    union: UnionFind,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            ids: IdentityMap::default(),
            graph: DirectedGraph::new(),
            union: UnionFind::new(),
        }
    }
}

impl<T: Eq + Hash + Clone + Display> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. No-op if `id` has been added before.
    pub fn add_task(&mut self, id: T) {
        self.register(id);
    }

    /// Register several tasks, in order.
    pub fn add_tasks(&mut self, ids: impl IntoIterator<Item = T>) {
        for id in ids {
            self.add_task(id);
        }
    }

    /// Record that `task` depends on `prerequisite`.
    ///
    /// Both identifiers are auto-registered if new. The graph edge points
    /// from the task to its prerequisite.
    pub fn add_prerequisite(&mut self, task: T, prerequisite: T) {
        debug!(task = %task, prerequisite = %prerequisite, "adding prerequisite");
        let task_index = self.register(task);
        let prerequisite_index = self.register(prerequisite);
        self.graph.connect(task_index, prerequisite_index);
        self.union.connect(task_index, prerequisite_index);
    }

    /// Record several prerequisites for one task, in order.
    pub fn add_prerequisites(&mut self, task: T, prerequisites: impl IntoIterator<Item = T>) {
        for prerequisite in prerequisites {
            self.add_prerequisite(task.clone(), prerequisite);
        }
    }

    /// Whether `prerequisite` is reachable from `task` along dependency
    /// edges, directly or transitively.
    ///
    /// Never registers anything: returns `false` if either identifier is
    /// unknown.
    pub fn check_dependency(&self, task: &T, prerequisite: &T) -> bool {
        let (Some(task_index), Some(prerequisite_index)) =
            (self.ids.lookup(task), self.ids.lookup(prerequisite))
        else {
            return false;
        };
        Reachability::new(&self.graph).has_path(task_index, prerequisite_index)
    }

    /// Number of distinct tasks registered.
    pub fn task_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of distinct dependency edges registered.
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Registered task identifiers, in first-seen order.
    pub fn tasks(&self) -> impl Iterator<Item = &T> {
        self.ids.iter()
    }

    /// Direct prerequisites of `task`, in registration-index order.
    ///
    /// Empty if `task` is unknown or has none.
    pub fn prerequisites_of(&self, task: &T) -> Vec<&T> {
        let Some(index) = self.ids.lookup(task) else {
            return Vec::new();
        };
        self.graph
            .neighbors(index)
            .filter_map(|p| self.ids.id_of(p).ok())
            .collect()
    }

    /// Compute the schedule: one group per weakly-connected component, each
    /// group in prerequisite-first order.
    ///
    /// Groups appear in the order their component first shows up in the
    /// topological order; within a group, the topological order is kept.
    /// Fails with [`SchedError::CycleDetected`] if the dependency graph is
    /// not a DAG; no partial schedule is produced.
    ///
    /// Takes `&mut self` because component lookups compress union-find paths.
    pub fn schedule(&mut self) -> Result<Vec<Vec<T>>> {
        let sorted = TopologicalSort::new(&self.graph)
            .sort()
            .map_err(|cycle| self.cycle_error(cycle))?;

        let mut groups: Vec<Vec<T>> = Vec::new();
        let mut group_by_root: HashMap<usize, usize> = HashMap::new();

        for vertex in sorted {
            let root = self.union.root(vertex)?;
            let slot = *group_by_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(self.ids.id_of(vertex)?.clone());
        }

        info!(
            tasks = self.task_count(),
            groups = groups.len(),
            "schedule computed"
        );
        Ok(groups)
    }

    /// Resolve `id` to its index, growing the graph and the union-find in
    /// lock-step when the identifier is new.
    fn register(&mut self, id: T) -> usize {
        let before = self.ids.len();
        let index = self.ids.index_of(id);
        if self.ids.len() > before {
            self.graph.add_vertex(index);
            self.union.add_vertex(index);
            debug!(index, total = self.ids.len(), "registered new task");
        }
        index
    }

    /// Name the offending task in a cycle error instead of its internal index.
    fn cycle_error(&self, cycle: Cycle) -> SchedError {
        let task = match self.ids.id_of(cycle.vertex) {
            Ok(id) => id.to_string(),
            Err(_) => format!("#{}", cycle.vertex),
        };
        SchedError::CycleDetected { task }
    }
}
