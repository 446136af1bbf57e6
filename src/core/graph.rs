//! core::graph
//!
//! Read-only queries over the commit DAG.
//!
//! # Architecture
//!
//! - Nodes are commits
//! - Edges point from child to parent; merge commits have two
//! - The first parent of a merge is the mainline
//!
//! # Invariants
//!
//! - The graph built from a valid snapshot is acyclic
//! - Every parent id refers to a commit in the same graph

use std::collections::{HashMap, HashSet, VecDeque};

use super::types::CommitId;
use crate::store::state::Commit;

/// Parent links of every commit in a snapshot.
#[derive(Debug, Default)]
pub struct CommitGraph {
    parents: HashMap<CommitId, Vec<CommitId>>,
    /// Ids in creation order.
    order: Vec<CommitId>,
}

impl CommitGraph {
    /// Build the graph from commits in creation order.
    pub fn from_commits(commits: &[Commit]) -> Self {
        let parents = commits
            .iter()
            .map(|c| (c.id.clone(), c.parents.clone()))
            .collect();
        let order = commits.iter().map(|c| c.id.clone()).collect();
        Self { parents, order }
    }

    /// Whether the graph knows this commit.
    pub fn contains(&self, id: &CommitId) -> bool {
        self.parents.contains_key(id)
    }

    /// Parents of a commit, mainline first.
    pub fn parents(&self, id: &CommitId) -> &[CommitId] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Walk mainline parents from `start` down to a root.
    ///
    /// The result begins with `start` itself. Second parents of merges are
    /// not followed, so history merged in from another branch is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use gitsim::session::RepositorySession;
    /// use gitsim::core::graph::CommitGraph;
    ///
    /// let mut session = RepositorySession::deterministic();
    /// for line in ["git init", "git add .", "git commit -m one", "touch a", "git add a", "git commit -m two"] {
    ///     session.execute(line);
    /// }
    /// let snapshot = session.snapshot();
    /// let graph = CommitGraph::from_commits(&snapshot.commits);
    /// let chain = graph.first_parent_chain(snapshot.head.as_ref().unwrap());
    /// assert_eq!(chain.len(), 2);
    /// ```
    pub fn first_parent_chain(&self, start: &CommitId) -> Vec<CommitId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(start);

        while let Some(id) = current {
            if !self.contains(id) || !seen.insert(id) {
                break;
            }
            chain.push(id.clone());
            current = self.parents(id).first();
        }

        chain
    }

    /// Every commit reachable from `start` through any parent, `start` included.
    pub fn ancestors(&self, start: &CommitId) -> HashSet<CommitId> {
        let mut result = HashSet::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(current) = queue.pop_front() {
            if self.contains(&current) && result.insert(current.clone()) {
                queue.extend(self.parents(&current).iter().cloned());
            }
        }

        result
    }

    /// Find a commit that lies on a cycle, if any.
    ///
    /// Roots are tried in creation order, so the answer is stable.
    pub fn find_cycle(&self) -> Option<CommitId> {
        let mut visited = HashSet::new();
        let mut path = HashSet::new();

        for id in &self.order {
            if self.has_cycle_from(id, &mut visited, &mut path) {
                return Some(id.clone());
            }
        }
        None
    }

    fn has_cycle_from<'a>(
        &'a self,
        id: &'a CommitId,
        visited: &mut HashSet<&'a CommitId>,
        path: &mut HashSet<&'a CommitId>,
    ) -> bool {
        if path.contains(id) {
            return true;
        }
        if !visited.insert(id) {
            return false;
        }

        path.insert(id);
        let cyclic = self
            .parents(id)
            .iter()
            .any(|parent| self.has_cycle_from(parent, visited, path));
        path.remove(id);
        cyclic
    }
}
