//! Graph container holding the joints, supports, loads and members of a truss.

use log::debug;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction::{Incoming, Outgoing};

use crate::components::{Force, Joint, Member, Support, SupportKind};
use crate::errors::TrussEditError;
use crate::geometry::Point;

/// Internal representation of a truss joint.
#[derive(Clone, Debug)]
struct Node {
    /// Location of the joint.
    joint: Joint,
    /// Restraint attached to the joint, if any.
    support: Option<SupportKind>,
    /// External forces applied to the joint.
    forces: Vec<Force>,
}

impl Node {
    /// Create a free, unloaded node.
    fn new(joint: Joint) -> Self {
        Self {
            joint,
            support: None,
            forces: Vec::new(),
        }
    }
}

/// Container for a pin-jointed planar truss.
///
/// The container stores the model only. Equilibrium equations are assembled by the
/// caller, solved with [`solve`](crate::solve), and the resulting member forces are
/// stored back with [`Truss::record_member_forces`].
#[derive(Debug, Default)]
pub struct Truss {
    /// Underlying graph storage for joints and members.
    graph: Graph<Node, Member>,
}

impl Truss {
    /// Create an empty truss.
    ///
    /// # Examples
    /// ```
    /// use trusseq::Truss;
    ///
    /// let truss = Truss::new();
    /// assert_eq!(truss.joint_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Return the number of joints in the truss.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of members in the truss.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a new joint to the truss.
    ///
    /// # Examples
    /// ```
    /// use trusseq::{point, Truss};
    ///
    /// let mut truss = Truss::new();
    /// let joint = truss.add_joint(point(0.0, 0.0));
    /// assert_eq!(truss.joint_count(), 1);
    /// assert_eq!(joint.index(), 0);
    /// ```
    pub fn add_joint(&mut self, position: Point) -> NodeIndex {
        self.graph.add_node(Node::new(Joint::from(position)))
    }

    /// Look up a joint.
    #[must_use]
    pub fn joint(&self, joint: NodeIndex) -> Option<Joint> {
        self.graph.node_weight(joint).map(|node| node.joint)
    }

    /// Update the position of an existing joint and of every member attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when `joint` is not part of this truss.
    pub fn move_joint(&mut self, joint: NodeIndex, position: Point) -> Result<(), TrussEditError> {
        let node = self
            .graph
            .node_weight_mut(joint)
            .ok_or(TrussEditError::UnknownJoint(joint))?;
        node.joint = Joint::from(position);
        let moved = node.joint;

        let outgoing: Vec<EdgeIndex> = self
            .graph
            .edges_directed(joint, Outgoing)
            .map(|edge| edge.id())
            .collect();
        let incoming: Vec<EdgeIndex> = self
            .graph
            .edges_directed(joint, Incoming)
            .map(|edge| edge.id())
            .collect();
        for edge in outgoing {
            self.graph[edge].set_start(moved);
        }
        for edge in incoming {
            self.graph[edge].set_end(moved);
        }
        Ok(())
    }

    /// Remove a joint and all connected members from the truss.
    ///
    /// Removing a joint may renumber the last joint and member, following
    /// [`petgraph::Graph::remove_node`].
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when `joint` is not part of this truss.
    pub fn remove_joint(&mut self, joint: NodeIndex) -> Result<Joint, TrussEditError> {
        self.graph
            .remove_node(joint)
            .map(|node| node.joint)
            .ok_or(TrussEditError::UnknownJoint(joint))
    }

    /// Connect two joints with a new member.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when either joint is missing and
    /// [`TrussEditError::CoincidentJoints`] when both joints share a position.
    pub fn add_member(
        &mut self,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<EdgeIndex, TrussEditError> {
        let start_joint = self.joint(start).ok_or(TrussEditError::UnknownJoint(start))?;
        let end_joint = self.joint(end).ok_or(TrussEditError::UnknownJoint(end))?;
        if start_joint == end_joint {
            return Err(TrussEditError::CoincidentJoints { start, end });
        }
        Ok(self
            .graph
            .add_edge(start, end, Member::new(start_joint, end_joint)))
    }

    /// Look up a member.
    #[must_use]
    pub fn member(&self, member: EdgeIndex) -> Option<&Member> {
        self.graph.edge_weight(member)
    }

    /// Iterate over members in index order.
    pub fn members(&self) -> impl Iterator<Item = (EdgeIndex, &Member)> {
        self.graph
            .edge_indices()
            .map(move |edge| (edge, &self.graph[edge]))
    }

    /// Remove a member from the truss.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownMember`] when `member` is not part of this truss.
    pub fn remove_member(&mut self, member: EdgeIndex) -> Result<Member, TrussEditError> {
        self.graph
            .remove_edge(member)
            .ok_or(TrussEditError::UnknownMember(member))
    }

    /// Attach a support to a joint, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when `joint` is not part of this truss.
    pub fn set_support(
        &mut self,
        joint: NodeIndex,
        kind: SupportKind,
    ) -> Result<(), TrussEditError> {
        self.node_mut(joint)?.support = Some(kind);
        Ok(())
    }

    /// Detach the support from a joint, returning the previous kind.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when `joint` is not part of this truss.
    pub fn clear_support(
        &mut self,
        joint: NodeIndex,
    ) -> Result<Option<SupportKind>, TrussEditError> {
        Ok(self.node_mut(joint)?.support.take())
    }

    /// Return the support at a joint, if the joint exists and is supported.
    #[must_use]
    pub fn support(&self, joint: NodeIndex) -> Option<Support> {
        let node = self.graph.node_weight(joint)?;
        node.support.map(|kind| Support::new(node.joint, kind))
    }

    /// Iterate over supported joints in index order.
    pub fn supports(&self) -> impl Iterator<Item = (NodeIndex, Support)> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |joint| self.support(joint).map(|support| (joint, support)))
    }

    /// Apply an external force to a joint.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::UnknownJoint`] when `joint` is not part of this truss.
    pub fn apply_force(&mut self, joint: NodeIndex, force: Force) -> Result<(), TrussEditError> {
        self.node_mut(joint)?.forces.push(force);
        Ok(())
    }

    /// Forces applied to a joint, or an empty slice for unknown joints.
    #[must_use]
    pub fn forces(&self, joint: NodeIndex) -> &[Force] {
        self.graph
            .node_weight(joint)
            .map(|node| node.forces.as_slice())
            .unwrap_or_default()
    }

    /// Number of unknown forces: one per member plus one per reaction component.
    ///
    /// # Examples
    /// ```
    /// use trusseq::{point, SupportKind, Truss};
    ///
    /// let mut truss = Truss::new();
    /// let a = truss.add_joint(point(0.0, 0.0));
    /// let b = truss.add_joint(point(1.0, 0.0));
    /// truss.add_member(a, b).unwrap();
    /// truss.set_support(a, SupportKind::Pin).unwrap();
    /// truss.set_support(b, SupportKind::Roller).unwrap();
    /// assert_eq!(truss.unknown_count(), 4);
    /// ```
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        let reactions: usize = self
            .supports()
            .map(|(_, support)| support.kind.reaction_components())
            .sum();
        self.member_count() + reactions
    }

    /// Store solved axial forces, given in member index order, on the members.
    ///
    /// Each force is also resolved into X and Y components along its member.
    ///
    /// # Errors
    ///
    /// Returns [`TrussEditError::ForceCountMismatch`] unless exactly one force is
    /// supplied per member. No member is modified on failure.
    pub fn record_member_forces(&mut self, forces: &[f64]) -> Result<(), TrussEditError> {
        if forces.len() != self.member_count() {
            return Err(TrussEditError::ForceCountMismatch {
                expected: self.member_count(),
                found: forces.len(),
            });
        }
        for (member, &force) in self.graph.edge_weights_mut().zip(forces) {
            member.resolve_internal_force(force);
        }
        debug!("recorded forces for {} members", forces.len());
        Ok(())
    }

    /// Mutable access to a node, reporting unknown joints.
    fn node_mut(&mut self, joint: NodeIndex) -> Result<&mut Node, TrussEditError> {
        self.graph
            .node_weight_mut(joint)
            .ok_or(TrussEditError::UnknownJoint(joint))
    }
}
