//! `BinarySearchTree`: an unbalanced binary search tree of integers.
//!
//! Nodes are stored in an arena and refer to their children by [`NodeId`].
//! Removing a node puts its slot on a free list for the next insert instead of
//! rewiring owned pointers. Searches report the parent alongside the match as a
//! [`Search`] record, which is all deletion needs to relink the tree.
//!
//! Smaller values go left; equal and larger values go right.

/// Handle to a node in a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy)]
struct Node {
    value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Debug, Clone, Copy)]
enum NodeSlot {
    Occupied(Node),
    Free(Option<usize>), // Next free slot index
}

/// Outcome of [`BinarySearchTree::find_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    /// Whether a node holding the target was found.
    pub found: bool,
    /// The matching node's parent; on a miss, the last node visited.
    /// `None` when the match is the root or the tree is empty.
    pub parent: Option<NodeId>,
    /// The matching node, or `None` on a miss.
    pub child: Option<NodeId>,
}

/// Visit order for [`BinarySearchTree::traverse`], named by the sequence of
/// Left subtree, Node, Right subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// In order: ascending values.
    Lnr,
    /// Post order.
    Lrn,
    /// Pre order.
    Nlr,
    /// Pre order, right subtree first.
    Nrl,
    /// Post order, right subtree first.
    Rln,
    /// Reverse in order: descending values.
    Rnl,
}

#[derive(Clone, Copy)]
enum Step {
    Left,
    Node,
    Right,
}

impl Order {
    fn steps(self) -> [Step; 3] {
        use Step::{Left, Node, Right};
        match self {
            Order::Lnr => [Left, Node, Right],
            Order::Lrn => [Left, Right, Node],
            Order::Nlr => [Node, Left, Right],
            Order::Nrl => [Node, Right, Left],
            Order::Rln => [Right, Left, Node],
            Order::Rnl => [Right, Node, Left],
        }
    }
}

/// An arena-backed binary search tree.
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    slots: Vec<NodeSlot>,
    root: Option<NodeId>,
    free_head: Option<usize>,
    len: usize,
}

impl BinarySearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Value stored at `id`, if the handle refers to a live node.
    pub fn value(&self, id: NodeId) -> Option<i32> {
        match self.slots.get(id.0)? {
            NodeSlot::Occupied(node) => Some(node.value),
            NodeSlot::Free(_) => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            NodeSlot::Occupied(node) => node,
            NodeSlot::Free(_) => unreachable!("tree links point at free slot {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            NodeSlot::Occupied(node) => node,
            NodeSlot::Free(_) => unreachable!("tree links point at free slot {}", id.0),
        }
    }

    fn alloc(&mut self, value: i32) -> NodeId {
        let node = NodeSlot::Occupied(Node {
            value,
            left: None,
            right: None,
        });
        self.len += 1;
        if let Some(free_idx) = self.free_head {
            let NodeSlot::Free(next_free) = self.slots[free_idx] else {
                unreachable!("corrupted free list at {free_idx}");
            };
            self.free_head = next_free;
            self.slots[free_idx] = node;
            NodeId(free_idx)
        } else {
            self.slots.push(node);
            NodeId(self.slots.len() - 1)
        }
    }

    fn free(&mut self, id: NodeId) {
        self.slots[id.0] = NodeSlot::Free(self.free_head);
        self.free_head = Some(id.0);
        self.len -= 1;
    }

    /// Points whichever link of `parent` held `old` (or the root) at `new`.
    fn relink(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let p = self.node_mut(p);
                if p.left == Some(old) {
                    p.left = new;
                } else {
                    p.right = new;
                }
            }
        }
    }

    /// Walks from the root towards `target`.
    pub fn find_node(&self, target: i32) -> Search {
        let mut parent = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value == target {
                return Search {
                    found: true,
                    parent,
                    child: Some(id),
                };
            }
            parent = Some(id);
            current = if target < node.value { node.left } else { node.right };
        }
        Search {
            found: false,
            parent,
            child: None,
        }
    }

    /// Inserts `value`; duplicates go to the right subtree of their first match.
    pub fn insert(&mut self, value: i32) {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(value));
            return;
        };
        loop {
            let node = *self.node(current);
            let next = if value < node.value { node.left } else { node.right };
            match next {
                Some(id) => current = id,
                None => {
                    let id = self.alloc(value);
                    let parent = self.node_mut(current);
                    if value < parent.value {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return;
                }
            }
        }
    }

    /// Returns `target` if it is stored.
    pub fn fetch(&self, target: i32) -> Option<i32> {
        let search = self.find_node(target);
        self.value(search.child?)
    }

    /// Returns `true` if `target` is stored.
    pub fn contains(&self, target: i32) -> bool {
        self.find_node(target).found
    }

    /// Removes one node holding `target`.
    ///
    /// A node with two children takes the value of its in-order predecessor
    /// (the largest value in its left subtree), and the predecessor's node is
    /// removed instead.
    pub fn delete(&mut self, target: i32) -> bool {
        let Search {
            found: true,
            parent,
            child: Some(child),
        } = self.find_node(target)
        else {
            return false;
        };
        let Node { left, right, .. } = *self.node(child);

        match (left, right) {
            (None, None) => {
                self.relink(parent, child, None);
                self.free(child);
            }
            (Some(only), None) | (None, Some(only)) => {
                self.relink(parent, child, Some(only));
                self.free(child);
            }
            (Some(left), Some(right)) => {
                let mut next_largest = left;
                match self.node(left).right {
                    Some(mut largest) => {
                        while let Some(r) = self.node(largest).right {
                            next_largest = largest;
                            largest = r;
                        }
                        let Node { value, left: orphan, .. } = *self.node(largest);
                        self.node_mut(child).value = value;
                        self.node_mut(next_largest).right = orphan;
                        self.free(largest);
                    }
                    None => {
                        self.node_mut(next_largest).right = Some(right);
                        self.relink(parent, child, Some(next_largest));
                        self.free(child);
                    }
                }
            }
        }
        true
    }

    /// Deletes `target` and inserts `new_value`.
    ///
    /// Returns `false` without inserting if `target` is absent.
    pub fn update(&mut self, target: i32, new_value: i32) -> bool {
        if !self.delete(target) {
            return false;
        }
        self.insert(new_value);
        true
    }

    /// Values in the given visit order.
    ///
    /// Uses an explicit stack, so degenerate (list-shaped) trees cannot
    /// overflow the call stack.
    pub fn traverse(&self, order: Order) -> Vec<i32> {
        enum Frame {
            Expand(NodeId),
            Emit(i32),
        }

        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Frame> = self.root.into_iter().map(Frame::Expand).collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Emit(value) => out.push(value),
                Frame::Expand(id) => {
                    let node = self.node(id);
                    for step in order.steps().into_iter().rev() {
                        match step {
                            Step::Left => stack.extend(node.left.map(Frame::Expand)),
                            Step::Node => stack.push(Frame::Emit(node.value)),
                            Step::Right => stack.extend(node.right.map(Frame::Expand)),
                        }
                    }
                }
            }
        }
        out
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.traverse(Order::Lnr).into_iter()
    }
}
