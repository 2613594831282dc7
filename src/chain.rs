//! A doubly linked list of key/value nodes used as the storage for one bucket.
//!
//! Nodes live in a `Vec` owned by the chain and are linked through indices
//! rather than pointers. Removing a node unlinks it and then `swap_remove`s it
//! out of the arena, patching the links of whichever node was moved into its
//! slot, so removal stays O(1) once the node is found and no slot is ever
//! left vacant.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Node {
    key: i64,
    value: i64,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Chain {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Chain {
    pub fn new() -> Chain {
        Chain {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links a new node after the current tail.
    pub fn append(&mut self, key: i64, value: i64) {
        let i: usize = self.nodes.len();
        self.nodes.push(Node {
            key,
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(i),
            None => self.head = Some(i),
        }
        self.tail = Some(i);
    }

    /// Removes the first node holding `key` and returns its value.
    pub fn remove_by_key(&mut self, key: i64) -> Option<i64> {
        let i: usize = self.position(key)?;
        Some(self.unlink(i).value)
    }

    /// Returns the value of the first node holding `key`.
    pub fn find_by_key(&self, key: i64) -> Option<i64> {
        self.position(key).map(|i| self.nodes[i].value)
    }

    /// Overwrites the value of the first node holding `key`, returning the
    /// previous value. The chain is left untouched when the key is absent.
    pub fn replace_value(&mut self, key: i64, value: i64) -> Option<i64> {
        let i: usize = self.position(key)?;
        Some(std::mem::replace(&mut self.nodes[i].value, value))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.head,
        }
    }

    fn position(&self, key: i64) -> Option<usize> {
        let mut cursor: Option<usize> = self.head;
        while let Some(i) = cursor {
            if self.nodes[i].key == key {
                return Some(i);
            }
            cursor = self.nodes[i].next;
        }
        None
    }

    fn unlink(&mut self, i: usize) -> Node {
        let (prev, next) = (self.nodes[i].prev, self.nodes[i].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let last: usize = self.nodes.len() - 1;
        let removed: Node = self.nodes.swap_remove(i);

        // the node that used to sit at `last` now sits at `i`
        if i != last {
            let (prev, next) = (self.nodes[i].prev, self.nodes[i].next);
            match prev {
                Some(p) => self.nodes[p].next = Some(i),
                None => self.head = Some(i),
            }
            match next {
                Some(n) => self.nodes[n].prev = Some(i),
                None => self.tail = Some(i),
            }
        }
        removed
    }
}

/// Walks a [`Chain`] from head to tail.
#[derive(Debug)]
pub struct Iter<'a> {
    chain: &'a Chain,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let i: usize = self.cursor?;
        let node: &Node = &self.chain.nodes[i];
        self.cursor = node.next;
        Some((node.key, node.value))
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = (i64, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
