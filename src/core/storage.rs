use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Insertion-ordered storage for physics bodies.
///
/// Handles are stable slot indices; removed slots are left empty so that the
/// iteration order of the remaining bodies never changes.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.slots.len() as u32);
        self.slots.push(Some(item));
        self.len += 1;
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.slots.get(handle.index())?.as_ref()
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.slots.get_mut(handle.index())?.as_mut()
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let item = self.slots.get_mut(handle.index())?.take();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    /// Returns true if `handle` refers to a live item
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item; handles issued before the clear stay dead and new
    /// handles never reuse their slots
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Returns all live handles in insertion order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(h, _)| h).collect()
    }

    /// Iterates over live items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (BodyHandle(i as u32), item)))
    }

    /// Iterates mutably over live items in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|item| (BodyHandle(i as u32), item)))
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Borrows two distinct bodies mutably at once
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Result<(&mut T, &mut T)> {
        if a == b {
            return Err(PhysicsError::InvalidParameter(format!(
                "cannot borrow body {:?} twice",
                a
            )));
        }

        for handle in [a, b] {
            if !self.contains(handle) {
                return Err(PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)));
            }
        }

        let (ia, ib) = (a.index(), b.index());
        let (first, second) = if ia < ib {
            let (lo, hi) = self.slots.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        };

        match (first.as_mut(), second.as_mut()) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(PhysicsError::InternalError("body slot emptied during borrow".to_string())),
        }
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
