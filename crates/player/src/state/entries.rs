//! Editing state for the attack, spell and equipment collections.
//!
//! Each collection has one [`EntryEditor`]: an optional pending entry being
//! composed apart from the collection, the index of the entry open for inline
//! editing, and whether the section is collapsed.

use std::fmt::Debug;

use rpgficha_domain::DomainError;

/// An entry type that can live in a form collection.
pub trait FormEntry: Clone + Debug + PartialEq {
    /// One field assignment, e.g. `AttackField::Name(String)`.
    type Field: Clone + Debug + PartialEq;

    /// Collection name used in errors and logs.
    const COLLECTION: &'static str;

    /// The entry a fresh "add" starts from.
    fn blank() -> Self;

    fn apply(&mut self, field: Self::Field);
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryEditor<T: FormEntry> {
    pub pending: Option<T>,
    pub editing_index: Option<usize>,
    pub collapsed: bool,
}

impl<T: FormEntry> Default for EntryEditor<T> {
    fn default() -> Self {
        Self {
            pending: None,
            editing_index: None,
            collapsed: false,
        }
    }
}

impl<T: FormEntry> EntryEditor<T> {
    pub fn begin_add(&mut self) {
        self.collapsed = false;
        self.pending = Some(T::blank());
        self.editing_index = None;
    }

    /// No-op when nothing is pending.
    pub fn update_pending(&mut self, field: T::Field) {
        if let Some(pending) = self.pending.as_mut() {
            pending.apply(field);
        }
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Append the pending entry (if any) and collapse the section.
    pub fn confirm(&mut self, entries: &mut Vec<T>) {
        if let Some(pending) = self.pending.take() {
            entries.push(pending);
        }
        self.collapsed = true;
        self.editing_index = None;
    }

    pub fn select(&mut self, index: usize) {
        self.collapsed = false;
        self.editing_index = Some(index);
    }

    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    /// Keep `editing_index` pointing at an existing entry.
    pub fn normalize(&mut self, len: usize) {
        if len == 0 {
            self.editing_index = None;
            return;
        }
        match self.editing_index {
            None if self.pending.is_none() => self.editing_index = Some(0),
            Some(index) if index >= len => self.editing_index = Some(len - 1),
            _ => {}
        }
    }
}

/// Replace one field of the entry at `index`.
pub fn update_entry<T: FormEntry>(
    entries: &mut [T],
    index: usize,
    field: T::Field,
) -> Result<(), DomainError> {
    let len = entries.len();
    let entry = entries
        .get_mut(index)
        .ok_or_else(|| DomainError::index_out_of_bounds(T::COLLECTION, index, len))?;
    entry.apply(field);
    Ok(())
}

pub fn remove_entry<T: FormEntry>(entries: &mut Vec<T>, index: usize) -> Result<T, DomainError> {
    if index >= entries.len() {
        return Err(DomainError::index_out_of_bounds(
            T::COLLECTION,
            index,
            entries.len(),
        ));
    }
    Ok(entries.remove(index))
}
