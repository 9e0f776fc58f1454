//! Generic list-view state with optimistic update helpers.
//!
//! Every list page (games, events, requests, reviews, ...) follows the same
//! shape: a fetch in flight, the last good items, and the last error. Local
//! edits return what they replaced so a failed round-trip can roll back.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    /// Insert `item`, or replace the existing item with the same key.
    pub fn upsert_by<K, F>(&mut self, item: T, key: F)
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let k = key(&item);
        match self.items.iter_mut().find(|existing| key(existing) == k) {
            Some(slot) => *slot = item,
            None => self.items.insert(0, item),
        }
    }

    /// Remove the first item matching `pred`, returning it with its index
    /// so it can be restored.
    pub fn remove_by<F>(&mut self, pred: F) -> Option<(usize, T)>
    where
        F: Fn(&T) -> bool,
    {
        let index = self.items.iter().position(pred)?;
        Some((index, self.items.remove(index)))
    }

    /// Put back an item removed by `remove_by`.
    pub fn restore(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Swap the first item matching `pred` for `item`, returning the old one.
    pub fn replace_item<F>(&mut self, pred: F, item: T) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let slot = self.items.iter_mut().find(|existing| pred(existing))?;
        Some(std::mem::replace(slot, item))
    }
}
