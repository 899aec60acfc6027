// ── Paged entity list ──
//
// A list store mirrors exactly one server page plus its pagination
// descriptor, and keeps both coherent across local mutations without a
// refetch. All count arithmetic is clamped: `total` saturates at zero
// and `totalPages` never drops below one, so a stale descriptor can
// never produce a page index that points nowhere.

use tempo_api::types::PageInfo;

use crate::model::{
    Client, EntityId, Invitation, Member, Project, ProjectMember, Tag, Task, TimeEntry,
};

/// Anything addressable by an [`EntityId`].
pub trait Identified {
    fn entity_id(&self) -> &EntityId;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn entity_id(&self) -> &EntityId {
                &self.id
            }
        })*
    };
}

identified!(Project, Task, TimeEntry, Client, Tag, Member, Invitation, ProjectMember);

/// One server page of entities plus its pagination bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct PagedList<T> {
    items: Vec<T>,
    pagination: Option<PageInfo>,
}

impl<T: Identified> PagedList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&PageInfo> {
        self.pagination.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole page with a fresh server response.
    pub fn reset(&mut self, items: Vec<T>, pagination: Option<PageInfo>) {
        self.items = items;
        self.pagination = pagination.map(|mut info| {
            clamp(&mut info);
            info
        });
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.pagination = None;
    }

    /// Insert a freshly created entity at the head of the page and grow
    /// the counts to match.
    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
        if let Some(info) = self.pagination.as_mut() {
            info.total += 1;
            clamp(info);
        }
    }

    /// Remove one entity, shrinking the counts if it was present.
    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        let index = self.items.iter().position(|item| item.entity_id() == id)?;
        let removed = self.items.remove(index);
        self.shrink(1);
        Some(removed)
    }

    /// Remove every listed entity; returns how many were actually on
    /// this page. Counts shrink by the removed amount only.
    pub fn remove_many(&mut self, ids: &[EntityId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(item.entity_id()));
        let removed = before - self.items.len();
        if removed > 0 {
            self.shrink(removed);
        }
        removed
    }

    /// Swap an updated entity into place. Counts are untouched; returns
    /// `false` when the entity is not on this page.
    pub fn replace(&mut self, item: T) -> bool {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.entity_id() == item.entity_id())
        {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    fn shrink(&mut self, by: usize) {
        if let Some(info) = self.pagination.as_mut() {
            info.total = info.total.saturating_sub(by as u64);
            clamp(info);
        }
    }
}

/// Recompute `total_pages` from `total` and `page_size`, holding the
/// floor at one page.
fn clamp(info: &mut PageInfo) {
    let size = u64::from(info.page_size.max(1));
    let pages = info.total.div_ceil(size).max(1);
    info.total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn tag(id: &str) -> Tag {
        Tag {
            id: EntityId::from(id),
            name: id.to_owned(),
        }
    }

    fn page(total: u64, page: u32, page_size: u32, total_pages: u32) -> PageInfo {
        PageInfo {
            total,
            page,
            page_size,
            total_pages,
        }
    }

    #[test]
    fn insert_front_heads_the_list_and_grows_counts() {
        let mut list = PagedList::new();
        list.reset(vec![tag("a"), tag("b")], Some(page(10, 1, 10, 1)));

        list.insert_front(tag("new"));

        assert_eq!(list.items()[0].name, "new");
        let info = list.pagination().unwrap();
        assert_eq!(info.total, 11);
        assert_eq!(info.total_pages, 2);
    }

    #[test]
    fn remove_shrinks_counts_only_when_present() {
        let mut list = PagedList::new();
        list.reset(vec![tag("a"), tag("b")], Some(page(2, 1, 10, 1)));

        assert!(list.remove(&EntityId::from("missing")).is_none());
        assert_eq!(list.pagination().unwrap().total, 2);

        assert!(list.remove(&EntityId::from("a")).is_some());
        assert_eq!(list.pagination().unwrap().total, 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_many_shrinks_by_removed_count() {
        let mut list = PagedList::new();
        list.reset(
            vec![tag("a"), tag("b"), tag("c"), tag("d"), tag("e")],
            Some(page(5, 1, 10, 1)),
        );

        let ids = [
            EntityId::from("a"),
            EntityId::from("c"),
            EntityId::from("e"),
        ];
        assert_eq!(list.remove_many(&ids), 3);

        let info = list.pagination().unwrap();
        assert_eq!(info.total, 2);
        assert_eq!(info.total_pages, 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn total_saturates_at_zero_and_pages_floor_at_one() {
        let mut list = PagedList::new();
        list.reset(vec![tag("a")], Some(page(0, 1, 10, 1)));

        list.remove(&EntityId::from("a"));

        let info = list.pagination().unwrap();
        assert_eq!(info.total, 0);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn replace_swaps_in_place_without_touching_counts() {
        let mut list = PagedList::new();
        list.reset(vec![tag("a"), tag("b")], Some(page(2, 1, 10, 1)));

        let mut updated = tag("b");
        updated.name = "renamed".into();
        assert!(list.replace(updated));

        assert_eq!(list.get(&EntityId::from("b")).unwrap().name, "renamed");
        assert_eq!(list.pagination().unwrap().total, 2);
        assert!(!list.replace(tag("zzz")));
    }

    #[test]
    fn reset_reclamps_a_stale_descriptor() {
        let mut list = PagedList::new();
        list.reset(vec![tag("a")], Some(page(25, 1, 10, 99)));
        assert_eq!(list.pagination().unwrap().total_pages, 3);
    }
}
