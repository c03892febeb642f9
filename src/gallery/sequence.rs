use super::GalleryItem;

/// Number of concatenated copies rendered for the loop illusion.
pub const COPIES: usize = 3;

/// Non-owning view over `items ++ items ++ items`.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedSequence<'a> {
    items: &'a [GalleryItem],
}

impl<'a> ExtendedSequence<'a> {
    pub fn new(items: &'a [GalleryItem]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len() * COPIES
    }

    /// Index into the original list for an extended position.
    pub fn original_index(&self, extended: usize) -> Option<usize> {
        if self.items.is_empty() || extended >= self.len() {
            return None;
        }
        Some(extended % self.items.len())
    }

    /// Extended position of `index` inside the middle copy.
    pub fn middle_index(&self, index: usize) -> Option<usize> {
        (index < self.items.len()).then(|| self.items.len() + index)
    }

    pub fn iter(self) -> impl Iterator<Item = (usize, &'a GalleryItem)> + 'a {
        let items = self.items;
        items
            .iter()
            .cycle()
            .take(items.len() * COPIES)
            .enumerate()
    }
}
