use crate::error::ExtractError;

/// A parsed document whose pages can be turned into plain text.
///
/// Pages are addressed by zero-based index in document order. Implementations
/// only need to answer two questions: how many pages there are, and what the
/// text of a given page is.
pub trait Document {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the text of the page at `index`.
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;

    /// Iterate over the pages in document order.
    fn pages(&self) -> Pages<'_, Self>
    where
        Self: Sized,
    {
        Pages {
            doc: self,
            next: 0,
            count: self.page_count(),
        }
    }
}

/// A handle to a single page of a [`Document`].
#[derive(Debug)]
pub struct Page<'a, D: ?Sized> {
    doc: &'a D,
    index: usize,
}

impl<D: ?Sized> Clone for Page<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Page<'_, D> {}

impl<'a, D: Document + ?Sized> Page<'a, D> {
    /// Zero-based position of this page in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based page number, as shown by PDF viewers.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn extract_text(&self) -> Result<String, ExtractError> {
        self.doc.page_text(self.index)
    }
}

/// Iterator over the pages of a [`Document`], created by [`Document::pages`].
#[derive(Debug)]
pub struct Pages<'a, D: ?Sized> {
    doc: &'a D,
    next: usize,
    count: usize,
}

impl<'a, D: Document + ?Sized> Iterator for Pages<'a, D> {
    type Item = Page<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let page = Page {
            doc: self.doc,
            index: self.next,
        };
        self.next += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<D: Document + ?Sized> ExactSizeIterator for Pages<'_, D> {}
