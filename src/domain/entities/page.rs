//! Range-based pagination shared by the link and visit collections.

/// An inclusive `[start, end]` window over an ascending-id ordered collection.
///
/// Always `end >= start`. Scoped to a single request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParam {
    pub start: u64,
    pub end: u64,
}

impl RangeParam {
    /// The first ten items.
    pub const DEFAULT: RangeParam = RangeParam { start: 0, end: 9 };

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.start).unwrap_or(i64::MAX)
    }

    /// Number of rows requested (`end - start + 1`).
    pub fn limit(&self) -> i64 {
        let width = (self.end - self.start).saturating_add(1);
        i64::try_from(width).unwrap_or(i64::MAX)
    }
}

/// One delivered page of a collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub start: u64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, range: RangeParam, total: i64) -> Self {
        Self {
            items,
            start: range.start,
            total,
        }
    }

    /// Index of the last item actually delivered, `None` for an empty page.
    ///
    /// The store may return fewer rows than requested when the range runs
    /// past the end of the collection.
    pub fn delivered_end(&self) -> Option<u64> {
        let len = self.items.len() as u64;
        (len > 0).then(|| self.start + len - 1)
    }

    /// `Content-Range` header value, e.g. `links 5-10/20`.
    ///
    /// An empty page renders as `links */20`.
    pub fn content_range(&self, unit: &str) -> String {
        match self.delivered_end() {
            Some(end) => format!("{unit} {}-{end}/{}", self.start, self.total),
            None => format!("{unit} */{}", self.total),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            start: self.start,
            total: self.total,
        }
    }
}
