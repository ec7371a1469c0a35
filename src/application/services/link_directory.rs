//! Link creation, retrieval, update, deletion and listing.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::domain::entities::{Link, NewLink, Page, RangeParam};
use crate::domain::store::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{ShortCodeGenerator, validate_custom_code};

/// Service owning the decision of which short code a link gets.
///
/// Uniqueness is never checked in memory: every write goes to the store in a
/// single statement and a uniqueness violation surfaces as
/// [`AppError::ShortNameAlreadyUsed`]. Generated-code collisions are not
/// retried.
pub struct LinkDirectory<S: LinkStore + ?Sized> {
    store: Arc<S>,
    generator: Arc<ShortCodeGenerator>,
}

impl<S: LinkStore + ?Sized> LinkDirectory<S> {
    pub fn new(store: Arc<S>, generator: Arc<ShortCodeGenerator>) -> Self {
        Self { store, generator }
    }

    /// Creates a link, generating a short code when none is supplied.
    ///
    /// An empty `short_code` counts as not supplied.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidOriginalUrl`] if the URL is not absolute
    /// - [`AppError::InvalidShortCode`] if a supplied code is malformed
    /// - [`AppError::ShortNameAlreadyUsed`] if the store already holds the code
    pub async fn create(
        &self,
        original_url: String,
        short_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_original_url(&original_url)?;

        let short_code = match non_empty(short_code) {
            Some(code) => {
                validate_custom_code(&code)?;
                code
            }
            None => self.generator.generate(),
        };

        let link = self
            .store
            .insert(NewLink {
                original_url,
                short_code,
            })
            .await?;

        debug!(id = link.id, short_code = %link.short_code, "link created");
        Ok(link)
    }

    /// # Errors
    ///
    /// [`AppError::InvalidId`] for a non-positive or non-numeric id,
    /// [`AppError::NotFound`] if no link has it.
    pub async fn get(&self, id: &str) -> Result<Link, AppError> {
        let id = parse_id(id)?;
        Ok(self.store.get_by_id(id).await?)
    }

    /// Replaces the URL and, when supplied, the short code of a link.
    ///
    /// Without a short code the link keeps its current one. Keeping the same
    /// code is never a collision.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::create`], plus [`AppError::InvalidId`] and
    /// [`AppError::NotFound`].
    pub async fn update(
        &self,
        id: &str,
        original_url: String,
        short_code: Option<String>,
    ) -> Result<Link, AppError> {
        let id = parse_id(id)?;
        validate_original_url(&original_url)?;

        let short_code = match non_empty(short_code) {
            Some(code) => {
                validate_custom_code(&code)?;
                code
            }
            None => self.store.get_by_id(id).await?.short_code,
        };

        let link = self
            .store
            .update(
                id,
                NewLink {
                    original_url,
                    short_code,
                },
            )
            .await?;

        debug!(id, short_code = %link.short_code, "link updated");
        Ok(link)
    }

    /// Physically deletes a link after checking that it exists.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidId`] or [`AppError::NotFound`].
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;

        self.store.get_by_id(id).await?;
        self.store.delete(id).await?;

        debug!(id, "link deleted");
        Ok(())
    }

    /// Returns one page of links in ascending id order with the total count.
    pub async fn list(&self, range: RangeParam) -> Result<Page<Link>, AppError> {
        let (items, total) = tokio::try_join!(
            self.store.list(range.limit(), range.offset()),
            self.store.count()
        )?;

        Ok(Page::new(items, range, total))
    }
}

/// Accepts only absolute URLs with a host, e.g. `https://example.com/path`.
///
/// Control characters are rejected outright: the parser would silently drop
/// tabs and newlines, yet the raw string is what gets stored and redirected to.
pub fn validate_original_url(raw: &str) -> Result<(), AppError> {
    if raw.chars().any(char::is_control) {
        return Err(AppError::InvalidOriginalUrl);
    }

    match Url::parse(raw) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(AppError::InvalidOriginalUrl),
    }
}

/// Parses a path id; only positive integers are ids.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::InvalidId)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{MockLinkStore, StoreError};
    use crate::utils::code_generator::ALPHABET;
    use mockall::predicate::eq;

    fn link(id: i64, url: &str, code: &str) -> Link {
        Link::new(id, url.to_string(), code.to_string())
    }

    fn directory(store: MockLinkStore) -> LinkDirectory<MockLinkStore> {
        LinkDirectory::new(Arc::new(store), Arc::new(ShortCodeGenerator::default()))
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut store = MockLinkStore::new();
        store
            .expect_insert()
            .withf(|new_link| {
                (6..=10).contains(&new_link.short_code.len())
                    && new_link.short_code.bytes().all(|b| ALPHABET.contains(&b))
            })
            .times(1)
            .returning(|new_link| Ok(Link::new(1, new_link.original_url, new_link.short_code)));

        let created = directory(store)
            .create("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_empty_code_is_generated() {
        let mut store = MockLinkStore::new();
        store
            .expect_insert()
            .withf(|new_link| !new_link.short_code.is_empty())
            .times(1)
            .returning(|new_link| Ok(Link::new(1, new_link.original_url, new_link.short_code)));

        let created = directory(store)
            .create("https://example.com".to_string(), Some(String::new()))
            .await
            .unwrap();

        assert!(!created.short_code.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut store = MockLinkStore::new();
        store
            .expect_insert()
            .with(eq(NewLink {
                original_url: "https://rust-lang.org".to_string(),
                short_code: "rustlang".to_string(),
            }))
            .times(1)
            .returning(|new_link| Ok(Link::new(3, new_link.original_url, new_link.short_code)));

        let created = directory(store)
            .create(
                "https://rust-lang.org".to_string(),
                Some("rustlang".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(created.short_code, "rustlang");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_url_before_store() {
        let mut store = MockLinkStore::new();
        store.expect_insert().never();

        let directory = directory(store);
        for url in ["", "not a url", "example.com", "mailto:someone@example.com"] {
            let result = directory.create(url.to_string(), None).await;
            assert!(
                matches!(result, Err(AppError::InvalidOriginalUrl)),
                "{url} accepted"
            );
        }
    }

    #[test]
    fn test_control_characters_are_rejected() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exam\rple.com",
            "https://example.com/\u{0}",
            "https://example.com/\u{7f}",
            "\nhttps://example.com",
        ] {
            assert!(
                matches!(validate_original_url(url), Err(AppError::InvalidOriginalUrl)),
                "{url:?} accepted"
            );
        }

        assert!(validate_original_url("https://example.com/café?q=a b").is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_custom_code() {
        let mut store = MockLinkStore::new();
        store.expect_insert().never();

        let result = directory(store)
            .create("https://example.com".to_string(), Some("ab-cd!".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::InvalidShortCode)));
    }

    #[tokio::test]
    async fn test_create_collision_is_not_retried() {
        let mut store = MockLinkStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::UniqueViolation));

        let result = directory(store)
            .create("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::ShortNameAlreadyUsed)));
    }

    #[tokio::test]
    async fn test_get_rejects_invalid_ids() {
        let mut store = MockLinkStore::new();
        store.expect_get_by_id().never();

        let directory = directory(store);
        for id in ["0", "-1", "abc", "1.5", ""] {
            assert!(
                matches!(directory.get(id).await, Err(AppError::InvalidId)),
                "{id:?} accepted"
            );
        }
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_get_by_id()
            .with(eq(9))
            .returning(|_| Err(StoreError::NotFound));

        assert!(matches!(
            directory(store).get("9").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_without_code_keeps_current_code() {
        let mut store = MockLinkStore::new();
        store
            .expect_get_by_id()
            .with(eq(4))
            .returning(|id| Ok(link(id, "https://old.example.com", "keepme")));
        store
            .expect_update()
            .withf(|id, new_link| *id == 4 && new_link.short_code == "keepme")
            .times(1)
            .returning(|id, new_link| Ok(Link::new(id, new_link.original_url, new_link.short_code)));

        let updated = directory(store)
            .update("4", "https://new.example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(updated.original_url, "https://new.example.com");
        assert_eq!(updated.short_code, "keepme");
    }

    #[tokio::test]
    async fn test_update_collision() {
        let mut store = MockLinkStore::new();
        store
            .expect_update()
            .times(1)
            .returning(|_, _| Err(StoreError::UniqueViolation));

        let result = directory(store)
            .update(
                "1",
                "https://example.com".to_string(),
                Some("takencode".to_string()),
            )
            .await;

        assert!(matches!(result, Err(AppError::ShortNameAlreadyUsed)));
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let mut store = MockLinkStore::new();
        store
            .expect_get_by_id()
            .returning(|_| Err(StoreError::NotFound));
        store.expect_delete().never();

        assert!(matches!(
            directory(store).delete("1").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut store = MockLinkStore::new();
        store
            .expect_get_by_id()
            .returning(|id| Ok(link(id, "https://example.com", "abcdef")));
        store.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        assert!(directory(store).delete("1").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_uses_range_window_and_total() {
        let mut store = MockLinkStore::new();
        store
            .expect_list()
            .with(eq(6), eq(5))
            .returning(|limit, offset| {
                Ok((offset..offset + limit)
                    .map(|i| link(i + 1, "https://example.com", "abcdef"))
                    .collect())
            });
        store.expect_count().returning(|| Ok(20));

        let page = directory(store)
            .list(RangeParam { start: 5, end: 10 })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total, 20);
        assert_eq!(page.content_range("links"), "links 5-10/20");
    }
}
