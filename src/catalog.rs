use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// A single catalog entry.
///
/// `id` is assigned by the caller and is the only identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: u64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Lends one copy out.
    fn check_out(&mut self) -> Result<(), CatalogError> {
        if self.quantity == 0 {
            return Err(CatalogError::NotAvailable {
                id: self.id.clone(),
            });
        }

        self.quantity -= 1;

        Ok(())
    }

    /// Takes one copy back. Saturates at [`u64::MAX`].
    fn give_back(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

/// The records every fresh catalog starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "Book 1", "Author 1", 10),
        Book::new("2", "Book 2", "Author 2", 5),
        Book::new("3", "Book 3", "Author 3", 3),
        Book::new("4", "Book 4", "Author 4", 2),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Book not found: {id}")]
    NotFound { id: String },
    #[error("Book not available: {id}")]
    NotAvailable { id: String },
}

/// In-memory, insertion-ordered book store.
///
/// Lookups return the first record with a matching id. Ids are not checked for
/// uniqueness on insert, so duplicates shadow each other in insertion order.
/// Every mutation takes the write lock, so concurrent requests never observe a
/// half-applied change.
#[derive(Debug, Default)]
pub struct Catalog {
    books: RwLock<Vec<Book>>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn find(&self, id: &str) -> Result<Book, CatalogError> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Appends `book` to the end of the catalog.
    pub async fn insert(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());

        book
    }

    /// Applies `f` to the first book matching `id` and returns the result.
    ///
    /// The book is left untouched if `f` fails.
    pub async fn update<F>(&self, id: &str, f: F) -> Result<Book, CatalogError>
    where
        F: FnOnce(&mut Book) -> Result<(), CatalogError>,
    {
        let mut books = self.books.write().await;

        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;

        let mut updated = book.clone();
        f(&mut updated)?;
        *book = updated.clone();

        Ok(updated)
    }

    pub async fn check_out(&self, id: &str) -> Result<Book, CatalogError> {
        self.update(id, Book::check_out).await
    }

    pub async fn give_back(&self, id: &str) -> Result<Book, CatalogError> {
        self.update(id, |book| {
            book.give_back();

            Ok(())
        })
        .await
    }

    /// Removes the first book matching `id`, keeping the order of the rest.
    pub async fn remove(&self, id: &str) -> Result<Book, CatalogError> {
        let mut books = self.books.write().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(books.remove(index))
    }
}

fn not_found(id: &str) -> CatalogError {
    CatalogError::NotFound { id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::task::JoinSet;

    use super::*;

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|book| book.id.as_str()).collect()
    }

    #[tokio::test]
    async fn seed_has_four_books_in_order() {
        let catalog = Catalog::new(seed_books());

        let books = catalog.list().await;

        assert_eq!(ids(&books), ["1", "2", "3", "4"]);
        assert_eq!(
            books.iter().map(|book| book.quantity).collect::<Vec<_>>(),
            [10, 5, 3, 2]
        );
    }

    #[tokio::test]
    async fn find_returns_first_match_for_duplicate_ids() {
        let catalog = Catalog::new(seed_books());
        catalog.insert(Book::new("2", "Shadowed", "Nobody", 1)).await;

        let book = catalog.find("2").await.unwrap();

        assert_eq!(book.title, "Book 2");
        assert_eq!(catalog.len().await, 5);
    }

    #[tokio::test]
    async fn find_unknown_id_is_not_found() {
        let catalog = Catalog::new(seed_books());

        assert_eq!(
            catalog.find("99").await,
            Err(CatalogError::NotFound {
                id: "99".to_string()
            })
        );
    }

    #[tokio::test]
    async fn insert_appends_at_the_end() {
        let catalog = Catalog::new(seed_books());
        let book = Book::new("5", "Book 5", "Author 5", 1);

        let inserted = catalog.insert(book.clone()).await;

        assert_eq!(inserted, book);
        assert_eq!(catalog.list().await.last(), Some(&book));
    }

    #[tokio::test]
    async fn check_out_stops_at_zero() {
        let catalog = Catalog::new(seed_books());

        assert_eq!(catalog.check_out("4").await.unwrap().quantity, 1);
        assert_eq!(catalog.check_out("4").await.unwrap().quantity, 0);
        assert_eq!(
            catalog.check_out("4").await,
            Err(CatalogError::NotAvailable {
                id: "4".to_string()
            })
        );
        assert_eq!(catalog.find("4").await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn give_back_increments_past_any_realistic_stock() {
        let catalog = Catalog::new(vec![Book::new(
            "1",
            "Book 1",
            "Author 1",
            u64::from(u32::MAX),
        )]);

        assert_eq!(
            catalog.give_back("1").await.unwrap().quantity,
            u64::from(u32::MAX) + 1
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_check_outs_and_returns_are_not_lost() {
        let catalog = Arc::new(Catalog::new(seed_books()));
        let mut tasks = JoinSet::new();

        for _ in 0..6 {
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move { catalog.check_out("1").await.is_ok() });
        }
        for _ in 0..4 {
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move {
                catalog.give_back("1").await.unwrap();
                true
            });
        }
        while let Some(done) = tasks.join_next().await {
            assert!(done.unwrap());
        }

        assert_eq!(catalog.find("1").await.unwrap().quantity, 10 - 6 + 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_check_outs_never_exceed_stock() {
        let catalog = Arc::new(Catalog::new(seed_books()));
        let mut tasks = JoinSet::new();

        for _ in 0..20 {
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move { catalog.check_out("2").await });
        }

        let mut succeeded = 0;
        let mut refused = 0;
        while let Some(result) = tasks.join_next().await {
            match result.unwrap() {
                Ok(_) => succeeded += 1,
                Err(CatalogError::NotAvailable { .. }) => refused += 1,
                Err(err) => panic!("unexpected error: {err}"),
            }
        }

        assert_eq!(succeeded, 5);
        assert_eq!(refused, 15);
        assert_eq!(catalog.find("2").await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn failed_update_leaves_book_untouched() {
        let catalog = Catalog::new(seed_books());

        let result = catalog
            .update("1", |book| {
                book.quantity = 0;

                Err(CatalogError::NotAvailable {
                    id: book.id.clone(),
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(catalog.find("1").await.unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn remove_keeps_relative_order() {
        let catalog = Catalog::new(seed_books());

        let removed = catalog.remove("2").await.unwrap();

        assert_eq!(removed.id, "2");
        assert_eq!(ids(&catalog.list().await), ["1", "3", "4"]);
    }

    #[tokio::test]
    async fn remove_unknown_id_leaves_catalog_unchanged() {
        let catalog = Catalog::new(seed_books());

        assert!(catalog.remove("99").await.is_err());
        assert_eq!(catalog.list().await, seed_books());
    }
}
