use super::seed;
use crate::{
    error::{BookqlError, Result},
    model::{Author, Book},
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Both record sequences. Kept behind one lock so a mutation sees a
/// consistent view of everything it touches.
#[derive(Default)]
struct Tables {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Append-only in-memory store for authors and books.
///
/// Cloning is cheap: every clone shares the same underlying sequences.
/// Ids are positional (`len + 1`), computed and appended under the write
/// lock so concurrent creations never collide.
#[derive(Clone, Default)]
pub struct RecordStore {
    tables: Arc<RwLock<Tables>>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample authors and books
    pub fn seeded() -> Self {
        Self::with_records(seed::authors(), seed::books())
    }

    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables { authors, books })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| BookqlError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| BookqlError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    pub fn books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    pub fn author_count(&self) -> Result<usize> {
        Ok(self.read()?.authors.len())
    }

    pub fn book_count(&self) -> Result<usize> {
        Ok(self.read()?.books.len())
    }

    pub fn find_author_by_id(&self, id: i32) -> Result<Option<Author>> {
        tracing::debug!(id, "Looking up author");
        Ok(self.read()?.authors.iter().find(|a| a.id == id).cloned())
    }

    pub fn find_book_by_id(&self, id: i32) -> Result<Option<Book>> {
        tracing::debug!(id, "Looking up book");
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    /// All books referencing `author_id`, in insertion order
    pub fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .iter()
            .filter(|b| b.is_written_by(author_id))
            .cloned()
            .collect())
    }

    pub fn add_author(&self, name: String) -> Result<Author> {
        let mut tables = self.write()?;
        let id = next_id(tables.authors.len(), "author")?;
        let author = Author::new(id, name);

        tracing::info!(id = author.id, name = %author.name, "Adding author");
        tables.authors.push(author.clone());
        Ok(author)
    }

    /// Appends a book without checking that `author_id` exists.
    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book> {
        let mut tables = self.write()?;
        let id = next_id(tables.books.len(), "book")?;
        let book = Book::new(id, name, author_id);

        if !tables.authors.iter().any(|a| a.id == author_id) {
            tracing::warn!(id = book.id, author_id, "Book references unknown author");
        }
        tracing::info!(id = book.id, name = %book.name, author_id, "Adding book");
        tables.books.push(book.clone());
        Ok(book)
    }
}

fn next_id(len: usize, kind: &str) -> Result<i32> {
    i32::try_from(len + 1)
        .map_err(|_| BookqlError::Storage(format!("No {} ids left to assign", kind)))
}
