//! Sample records a fresh store starts with.
//!
//! Names are kept verbatim, stray whitespace included.

use crate::model::{Author, Book};

pub fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "E. Hemingway"),
        Author::new(2, " R. Branson"),
        Author::new(3, "C. Discens"),
    ]
}

pub fn books() -> Vec<Book> {
    vec![
        Book::new(1, "The Torrents of Spring ", 1),
        Book::new(2, "The Sun Also Rises", 1),
        Book::new(3, "A Farewell to Arms", 1),
        Book::new(4, "Finding My VIrginity ", 2),
        Book::new(5, "Losing My VIrginity", 2),
        Book::new(6, "Globalisation Laid Bare", 2),
        Book::new(7, "Oliver Twist", 3),
        Book::new(8, "A tale of two cities", 3),
    ]
}
