//! Collection bindings for the domain entities

use crate::store::Record;
use biblio_core::{Author, Book, Category, Fine, Loan, Member};

impl Record for Author {
    const COLLECTION: &'static str = "authors";

    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Record for Category {
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Record for Book {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Record for Member {
    const COLLECTION: &'static str = "members";

    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Record for Loan {
    const COLLECTION: &'static str = "loans";

    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Record for Fine {
    const COLLECTION: &'static str = "fines";

    fn id(&self) -> u64 {
        self.id.get()
    }
}
