//! Example books inserted into a genuinely empty collection on first run.

use crate::model::BookFields;

struct SeedBook {
    name: &'static str,
    author: &'static str,
    description: &'static str,
    picture: &'static str,
}

const SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        name: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        description: "A classic novel set in the Roaring Twenties, exploring themes of wealth and longing.",
        picture: "https://www.hachette.com.au/content/uploads/jacket/9780732297350.jpg",
    },
    SeedBook {
        name: "To Kill a Mockingbird",
        author: "Harper Lee",
        description: "A story of racial injustice and moral growth in the American South.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81OdwZG6DhL.jpg",
    },
    SeedBook {
        name: "1984",
        author: "George Orwell",
        description: "A dystopian novel about totalitarianism and surveillance.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/71kxa1-0mfL.jpg",
    },
    SeedBook {
        name: "Moby-Dick",
        author: "Herman Melville",
        description: "An epic tale of obsession and revenge against a white whale.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81PR4l6DyhL.jpg",
    },
    SeedBook {
        name: "Pride and Prejudice",
        author: "Jane Austen",
        description: "A romantic novel about manners, marriage, and social status.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81A-mvlo+QL.jpg",
    },
    SeedBook {
        name: "The Catcher in the Rye",
        author: "J.D. Salinger",
        description: "A story of teenage rebellion and identity crisis.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/71Q1Iu4suSL.jpg",
    },
    SeedBook {
        name: "Brave New World",
        author: "Aldous Huxley",
        description: "A dystopian vision of a future society controlled by technology and pleasure.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81zLwAwD9-L.jpg",
    },
    SeedBook {
        name: "The Hobbit",
        author: "J.R.R. Tolkien",
        description: "A fantasy adventure following Bilbo Baggins' journey to recover treasure from a dragon.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91b0C2YNSrL.jpg",
    },
    SeedBook {
        name: "War and Peace",
        author: "Leo Tolstoy",
        description: "A historical novel that intertwines the lives of aristocrats during the Napoleonic wars.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91A+4N7mJ-L.jpg",
    },
    SeedBook {
        name: "Crime and Punishment",
        author: "Fyodor Dostoevsky",
        description: "A psychological exploration of guilt and redemption.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81d6GXV3x-L.jpg",
    },
    SeedBook {
        name: "The Odyssey",
        author: "Homer",
        description: "An epic poem about Odysseus' journey home after the Trojan War.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81tEgsxpNZS.jpg",
    },
    SeedBook {
        name: "The Brothers Karamazov",
        author: "Fyodor Dostoevsky",
        description: "A deep philosophical novel exploring morality, faith, and free will.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91TVz3k4l-L.jpg",
    },
    SeedBook {
        name: "Frankenstein",
        author: "Mary Shelley",
        description: "A gothic horror novel about a scientist who creates a monster.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81FStZ3sb2L.jpg",
    },
    SeedBook {
        name: "Dracula",
        author: "Bram Stoker",
        description: "A horror classic introducing the legendary vampire Count Dracula.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91OINeHnJGL.jpg",
    },
    SeedBook {
        name: "Jane Eyre",
        author: "Charlotte Brontë",
        description: "A novel about an orphan's journey to independence and love.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81z4bDl6H-L.jpg",
    },
    SeedBook {
        name: "Wuthering Heights",
        author: "Emily Brontë",
        description: "A tale of love and revenge set on the Yorkshire moors.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91Ex2A5VwQL.jpg",
    },
    SeedBook {
        name: "The Lord of the Rings",
        author: "J.R.R. Tolkien",
        description: "An epic fantasy saga about the battle to destroy the One Ring.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/91SZSW8qSsL.jpg",
    },
    SeedBook {
        name: "The Picture of Dorian Gray",
        author: "Oscar Wilde",
        description: "A novel exploring vanity, morality, and the consequences of indulgence.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81t2CVWEsUL.jpg",
    },
    SeedBook {
        name: "The Stranger",
        author: "Albert Camus",
        description: "A novel of existentialism and detachment from society.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/81OthjkJBuL.jpg",
    },
    SeedBook {
        name: "Fahrenheit 451",
        author: "Ray Bradbury",
        description: "A dystopian novel about a future where books are outlawed and burned.",
        picture: "https://images-na.ssl-images-amazon.com/images/I/71OFqSRFDgL.jpg",
    },
    SeedBook {
        name: "Les Misérables",
        author: "Victor Hugo",
        description: "A sweeping story of redemption, justice, and love in 19th-century France.",
        picture: "https://m.media-amazon.com/images/I/71oZG5DGHFL._SY466_.jpg",
    },
];

/// Number of example books.
pub fn seed_len() -> usize {
    SEED_BOOKS.len()
}

/// The example books, in their fixed order.
pub fn seed_books() -> Vec<BookFields> {
    SEED_BOOKS
        .iter()
        .map(|b| {
            BookFields::new(b.name)
                .with_author(b.author)
                .with_description(b.description)
                .with_picture(b.picture)
        })
        .collect()
}
