//! Menu text and choices.

pub const MAIN_MENU: &str = "
    WELCOME TO LIBRARY

    Library Tools
    1. Add users
    2. Add books
    3. Loan a book to a user
    4. Return a book from a user
    5. Get total number of books borrowed by a user
    6. Get all books on loan

    Book special tools
    7. Search book
    8. Remove a book by title
    9. Get total number of books
    10. Modify book

    User special tools
    11. Remove a user by firstname
    12. Get total number of users
    13. Get user details
    14. Modify users

    Other Tools
    99. Exit program

    Enter a menu number: ";

pub const SEARCH_MENU: &str = "
    1. Search by title
    2. Search by author
    3. Search by publisher
    4. Search by publication date
    99. Go Back <<

    Enter a menu number: ";

pub const BOOK_EDIT_MENU: &str = "
    1. Modify title
    2. Add author name
    3. Clear all author names and add a new name
    4. Modify year
    5. Modify publisher
    6. Modify number of copies
    7. Modify publication date
    99. Go Back <<

    Enter a menu number: ";

pub const USER_EDIT_MENU: &str = "
    1. Modify firstname
    2. Modify surname
    3. Modify house number
    4. Modify street name
    5. Modify postcode
    6. Modify email
    7. Modify date of birth
    99. Go Back <<

    Enter a menu number: ";

/// Top-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    AddUser,
    AddBook,
    Borrow,
    Return,
    BorrowedCount,
    OutstandingLoans,
    SearchBooks,
    RemoveBooks,
    TotalBooks,
    ModifyBook,
    RemoveUser,
    TotalUsers,
    UserDetails,
    ModifyUser,
    Exit,
}

impl MainAction {
    pub fn from_choice(choice: &str) -> Option<Self> {
        Some(match choice.trim() {
            "1" => Self::AddUser,
            "2" => Self::AddBook,
            "3" => Self::Borrow,
            "4" => Self::Return,
            "5" => Self::BorrowedCount,
            "6" => Self::OutstandingLoans,
            "7" => Self::SearchBooks,
            "8" => Self::RemoveBooks,
            "9" => Self::TotalBooks,
            "10" => Self::ModifyBook,
            "11" => Self::RemoveUser,
            "12" => Self::TotalUsers,
            "13" => Self::UserDetails,
            "14" => Self::ModifyUser,
            "99" => Self::Exit,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Publisher,
    PublicationDate,
    Back,
}

impl SearchField {
    pub fn from_choice(choice: &str) -> Option<Self> {
        Some(match choice.trim() {
            "1" => Self::Title,
            "2" => Self::Author,
            "3" => Self::Publisher,
            "4" => Self::PublicationDate,
            "99" => Self::Back,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookEdit {
    Title,
    AddAuthor,
    ReplaceAuthors,
    Year,
    Publisher,
    Copies,
    PublicationDate,
    Back,
}

impl BookEdit {
    pub fn from_choice(choice: &str) -> Option<Self> {
        Some(match choice.trim() {
            "1" => Self::Title,
            "2" => Self::AddAuthor,
            "3" => Self::ReplaceAuthors,
            "4" => Self::Year,
            "5" => Self::Publisher,
            "6" => Self::Copies,
            "7" => Self::PublicationDate,
            "99" => Self::Back,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEdit {
    Firstname,
    Surname,
    HouseNumber,
    Street,
    Postcode,
    Email,
    DateOfBirth,
    Back,
}

impl UserEdit {
    pub fn from_choice(choice: &str) -> Option<Self> {
        Some(match choice.trim() {
            "1" => Self::Firstname,
            "2" => Self::Surname,
            "3" => Self::HouseNumber,
            "4" => Self::Street,
            "5" => Self::Postcode,
            "6" => Self::Email,
            "7" => Self::DateOfBirth,
            "99" => Self::Back,
            _ => return None,
        })
    }
}
