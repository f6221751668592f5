//! Interactive session: reads menu choices and drives the library.
//!
//! Library errors are printed and the session carries on. Only console
//! failures (closed input, exhausted retries, IO) end the session.

use std::io::{BufRead, Write};

use imlend_core::{
    Address, Book, BookQuery, CatalogError, Entity, EntityId, EntityRef, Library, LibraryError,
    LoanError, User, UserQuery,
};

use crate::error::Result;
use crate::input::Prompter;
use crate::menu::{
    BookEdit, MainAction, SearchField, UserEdit, BOOK_EDIT_MENU, MAIN_MENU, SEARCH_MENU,
    USER_EDIT_MENU,
};

pub struct App<'a, R, W> {
    library: &'a mut Library,
    io: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> App<'a, R, W> {
    pub fn new(library: &'a mut Library, io: Prompter<R, W>) -> Self {
        Self { library, io }
    }

    /// Run until the user picks "exit".
    pub fn run(&mut self) -> Result<()> {
        loop {
            let action = self.io.ask_with(
                MAIN_MENU,
                "Enter a valid number between 1 and 14 or 99.",
                MainAction::from_choice,
            )?;
            tracing::debug!(?action, "menu action");
            if action == MainAction::Exit {
                return Ok(());
            }
            self.dispatch(action)?;
        }
    }

    fn dispatch(&mut self, action: MainAction) -> Result<()> {
        match action {
            MainAction::AddUser => self.add_user(),
            MainAction::AddBook => self.add_book(),
            MainAction::Borrow => self.borrow(),
            MainAction::Return => self.return_book(),
            MainAction::BorrowedCount => self.borrowed_count(),
            MainAction::OutstandingLoans => self.outstanding_loans(),
            MainAction::SearchBooks => self.search_books(),
            MainAction::RemoveBooks => self.remove_books(),
            MainAction::TotalBooks => {
                let total = self.library.catalog().len();
                self.io.say(format!("Total number of books: {total}"))
            }
            MainAction::ModifyBook => self.modify_book(),
            MainAction::RemoveUser => self.remove_user(),
            MainAction::TotalUsers => {
                let total = self.library.registry().len();
                self.io.say(format!("Total number of users: {total}"))
            }
            MainAction::UserDetails => self.user_details(),
            MainAction::ModifyUser => self.modify_user(),
            MainAction::Exit => Ok(()),
        }
    }

    fn add_user(&mut self) -> Result<()> {
        self.io.say("\n------------------------ADDING A USER---------------------")?;
        let username = self.io.ask_text("Enter a username: ")?;
        let firstname = self.io.ask_text("Enter a firstname: ")?;
        let surname = self.io.ask_text("Enter a surname: ")?;
        let house_number = self.io.ask_u32("Enter a house number: ")?;
        let street = self.io.ask_text("Enter a street name: ")?;
        let postcode = self.io.ask_text("Enter a postcode: ")?;
        let email = self.io.ask_email("Enter an email: ")?;
        let date_of_birth = self.io.ask_date(&format!(
            "Enter date of birth ({}), e.g. 2020, 02, 23: ",
            self.io.date_format()
        ))?;

        let user = User::new(
            username,
            firstname,
            surname,
            Address::new(house_number, street, postcode),
            email,
            date_of_birth,
        );
        let result = self.library.add_user(user).map(|_| ());
        self.report(result, "User added.")
    }

    fn add_book(&mut self) -> Result<()> {
        self.io.say("\n------------------------ADDING A BOOK---------------------")?;
        let title = self.io.ask_text("Enter title: ")?;
        let authors = self
            .io
            .ask_list("Enter author(s), separate multiple with a comma: ")?;
        let year = self.io.ask_i32("Enter year: ")?;
        let publisher = self.io.ask_text("Enter publisher name: ")?;
        let copies = self.io.ask_u32("Enter no of copies: ")?;
        let publication_date = self.io.ask_date(&format!(
            "Enter publication date ({}), e.g. 2020, 02, 23: ",
            self.io.date_format()
        ))?;

        let book = Book::new(title, copies, publication_date)
            .with_authors(authors)
            .with_year(year)
            .with_publisher(publisher);
        let result = self.library.add_book(book).map(|_| ());
        self.report(result, "Book added.")
    }

    /// List the catalog and let the user pick one book.
    fn pick_book(&mut self) -> Result<Option<EntityId>> {
        let titles: Vec<(EntityId, String)> = self
            .library
            .catalog()
            .iter()
            .map(|b| (b.id(), b.title().to_string()))
            .collect();
        if titles.is_empty() {
            self.io.say("You have no books in the book list")?;
            return Ok(None);
        }
        self.io.say("\n---------------PICK A BOOK------------------")?;
        for (i, (_, title)) in titles.iter().enumerate() {
            self.io.say(format!("{}. {title}", i + 1))?;
        }
        let index = self
            .io
            .ask_index("\nEnter the index of the book to pick: ", titles.len())?;
        Ok(titles.get(index).map(|(id, _)| *id))
    }

    /// List the registry and let the user pick one user.
    fn pick_user(&mut self) -> Result<Option<EntityId>> {
        let names: Vec<(EntityId, String)> = self
            .library
            .registry()
            .iter()
            .map(|u| (u.id(), u.full_name()))
            .collect();
        if names.is_empty() {
            self.io.say("You have no users in the user list")?;
            return Ok(None);
        }
        self.io.say("\n---------------PICK A USER------------------")?;
        for (i, (_, name)) in names.iter().enumerate() {
            self.io.say(format!("{}. {name}", i + 1))?;
        }
        let index = self
            .io
            .ask_index("\nEnter the index of the user to pick: ", names.len())?;
        Ok(names.get(index).map(|(id, _)| *id))
    }

    fn pick_book_and_user(&mut self) -> Result<Option<(EntityId, EntityId)>> {
        let Some(book) = self.pick_book()? else {
            return Ok(None);
        };
        let Some(user) = self.pick_user()? else {
            return Ok(None);
        };
        Ok(Some((book, user)))
    }

    fn borrow(&mut self) -> Result<()> {
        if let Some((book, user)) = self.pick_book_and_user()? {
            let result = self.library.borrow(book, user);
            self.report(result, "Book borrowed by user.")?;
        }
        Ok(())
    }

    fn return_book(&mut self) -> Result<()> {
        if let Some((book, user)) = self.pick_book_and_user()? {
            let result = self.library.return_book(book, user);
            self.report(result, "Book returned.")?;
        }
        Ok(())
    }

    fn borrowed_count(&mut self) -> Result<()> {
        let Some(user) = self.pick_user()? else {
            return Ok(());
        };
        match self.library.borrowed_count_for_user(user) {
            Ok(Some(count)) => self
                .io
                .say(format!("Total books borrowed by user is {count}")),
            Ok(None) => self.io.say("User has no borrowed books"),
            Err(err) => self.report(Err(err), ""),
        }
    }

    fn outstanding_loans(&mut self) -> Result<()> {
        let listed = self.library.list_outstanding_loans().map(|loans| {
            loans
                .iter()
                .map(|loan| {
                    let mut block = format!("\n{}", loan.book.title());
                    for (i, user) in loan.holders.iter().enumerate() {
                        block.push_str(&format!(
                            "\n{}. {} {}",
                            i + 1,
                            user.username(),
                            user.firstname()
                        ));
                    }
                    block
                })
                .collect::<Vec<_>>()
        });
        let lines = match listed {
            Ok(lines) => lines,
            Err(err) => return self.report(Err(err), ""),
        };
        if lines.is_empty() {
            return self.io.say("No books on loan.");
        }
        for line in lines {
            self.io.say(line)?;
        }
        Ok(())
    }

    fn search_books(&mut self) -> Result<()> {
        let field = self.io.ask_with(
            SEARCH_MENU,
            "Enter a valid number between 1 and 4 or 99.",
            SearchField::from_choice,
        )?;
        let query = match field {
            SearchField::Title => BookQuery::Title(self.io.ask_text("Enter title to search: ")?),
            SearchField::Author => BookQuery::Author(self.io.ask_text("Enter author name: ")?),
            SearchField::Publisher => {
                BookQuery::Publisher(self.io.ask_text("Enter publisher name: ")?)
            }
            SearchField::PublicationDate => BookQuery::PublicationDate(
                self.io.ask_date("Enter publication date, e.g. 2020, 02, 23: ")?,
            ),
            SearchField::Back => return Ok(()),
        };

        let found: Vec<String> = self
            .library
            .search_books(&query)
            .iter()
            .map(|b| b.to_string())
            .collect();
        self.io.say(format!("\nBooks with {}:", query.describe()))?;
        if found.is_empty() {
            self.io.say("<No matching books>")?;
        }
        for details in &found {
            self.io.say(format!("\n{details}"))?;
        }
        self.io.say(format!("\nNumber of books found: {}", found.len()))
    }

    fn remove_books(&mut self) -> Result<()> {
        let title = self.io.ask_text("Enter book title: ")?;
        match self.library.remove_books(&BookQuery::Title(title)) {
            Ok(count) => self.io.say(format!("{count} book(s) deleted.")),
            Err(LibraryError::Catalog(CatalogError::NoMatch(_))) => {
                self.io.say("<No matching book to delete>")
            }
            Err(err) => self.report(Err(err), ""),
        }
    }

    fn remove_user(&mut self) -> Result<()> {
        let firstname = self.io.ask_text("Enter user firstname: ")?;
        let found = self
            .library
            .removal_candidates(&UserQuery::Firstname(firstname))
            .map(|users| {
                users
                    .iter()
                    .map(|u| (u.id(), u.full_name()))
                    .collect::<Vec<_>>()
            });
        let candidates = match found {
            Ok(candidates) => candidates,
            Err(LibraryError::Catalog(CatalogError::NoMatch(_))) => {
                return self.io.say("<No user to remove>");
            }
            Err(err) => return self.report(Err(err), ""),
        };

        let index = if candidates.len() > 1 {
            self.io.say(format!(
                "There are {} users with this firstname",
                candidates.len()
            ))?;
            for (i, (_, name)) in candidates.iter().enumerate() {
                self.io.say(format!("{}. {name}", i + 1))?;
            }
            self.io
                .ask_index("\nEnter the index of the user to delete: ", candidates.len())?
        } else {
            0
        };

        if let Some((id, _)) = candidates.get(index) {
            let result = self.library.remove_user(*id).map(|_| ());
            self.report(result, "User deleted.")?;
        }
        Ok(())
    }

    fn user_details(&mut self) -> Result<()> {
        let Some(id) = self.pick_user()? else {
            return Ok(());
        };
        let details = match self.library.user(id).map(|u| u.to_string()) {
            Ok(details) => details,
            Err(err) => return self.report(Err(err), ""),
        };
        self.io.say(format!("\n{details}"))
    }

    fn modify_book(&mut self) -> Result<()> {
        let Some(id) = self.pick_book()? else {
            return Ok(());
        };
        let edit = self.io.ask_with(
            BOOK_EDIT_MENU,
            "Enter a valid number between 1 and 7 or 99.",
            BookEdit::from_choice,
        )?;

        let result = match edit {
            BookEdit::Title => {
                let title = self.io.ask_text("Enter book title: ")?;
                self.library.book_mut(id).map(|b| b.set_title(title))
            }
            BookEdit::AddAuthor => {
                let name = self.io.ask_text("Enter author name: ")?;
                self.library.book_mut(id).map(|b| b.add_author(name))
            }
            BookEdit::ReplaceAuthors => {
                let name = self.io.ask_text("Enter author name: ")?;
                self.library.book_mut(id).map(|b| {
                    b.clear_authors();
                    b.add_author(name);
                })
            }
            BookEdit::Year => {
                let year = self.io.ask_i32("Enter year: ")?;
                self.library.book_mut(id).map(|b| b.set_year(year))
            }
            BookEdit::Publisher => {
                let publisher = self.io.ask_text("Enter publisher name: ")?;
                self.library.book_mut(id).map(|b| b.set_publisher(publisher))
            }
            BookEdit::Copies => {
                let copies = self.io.ask_u32("Enter number of copies: ")?;
                self.library.set_copies(id, copies)
            }
            BookEdit::PublicationDate => {
                let date = self
                    .io
                    .ask_date("Enter publication date, e.g. 2020, 02, 23: ")?;
                self.library
                    .book_mut(id)
                    .map(|b| b.set_publication_date(date))
            }
            BookEdit::Back => return Ok(()),
        };
        self.report(result, "Book updated.")
    }

    fn modify_user(&mut self) -> Result<()> {
        let Some(id) = self.pick_user()? else {
            return Ok(());
        };
        let edit = self.io.ask_with(
            USER_EDIT_MENU,
            "Enter a valid number between 1 and 7 or 99.",
            UserEdit::from_choice,
        )?;

        let result = match edit {
            UserEdit::Firstname => {
                let name = self.io.ask_text("Enter firstname: ")?;
                self.library.user_mut(id).map(|u| u.set_firstname(name))
            }
            UserEdit::Surname => {
                let name = self.io.ask_text("Enter surname: ")?;
                self.library.user_mut(id).map(|u| u.set_surname(name))
            }
            UserEdit::HouseNumber => {
                let number = self.io.ask_u32("Enter house number: ")?;
                self.library.user_mut(id).map(|u| u.set_house_number(number))
            }
            UserEdit::Street => {
                let street = self.io.ask_text("Enter street name: ")?;
                self.library.user_mut(id).map(|u| u.set_street(street))
            }
            UserEdit::Postcode => {
                let postcode = self.io.ask_text("Enter postcode: ")?;
                self.library.user_mut(id).map(|u| u.set_postcode(postcode))
            }
            UserEdit::Email => {
                let email = self.io.ask_email("Enter email: ")?;
                self.library.user_mut(id).map(|u| u.set_email(email))
            }
            UserEdit::DateOfBirth => {
                let date = self
                    .io
                    .ask_date("Enter date of birth, e.g. 2020, 02, 23: ")?;
                self.library.user_mut(id).map(|u| u.set_date_of_birth(date))
            }
            UserEdit::Back => return Ok(()),
        };
        self.report(result, "User updated.")
    }

    /// Print `ok` on success or a readable message for a library error.
    fn report(&mut self, result: imlend_core::Result<()>, ok: &str) -> Result<()> {
        match result {
            Ok(()) => self.io.say(ok),
            Err(err) => {
                tracing::debug!(%err, "operation rejected");
                let message = self.describe_error(&err);
                self.io.say(format!("Error: {message}"))
            }
        }
    }

    fn describe_error(&self, err: &LibraryError) -> String {
        match err {
            LibraryError::Loan(LoanError::NotBorrowed { book, user }) => format!(
                "{} did not borrow \"{}\"",
                self.label(*user),
                self.label(*book)
            ),
            LibraryError::Loan(LoanError::DuplicateLoan { book, user }) => format!(
                "{} already borrowed \"{}\". Let others read!",
                self.label(*user),
                self.label(*book)
            ),
            LibraryError::Loan(LoanError::NoCopiesAvailable(book)) => format!(
                "there are no more available copies of \"{}\"",
                self.label(*book)
            ),
            LibraryError::Catalog(CatalogError::HasActiveLoans(id)) => {
                format!("{} is still on loan", self.label(*id))
            }
            other => other.to_string(),
        }
    }

    /// Title or username for an identifier, falling back to the identifier.
    fn label(&self, id: EntityId) -> String {
        match self.library.resolve(id) {
            Ok(EntityRef::Book(book)) => book.title().to_string(),
            Ok(EntityRef::User(user)) => user.username().to_string(),
            Err(_) => id.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn io(&self) -> &Prompter<R, W> {
        &self.io
    }
}
