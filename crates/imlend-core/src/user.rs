//! User domain model

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::identity::{Entity, EntityId};

/// Postal address of a library user
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Address {
    pub house_number: u32,
    pub street: String,
    pub postcode: String,
}

impl Address {
    pub fn new(house_number: u32, street: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            house_number,
            street: street.into(),
            postcode: postcode.into(),
        }
    }
}

/// A registered library user.
///
/// Values are expected to be validated by the caller; the email in
/// particular should already satisfy [`is_valid_email`](crate::is_valid_email).
#[derive(Clone, Debug, Serialize)]
pub struct User {
    id: EntityId,
    username: String,
    firstname: String,
    surname: String,
    address: Address,
    email: String,
    date_of_birth: NaiveDate,
}

impl User {
    /// Create a new user
    pub fn new(
        username: impl Into<String>,
        firstname: impl Into<String>,
        surname: impl Into<String>,
        address: Address,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: EntityId::new(),
            username: username.into(),
            firstname: firstname.into(),
            surname: surname.into(),
            address,
            email: email.into(),
            date_of_birth,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn set_firstname(&mut self, firstname: impl Into<String>) {
        self.firstname = firstname.into();
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    /// "firstname surname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn set_house_number(&mut self, number: u32) {
        self.address.house_number = number;
    }

    pub fn set_street(&mut self, street: impl Into<String>) {
        self.address.street = street.into();
    }

    pub fn set_postcode(&mut self, postcode: impl Into<String>) {
        self.address.postcode = postcode.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.date_of_birth = date;
    }
}

impl Entity for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "Firstname: {}", self.firstname)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "House number: {}", self.address.house_number)?;
        writeln!(f, "Streetname: {}", self.address.street)?;
        writeln!(f, "Post code: {}", self.address.postcode)?;
        writeln!(f, "E-mail: {}", self.email)?;
        write!(f, "Date of Birth: {}", self.date_of_birth)
    }
}
