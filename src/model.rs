// Data model for a Certificate of Authority (COA) record.
//
// One record describes one artwork. Multi-valued fields are kept as
// ordered lists with a companion "primary" index. Every `set_primary_*`
// method follows the same rule: make sure the list has at least one
// element, then overwrite the element the primary index points at.

use crate::address::Address;
use crate::error::{CoaError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Roles a person can hold in the making of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonRole {
    #[default]
    Creator,
    Collaborator,
    Curator,
    Mentor,
    Assistant,
    Engineer,
    Gallerist,
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PersonRole::Creator => "Creator",
            PersonRole::Collaborator => "Collaborator",
            PersonRole::Curator => "Curator",
            PersonRole::Mentor => "Mentor",
            PersonRole::Assistant => "Assistant",
            PersonRole::Engineer => "Engineer",
            PersonRole::Gallerist => "Gallerist",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletType {
    #[default]
    Eth,
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletType::Eth => f.write_str("ETH"),
        }
    }
}

/// A crypto wallet with a human label ("primary", "cold storage", ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wallet {
    pub title: String,
    pub value: String,
    pub wallet_type: WalletType,
}

impl Wallet {
    fn titled(title: &str) -> Self {
        Wallet {
            title: title.to_string(),
            ..Wallet::default()
        }
    }
}

/// A postal address with a human label (office, mailing, gallery, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Addr {
    pub title: String,
    pub data: Address,
}

/// A timestamp with a human label (created, mastered, displayed, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Descriptive information about the artwork itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    pub process: String,
    pub media: String,
    pub genre: String,
    pub material: String,
    pub workflow: String,
    pub dimensions: String,
    pub format: String,
    pub notes: Vec<String>,
}

/// Reserved for signing / minting data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub roles: Vec<PersonRole>,
    pub primary_role_index: usize,
    pub wallets: Vec<Wallet>,
    pub primary_wallet_index: usize,
    pub websites: Vec<String>,
    pub primary_website_index: usize,
    pub postal_addresses: Vec<Addr>,
    pub primary_address_index: usize,
}

/// Overwrites the primary slot of `items`, creating it if the list is empty.
/// An index that no longer points into the list is reset to 0.
fn set_primary<T>(items: &mut Vec<T>, index: &mut usize, value: T) {
    if items.is_empty() {
        items.push(value);
        *index = 0;
        return;
    }
    if *index >= items.len() {
        *index = 0;
    }
    items[*index] = value;
}

impl Person {
    pub fn set_primary_role(&mut self, role: PersonRole) {
        set_primary(&mut self.roles, &mut self.primary_role_index, role);
    }

    pub fn set_primary_website(&mut self, website: &str) {
        set_primary(
            &mut self.websites,
            &mut self.primary_website_index,
            website.to_string(),
        );
    }

    /// Stores an ETH address as the primary wallet.
    pub fn set_primary_wallet(&mut self, value: &str) {
        let wallet = Wallet {
            title: "primary".to_string(),
            value: value.to_string(),
            wallet_type: WalletType::Eth,
        };
        set_primary(&mut self.wallets, &mut self.primary_wallet_index, wallet);
    }

    pub fn set_primary_address(&mut self, address: Address) {
        let addr = Addr {
            title: "primary".to_string(),
            data: address,
        };
        set_primary(
            &mut self.postal_addresses,
            &mut self.primary_address_index,
            addr,
        );
    }

    pub fn primary_role(&self) -> Option<&PersonRole> {
        self.roles.get(self.primary_role_index)
    }

    pub fn primary_wallet(&self) -> Option<&Wallet> {
        self.wallets.get(self.primary_wallet_index)
    }

    pub fn primary_website(&self) -> Option<&str> {
        self.websites
            .get(self.primary_website_index)
            .map(String::as_str)
    }

    pub fn primary_address(&self) -> Option<&Addr> {
        self.postal_addresses.get(self.primary_address_index)
    }

    /// Checks length (3..=254 bytes) and shape of the email address.
    pub fn validate_email(&self) -> Result<()> {
        validate_email(&self.email)
    }
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.len() < 3 {
        return Err(CoaError::Validation("Email address too short".into()));
    }
    if email.len() > 254 {
        return Err(CoaError::Validation("Email address too long".into()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(CoaError::Validation("Invalid email address format".into()));
    }
    Ok(())
}

/// One COA dataset. Only a single person (the creator) is populated today.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateRecord {
    pub work_title: String,
    pub people: Vec<Person>,
    pub primary_person_index: usize,
    pub dates: Vec<DateEntry>,
    pub metadata: Metadata,
    pub transaction: Transaction,
}

impl CertificateRecord {
    /// Fresh record with one creator, an empty primary website and an
    /// empty wallet slot titled "primary".
    pub fn new() -> Self {
        let mut creator = Person::default();
        creator.set_primary_role(PersonRole::Creator);
        creator.set_primary_website("");
        creator.wallets = vec![Wallet::titled("primary")];
        creator.primary_wallet_index = 0;

        CertificateRecord {
            people: vec![creator],
            primary_person_index: 0,
            ..CertificateRecord::default()
        }
    }

    pub fn primary_person(&self) -> Option<&Person> {
        self.people.get(self.primary_person_index)
    }

    /// Returns the primary person, seeding an empty one if the list is empty.
    pub fn primary_person_mut(&mut self) -> &mut Person {
        if self.primary_person_index >= self.people.len() {
            if self.people.is_empty() {
                self.people.push(Person::default());
            }
            self.primary_person_index = 0;
        }
        &mut self.people[self.primary_person_index]
    }

    pub fn add_date(&mut self, title: &str, date: DateTime<Utc>) {
        self.dates.push(DateEntry {
            title: title.to_string(),
            date,
        });
    }
}
