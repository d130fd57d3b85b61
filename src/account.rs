//! Account records and the form input they are assembled from.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::parse_labels;

/// Where an account authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordType {
    /// Directory-backed account; the password lives elsewhere.
    #[serde(rename = "LDAP")]
    Ldap,
    /// Locally managed account with its own password.
    #[default]
    Local,
}

impl RecordType {
    /// Name used in storage and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ldap => "LDAP",
            Self::Local => "Local",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ldap") {
            Ok(Self::Ldap)
        } else if s.eq_ignore_ascii_case("local") {
            Ok(Self::Local)
        } else {
            Err(format!("Unknown record type '{}' (expected LDAP or Local)", s))
        }
    }
}

/// A tag attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A stored credential record.
///
/// `password` is only meaningful for [`RecordType::Local`]; LDAP records
/// conventionally carry `None`, though nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub label: Vec<Label>,
    pub record_type: RecordType,
    pub login: String,
    pub password: Option<String>,
}

impl Account {
    /// Label texts joined the way they are typed into a form.
    pub fn label_string(&self) -> String {
        self.label
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Unsplit form input used to assemble an [`Account`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInput {
    /// Labels as a single `;`-delimited string.
    pub label: String,
    pub record_type: RecordType,
    pub login: String,
    pub password: String,
}

impl AccountInput {
    /// Builds the record to hand to the store.
    ///
    /// LDAP records drop the password.
    pub fn into_account(self, id: impl Into<String>) -> Account {
        let password = match self.record_type {
            RecordType::Local => Some(self.password),
            RecordType::Ldap => None,
        };

        Account {
            id: id.into(),
            label: parse_labels(&self.label),
            record_type: self.record_type,
            login: self.login,
            password,
        }
    }

    /// Prefills a form from an existing record.
    pub fn from_account(account: &Account) -> Self {
        Self {
            label: account.label_string(),
            record_type: account.record_type,
            login: account.login.clone(),
            password: account.password.clone().unwrap_or_default(),
        }
    }
}

/// Generates a fresh random account id.
pub fn generate_id() -> String {
    let n: u128 = rand::rng().random();
    format!("{:032x}", n)
}
