//! Record type definitions
//!
//! Fixed fields cover the contact-style core (identity, display name,
//! contact details, owner, list membership, creation timestamp). The
//! property bag holds everything else: arbitrary string keys mapped to
//! scalar JSON values, with the key set free to vary per record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{RecordError, RecordResult};

/// Record lifecycle status, stringified as-is for display and filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Lead,
    Active,
    Customer,
    Archived,
}

impl RecordStatus {
    /// Returns the wire name used in payloads and resolved column values
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Lead => "lead",
            RecordStatus::Active => "active",
            RecordStatus::Customer => "customer",
            RecordStatus::Archived => "archived",
        }
    }
}

/// Reference to the user owning a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    pub first_name: String,
    pub last_name: String,
}

impl OwnerRef {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// First and last name joined with a single space; empty parts are skipped
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// One row of the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque backend identity
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    /// List memberships, in backend order
    #[serde(default)]
    pub lists: Vec<String>,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Open-ended scalar property bag; key set varies per record
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl Record {
    /// Creates a record with the mandatory fields; the rest default empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            status: RecordStatus::default(),
            owner: None,
            lists: Vec::new(),
            created_at,
            properties: HashMap::new(),
        }
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the owning user
    pub fn with_owner(mut self, owner: OwnerRef) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Adds a list membership
    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.lists.push(list.into());
        self
    }

    /// Sets one property bag entry
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Builds a record from a backend JSON body.
    ///
    /// Rejects bodies that fail to deserialize and property bags holding
    /// arrays or objects; the engine only ever stringifies scalars.
    pub fn from_json(body: Value) -> RecordResult<Record> {
        let record: Record = serde_json::from_value(body)?;
        for (key, value) in &record.properties {
            if value.is_array() || value.is_object() {
                return Err(RecordError::NonScalarProperty(key.clone()));
            }
        }
        Ok(record)
    }
}
