use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo reference used when a contact has no photo of its own.
pub const PLACEHOLDER_PHOTO: &str = "images/profile-placeholder.png";

/// Category assigned to contacts created without an explicit type.
pub const DEFAULT_KIND: &str = "friend";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub address: String,
    pub tel: String,
    pub email: String,
    /// Free-form category ("family", "friend", ...). Matched case-insensitively
    /// when filtering; the first-seen casing is what the filter list shows.
    pub kind: String,
    /// `None` means the placeholder applies. A photo equal to the placeholder
    /// is normalized to `None` at every write, so a contact edited while still
    /// showing the default photo stays identical to one that never had a photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Contact {
    pub fn new(
        name: String,
        address: String,
        tel: String,
        email: String,
        kind: String,
        photo: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            address,
            tel,
            email,
            kind,
            photo: normalize_photo(photo),
        }
    }

    /// The photo to render: the contact's own, or the placeholder.
    pub fn photo_ref(&self) -> &str {
        self.photo.as_deref().unwrap_or(PLACEHOLDER_PHOTO)
    }
}

/// Collapses "default photo" into "no photo". Blank and placeholder values
/// both become `None`; anything else is kept as-is.
pub fn normalize_photo(photo: Option<String>) -> Option<String> {
    photo.filter(|p| !p.trim().is_empty() && p != PLACEHOLDER_PHOTO)
}

/// Scraped form input for add and edit.
///
/// `None` means the field was not present in the input; `Some("")` means it
/// was present but left blank. The two paths treat that differently:
/// - add only uses populated fields, everything else takes the model default;
/// - edit applies every present field, and a blank one resets the attribute
///   to its default (blank photo clears back to the placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub kind: Option<String>,
    pub photo: Option<String>,
}

impl ContactForm {
    /// True when no field carries a non-blank value. An add submitted in this
    /// state is the one recognized user error.
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.address,
            &self.tel,
            &self.email,
            &self.kind,
            &self.photo,
        ]
        .iter()
        .all(|f| f.as_deref().map(str::trim).unwrap_or("").is_empty())
    }

    /// Builds a fresh contact from the populated fields, defaults for the rest.
    pub fn into_contact(self) -> Contact {
        Contact::new(
            populated(self.name).unwrap_or_default(),
            populated(self.address).unwrap_or_default(),
            populated(self.tel).unwrap_or_default(),
            populated(self.email).unwrap_or_default(),
            populated(self.kind).unwrap_or_else(|| DEFAULT_KIND.to_string()),
            populated(self.photo),
        )
    }

    /// Applies the form to an existing contact, edit-save semantics: every
    /// present field replaces the attribute, blank resets it to the default.
    /// Fields absent from the form keep their current value.
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.trim().to_string();
        }
        if let Some(address) = &self.address {
            contact.address = address.trim().to_string();
        }
        if let Some(tel) = &self.tel {
            contact.tel = tel.trim().to_string();
        }
        if let Some(email) = &self.email {
            contact.email = email.trim().to_string();
        }
        if let Some(kind) = &self.kind {
            let kind = kind.trim();
            contact.kind = if kind.is_empty() {
                DEFAULT_KIND.to_string()
            } else {
                kind.to_string()
            };
        }
        if let Some(photo) = &self.photo {
            contact.photo = normalize_photo(Some(photo.clone()));
        }
        contact.updated_at = Utc::now();
    }
}

fn populated(field: Option<String>) -> Option<String> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
