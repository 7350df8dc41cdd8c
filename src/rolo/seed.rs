//! Startup seeding. The directory starts from the built-in demo contacts or
//! from a JSON array of seed records; either way the store is populated once
//! and never written back.

use crate::error::Result;
use crate::model::{normalize_photo, Contact};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One record in a contacts seed file. Matches the shape of the directory's
/// own records minus the generated fields; `type` is accepted for the
/// category, with `kind` as an alias.
#[derive(Debug, Deserialize)]
pub struct SeedContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", alias = "kind", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub photo: Option<String>,
}

fn default_kind() -> String {
    crate::model::DEFAULT_KIND.to_string()
}

impl From<SeedContact> for Contact {
    fn from(seed: SeedContact) -> Self {
        Contact::new(
            seed.name,
            seed.address,
            seed.tel,
            seed.email,
            seed.kind,
            normalize_photo(seed.photo),
        )
    }
}

/// Reads a seed file: a JSON array of [`SeedContact`] records.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<Vec<Contact>> {
    let content = fs::read_to_string(path)?;
    let seeds: Vec<SeedContact> = serde_json::from_str(&content)?;
    Ok(seeds.into_iter().map(Contact::from).collect())
}

/// The demo directory: a small hand-maintained list.
pub fn demo_contacts() -> Vec<Contact> {
    let demo = [
        ("Contact 1", "1, a street, a town, a city, AB12 3CD", "family"),
        ("Contact 2", "2, a street, a town, a city, AB12 3CD", "family"),
        ("Contact 3", "3, a street, a town, a city, AB12 3CD", "friend"),
        (
            "Contact 4",
            "4, a street, a town, a city, AB12 3CD",
            "colleague",
        ),
        ("Contact 5", "5, a street, a town, a city, AB12 3CD", "family"),
        (
            "Contact 6",
            "6, a street, a town, a city, AB12 3CD",
            "colleague",
        ),
        ("Contact 7", "7, a street, a town, a city, AB12 3CD", "friend"),
        ("Contact 8", "8, a street, a town, a city, AB12 3CD", "family"),
    ];

    demo.iter()
        .map(|(name, address, kind)| {
            Contact::new(
                name.to_string(),
                address.to_string(),
                "0123456789".to_string(),
                "anemail@me.com".to_string(),
                kind.to_string(),
                None,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PLACEHOLDER_PHOTO;

    #[test]
    fn demo_directory_shape() {
        let contacts = demo_contacts();
        assert_eq!(contacts.len(), 8);
        assert_eq!(
            crate::directory::kinds(&contacts),
            vec!["family", "friend", "colleague"]
        );
    }

    #[test]
    fn seed_file_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("contacts.json");
        fs::write(
            &path,
            r#"[
                { "name": "Ada", "type": "colleague", "tel": "555" },
                { "name": "Grace", "kind": "friend", "photo": "grace.png" }
            ]"#,
        )
        .unwrap();

        let contacts = load_contacts(&path).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].kind, "colleague");
        assert_eq!(contacts[0].email, "");
        assert_eq!(contacts[1].photo, Some("grace.png".to_string()));
    }

    #[test]
    fn placeholder_photo_in_seed_is_normalized_away() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("contacts.json");
        fs::write(
            &path,
            format!(r#"[ {{ "name": "Ada", "type": "friend", "photo": "{}" }} ]"#, PLACEHOLDER_PHOTO),
        )
        .unwrap();

        let contacts = load_contacts(&path).unwrap();
        assert_eq!(contacts[0].photo, None);
    }
}
