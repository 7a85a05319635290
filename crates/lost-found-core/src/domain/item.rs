//! Item Entity
//!
//! A lost or found posting. Items are built once from an [`ItemDraft`] and
//! afterwards only ever change by being marked resolved.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{BoardError, BoardResult};

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random (v4) identifier
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the posting reports a lost or a found item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Lost,
    Found,
}

impl Kind {
    /// Form value
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Lost => "lost",
            Kind::Found => "found",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Lost => "Lost",
            Kind::Found => "Found",
        }
    }
}

impl FromStr for Kind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(Kind::Lost),
            "found" => Ok(Kind::Found),
            _ => Err(BoardError::invalid("kind", s)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of item categories, shared by the creation form and the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Wallet/ID/Documents")]
    WalletIdDocuments,
    Clothing,
    Bags,
    Keys,
    Accessories,
    #[serde(rename = "Books/Stationery")]
    BooksStationery,
    Others,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::WalletIdDocuments,
        Category::Clothing,
        Category::Bags,
        Category::Keys,
        Category::Accessories,
        Category::BooksStationery,
        Category::Others,
    ];

    /// Display label, also used as the form value
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::WalletIdDocuments => "Wallet/ID/Documents",
            Category::Clothing => "Clothing",
            Category::Bags => "Bags",
            Category::Keys => "Keys",
            Category::Accessories => "Accessories",
            Category::BooksStationery => "Books/Stationery",
            Category::Others => "Others",
        }
    }
}

impl FromStr for Category {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BoardError::invalid("category", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an item's picture lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// External URL
    Url(String),
    /// Embedded `data:` URL produced from an uploaded file
    DataUrl(String),
}

impl ImageRef {
    /// Value usable as an `<img src>`
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Url(s) | ImageRef::DataUrl(s) => s,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageRef::DataUrl(_))
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        if value.starts_with("data:") {
            ImageRef::DataUrl(value)
        } else {
            ImageRef::Url(value)
        }
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        match value {
            ImageRef::Url(s) | ImageRef::DataUrl(s) => s,
        }
    }
}

/// Raw values from the report form, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub kind: Option<Kind>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date_iso: String,
    pub contact_name: String,
    pub contact_email: String,
    pub image: Option<ImageRef>,
}

impl ItemDraft {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Store a form control's value by control name. Unknown names are
    /// ignored and return `false`.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "category" => &mut self.category,
            "location" => &mut self.location,
            "date_iso" => &mut self.date_iso,
            "contact_name" => &mut self.contact_name,
            "contact_email" => &mut self.contact_email,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// A lost or found posting. Built only through [`Item::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    #[serde(rename = "type")]
    kind: Kind,
    title: String,
    description: String,
    category: Category,
    location: String,
    date_iso: NaiveDate,
    contact_name: String,
    contact_email: String,
    image_path: Option<ImageRef>,
    resolved: bool,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Validate a draft and build an open item from it.
    ///
    /// Text fields are trimmed; every field except the image is required.
    pub fn create(draft: ItemDraft, id: ItemId, created_at: DateTime<Utc>) -> BoardResult<Item> {
        let kind = draft.kind.ok_or(BoardError::MissingField("type"))?;
        let title = required("title", &draft.title)?;
        let description = required("description", &draft.description)?;
        let category = required("category", &draft.category)?.parse::<Category>()?;
        let location = required("location", &draft.location)?;
        let date_raw = required("date", &draft.date_iso)?;
        let date_iso = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
            .map_err(|_| BoardError::invalid("date", date_raw.as_str()))?;
        let contact_name = required("contact name", &draft.contact_name)?;
        let contact_email = required("contact email", &draft.contact_email)?;
        if !looks_like_email(&contact_email) {
            return Err(BoardError::invalid("contact email", contact_email));
        }
        let image_path = draft.image.filter(|img| !img.src().trim().is_empty());

        Ok(Item {
            id,
            kind,
            title,
            description,
            category,
            location,
            date_iso,
            contact_name,
            contact_email,
            image_path,
            resolved: false,
            created_at,
        })
    }

    /// Re-check the creation invariants
    pub fn validate(&self) -> BoardResult<()> {
        for (field, value) in [
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("location", self.location.as_str()),
            ("contact name", self.contact_name.as_str()),
            ("contact email", self.contact_email.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(BoardError::MissingField(field));
            }
        }
        if !looks_like_email(&self.contact_email) {
            return Err(BoardError::invalid("contact email", self.contact_email.as_str()));
        }
        Ok(())
    }

    /// Attach an uploaded image. Only items not yet in a store are owned by
    /// value, so stored items stay immutable.
    pub fn with_image(mut self, image: ImageRef) -> Item {
        self.image_path = Some(image);
        self
    }

    /// One-way transition; returns whether the state changed
    pub fn mark_resolved(&mut self) -> bool {
        let changed = !self.resolved;
        self.resolved = true;
        changed
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date_iso
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image_path.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn required(field: &'static str, value: &str) -> BoardResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(BoardError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
