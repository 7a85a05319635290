//! Sample postings loaded at start-up

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{BoardError, BoardResult, ImageRef, Item, ItemDraft, ItemId, Kind};

const SEED_JSON: &str = r#"[
  {
    "id": "1",
    "type": "lost",
    "title": "Lost Black Bose Headphones",
    "description": "Lost my Bose QuietComfort 45 headphones in a black case. Most likely left them in the main library on the second floor near the study carrels.",
    "category": "Electronics",
    "location": "Main Library, 2nd Floor",
    "date_iso": "2025-09-01",
    "contact_name": "Jane Doe",
    "contact_email": "jane@example.com",
    "image_path": "https://placehold.co/600x400/0d1320/a3aab8?text=Bose+Headphones",
    "resolved": false,
    "created_at": "2025-09-01T10:00:00Z"
  },
  {
    "id": "2",
    "type": "found",
    "title": "Found a set of keys",
    "description": "Found a set of keys with a red keychain attached. It has three keys: one for a car, and two for a house. Found near the campus coffee shop.",
    "category": "Keys",
    "location": "Campus Coffee Shop",
    "date_iso": "2025-09-02",
    "contact_name": "John Smith",
    "contact_email": "john@example.com",
    "image_path": null,
    "resolved": false,
    "created_at": "2025-09-02T14:30:00Z"
  },
  {
    "id": "3",
    "type": "found",
    "title": "Found a Blue Hydro Flask",
    "description": "A blue 32oz Hydro Flask water bottle was left at the campus gym. It has a few stickers on it, one of a mountain range. It is now at the front desk.",
    "category": "Accessories",
    "location": "Campus Gym",
    "date_iso": "2025-08-30",
    "contact_name": "Gym Staff",
    "contact_email": "gym@example.com",
    "image_path": "https://placehold.co/600x400/0d1320/a3aab8?text=Hydro+Flask",
    "resolved": true,
    "created_at": "2025-08-30T18:00:00Z"
  },
  {
    "id": "4",
    "type": "lost",
    "title": "Missing Green Jansport Backpack",
    "description": "My green Jansport backpack went missing from the student union building. It contains a MacBook Pro and several textbooks. It has my name tag on it.",
    "category": "Bags",
    "location": "Student Union",
    "date_iso": "2025-09-03",
    "contact_name": "Emily White",
    "contact_email": "emily@example.com",
    "image_path": null,
    "resolved": false,
    "created_at": "2025-09-03T12:00:00Z"
  }
]"#;

/// One posting as written in the fixture
#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: ItemId,
    #[serde(rename = "type")]
    kind: Kind,
    title: String,
    description: String,
    category: String,
    location: String,
    date_iso: String,
    contact_name: String,
    contact_email: String,
    image_path: Option<ImageRef>,
    resolved: bool,
    created_at: DateTime<Utc>,
}

impl SeedRecord {
    fn into_item(self) -> BoardResult<Item> {
        let id = self.id.clone();
        let draft = ItemDraft {
            kind: Some(self.kind),
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            date_iso: self.date_iso,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            image: self.image_path,
        };
        let mut item = Item::create(draft, self.id, self.created_at)
            .map_err(|e| BoardError::Seed(format!("item {}: {}", id, e)))?;
        if self.resolved {
            item.mark_resolved();
        }
        Ok(item)
    }
}

/// Parse the built-in fixture
pub fn seed_items() -> BoardResult<Vec<Item>> {
    parse_items(SEED_JSON)
}

fn parse_items(json: &str) -> BoardResult<Vec<Item>> {
    let records: Vec<SeedRecord> = serde_json::from_str(json).map_err(|e| BoardError::Seed(e.to_string()))?;
    records.into_iter().map(SeedRecord::into_item).collect()
}
