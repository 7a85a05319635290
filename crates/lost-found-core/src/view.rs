//! View Models
//!
//! Total, side-effect-free mappings from store data to what each page shows.
//! The UI layer only draws these.

use std::borrow::Cow;

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{Category, Item, ItemId, Kind};

/// Appended to a shortened description
pub const ELLIPSIS: &str = "...";

/// Shown instead of an empty grid
pub const EMPTY_LIST_MESSAGE: &str = "No items found. Try different filters or be the first to post.";

/// Shown where an item has no picture
pub const NO_IMAGE_LABEL: &str = "No Image";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Keep at most `max_chars` characters, marking a cut with [`ELLIPSIS`]
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Badge CSS class for a kind
pub fn kind_badge_class(kind: Kind) -> &'static str {
    match kind {
        Kind::Lost => "badge badge-danger",
        Kind::Found => "badge badge-success",
    }
}

/// `mailto:` link with the item title as subject
pub fn mailto_href(email: &str, title: &str) -> String {
    format!(
        "mailto:{}?subject=Regarding: {}",
        email,
        utf8_percent_encode(title, URI_COMPONENT)
    )
}

/// Badge row shared by cards and the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badges {
    pub kind: Kind,
    pub resolved: bool,
    pub category: Category,
}

impl Badges {
    fn of(item: &Item) -> Self {
        Self {
            kind: item.kind(),
            resolved: item.is_resolved(),
            category: item.category(),
        }
    }

    pub fn kind_class(&self) -> &'static str {
        kind_badge_class(self.kind)
    }
}

/// One card in the list grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub badges: Badges,
    pub title: String,
    pub excerpt: String,
    pub location: String,
    pub date: String,
    /// `None` renders the placeholder
    pub image_src: Option<String>,
}

impl ItemCard {
    pub fn new(item: &Item, preview_len: usize) -> Self {
        Self {
            id: item.id().clone(),
            badges: Badges::of(item),
            title: item.title().to_string(),
            excerpt: truncate_chars(item.description(), preview_len).into_owned(),
            location: item.location().to_string(),
            date: item.date().to_string(),
            image_src: item.image().map(|img| img.src().to_string()),
        }
    }
}

/// Grid contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing matched
    Empty,
    Cards(Vec<ItemCard>),
}

impl ListView {
    pub fn len(&self) -> usize {
        match self {
            ListView::Empty => 0,
            ListView::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result count shown above the grid
pub fn item_count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

pub fn list_view(items: &[&Item], preview_len: usize) -> ListView {
    if items.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(items.iter().map(|item| ItemCard::new(item, preview_len)).collect())
    }
}

/// Kind of control a form field is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    TextArea,
    CategorySelect,
    Date,
    Email,
    ImageFile,
}

/// One row of the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Form control name
    pub name: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    pub placeholder: &'static str,
    pub required: bool,
}

/// Report form rows in display order
pub const FORM_FIELDS: &[FormField] = &[
    FormField { name: "title", label: "Title", input: FieldInput::Text, placeholder: "e.g., Lost black wallet near library", required: true },
    FormField { name: "description", label: "Description", input: FieldInput::TextArea, placeholder: "Describe brand, color, identifiers...", required: true },
    FormField { name: "category", label: "Category", input: FieldInput::CategorySelect, placeholder: "", required: true },
    FormField { name: "location", label: "Location", input: FieldInput::Text, placeholder: "Where was it lost/found?", required: true },
    FormField { name: "date_iso", label: "Date", input: FieldInput::Date, placeholder: "", required: true },
    FormField { name: "contact_name", label: "Contact Name", input: FieldInput::Text, placeholder: "Your name", required: true },
    FormField { name: "contact_email", label: "Contact Email", input: FieldInput::Email, placeholder: "your@email.com", required: true },
    FormField { name: "image", label: "Image (optional)", input: FieldInput::ImageFile, placeholder: "", required: false },
];

/// Scaffold for the report form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub kind: Kind,
    pub heading: &'static str,
    pub fields: &'static [FormField],
    pub categories: [Category; 8],
    pub default_date: NaiveDate,
}

pub fn create_form(kind: Kind, today: NaiveDate) -> CreateForm {
    CreateForm {
        kind,
        heading: match kind {
            Kind::Lost => "Report Lost Item",
            Kind::Found => "Report Found Item",
        },
        fields: FORM_FIELDS,
        categories: Category::ALL,
        default_date: today,
    }
}

/// State of the resolve button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveAction {
    Available,
    AlreadyResolved,
}

impl ResolveAction {
    pub fn label(&self) -> &'static str {
        match self {
            ResolveAction::Available => "Mark as Resolved",
            ResolveAction::AlreadyResolved => "Already Resolved",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ResolveAction::AlreadyResolved)
    }
}

/// Everything the detail page shows about one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ItemId,
    pub badges: Badges,
    pub title: String,
    /// Description split on newlines
    pub description_lines: Vec<String>,
    pub location: String,
    pub date: String,
    pub contact_name: String,
    pub contact_email: String,
    pub mailto: String,
    pub image_src: Option<String>,
    pub resolve: ResolveAction,
}

pub fn detail_view(item: &Item) -> DetailView {
    DetailView {
        id: item.id().clone(),
        badges: Badges::of(item),
        title: item.title().to_string(),
        description_lines: item.description().lines().map(str::to_string).collect(),
        location: item.location().to_string(),
        date: item.date().to_string(),
        contact_name: item.contact_name().to_string(),
        contact_email: item.contact_email().to_string(),
        mailto: mailto_href(item.contact_email(), item.title()),
        image_src: item.image().map(|img| img.src().to_string()),
        resolve: if item.is_resolved() {
            ResolveAction::AlreadyResolved
        } else {
            ResolveAction::Available
        },
    }
}
