//! Filter/Sort Engine
//!
//! The only filtering and ordering logic of the board. Pure and deterministic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{BoardError, BoardResult, Category, Item, Kind};

/// Kind filter (`all` | `lost` | `found`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KindFilter {
    #[default]
    All,
    Only(Kind),
}

/// Category filter (`all` | one category label)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Resolved-state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Not resolved
    #[default]
    Open,
    Resolved,
    All,
}

/// Option values and labels for the kind select
pub const KIND_OPTIONS: [(KindFilter, &str); 3] = [
    (KindFilter::All, "All Types"),
    (KindFilter::Only(Kind::Lost), "Lost"),
    (KindFilter::Only(Kind::Found), "Found"),
];

/// Option values and labels for the status select
pub const STATUS_OPTIONS: [(StatusFilter, &str); 3] = [
    (StatusFilter::Open, "Open"),
    (StatusFilter::Resolved, "Resolved"),
    (StatusFilter::All, "All Statuses"),
];

impl KindFilter {
    pub fn as_value(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind.as_str(),
        }
    }

    fn accepts(&self, kind: Kind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for KindFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(KindFilter::All)
        } else {
            s.parse().map(KindFilter::Only)
        }
    }
}

impl TryFrom<String> for KindFilter {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KindFilter> for String {
    fn from(value: KindFilter) -> Self {
        value.as_value().to_string()
    }
}

impl CategoryFilter {
    pub fn as_value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_value().to_string()
    }
}

impl StatusFilter {
    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::Open => "open",
            StatusFilter::Resolved => "resolved",
            StatusFilter::All => "all",
        }
    }

    fn accepts(&self, resolved: bool) -> bool {
        match self {
            StatusFilter::Open => !resolved,
            StatusFilter::Resolved => resolved,
            StatusFilter::All => true,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(StatusFilter::Open),
            "resolved" => Ok(StatusFilter::Resolved),
            "all" => Ok(StatusFilter::All),
            _ => Err(BoardError::invalid("status", s)),
        }
    }
}

/// Combined filter criteria; every active predicate must hold
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Free-text query, matched case-insensitively against title, description or location
    pub query: String,
    pub kind: KindFilter,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl Criteria {
    /// Build criteria from the filter form's raw values
    pub fn from_form(query: &str, kind: &str, category: &str, status: &str) -> BoardResult<Self> {
        Ok(Self {
            query: query.to_string(),
            kind: kind.parse()?,
            category: category.parse()?,
            status: status.parse()?,
        })
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.kind.accepts(item.kind())
            && self.category.accepts(item.category())
            && self.status.accepts(item.is_resolved())
            && matches_query(&self.query, item)
    }
}

fn matches_query(query: &str, item: &Item) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [item.title(), item.description(), item.location()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Items matching `criteria`, newest first. Items created at the same
/// instant keep their insertion order.
pub fn filter_and_sort<'a>(items: &'a [Item], criteria: &Criteria) -> Vec<&'a Item> {
    let mut matched: Vec<&Item> = items.iter().filter(|item| criteria.matches(item)).collect();
    matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemDraft, ItemId};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()
    }

    fn make_item(id: &str, kind: Kind, category: Category, title: &str, minutes: i64, resolved: bool) -> Item {
        let draft = ItemDraft {
            kind: Some(kind),
            title: title.to_string(),
            description: format!("{} description", title),
            category: category.label().to_string(),
            location: "Student Union".to_string(),
            date_iso: "2025-09-01".to_string(),
            contact_name: "Jane Doe".to_string(),
            contact_email: "jane@example.com".to_string(),
            image: None,
        };
        let mut item = Item::create(draft, ItemId::from(id), base_time() + Duration::minutes(minutes)).unwrap();
        if resolved {
            item.mark_resolved();
        }
        item
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_default_criteria_hide_resolved() {
        let items = vec![
            make_item("a", Kind::Lost, Category::Bags, "Backpack", 1, false),
            make_item("b", Kind::Found, Category::Keys, "Keys", 2, true),
        ];
        let result = filter_and_sort(&items, &Criteria::default());
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_query_matches_title_description_or_location() {
        let items = vec![
            make_item("a", Kind::Lost, Category::Bags, "Green Backpack", 1, false),
            make_item("b", Kind::Found, Category::Keys, "Red keychain", 2, false),
        ];
        let by_title = Criteria { query: "  BACKPACK ".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_and_sort(&items, &by_title)), vec!["a"]);

        let by_location = Criteria { query: "union".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_and_sort(&items, &by_location)), vec!["b", "a"]);

        let by_description = Criteria { query: "keychain desc".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_and_sort(&items, &by_description)), vec!["b"]);

        let whitespace = Criteria { query: "   ".to_string(), ..Default::default() };
        assert_eq!(filter_and_sort(&items, &whitespace).len(), 2);
    }

    #[test]
    fn test_multi_word_query_is_one_substring() {
        let items = vec![make_item("a", Kind::Lost, Category::Bags, "Green Jansport Backpack", 1, false)];
        let contiguous = Criteria { query: "jansport backpack".to_string(), ..Default::default() };
        let scattered = Criteria { query: "green backpack".to_string(), ..Default::default() };
        assert_eq!(filter_and_sort(&items, &contiguous).len(), 1);
        assert!(filter_and_sort(&items, &scattered).is_empty());
    }

    #[test]
    fn test_kind_category_status_combine_with_and() {
        let items = vec![
            make_item("a", Kind::Lost, Category::Keys, "A", 1, false),
            make_item("b", Kind::Found, Category::Keys, "B", 2, false),
            make_item("c", Kind::Found, Category::Keys, "C", 3, true),
            make_item("d", Kind::Found, Category::Bags, "D", 4, false),
        ];
        let criteria = Criteria {
            kind: KindFilter::Only(Kind::Found),
            category: CategoryFilter::Only(Category::Keys),
            status: StatusFilter::All,
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&items, &criteria)), vec!["c", "b"]);

        let resolved_only = Criteria { status: StatusFilter::Resolved, ..Default::default() };
        assert_eq!(ids(&filter_and_sort(&items, &resolved_only)), vec!["c"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let items = vec![
            make_item("first", Kind::Lost, Category::Others, "X", 5, false),
            make_item("second", Kind::Lost, Category::Others, "Y", 5, false),
            make_item("newest", Kind::Lost, Category::Others, "Z", 9, false),
        ];
        assert_eq!(
            ids(&filter_and_sort(&items, &Criteria::default())),
            vec!["newest", "first", "second"]
        );
    }

    #[test]
    fn test_criteria_from_form() {
        let criteria = Criteria::from_form("bose", "lost", "Electronics", "all").unwrap();
        assert_eq!(criteria.kind, KindFilter::Only(Kind::Lost));
        assert_eq!(criteria.category, CategoryFilter::Only(Category::Electronics));
        assert_eq!(criteria.status, StatusFilter::All);

        let defaults = Criteria::from_form("", "all", "all", "open").unwrap();
        assert_eq!(defaults, Criteria::default());

        assert!(Criteria::from_form("", "stolen", "all", "open").is_err());
    }

    #[test]
    fn test_option_values_round_trip() {
        for (filter, _) in KIND_OPTIONS {
            assert_eq!(filter.as_value().parse::<KindFilter>().unwrap(), filter);
        }
        for (filter, _) in STATUS_OPTIONS {
            assert_eq!(filter.as_value().parse::<StatusFilter>().unwrap(), filter);
        }
    }

    /// Raw fields of one generated posting
    #[derive(Debug, Clone)]
    struct Posting {
        kind: Kind,
        category: Category,
        title: String,
        description: String,
        location: String,
        minutes: i64,
        resolved: bool,
    }

    impl Posting {
        fn to_item(&self, id: usize) -> Item {
            let draft = ItemDraft {
                kind: Some(self.kind),
                title: self.title.clone(),
                description: self.description.clone(),
                category: self.category.label().to_string(),
                location: self.location.clone(),
                date_iso: "2025-09-01".to_string(),
                contact_name: "Jane Doe".to_string(),
                contact_email: "jane@example.com".to_string(),
                image: None,
            };
            let created_at = base_time() + Duration::minutes(self.minutes);
            let mut item = Item::create(draft, ItemId::from(id.to_string()), created_at).unwrap();
            if self.resolved {
                item.mark_resolved();
            }
            item
        }

        fn wanted_by(&self, criteria: &Criteria) -> bool {
            let kind_ok = match criteria.kind {
                KindFilter::All => true,
                KindFilter::Only(kind) => self.kind == kind,
            };
            let category_ok = match criteria.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => self.category == category,
            };
            let status_ok = match criteria.status {
                StatusFilter::Open => !self.resolved,
                StatusFilter::Resolved => self.resolved,
                StatusFilter::All => true,
            };
            let needle = criteria.query.trim().to_lowercase();
            let text_ok = needle.is_empty()
                || [&self.title, &self.description, &self.location]
                    .iter()
                    .any(|field| field.trim().to_lowercase().contains(&needle));
            kind_ok && category_ok && status_ok && text_ok
        }
    }

    /// Ids of the postings `criteria` should keep, newest first, ties in input order
    fn expected_ids(postings: &[Posting], criteria: &Criteria) -> Vec<String> {
        let mut kept: Vec<(usize, &Posting)> =
            postings.iter().enumerate().filter(|(_, p)| p.wanted_by(criteria)).collect();
        kept.sort_by_key(|(_, p)| std::cmp::Reverse(p.minutes));
        kept.into_iter().map(|(i, _)| i.to_string()).collect()
    }

    fn arb_kind() -> impl Strategy<Value = Kind> {
        prop_oneof![Just(Kind::Lost), Just(Kind::Found)]
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
    }

    fn arb_text() -> impl Strategy<Value = String> {
        "[a-dA-D][a-dA-D ]{0,6}"
    }

    fn arb_posting() -> impl Strategy<Value = Posting> {
        (arb_kind(), arb_category(), arb_text(), arb_text(), arb_text(), 0i64..6, any::<bool>()).prop_map(
            |(kind, category, title, description, location, minutes, resolved)| Posting {
                kind,
                category,
                title,
                description,
                location,
                minutes,
                resolved,
            },
        )
    }

    fn arb_criteria() -> impl Strategy<Value = Criteria> {
        (
            "[a-dA-D ]{0,3}",
            prop_oneof![Just(KindFilter::All), arb_kind().prop_map(KindFilter::Only)],
            prop_oneof![Just(CategoryFilter::All), arb_category().prop_map(CategoryFilter::Only)],
            prop_oneof![Just(StatusFilter::Open), Just(StatusFilter::Resolved), Just(StatusFilter::All)],
        )
            .prop_map(|(query, kind, category, status)| Criteria { query, kind, category, status })
    }

    proptest! {
        #[test]
        fn prop_keeps_exactly_the_wanted_items_newest_first(
            postings in prop::collection::vec(arb_posting(), 0..20),
            criteria in arb_criteria(),
        ) {
            let items: Vec<Item> = postings.iter().enumerate().map(|(i, p)| p.to_item(i)).collect();

            let result = filter_and_sort(&items, &criteria);

            prop_assert_eq!(ids(&result), expected_ids(&postings, &criteria));
        }
    }
}
