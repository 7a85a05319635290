//! Page Controller
//!
//! Owns the store, the current criteria and the active page, and applies
//! user intents to them. Every store mutation goes through here.
//!
//! Submissions with an uploaded image are two-phase: [`Controller::begin_submit`]
//! validates and parks the item under a [`SubmitTicket`] while the file is read,
//! [`Controller::complete_submit`] inserts it. Navigating away or starting another
//! submission cancels the parked one; a late completion for it is dropped.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::BoardConfig;
use crate::domain::{BoardError, BoardResult, ImageRef, Item, ItemDraft, ItemId, Kind};
use crate::filter::Criteria;
use crate::store::ItemStore;
use crate::view::{create_form, detail_view, list_view, CreateForm, DetailView, ListView};

/// Active page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    List,
    Create(Kind),
    Detail(ItemId),
}

/// Navigation intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Brand link
    Home,
    /// "Report Lost" / "Report Found" buttons
    Report(Kind),
    /// Item card selected
    Open(ItemId),
    /// "Back to List" on the detail page
    Back,
    /// "Cancel" on the report form
    Cancel,
}

/// Handle for a submission waiting on its image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSubmission {
    ticket: SubmitTicket,
    item: Item,
}

/// Rendered page contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List { criteria: Criteria, view: ListView },
    Create(CreateForm),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    config: BoardConfig,
    store: ItemStore,
    criteria: Criteria,
    page: Page,
    notice: Option<String>,
    pending: Option<PendingSubmission>,
    next_ticket: u64,
    visits: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ItemStore::new(), BoardConfig::default())
    }
}

impl Controller {
    pub fn new(store: ItemStore, config: BoardConfig) -> Self {
        Self {
            criteria: config.default_criteria.clone(),
            config,
            store,
            page: Page::List,
            notice: None,
            pending: None,
            next_ticket: 0,
            visits: 0,
        }
    }

    /// Controller over a fresh store, seeded when the config asks for it
    pub fn from_config(config: BoardConfig) -> BoardResult<Self> {
        let store = if config.seed { ItemStore::seeded()? } else { ItemStore::new() };
        log::info!("[BOARD] Starting with {} items", store.len());
        Ok(Self::new(store, config))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Last submission error, cleared on navigation
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Bumped on every page entry, including re-entering the current page,
    /// so the UI redraws the page from scratch each time
    pub fn visits(&self) -> u64 {
        self.visits
    }

    pub fn navigate(&mut self, nav: Nav) {
        self.cancel_pending();
        self.notice = None;
        let page = match nav {
            Nav::Home | Nav::Back | Nav::Cancel => Page::List,
            Nav::Report(kind) => Page::Create(kind),
            Nav::Open(id) => Page::Detail(id),
        };
        self.show(page);
    }

    /// Replace the criteria; the list re-renders from them
    pub fn apply_filter(&mut self, criteria: Criteria) {
        log::debug!("[BOARD] Filter {:?}", criteria);
        self.criteria = criteria;
    }

    /// Create an item without an uploaded file and show it
    pub fn submit(&mut self, draft: ItemDraft, now: DateTime<Utc>) -> BoardResult<ItemId> {
        self.cancel_pending();
        let item = self.build(draft, now)?;
        self.insert(item)
    }

    /// Validate a draft whose image is still being read and park it
    pub fn begin_submit(&mut self, draft: ItemDraft, now: DateTime<Utc>) -> BoardResult<SubmitTicket> {
        self.cancel_pending();
        let item = self.build(draft, now)?;
        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        log::debug!("[BOARD] Waiting on image for item {}", item.id());
        self.pending = Some(PendingSubmission { ticket, item });
        Ok(ticket)
    }

    /// Attach the read image and insert the parked item. Returns `None` when
    /// the submission was cancelled in the meantime.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, image: ImageRef) -> Option<ItemId> {
        let pending = self.take_pending(ticket)?;
        match self.insert(pending.item.with_image(image)) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[BOARD] Dropping submission: {}", e);
                None
            }
        }
    }

    /// Abandon a parked submission because its image could not be read
    pub fn fail_submit(&mut self, ticket: SubmitTicket, error: BoardError) {
        if self.take_pending(ticket).is_some() {
            log::warn!("[BOARD] Submission failed: {}", error);
            self.notice = Some(error.to_string());
        }
    }

    /// Mark an item resolved and stay on (or fall back from) its detail page
    pub fn resolve(&mut self, id: &ItemId) -> bool {
        let changed = self.store.mark_resolved(id);
        self.show(Page::Detail(id.clone()));
        changed
    }

    /// Render the active page. [`Controller::show`] never leaves a detail page
    /// for an unknown id active; should one appear anyway it renders the list.
    pub fn screen(&self, today: NaiveDate) -> Screen {
        match &self.page {
            Page::List => self.list_screen(),
            Page::Create(kind) => Screen::Create(create_form(*kind, today)),
            Page::Detail(id) => match self.store.find_by_id(id) {
                Some(item) => Screen::Detail(detail_view(item)),
                None => self.list_screen(),
            },
        }
    }

    fn list_screen(&self) -> Screen {
        let items = self.store.view(&self.criteria);
        Screen::List {
            criteria: self.criteria.clone(),
            view: list_view(&items, self.config.preview_len),
        }
    }

    fn build(&mut self, draft: ItemDraft, now: DateTime<Utc>) -> BoardResult<Item> {
        let mut id = ItemId::generate();
        while self.store.contains(&id) {
            id = ItemId::generate();
        }
        Item::create(draft, id, now).inspect_err(|e| {
            log::info!("[BOARD] Rejected submission: {}", e);
            self.notice = Some(e.to_string());
        })
    }

    fn insert(&mut self, item: Item) -> BoardResult<ItemId> {
        let id = item.id().clone();
        self.store.add(item)?;
        self.notice = None;
        self.show(Page::Detail(id.clone()));
        Ok(id)
    }

    /// Enter a page. A detail page for an unknown id becomes the list.
    fn show(&mut self, page: Page) {
        self.page = match page {
            Page::Detail(id) if !self.store.contains(&id) => {
                log::warn!("[BOARD] No item {}, showing list", id);
                Page::List
            }
            page => page,
        };
        self.visits += 1;
        log::debug!("[BOARD] Page is now {:?}", self.page);
    }

    fn take_pending(&mut self, ticket: SubmitTicket) -> Option<PendingSubmission> {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => Some(pending),
            other => {
                log::debug!("[BOARD] Ignoring stale submission {:?}", ticket);
                self.pending = other;
                None
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::info!("[BOARD] Cancelled pending submission of item {}", pending.item.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::KindFilter;
    use crate::view::ResolveAction;
    use chrono::TimeZone;

    fn controller() -> Controller {
        Controller::from_config(BoardConfig::default()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 5, 8, 0, 0).unwrap()
    }

    fn keys_draft() -> ItemDraft {
        ItemDraft {
            kind: Some(Kind::Found),
            title: "Found car keys".to_string(),
            description: "Toyota fob on a blue lanyard.".to_string(),
            category: "Keys".to_string(),
            location: "Parking Lot B".to_string(),
            date_iso: "2025-09-05".to_string(),
            contact_name: "Sam Lee".to_string(),
            contact_email: "sam@example.com".to_string(),
            image: None,
        }
    }

    fn list_ids(screen: &Screen) -> Vec<String> {
        match screen {
            Screen::List { view: ListView::Cards(cards), .. } => cards.iter().map(|c| c.id.to_string()).collect(),
            Screen::List { view: ListView::Empty, .. } => Vec::new(),
            other => panic!("expected list screen, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.page(), &Page::List);
        assert_eq!(c.criteria(), &Criteria::default());
        assert_eq!(list_ids(&c.screen(today())), vec!["4", "2", "1"]);
    }

    #[test]
    fn test_unseeded_board_shows_empty_placeholder() {
        let config = BoardConfig { seed: false, ..Default::default() };
        let c = Controller::from_config(config).unwrap();
        assert!(matches!(c.screen(today()), Screen::List { view: ListView::Empty, .. }));
    }

    #[test]
    fn test_report_then_cancel() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Lost));
        assert_eq!(c.page(), &Page::Create(Kind::Lost));
        match c.screen(today()) {
            Screen::Create(form) => {
                assert_eq!(form.heading, "Report Lost Item");
                assert_eq!(form.default_date, today());
            }
            other => panic!("expected form, got {:?}", other),
        }
        c.navigate(Nav::Cancel);
        assert_eq!(c.page(), &Page::List);
    }

    #[test]
    fn test_open_card_then_back() {
        let mut c = controller();
        c.navigate(Nav::Open(ItemId::from("2")));
        assert_eq!(c.page(), &Page::Detail(ItemId::from("2")));
        c.navigate(Nav::Back);
        assert_eq!(c.page(), &Page::List);

        c.navigate(Nav::Open(ItemId::from("1")));
        c.navigate(Nav::Home);
        assert_eq!(c.page(), &Page::List);
    }

    #[test]
    fn test_open_unknown_item_falls_back_to_list() {
        let mut c = controller();
        c.navigate(Nav::Open(ItemId::from("nope")));
        assert_eq!(c.page(), &Page::List);
    }

    #[test]
    fn test_submit_shows_new_item() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Found));
        let id = c.submit(keys_draft(), now()).unwrap();
        assert_eq!(c.page(), &Page::Detail(id.clone()));
        assert_eq!(c.store().len(), 5);

        let stored = c.store().find_by_id(&id).unwrap();
        assert_eq!(stored.title(), "Found car keys");
        assert_eq!(stored.created_at(), now());
        assert!(!stored.is_resolved());

        c.navigate(Nav::Home);
        assert_eq!(list_ids(&c.screen(today()))[0], id.to_string());

        c.apply_filter(Criteria { kind: KindFilter::Only(Kind::Lost), ..Default::default() });
        assert_eq!(list_ids(&c.screen(today())), vec!["4", "1"]);
    }

    #[test]
    fn test_invalid_submission_keeps_form_and_sets_notice() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Found));
        let mut draft = keys_draft();
        draft.title = "  ".to_string();
        assert_eq!(c.submit(draft, now()), Err(BoardError::MissingField("title")));
        assert_eq!(c.page(), &Page::Create(Kind::Found));
        assert_eq!(c.notice(), Some("title is required"));
        assert_eq!(c.store().len(), 4);

        c.navigate(Nav::Cancel);
        assert_eq!(c.notice(), None);
    }

    #[test]
    fn test_resolve_self_loop() {
        let mut c = controller();
        let id = ItemId::from("2");
        c.navigate(Nav::Open(id.clone()));
        assert!(c.resolve(&id));
        assert_eq!(c.page(), &Page::Detail(id.clone()));
        match c.screen(today()) {
            Screen::Detail(view) => assert_eq!(view.resolve, ResolveAction::AlreadyResolved),
            other => panic!("expected detail, got {:?}", other),
        }
        assert!(!c.resolve(&id));
    }

    #[test]
    fn test_resolve_already_resolved_item_3() {
        let mut c = controller();
        let id = ItemId::from("3");
        c.navigate(Nav::Open(id.clone()));
        let before = c.store().clone();
        assert!(!c.resolve(&id));
        assert_eq!(c.store(), &before);
    }

    #[test]
    fn test_image_submission_completes() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Found));
        let ticket = c.begin_submit(keys_draft(), now()).unwrap();
        assert!(c.is_submitting());
        assert_eq!(c.store().len(), 4);
        assert_eq!(c.page(), &Page::Create(Kind::Found));

        let image = ImageRef::from("data:image/png;base64,AAAA".to_string());
        let id = c.complete_submit(ticket, image.clone()).unwrap();
        assert!(!c.is_submitting());
        assert_eq!(c.page(), &Page::Detail(id.clone()));
        assert_eq!(c.store().find_by_id(&id).unwrap().image(), Some(&image));
    }

    #[test]
    fn test_navigating_away_cancels_pending_image_submission() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Lost));
        let ticket = c.begin_submit(keys_draft(), now()).unwrap();
        c.navigate(Nav::Open(ItemId::from("1")));

        let late = c.complete_submit(ticket, ImageRef::from("data:image/png;base64,AAAA".to_string()));
        assert_eq!(late, None);
        assert_eq!(c.store().len(), 4);
        assert_eq!(c.page(), &Page::Detail(ItemId::from("1")));
    }

    #[test]
    fn test_newer_submission_supersedes_older_ticket() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Found));
        let first = c.begin_submit(keys_draft(), now()).unwrap();
        let second = c.begin_submit(keys_draft(), now()).unwrap();
        assert_ne!(first, second);

        let image = ImageRef::from("data:image/png;base64,AAAA".to_string());
        assert_eq!(c.complete_submit(first, image.clone()), None);
        assert!(c.is_submitting());
        assert!(c.complete_submit(second, image).is_some());
        assert_eq!(c.store().len(), 5);
    }

    #[test]
    fn test_failed_image_read_sets_notice() {
        let mut c = controller();
        c.navigate(Nav::Report(Kind::Found));
        let ticket = c.begin_submit(keys_draft(), now()).unwrap();
        c.fail_submit(ticket, BoardError::ImageRead("aborted".to_string()));
        assert!(!c.is_submitting());
        assert_eq!(c.page(), &Page::Create(Kind::Found));
        assert_eq!(c.notice(), Some("image could not be read: aborted"));
        assert_eq!(c.store().len(), 4);
    }

    #[test]
    fn test_configured_default_criteria() {
        let config = BoardConfig {
            default_criteria: Criteria { kind: KindFilter::Only(Kind::Found), ..Default::default() },
            ..Default::default()
        };
        let c = Controller::from_config(config).unwrap();
        assert_eq!(list_ids(&c.screen(today())), vec!["2"]);
    }

    #[test]
    fn test_reentering_a_page_counts_as_a_new_visit() {
        let mut c = controller();
        let start = c.visits();
        c.navigate(Nav::Report(Kind::Lost));
        c.navigate(Nav::Report(Kind::Lost));
        assert_eq!(c.page(), &Page::Create(Kind::Lost));
        assert_eq!(c.visits(), start + 2);

        c.navigate(Nav::Home);
        c.navigate(Nav::Home);
        assert_eq!(c.visits(), start + 4);
    }

    #[test]
    fn test_filtering_is_not_a_page_visit() {
        let mut c = controller();
        let start = c.visits();
        c.apply_filter(Criteria { kind: KindFilter::Only(Kind::Lost), ..Default::default() });
        assert_eq!(c.visits(), start);
    }

    #[test]
    fn test_detail_for_missing_item_becomes_list() {
        let mut c = controller();
        let gone = ItemId::from("gone");
        c.show(Page::Detail(gone.clone()));
        assert_eq!(c.page(), &Page::List);

        assert!(!c.resolve(&gone));
        assert_eq!(c.page(), &Page::List);
        assert_eq!(list_ids(&c.screen(today())), vec!["4", "2", "1"]);
    }
}
