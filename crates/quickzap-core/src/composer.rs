//! WhatsApp link composer: session state, default-country preference,
//! and the two country pickers.

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::country::Country;
use crate::error::{Error, Result};
use crate::link::build_link;
use crate::opener::LinkOpener;
use crate::preferences::{PreferenceStore, DEFAULT_COUNTRY_KEY};
use crate::search::CountrySearch;
use crate::state::PickerState;

/// Pick the session's starting country: the stored preference when it
/// names a catalog member, otherwise Brazil, otherwise the first entry.
pub fn resolve_initial_country<'a>(catalog: &'a Catalog, preferred: Option<&str>) -> Option<&'a Country> {
    if let Some(code) = preferred {
        match catalog.find_by_code(code) {
            Some(country) => return Some(country),
            None => debug!(code, "Stored default country is not in the catalog, ignoring"),
        }
    }
    catalog.default_country()
}

/// One composing session. Owns its state exclusively; the preference
/// store is the only thing shared with other sessions.
pub struct Composer<S: PreferenceStore> {
    catalog: Catalog,
    store: S,
    selected: Country,
    phone_digits: String,
    message_text: String,
    active_search: CountrySearch,
    default_search: CountrySearch,
    default_picker: PickerState,
    persist_selection_as_default: bool,
}

impl<S: PreferenceStore> Composer<S> {
    /// Start a session. The starting country is resolved once, here.
    pub fn new(catalog: Catalog, store: S) -> Result<Self> {
        let preferred = store.get(DEFAULT_COUNTRY_KEY);
        let selected = resolve_initial_country(&catalog, preferred.as_deref())
            .cloned()
            .ok_or(Error::EmptyCatalog)?;

        info!(country = %selected.code, countries = catalog.len(), "Composer ready");

        Ok(Self {
            catalog,
            store,
            selected,
            phone_digits: String::new(),
            message_text: String::new(),
            active_search: CountrySearch::new(),
            default_search: CountrySearch::new(),
            default_picker: PickerState::Closed,
            persist_selection_as_default: true,
        })
    }

    /// Whether picking a country for the current message also stores it
    /// as the default for future sessions. On by default.
    pub fn with_persist_selection_as_default(mut self, persist: bool) -> Self {
        self.persist_selection_as_default = persist;
        self
    }

    pub fn persist_selection_as_default(&self) -> bool {
        self.persist_selection_as_default
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn selected_country(&self) -> &Country {
        &self.selected
    }

    /// The code currently held by the preference store.
    pub fn stored_default(&self) -> Option<String> {
        self.store.get(DEFAULT_COUNTRY_KEY)
    }

    // Inputs

    pub fn phone_digits(&self) -> &str {
        &self.phone_digits
    }

    pub fn set_phone_digits(&mut self, phone: &str) {
        self.phone_digits = phone.to_string();
    }

    pub fn phone_digits_mut(&mut self) -> &mut String {
        &mut self.phone_digits
    }

    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    pub fn set_message_text(&mut self, message: &str) {
        self.message_text = message.to_string();
    }

    pub fn message_text_mut(&mut self) -> &mut String {
        &mut self.message_text
    }

    /// True once the phone field has non-whitespace content; gates send and preview.
    pub fn can_send(&self) -> bool {
        !self.phone_digits.trim().is_empty()
    }

    // Country selection

    /// Use `country` for this message (and, by default, future sessions).
    pub fn set_active_country(&mut self, country: &Country) {
        debug!(country = %country.code, "Active country changed");
        self.selected = country.clone();
        if self.persist_selection_as_default {
            self.persist_default(&country.code);
        }
    }

    /// Store `country` as the default, select it, and close the settings picker.
    pub fn set_default_country(&mut self, country: &Country) {
        info!(country = %country.code, "Default country set");
        self.persist_default(&country.code);
        self.selected = country.clone();
        self.default_picker = PickerState::Closed;
    }

    /// Select a catalog country by ISO code.
    pub fn select_by_code(&mut self, code: &str) -> Result<()> {
        let country = self.lookup(code)?;
        self.set_active_country(&country);
        Ok(())
    }

    /// Set the default country by ISO code.
    pub fn set_default_by_code(&mut self, code: &str) -> Result<()> {
        let country = self.lookup(code)?;
        self.set_default_country(&country);
        Ok(())
    }

    fn lookup(&self, code: &str) -> Result<Country> {
        let code = code.trim().to_uppercase();
        self.catalog
            .find_by_code(&code)
            .cloned()
            .ok_or(Error::UnknownCountry { code })
    }

    fn persist_default(&mut self, code: &str) {
        if let Err(e) = self.store.set(DEFAULT_COUNTRY_KEY, code) {
            warn!(error = %e, code, "Failed to store default country");
        }
    }

    // Link

    /// The deep link for the current state, or `None` while the phone is blank.
    pub fn compose_link(&self) -> Option<String> {
        build_link(&self.selected.phone_code, &self.phone_digits, &self.message_text)
    }

    /// Open the composed link. Does nothing (and returns `None`) when
    /// there is nothing to send.
    pub fn send<O: LinkOpener + ?Sized>(&self, opener: &O) -> Result<Option<String>> {
        let Some(link) = self.compose_link() else {
            debug!("Send requested with empty phone number, ignoring");
            return Ok(None);
        };
        opener.open(&link)?;
        Ok(Some(link))
    }

    // Active picker

    pub fn active_search(&self) -> &CountrySearch {
        &self.active_search
    }

    pub fn active_search_mut(&mut self) -> &mut CountrySearch {
        &mut self.active_search
    }

    pub fn active_matches(&self) -> Vec<&Country> {
        self.active_search.apply(&self.catalog)
    }

    /// Select the `index`-th country of the active picker's results.
    pub fn pick_active_match(&mut self, index: usize) -> bool {
        let Some(country) = self.active_matches().get(index).map(|c| (*c).clone()) else {
            return false;
        };
        self.set_active_country(&country);
        true
    }

    // Default-country settings picker

    pub fn default_picker(&self) -> PickerState {
        self.default_picker
    }

    pub fn open_default_picker(&mut self) {
        self.default_picker = PickerState::Open;
    }

    /// Close without choosing. The search text is kept for next time.
    pub fn dismiss_default_picker(&mut self) {
        self.default_picker = PickerState::Closed;
    }

    pub fn default_search(&self) -> &CountrySearch {
        &self.default_search
    }

    pub fn default_search_mut(&mut self) -> &mut CountrySearch {
        &mut self.default_search
    }

    pub fn default_matches(&self) -> Vec<&Country> {
        self.default_search.apply(&self.catalog)
    }

    /// Commit the `index`-th country of the settings picker's results.
    pub fn pick_default_match(&mut self, index: usize) -> bool {
        let Some(country) = self.default_matches().get(index).map(|c| (*c).clone()) else {
            return false;
        };
        self.set_default_country(&country);
        true
    }
}
