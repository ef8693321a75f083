//! Dashboard state: the loaded positions, the add/edit form, and the error banner.
//!
//! Every successful mutation is followed by a full re-fetch of the list. Local
//! state is never patched incrementally.

use crate::client::ResourceClient;
use crate::errors::DashboardError;
use crate::models::{Position, PositionForm, TeamMemberDisplay};
use crate::view::to_display;

/// Whether the form creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Editing(i64),
}

/// State and actions for the single dashboard screen.
pub struct Dashboard {
    client: ResourceClient,
    positions: Vec<Position>,
    form: PositionForm,
    mode: FormMode,
    error: Option<String>,
    loading: bool,
    mounted: bool,
}

impl Dashboard {
    pub fn new(client: ResourceClient) -> Self {
        Self {
            client,
            positions: Vec::new(),
            form: PositionForm::default(),
            mode: FormMode::Create,
            error: None,
            loading: false,
            mounted: false,
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn form(&self) -> &PositionForm {
        &self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True only while `refresh` awaits the list.
    ///
    /// The web layer renders after taking the dashboard lock, so served pages
    /// always see `false`; the flag is part of the view model for renderers
    /// that draw mid-fetch.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Look up a loaded record by id.
    pub fn find(&self, id: i64) -> Option<&Position> {
        self.positions.iter().find(|p| p.position_id == Some(id))
    }

    /// Display rows for the current list.
    pub fn rows(&self) -> Vec<TeamMemberDisplay> {
        self.positions().iter().map(to_display).collect()
    }

    /// Session guard. Fetches once per mount.
    ///
    /// Without a stored token nothing is fetched and any loaded state is
    /// dropped; the dashboard stays unmounted and requests the login redirect.
    pub async fn mount(&mut self) {
        if self.client.session().token().is_none() {
            tracing::info!("No stored token, sending user to login");
            self.reset();
            self.client.navigator().redirect_to_login();
            return;
        }

        if self.mounted {
            return;
        }
        self.mounted = true;

        self.refresh().await;
    }

    /// Forget the mount so the next `mount` re-runs the guard.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Replace the list with the server's current contents.
    pub async fn refresh(&mut self) {
        self.error = None;
        self.loading = true;

        match self.client.list().await {
            Ok(positions) => self.positions = positions,
            Err(e) => self.record(e),
        }

        self.loading = false;
    }

    /// Replace the editable fields with user input.
    pub fn set_form(&mut self, form: PositionForm) {
        self.form = form;
    }

    /// Target `position` for update and bind its persisted fields.
    pub fn start_edit(&mut self, position: &Position) {
        self.mode = match position.target_id() {
            Some(id) => FormMode::Editing(id),
            None => FormMode::Create,
        };
        self.form = PositionForm::from_position(position);
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Create;
        self.form.clear();
    }

    /// Create or update from the current form.
    ///
    /// On success the list is re-fetched and the form resets. On failure the
    /// mode and fields are left as they were.
    pub async fn submit(&mut self) {
        self.error = None;
        let payload = self.form.payload();

        let result = match self.mode {
            FormMode::Editing(id) => self.client.update(id, &payload).await,
            FormMode::Create => self.client.create(&payload).await,
        };

        match result {
            Ok(()) => {
                tracing::info!("Saved position {}", payload.position_code);
                self.refresh().await;
                self.mode = FormMode::Create;
                self.form.clear();
            }
            Err(e) => self.record(e),
        }
    }

    /// Delete a record and re-fetch. Missing or zero ids are ignored.
    pub async fn delete(&mut self, id: Option<i64>) {
        let Some(id) = id.filter(|id| *id != 0) else {
            return;
        };
        self.error = None;

        match self.client.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted position {}", id);
                self.refresh().await;
            }
            Err(e) => self.record(e),
        }
    }

    /// End the session and go to login.
    pub fn logout(&mut self) {
        self.client.session().clear();
        self.client.navigator().redirect_to_login();
        self.reset();
    }

    /// Drop everything loaded under the current session and unmount.
    fn reset(&mut self) {
        self.unmount();
        self.positions.clear();
        self.mode = FormMode::Create;
        self.form.clear();
        self.error = None;
    }

    fn record(&mut self, err: DashboardError) {
        match err {
            // The client has already cleared the session and asked for login
            DashboardError::AuthExpired => self.reset(),
            err => self.error = Some(err.to_string()),
        }
    }
}
