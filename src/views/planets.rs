//! Planet list page: the planet table and its delete confirmation dialog.

use crate::api::AdminClient;
use crate::config::Labels;
use crate::errors::ClientError;
use crate::models::Planet;

/// One table row as it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Row key; equals the planet id
    pub id: String,
    pub title: String,
    pub handle: String,
    /// Zebra striping; set on the 1st, 3rd, 5th... row
    pub altrow: bool,
}

/// Modal delete confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub labels: Labels,
    title: String,
    target_id: Option<String>,
    open: bool,
}

impl ConfirmDialog {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            title: String::new(),
            target_id: None,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    fn open(&mut self, title: &str, target_id: &str) {
        self.title = title.to_string();
        self.target_id = Some(target_id.to_string());
        self.open = true;
    }

    /// Close the dialog, handing back the id it was opened for.
    fn close(&mut self) -> Option<String> {
        self.open = false;
        self.target_id.take()
    }
}

/// The planet table.
#[derive(Debug, Clone)]
pub struct PlanetListView {
    client: AdminClient,
    planets: Vec<Planet>,
    dialog: ConfirmDialog,
}

impl PlanetListView {
    pub fn new(client: AdminClient, labels: Labels) -> Self {
        Self {
            client,
            planets: Vec::new(),
            dialog: ConfirmDialog::new(labels),
        }
    }

    /// Fetch all planets and replace the table contents.
    ///
    /// On failure the table keeps what it had.
    pub async fn load_planets(&mut self) -> Result<usize, ClientError> {
        match self.client.list_planets().await {
            Ok(planets) => {
                self.replace_planets(planets);
                Ok(self.planets.len())
            }
            Err(e) => {
                tracing::warn!("Loading planets failed: {}", e);
                Err(e)
            }
        }
    }

    pub(crate) fn replace_planets(&mut self, planets: Vec<Planet>) {
        self.planets = planets;
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Rows in table order with striping recomputed over all of them.
    pub fn rows(&self) -> Vec<RenderedRow> {
        self.planets
            .iter()
            .enumerate()
            .map(|(index, planet)| RenderedRow {
                id: planet.id.clone(),
                title: planet.title.clone(),
                handle: planet.handle.clone(),
                altrow: index % 2 == 0,
            })
            .collect()
    }

    pub fn dialog(&self) -> &ConfirmDialog {
        &self.dialog
    }

    /// Open the confirmation dialog for the row `id`, titled with the planet's name.
    ///
    /// Returns false when no row has that id.
    pub fn request_delete(&mut self, id: &str) -> bool {
        let Some(title) = self.planet(id).map(|p| p.title.clone()) else {
            tracing::debug!("No planet row {}", id);
            return false;
        };
        self.dialog.open(&title, id);
        true
    }

    /// Delete the planet the dialog was opened for.
    ///
    /// The dialog closes before the request goes out; the row is dropped only when
    /// the server confirms.
    pub async fn confirm_delete(&mut self) -> Result<(), ClientError> {
        if !self.dialog.is_open() {
            return Ok(());
        }
        let Some(id) = self.dialog.close() else {
            return Ok(());
        };

        match self.client.delete_planet(&id).await {
            Ok(()) => {
                self.planets.retain(|p| p.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Deleting planet {} failed: {}", id, e);
                Err(e)
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.dialog.close();
    }
}
