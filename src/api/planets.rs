//! Planet admin endpoints.

use super::{check_status, AdminClient, ADMIN_REST};
use crate::errors::ClientError;
use crate::models::Planet;

impl AdminClient {
    /// GET /tb-ui/admin/rest/planets - List all planets.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, ClientError> {
        let url = self.endpoint(&ADMIN_REST, &["planets"])?;
        let response = check_status(self.http.get(url).send().await?).await?;
        let planets: Vec<Planet> = response.json().await?;
        tracing::debug!("Fetched {} planets", planets.len());
        Ok(planets)
    }

    /// DELETE /tb-ui/admin/rest/planets/:id - Delete a planet.
    pub async fn delete_planet(&self, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&ADMIN_REST, &["planets", id])?;
        check_status(self.http.delete(url).send().await?).await?;
        tracing::info!("Deleted planet {}", id);
        Ok(())
    }
}
