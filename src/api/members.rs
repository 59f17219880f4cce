//! Weblog membership endpoints.

use super::{check_status, AdminClient, AUTHORING_REST};
use crate::errors::ClientError;
use crate::models::{PotentialMembers, RoleMap, WeblogRole};

impl AdminClient {
    /// GET /tb-ui/authoring/rest/weblog/:weblogId/members - Current role mapping.
    pub async fn weblog_members(&self, weblog_id: &str) -> Result<RoleMap, ClientError> {
        let url = self.endpoint(&AUTHORING_REST, &["weblog", weblog_id, "members"])?;
        let response = check_status(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// GET /tb-ui/authoring/rest/weblog/:weblogId/potentialmembers - Users who can be added.
    pub async fn potential_members(
        &self,
        weblog_id: &str,
    ) -> Result<PotentialMembers, ClientError> {
        let url = self.endpoint(&AUTHORING_REST, &["weblog", weblog_id, "potentialmembers"])?;
        let response = check_status(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// POST /tb-ui/authoring/rest/weblog/:weblogId/memberupdate - Bulk role update.
    ///
    /// Returns the server's confirmation message.
    pub async fn update_members(
        &self,
        weblog_id: &str,
        roles: &RoleMap,
    ) -> Result<String, ClientError> {
        let url = self.endpoint(&AUTHORING_REST, &["weblog", weblog_id, "memberupdate"])?;
        let response = check_status(self.http.post(url).json(roles).send().await?).await?;
        Ok(response.text().await?)
    }

    /// POST /tb-ui/authoring/rest/weblog/:weblogId/user/:userId/role/:role/attach - Add a member.
    pub async fn attach_user(
        &self,
        weblog_id: &str,
        user_id: &str,
        role: WeblogRole,
    ) -> Result<String, ClientError> {
        self.user_role_action(weblog_id, user_id, role, "attach")
            .await
    }

    /// POST /tb-ui/authoring/rest/weblog/:weblogId/user/:userId/role/:role/invite - Invite a user.
    pub async fn invite_user(
        &self,
        weblog_id: &str,
        user_id: &str,
        role: WeblogRole,
    ) -> Result<String, ClientError> {
        self.user_role_action(weblog_id, user_id, role, "invite")
            .await
    }

    async fn user_role_action(
        &self,
        weblog_id: &str,
        user_id: &str,
        role: WeblogRole,
        action: &str,
    ) -> Result<String, ClientError> {
        let url = self.endpoint(
            &AUTHORING_REST,
            &["weblog", weblog_id, "user", user_id, "role", role.as_str(), action],
        )?;
        let response = check_status(self.http.post(url).send().await?).await?;
        tracing::info!("{} {} as {} on weblog {}", action, user_id, role, weblog_id);
        Ok(response.text().await?)
    }
}
