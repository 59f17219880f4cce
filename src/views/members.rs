//! Weblog members page: role list, role updates and adding users.

use super::{MessagePanels, Navigator, Outcome};
use crate::api::AdminClient;
use crate::errors::{ClientError, ErrorPayload};
use crate::models::{PotentialMembers, RoleMap, WeblogRole};

/// Controller for one weblog's membership.
///
/// Every mutation is followed by a full reload from the server.
#[derive(Debug)]
pub struct MemberRoleController<N: Navigator> {
    client: AdminClient,
    weblog_id: String,
    refresh_url: String,
    navigator: N,
    roles: RoleMap,
    potential_members: PotentialMembers,
    error_obj: Option<ErrorPayload>,
    success_message: Option<String>,
    panels: MessagePanels,
    /// Pending add: the user picked in the form
    pub user_to_add: Option<String>,
    /// Pending add: the role picked in the form
    pub user_to_add_role: Option<WeblogRole>,
}

impl<N: Navigator> MemberRoleController<N> {
    pub fn new(
        client: AdminClient,
        weblog_id: impl Into<String>,
        refresh_url: impl Into<String>,
        navigator: N,
    ) -> Self {
        Self {
            client,
            weblog_id: weblog_id.into(),
            refresh_url: refresh_url.into(),
            navigator,
            roles: RoleMap::new(),
            potential_members: PotentialMembers::new(),
            error_obj: None,
            success_message: None,
            panels: MessagePanels::default(),
            user_to_add: None,
            user_to_add_role: None,
        }
    }

    pub fn weblog_id(&self) -> &str {
        &self.weblog_id
    }

    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    pub fn potential_members(&self) -> &PotentialMembers {
        &self.potential_members
    }

    pub fn error_obj(&self) -> Option<&ErrorPayload> {
        self.error_obj.as_ref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn panels(&self) -> MessagePanels {
        self.panels
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Reload the role mapping and the potential members.
    ///
    /// Both reads run concurrently. A failed read leaves its part of the state as it was;
    /// the first error is returned.
    pub async fn load_members(&mut self) -> Result<(), ClientError> {
        self.user_to_add = None;
        let (roles, potential) = tokio::join!(
            self.client.weblog_members(&self.weblog_id),
            self.client.potential_members(&self.weblog_id)
        );

        let roles_result = match roles {
            Ok(roles) => {
                self.roles = roles;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Loading members of {} failed: {}", self.weblog_id, e);
                Err(e)
            }
        };
        let potential_result = self.apply_potential_members(potential);
        roles_result.and(potential_result)
    }

    /// Reload the users who can be added and preselect one of them.
    pub async fn load_potential_members(&mut self) -> Result<(), ClientError> {
        self.user_to_add = None;
        let potential = self.client.potential_members(&self.weblog_id).await;
        self.apply_potential_members(potential)
    }

    fn apply_potential_members(
        &mut self,
        result: Result<PotentialMembers, ClientError>,
    ) -> Result<(), ClientError> {
        match result {
            Ok(potential) => {
                // Lowest user id, so a submit is possible without touching the form
                self.user_to_add = potential.keys().next().cloned();
                self.potential_members = potential;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Loading potential members of {} failed: {}",
                    self.weblog_id,
                    e
                );
                Err(e)
            }
        }
    }

    /// Change a member's role locally; sent with the next `update_roles`.
    ///
    /// Returns false when the user is not a member.
    pub fn set_role(&mut self, user_id: &str, role: WeblogRole) -> bool {
        match self.roles.get_mut(user_id) {
            Some(current) => {
                *current = role;
                true
            }
            None => false,
        }
    }

    /// Mark a member for removal on the next `update_roles`.
    pub fn remove_member(&mut self, user_id: &str) -> bool {
        self.set_role(user_id, WeblogRole::NoBlogNeeded)
    }

    /// Send the whole role mapping to the server.
    pub async fn update_roles(&mut self) -> Outcome {
        match self.client.update_members(&self.weblog_id, &self.roles).await {
            Ok(message) => self.saved(message).await,
            Err(e) => self.failed(e),
        }
    }

    /// Attach the pending user with the pending role.
    pub async fn add_user_to_weblog(&mut self) -> Outcome {
        let Some((user_id, role)) = self.pending_add() else {
            return Outcome::Skipped;
        };
        match self.client.attach_user(&self.weblog_id, &user_id, role).await {
            Ok(message) => {
                self.user_to_add = None;
                self.user_to_add_role = None;
                self.saved(message).await
            }
            Err(e) => self.failed(e),
        }
    }

    /// Invite the pending user with the pending role; the membership stays pending
    /// until the user accepts.
    pub async fn invite_user_to_weblog(&mut self) -> Outcome {
        let Some((user_id, role)) = self.pending_add() else {
            return Outcome::Skipped;
        };
        match self.client.invite_user(&self.weblog_id, &user_id, role).await {
            Ok(message) => {
                self.user_to_add = None;
                self.user_to_add_role = None;
                self.saved(message).await
            }
            Err(e) => self.failed(e),
        }
    }

    fn pending_add(&self) -> Option<(String, WeblogRole)> {
        let user_id = self.user_to_add.as_ref().filter(|u| !u.is_empty())?;
        Some((user_id.clone(), self.user_to_add_role?))
    }

    async fn saved(&mut self, message: String) -> Outcome {
        self.panels.show_success();
        self.success_message = Some(message).filter(|m| !m.is_empty());
        if let Err(e) = self.load_members().await {
            tracing::warn!("Reload after save failed: {}", e);
        }
        Outcome::Saved
    }

    fn failed(&mut self, err: ClientError) -> Outcome {
        match err {
            ClientError::SessionExpired => {
                self.navigator.replace(&self.refresh_url);
                Outcome::SessionExpired
            }
            ClientError::Validation(payload) => {
                tracing::info!("Server rejected change: {}", payload);
                self.error_obj = Some(payload);
                self.panels.show_error();
                Outcome::Rejected
            }
            other => {
                tracing::warn!("Membership change on {} failed: {}", self.weblog_id, other);
                Outcome::Failed(other)
            }
        }
    }
}
