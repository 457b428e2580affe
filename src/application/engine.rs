//! DialogueEngine - the conversation state machine.
//!
//! One call per inbound event. The engine reads the user's session, talks
//! to the resolver and the ledger, writes the next session state, and
//! returns reply directives for the transport to execute. Recoverable
//! conditions (bad input, stale buttons, missing rights) become directives;
//! only storage failures propagate as errors.

use std::sync::Arc;

use crate::application::{Decision, RegistryResolver, RequestLedger};
use crate::domain::dialogue::{
    CallbackToken, DialogueSession, Keyboard, ReplyDirective, SessionStep,
};
use crate::domain::foundation::{ChatId, DomainError, GroupId, MessageId, UserId};
use crate::domain::group::{validate_name, GroupMatch};
use crate::ports::{SessionStore, UserRepository};

const PICK_PROMPT: &str = "Pick your group with a button, or type its name:";
const ENTER_NAME_PROMPT: &str = "Type the name of the group to add:";
const NAME_TOO_SHORT: &str = "That name is too short. Type it again.";
const GROUP_EXISTS: &str = "That group already exists. Send /start and pick it from the list.";
const REQUEST_DUPLICATE: &str = "A request for that group is already waiting for an administrator.";
const REQUEST_SUBMITTED: &str = "Request sent to the administrator ✅";
const GROUP_SAVED: &str = "Group saved ✅";
const MANY_PROMPT: &str = "Found several options. Pick the right one:";
const NONE_PROMPT: &str = "No such group. You can press \"➕ Add group\" in the list.";
const MODERATION_TITLE: &str = "Group-addition requests:";
const ACK_GROUP_CHOSEN: &str = "Group selected ✅";
const ACK_APPROVED: &str = "Approved ✅";
const ACK_REJECTED: &str = "Rejected ❌";
const ACK_ALREADY_HANDLED: &str = "Already handled";
const ACK_DENIED: &str = "Insufficient rights";

/// The core orchestrator: decides transitions and emits directives.
pub struct DialogueEngine {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
    resolver: RegistryResolver,
    ledger: RequestLedger,
}

impl DialogueEngine {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionStore>,
        resolver: RegistryResolver,
        ledger: RequestLedger,
    ) -> Self {
        Self {
            users,
            sessions,
            resolver,
            ledger,
        }
    }

    /// Entry point: upserts the user and shows page 0 of the group picker.
    pub async fn handle_start(
        &self,
        user: UserId,
        chat: ChatId,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        tracing::debug!(user = %user, "start event");
        self.users.upsert(user).await?;
        let directive = self.render_picker(user, chat, 0, None).await?;
        Ok(vec![directive])
    }

    /// Free-text message. Dispatches on the recorded session step; idle
    /// users and command-prefixed text are ignored by this handler.
    pub async fn handle_text(
        &self,
        user: UserId,
        chat: ChatId,
        text: &str,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        if text.starts_with('/') {
            return Ok(vec![]);
        }

        let session = self.sessions.get(user).await;
        match session.step() {
            Some(SessionStep::AwaitGroupName) => self.submit_request(user, chat, text).await,
            Some(SessionStep::AwaitGroupPick { .. }) => {
                self.resolve_pick_text(user, chat, text).await
            }
            None => Ok(vec![]),
        }
    }

    /// Button press. The token was parsed at the boundary; a button carries
    /// its own intent, so most actions are valid from any session step.
    pub async fn handle_callback(
        &self,
        user: UserId,
        chat: ChatId,
        message: MessageId,
        token: CallbackToken,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        match token {
            CallbackToken::Noop => Ok(vec![ReplyDirective::ack()]),
            CallbackToken::GroupPage(page) => {
                let edit = self.render_picker(user, chat, page, Some(message)).await?;
                Ok(vec![edit, ReplyDirective::ack()])
            }
            CallbackToken::GroupPick(group) => self.pick_group(user, chat, group).await,
            CallbackToken::GroupRequestNew => {
                self.sessions
                    .set(user, DialogueSession::at(SessionStep::AwaitGroupName))
                    .await;
                Ok(vec![
                    ReplyDirective::ack(),
                    ReplyDirective::send(chat, ENTER_NAME_PROMPT),
                ])
            }
            CallbackToken::RequestPage(page) => {
                if let Some(denied) = self.deny_non_admin(user).await? {
                    return Ok(denied);
                }
                let requests = self.ledger.list_pending_page(page).await?;
                let keyboard = Keyboard::moderation_queue(&requests);
                Ok(vec![
                    ReplyDirective::edit_with_keyboard(chat, message, MODERATION_TITLE, keyboard),
                    ReplyDirective::ack(),
                ])
            }
            CallbackToken::RequestApprove(id) => {
                if let Some(denied) = self.deny_non_admin(user).await? {
                    return Ok(denied);
                }
                let decision = self.ledger.approve(user, id).await?;
                Ok(Self::decision_directives(decision, ACK_APPROVED, |name| {
                    format!("Your request for group \"{}\" was approved ✅", name)
                }))
            }
            CallbackToken::RequestReject(id) => {
                if let Some(denied) = self.deny_non_admin(user).await? {
                    return Ok(denied);
                }
                let decision = self.ledger.reject(user, id).await?;
                Ok(Self::decision_directives(decision, ACK_REJECTED, |name| {
                    format!("Your request for group \"{}\" was rejected ❌", name)
                }))
            }
        }
    }

    /// Renders the group picker at `page` and records the step.
    ///
    /// Edits in place when a message id is given (page navigation), sends a
    /// fresh message otherwise (start).
    async fn render_picker(
        &self,
        user: UserId,
        chat: ChatId,
        page: u32,
        edit: Option<MessageId>,
    ) -> Result<ReplyDirective, DomainError> {
        let groups = self.resolver.list_page(page).await?;
        let keyboard = Keyboard::group_picker(&groups);
        self.sessions
            .set(user, DialogueSession::at(SessionStep::AwaitGroupPick { page }))
            .await;

        Ok(match edit {
            Some(message) => {
                ReplyDirective::edit_with_keyboard(chat, message, PICK_PROMPT, keyboard)
            }
            None => ReplyDirective::send_with_keyboard(chat, PICK_PROMPT, keyboard),
        })
    }

    /// Direct group pick via button: assign, clear, confirm. Deliberately
    /// valid from any step so a stale keyboard cannot strand a user.
    async fn pick_group(
        &self,
        user: UserId,
        chat: ChatId,
        group: GroupId,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        self.users.assign_group(user, group).await?;
        self.sessions.clear(user).await;
        tracing::info!(user = %user, group = %group, "group assigned via button");
        Ok(vec![
            ReplyDirective::ack_with(ACK_GROUP_CHOSEN),
            ReplyDirective::send(chat, GROUP_SAVED),
        ])
    }

    /// Text while the picker is open: resolve against the registry.
    async fn resolve_pick_text(
        &self,
        user: UserId,
        chat: ChatId,
        text: &str,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        let text = match validate_name(text) {
            Ok(text) => text,
            Err(_) => return Ok(vec![ReplyDirective::send(chat, NAME_TOO_SHORT)]),
        };
        let resolved = self.resolver.resolve(&text).await?;

        if let Some(group) = resolved.unambiguous() {
            let id = group.id();
            let name = group.name().to_string();
            self.users.assign_group(user, id).await?;
            self.sessions.clear(user).await;
            tracing::info!(user = %user, group = %id, "group assigned via text");
            return Ok(vec![ReplyDirective::send(
                chat,
                format!("Group selected: {} ✅", name),
            )]);
        }

        match resolved {
            GroupMatch::Many(candidates) => {
                // Session step stays AwaitGroupPick: a fresh text entry
                // re-resolves instead of reusing this candidate set.
                let keyboard = Keyboard::disambiguation(&candidates);
                Ok(vec![ReplyDirective::send_with_keyboard(
                    chat,
                    MANY_PROMPT,
                    keyboard,
                )])
            }
            _ => Ok(vec![ReplyDirective::send(chat, NONE_PROMPT)]),
        }
    }

    /// Text while a group name was requested: validate and create a request.
    async fn submit_request(
        &self,
        user: UserId,
        chat: ChatId,
        text: &str,
    ) -> Result<Vec<ReplyDirective>, DomainError> {
        let name = match validate_name(text) {
            Ok(name) => name,
            Err(_) => return Ok(vec![ReplyDirective::send(chat, NAME_TOO_SHORT)]),
        };

        if self.resolver.exists(&name).await? {
            return Ok(vec![ReplyDirective::send(chat, GROUP_EXISTS)]);
        }
        if self.ledger.pending_exists(&name).await? {
            return Ok(vec![ReplyDirective::send(chat, REQUEST_DUPLICATE)]);
        }

        self.ledger.create(user, &name).await?;
        self.sessions.clear(user).await;
        Ok(vec![ReplyDirective::send(chat, REQUEST_SUBMITTED)])
    }

    /// Role gate for admin actions. The role is re-fetched on every call.
    ///
    /// Returns the denial directives for non-admins, `None` for admins.
    async fn deny_non_admin(
        &self,
        user: UserId,
    ) -> Result<Option<Vec<ReplyDirective>>, DomainError> {
        let role = self.users.role(user).await?;
        if role.is_admin() {
            Ok(None)
        } else {
            tracing::warn!(user = %user, "admin action denied");
            Ok(Some(vec![ReplyDirective::alert(ACK_DENIED)]))
        }
    }

    /// Directives for a moderation decision: acknowledgement to the admin,
    /// plus a notification to the requester only when this call decided.
    fn decision_directives(
        decision: Decision,
        ack: &str,
        notify: impl Fn(&str) -> String,
    ) -> Vec<ReplyDirective> {
        match decision {
            Decision::Decided(request) => vec![
                ReplyDirective::ack_with(ack),
                ReplyDirective::send(
                    ChatId::from(request.requested_by()),
                    notify(request.requested_name()),
                ),
            ],
            Decision::AlreadyHandled => vec![ReplyDirective::ack_with(ACK_ALREADY_HANDLED)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryGroupRepository, InMemoryRequestRepository, InMemorySessionStore,
        InMemoryUserRepository,
    };
    use crate::domain::user::Role;
    use crate::ports::RequestRepository;

    struct Fixture {
        engine: DialogueEngine,
        users: Arc<InMemoryUserRepository>,
        sessions: Arc<InMemorySessionStore>,
        requests: Arc<InMemoryRequestRepository>,
    }

    fn fixture(group_names: &[&str]) -> Fixture {
        let groups = Arc::new(InMemoryGroupRepository::new());
        for name in group_names {
            groups.seed(name);
        }
        let requests = Arc::new(InMemoryRequestRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let sessions = Arc::new(InMemorySessionStore::new());

        let engine = DialogueEngine::new(
            users.clone(),
            sessions.clone(),
            RegistryResolver::new(groups.clone()),
            RequestLedger::new(requests.clone(), groups),
        );
        Fixture {
            engine,
            users,
            sessions,
            requests,
        }
    }

    fn user() -> UserId {
        UserId::new(100)
    }

    fn chat() -> ChatId {
        ChatId::new(100)
    }

    #[tokio::test]
    async fn command_prefixed_text_is_ignored() {
        let f = fixture(&[]);
        f.sessions
            .set(user(), DialogueSession::at(SessionStep::AwaitGroupName))
            .await;

        let directives = f.engine.handle_text(user(), chat(), "/help").await.unwrap();
        assert!(directives.is_empty());
        // Step untouched.
        assert_eq!(
            f.sessions.get(user()).await.step(),
            Some(SessionStep::AwaitGroupName)
        );
    }

    #[tokio::test]
    async fn text_while_idle_is_ignored() {
        let f = fixture(&["Math101"]);
        let directives = f
            .engine
            .handle_text(user(), chat(), "Math101")
            .await
            .unwrap();
        assert!(directives.is_empty());
    }

    #[tokio::test]
    async fn short_name_reprompts_without_clearing_the_step() {
        let f = fixture(&[]);
        f.sessions
            .set(user(), DialogueSession::at(SessionStep::AwaitGroupName))
            .await;

        let directives = f.engine.handle_text(user(), chat(), "x").await.unwrap();
        assert!(matches!(&directives[0], ReplyDirective::Send { text, .. } if text == NAME_TOO_SHORT));
        assert_eq!(
            f.sessions.get(user()).await.step(),
            Some(SessionStep::AwaitGroupName)
        );
        assert_eq!(f.requests.pending_count().await, 0);
    }

    #[tokio::test]
    async fn short_text_in_the_picker_is_rejected_before_resolution() {
        let f = fixture(&["Math101"]);
        f.sessions
            .set(user(), DialogueSession::at(SessionStep::AwaitGroupPick { page: 0 }))
            .await;

        let directives = f.engine.handle_text(user(), chat(), "M").await.unwrap();
        assert!(matches!(&directives[0], ReplyDirective::Send { text, .. } if text == NAME_TOO_SHORT));
        assert_eq!(f.users.assigned_group(user()).await, None);
    }

    #[tokio::test]
    async fn existing_group_name_blocks_the_request() {
        let f = fixture(&["CS101"]);
        f.sessions
            .set(user(), DialogueSession::at(SessionStep::AwaitGroupName))
            .await;

        let directives = f.engine.handle_text(user(), chat(), "cs101").await.unwrap();
        assert!(matches!(&directives[0], ReplyDirective::Send { text, .. } if text == GROUP_EXISTS));
        assert_eq!(f.requests.pending_count().await, 0);
    }

    #[tokio::test]
    async fn non_admin_moderation_click_is_denied_with_alert() {
        let f = fixture(&[]);
        let request = f
            .requests
            .insert(UserId::new(7), "Biology")
            .await
            .unwrap();

        let directives = f
            .engine
            .handle_callback(
                user(),
                chat(),
                MessageId::new(1),
                CallbackToken::RequestApprove(request.id()),
            )
            .await
            .unwrap();

        assert_eq!(directives, vec![ReplyDirective::alert(ACK_DENIED)]);
        // Request untouched.
        let stored = f.requests.find(request.id()).await.unwrap();
        assert!(stored.is_pending());
    }

    #[tokio::test]
    async fn stale_session_does_not_block_a_direct_pick() {
        let f = fixture(&["Math101"]);
        let group = f.engine.resolver.list_page(0).await.unwrap().items[0].clone();

        // No session at all; the button still works.
        let directives = f
            .engine
            .handle_callback(
                user(),
                chat(),
                MessageId::new(1),
                CallbackToken::GroupPick(group.id()),
            )
            .await
            .unwrap();

        assert_eq!(directives.len(), 2);
        assert_eq!(f.users.assigned_group(user()).await, Some(group.id()));
        assert!(f.sessions.get(user()).await.is_idle());
    }

    #[tokio::test]
    async fn admin_sees_the_moderation_queue() {
        let f = fixture(&[]);
        f.users.set_role(user(), Role::Admin).await;
        f.requests.insert(UserId::new(7), "Biology").await.unwrap();

        let directives = f
            .engine
            .handle_callback(
                user(),
                chat(),
                MessageId::new(5),
                CallbackToken::RequestPage(0),
            )
            .await
            .unwrap();

        match &directives[0] {
            ReplyDirective::Edit {
                message, keyboard, ..
            } => {
                assert_eq!(*message, MessageId::new(5));
                let kb = keyboard.as_ref().unwrap();
                assert!(kb.rows[0][0].label.contains("Biology"));
            }
            other => panic!("expected edit, got {:?}", other),
        }
        assert_eq!(directives[1], ReplyDirective::ack());
    }
}
