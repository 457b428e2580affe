//! Inline keyboard descriptions and their builders.
//!
//! Keyboards are ordered rows of labeled buttons, each carrying a
//! [`CallbackToken`]. Builders mirror the three surfaces of the dialogue:
//! the group picker, the admin moderation queue, and the disambiguation
//! list shown after an ambiguous text resolution.

use crate::domain::dialogue::CallbackToken;
use crate::domain::foundation::Page;
use crate::domain::group::Group;
use crate::domain::request::GroupRequest;

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: CallbackToken,
}

impl Button {
    pub fn new(label: impl Into<String>, token: CallbackToken) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }
}

/// Ordered rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    fn push_row(&mut self, row: Vec<Button>) {
        self.rows.push(row);
    }

    /// All buttons in render order, for assertions and dispatch loops.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Group picker: one row per group, a navigation row, an add-group row.
    pub fn group_picker(page: &Page<Group>) -> Self {
        let mut keyboard = Keyboard::default();
        for group in &page.items {
            keyboard.push_row(vec![Button::new(
                group.name(),
                CallbackToken::GroupPick(group.id()),
            )]);
        }
        keyboard.push_row(nav_row(page.page, page.max_page(), CallbackToken::GroupPage));
        keyboard.push_row(vec![add_group_button()]);
        keyboard
    }

    /// Moderation queue: a title row plus a decision row per request, then
    /// navigation. Shows a placeholder row when the queue is empty.
    pub fn moderation_queue(page: &Page<GroupRequest>) -> Self {
        let mut keyboard = Keyboard::default();
        for request in &page.items {
            keyboard.push_row(vec![Button::new(
                format!("📌 {}", request.requested_name()),
                CallbackToken::Noop,
            )]);
            keyboard.push_row(vec![
                Button::new("✅ Approve", CallbackToken::RequestApprove(request.id())),
                Button::new("❌ Reject", CallbackToken::RequestReject(request.id())),
            ]);
        }
        keyboard.push_row(nav_row(
            page.page,
            page.max_page(),
            CallbackToken::RequestPage,
        ));
        if page.items.is_empty() && page.total == 0 {
            keyboard = Keyboard::new(vec![vec![Button::new("Empty", CallbackToken::Noop)]]);
        }
        keyboard
    }

    /// Disambiguation list for an ambiguous text resolution: one row per
    /// candidate plus the add-group escape hatch.
    pub fn disambiguation(candidates: &[Group]) -> Self {
        let mut keyboard = Keyboard::default();
        for group in candidates {
            keyboard.push_row(vec![Button::new(
                group.name(),
                CallbackToken::GroupPick(group.id()),
            )]);
        }
        keyboard.push_row(vec![add_group_button()]);
        keyboard
    }
}

fn add_group_button() -> Button {
    Button::new("➕ Add group", CallbackToken::GroupRequestNew)
}

/// Navigation row: prev arrow only when a previous page exists, a noop page
/// label, next arrow only when a following page exists.
fn nav_row(page: u32, max_page: u32, to_token: fn(u32) -> CallbackToken) -> Vec<Button> {
    let mut row = Vec::new();
    if page > 0 {
        row.push(Button::new("◀️", to_token(page - 1)));
    }
    row.push(Button::new(
        format!("Page {}/{}", page + 1, max_page + 1),
        CallbackToken::Noop,
    ));
    if page < max_page {
        row.push(Button::new("▶️", to_token(page + 1)));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GroupId, RequestId, Timestamp, UserId, PAGE_SIZE};
    use crate::domain::request::RequestStatus;

    fn group(id: i64, name: &str) -> Group {
        Group::reconstitute(GroupId::new(id), name.to_string(), true)
    }

    fn request(id: i64, name: &str) -> GroupRequest {
        GroupRequest::reconstitute(
            RequestId::new(id),
            name.to_string(),
            UserId::new(10),
            RequestStatus::Pending,
            None,
            None,
            Timestamp::now(),
        )
    }

    #[test]
    fn picker_has_a_row_per_group_plus_nav_and_add() {
        let page = Page::new(vec![group(1, "Math101"), group(2, "Math102")], 0, 2);
        let keyboard = Keyboard::group_picker(&page);
        assert_eq!(keyboard.rows.len(), 4);
        assert_eq!(keyboard.rows[0][0].token, CallbackToken::GroupPick(GroupId::new(1)));
        assert_eq!(
            keyboard.rows.last().unwrap()[0].token,
            CallbackToken::GroupRequestNew
        );
    }

    #[test]
    fn picker_nav_hides_arrows_at_the_edges() {
        let total = (PAGE_SIZE * 3) as u64;

        let first = Keyboard::group_picker(&Page::new(vec![], 0, total));
        let nav = &first.rows[0];
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].label, "Page 1/3");
        assert_eq!(nav[1].token, CallbackToken::GroupPage(1));

        let middle = Keyboard::group_picker(&Page::new(vec![], 1, total));
        let nav = &middle.rows[0];
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].token, CallbackToken::GroupPage(0));
        assert_eq!(nav[2].token, CallbackToken::GroupPage(2));

        let last = Keyboard::group_picker(&Page::new(vec![], 2, total));
        let nav = &last.rows[0];
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].token, CallbackToken::GroupPage(1));
        assert_eq!(nav[1].token, CallbackToken::Noop);
    }

    #[test]
    fn moderation_queue_pairs_title_and_decision_rows() {
        let page = Page::new(vec![request(7, "Biology")], 0, 1);
        let keyboard = Keyboard::moderation_queue(&page);
        assert_eq!(keyboard.rows.len(), 3);
        assert_eq!(keyboard.rows[0][0].label, "📌 Biology");
        assert_eq!(
            keyboard.rows[1][0].token,
            CallbackToken::RequestApprove(RequestId::new(7))
        );
        assert_eq!(
            keyboard.rows[1][1].token,
            CallbackToken::RequestReject(RequestId::new(7))
        );
    }

    #[test]
    fn empty_moderation_queue_shows_placeholder() {
        let page = Page::new(vec![], 0, 0);
        let keyboard = Keyboard::moderation_queue(&page);
        assert_eq!(keyboard.rows.len(), 1);
        assert_eq!(keyboard.rows[0][0].label, "Empty");
        assert_eq!(keyboard.rows[0][0].token, CallbackToken::Noop);
    }

    #[test]
    fn disambiguation_lists_candidates_and_escape_hatch() {
        let candidates = vec![group(1, "Math101"), group(2, "Math102")];
        let keyboard = Keyboard::disambiguation(&candidates);
        assert_eq!(keyboard.rows.len(), 3);
        assert_eq!(keyboard.buttons().count(), 3);
        assert_eq!(
            keyboard.rows[2][0].token,
            CallbackToken::GroupRequestNew
        );
    }
}
