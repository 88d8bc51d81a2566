//! Resource shapes returned by the Trello API
//!
//! These are plain data-transfer records. Fields the crate does not model are
//! kept in `extra`, so re-encoding a resource as JSON preserves everything the
//! API returned. `id` is required: a payload without one is a decode error,
//! not an empty resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields the API returned that are not modelled explicitly
pub type Extra = Map<String, Value>;

/// A Trello board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Board ID
    pub id: String,
    /// Board name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub desc: String,
    /// Whether the board is closed (archived)
    #[serde(default)]
    pub closed: bool,
    /// Workspace the board belongs to
    #[serde(default)]
    pub id_organization: Option<String>,
    /// Full URL
    #[serde(default)]
    pub url: String,
    /// Short URL
    #[serde(default)]
    pub short_url: String,
    /// Short link identifier
    #[serde(default)]
    pub short_link: String,
    /// Timestamp of the last activity
    #[serde(default)]
    pub date_last_activity: Option<String>,
    /// Board preferences
    #[serde(default)]
    pub prefs: Option<BoardPrefs>,
    /// Custom names per label colour
    #[serde(default)]
    pub label_names: Option<Map<String, Value>>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Board preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPrefs {
    /// Visibility: private, org, public
    #[serde(default)]
    pub permission_level: String,
    /// Who may vote
    #[serde(default)]
    pub voting: String,
    /// Who may comment
    #[serde(default)]
    pub comments: String,
    /// Background identifier
    #[serde(default)]
    pub background: String,
    /// Whether card covers are shown
    #[serde(default)]
    pub card_covers: bool,
    /// Whether the board is a template
    #[serde(default)]
    pub is_template: bool,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A list (column) on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardList {
    /// List ID
    pub id: String,
    /// List name
    #[serde(default)]
    pub name: String,
    /// Whether the list is archived
    #[serde(default)]
    pub closed: bool,
    /// Board the list belongs to
    #[serde(default)]
    pub id_board: String,
    /// Position on the board
    #[serde(default)]
    pub pos: f64,
    /// Whether the member is subscribed
    #[serde(default)]
    pub subscribed: Option<bool>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card ID
    pub id: String,
    /// Board-local card number
    #[serde(default)]
    pub id_short: u64,
    /// Card name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub desc: String,
    /// Whether the card is archived
    #[serde(default)]
    pub closed: bool,
    /// Board the card belongs to
    #[serde(default)]
    pub id_board: String,
    /// List the card is in
    #[serde(default)]
    pub id_list: String,
    /// Assigned member IDs
    #[serde(default)]
    pub id_members: Vec<String>,
    /// Attached label IDs
    #[serde(default)]
    pub id_labels: Vec<String>,
    /// Attached labels
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Due date
    #[serde(default)]
    pub due: Option<String>,
    /// Whether the due date is marked complete
    #[serde(default)]
    pub due_complete: bool,
    /// Start date
    #[serde(default)]
    pub start: Option<String>,
    /// Position in the list
    #[serde(default)]
    pub pos: f64,
    /// Short link identifier
    #[serde(default)]
    pub short_link: String,
    /// Short URL
    #[serde(default)]
    pub short_url: String,
    /// Full URL
    #[serde(default)]
    pub url: String,
    /// Timestamp of the last activity
    #[serde(default)]
    pub date_last_activity: Option<String>,
    /// Summary counters
    #[serde(default)]
    pub badges: CardBadges,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Summary counters shown on a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBadges {
    /// Number of attachments
    #[serde(default)]
    pub attachments: u64,
    /// Number of check items
    #[serde(default)]
    pub check_items: u64,
    /// Number of checked check items
    #[serde(default)]
    pub check_items_checked: u64,
    /// Number of comments
    #[serde(default)]
    pub comments: u64,
    /// Whether the card has a description
    #[serde(default)]
    pub description: bool,
    /// Number of votes
    #[serde(default)]
    pub votes: u64,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A label defined on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label ID
    pub id: String,
    /// Board the label belongs to
    #[serde(default)]
    pub id_board: String,
    /// Custom name, may be empty
    #[serde(default)]
    pub name: String,
    /// Colour name, absent for colourless labels
    #[serde(default)]
    pub color: Option<String>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A Trello member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member ID
    pub id: String,
    /// Full name
    #[serde(default)]
    pub full_name: String,
    /// Username
    #[serde(default)]
    pub username: String,
    /// Email, only visible for the authenticated member
    #[serde(default)]
    pub email: Option<String>,
    /// Biography
    #[serde(default)]
    pub bio: String,
    /// Avatar URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile URL
    #[serde(default)]
    pub url: String,
    /// Boards the member belongs to
    #[serde(default)]
    pub id_boards: Vec<String>,
    /// Member type (normal, admin, ...)
    #[serde(default)]
    pub member_type: Option<String>,
    /// Whether the account is confirmed
    #[serde(default)]
    pub confirmed: Option<bool>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A workspace (organization)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization ID
    pub id: String,
    /// Short name
    #[serde(default)]
    pub name: String,
    /// Display name
    #[serde(default)]
    pub display_name: String,
    /// Description
    #[serde(default)]
    pub desc: String,
    /// URL
    #[serde(default)]
    pub url: String,
    /// Boards in the workspace
    #[serde(default)]
    pub id_boards: Vec<String>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A checklist on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Checklist ID
    pub id: String,
    /// Checklist name
    #[serde(default)]
    pub name: String,
    /// Board the checklist belongs to
    #[serde(default)]
    pub id_board: String,
    /// Card the checklist belongs to
    #[serde(default)]
    pub id_card: String,
    /// Position on the card
    #[serde(default)]
    pub pos: f64,
    /// Items
    #[serde(default)]
    pub check_items: Vec<CheckItem>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Completion state of a check item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    /// Checked
    Complete,
    /// Not checked
    Incomplete,
}

impl CheckItemState {
    /// The API string for this state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

/// An item within a checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    /// Check item ID
    pub id: String,
    /// Item text
    #[serde(default)]
    pub name: String,
    /// Completion state
    pub state: CheckItemState,
    /// Checklist the item belongs to
    #[serde(default)]
    pub id_checklist: String,
    /// Position in the checklist
    #[serde(default)]
    pub pos: f64,
    /// Due date
    #[serde(default)]
    pub due: Option<String>,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl CheckItem {
    /// Whether the item is checked
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == CheckItemState::Complete
    }
}

/// A file or link attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Attachment ID
    pub id: String,
    /// File name or link title
    #[serde(default)]
    pub name: String,
    /// URL
    #[serde(default)]
    pub url: String,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub bytes: Option<u64>,
    /// Upload date
    #[serde(default)]
    pub date: Option<String>,
    /// Whether the attachment is an uploaded file (vs. a link)
    #[serde(default)]
    pub is_upload: bool,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// An activity entry, e.g. a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Action ID
    pub id: String,
    /// Member who performed the action
    #[serde(default)]
    pub id_member_creator: String,
    /// Action type, e.g. `commentCard`
    #[serde(default, rename = "type")]
    pub kind: String,
    /// When the action happened
    #[serde(default)]
    pub date: String,
    /// Action payload (comment text, board, card, list references)
    #[serde(default)]
    pub data: Value,
    /// Other fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of a search query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching cards
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Matching boards
    #[serde(default)]
    pub boards: Vec<Board>,
    /// Matching members
    #[serde(default)]
    pub members: Vec<Member>,
    /// Other fields (search options echoed back by the API)
    #[serde(flatten)]
    pub extra: Extra,
}

impl SearchResult {
    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.boards.is_empty() && self.members.is_empty()
    }
}
