//! Card operations

use super::{Action, Attachment, Card, Checklist, Client, Error, Params, Payload, Request};

/// Parameters for creating a card
#[derive(Debug, Clone, Default)]
pub struct NewCard {
    /// List to create the card in
    pub list_id: String,
    /// Card name
    pub name: String,
    /// Optional description
    pub desc: Option<String>,
    /// Other card parameters (`due`, `pos`, `idLabels`, ...), applied last
    pub extra: Params,
}

impl Client {
    /// Get a card by ID or short link
    pub fn get_card(&self, id: &str, params: Params) -> Result<Payload<Card>, Error> {
        self.send(&Request::get(format!("/cards/{id}")).params(params))
    }

    /// Create a card
    pub fn create_card(&self, card: &NewCard) -> Result<Payload<Card>, Error> {
        let params = Params::merge([
            Params::new()
                .set("idList", card.list_id.as_str())
                .set("name", card.name.as_str()),
            Params::new().opt("desc", card.desc.as_deref()),
            card.extra.clone(),
        ]);
        self.send(&Request::post("/cards").params(params))
    }

    /// Update a card
    pub fn update_card(&self, id: &str, params: Params) -> Result<Payload<Card>, Error> {
        self.send(&Request::put(format!("/cards/{id}")).params(params))
    }

    /// Delete a card permanently
    pub fn delete_card(&self, id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/cards/{id}")))
    }

    /// Move a card to another list, and optionally another board
    pub fn move_card(&self, id: &str, list_id: &str, board_id: Option<&str>) -> Result<Payload<Card>, Error> {
        let params = Params::new().set("idList", list_id).opt("idBoard", board_id);
        self.update_card(id, params)
    }

    /// Archive a card
    pub fn archive_card(&self, id: &str) -> Result<Payload<Card>, Error> {
        self.update_card(id, Params::new().flag("closed", Some(true)))
    }

    /// Checklists on a card
    pub fn card_checklists(&self, card_id: &str) -> Result<Payload<Vec<Checklist>>, Error> {
        self.send(&Request::get(format!("/cards/{card_id}/checklists")))
    }

    /// Attachments on a card
    pub fn card_attachments(&self, card_id: &str) -> Result<Payload<Vec<Attachment>>, Error> {
        self.send(&Request::get(format!("/cards/{card_id}/attachments")))
    }

    /// Comment on a card
    pub fn add_comment(&self, card_id: &str, text: &str) -> Result<Payload<Action>, Error> {
        let params = Params::new().set("text", text);
        self.send(&Request::post(format!("/cards/{card_id}/actions/comments")).params(params))
    }

    /// Attach a label to a card
    pub fn add_label_to_card(&self, card_id: &str, label_id: &str) -> Result<(), Error> {
        let params = Params::new().set("value", label_id);
        self.send_unit(&Request::post(format!("/cards/{card_id}/idLabels")).params(params))
    }

    /// Detach a label from a card
    pub fn remove_label_from_card(&self, card_id: &str, label_id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/cards/{card_id}/idLabels/{label_id}")))
    }

    /// Assign a member to a card
    pub fn add_member_to_card(&self, card_id: &str, member_id: &str) -> Result<(), Error> {
        let params = Params::new().set("value", member_id);
        self.send_unit(&Request::post(format!("/cards/{card_id}/idMembers")).params(params))
    }

    /// Unassign a member from a card
    pub fn remove_member_from_card(&self, card_id: &str, member_id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/cards/{card_id}/idMembers/{member_id}")))
    }
}
