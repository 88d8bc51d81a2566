//! Checklist and check item operations

use super::{CheckItem, CheckItemState, Checklist, Client, Error, Params, Payload, Request};

impl Client {
    /// Get a checklist by ID
    pub fn get_checklist(&self, id: &str) -> Result<Payload<Checklist>, Error> {
        self.send(&Request::get(format!("/checklists/{id}")))
    }

    /// Create a checklist on a card
    pub fn create_checklist(&self, card_id: &str, name: &str) -> Result<Payload<Checklist>, Error> {
        let params = Params::new().set("idCard", card_id).set("name", name);
        self.send(&Request::post("/checklists").params(params))
    }

    /// Delete a checklist and its items
    pub fn delete_checklist(&self, id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/checklists/{id}")))
    }

    /// Add an item to a checklist
    pub fn create_check_item(&self, checklist_id: &str, name: &str) -> Result<Payload<CheckItem>, Error> {
        let params = Params::new().set("name", name);
        self.send(&Request::post(format!("/checklists/{checklist_id}/checkItems")).params(params))
    }

    /// Check or uncheck an item
    pub fn update_check_item(
        &self,
        card_id: &str,
        checklist_id: &str,
        item_id: &str,
        state: CheckItemState,
    ) -> Result<Payload<CheckItem>, Error> {
        let params = Params::new()
            .set("state", state.as_str())
            .set("idChecklist", checklist_id);
        self.send(
            &Request::put(format!("/cards/{card_id}/checklist/{checklist_id}/checkItem/{item_id}"))
                .params(params),
        )
    }
}
