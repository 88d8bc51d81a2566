//! List operations

use super::{BoardList, Card, Client, Error, Params, Payload, Request};

impl Client {
    /// Get a list by ID
    pub fn get_list(&self, id: &str) -> Result<Payload<BoardList>, Error> {
        self.send(&Request::get(format!("/lists/{id}")))
    }

    /// Create a list on a board. `pos` is `top`, `bottom` or a positive number.
    pub fn create_list(&self, name: &str, board_id: &str, pos: Option<&str>) -> Result<Payload<BoardList>, Error> {
        let params = Params::merge([
            Params::new().set("name", name).set("idBoard", board_id),
            Params::new().opt("pos", pos),
        ]);
        self.send(&Request::post("/lists").params(params))
    }

    /// Update a list
    pub fn update_list(&self, id: &str, params: Params) -> Result<Payload<BoardList>, Error> {
        self.send(&Request::put(format!("/lists/{id}")).params(params))
    }

    /// Archive (`true`) or reopen (`false`) a list
    pub fn archive_list(&self, id: &str, archived: bool) -> Result<Payload<BoardList>, Error> {
        let params = Params::new().flag("value", Some(archived));
        self.send(&Request::put(format!("/lists/{id}/closed")).params(params))
    }

    /// Cards in a list
    pub fn list_cards(&self, list_id: &str, filter: Option<&str>) -> Result<Payload<Vec<Card>>, Error> {
        let params = Params::new().opt("filter", filter);
        self.send(&Request::get(format!("/lists/{list_id}/cards")).params(params))
    }
}
