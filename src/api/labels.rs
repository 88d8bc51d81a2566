//! Label operations

use super::{Client, Error, Label, Params, Payload, Request};

impl Client {
    /// Get a label by ID
    pub fn get_label(&self, id: &str) -> Result<Payload<Label>, Error> {
        self.send(&Request::get(format!("/labels/{id}")))
    }

    /// Create a label on a board
    pub fn create_label(&self, board_id: &str, name: &str, color: &str) -> Result<Payload<Label>, Error> {
        let params = Params::new()
            .set("idBoard", board_id)
            .set("name", name)
            .set("color", color);
        self.send(&Request::post("/labels").params(params))
    }

    /// Delete a label
    pub fn delete_label(&self, id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/labels/{id}")))
    }
}
