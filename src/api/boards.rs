//! Board operations

use super::{Board, BoardList, Card, Client, Error, Label, Member, Params, Payload, Request};

/// Parameters for creating a board
#[derive(Debug, Clone, Default)]
pub struct NewBoard {
    /// Board name
    pub name: String,
    /// Optional description
    pub desc: Option<String>,
    /// Workspace to create the board in
    pub organization: Option<String>,
    /// Visibility: private, org, public
    pub permission_level: Option<String>,
    /// Any other board parameters, applied last
    pub extra: Params,
}

impl Client {
    /// Get a board by ID or short link
    pub fn get_board(&self, id: &str, params: Params) -> Result<Payload<Board>, Error> {
        self.send(&Request::get(format!("/boards/{id}")).params(params))
    }

    /// List the authenticated member's boards
    pub fn my_boards(&self, filter: Option<&str>) -> Result<Payload<Vec<Board>>, Error> {
        self.member_boards("me", filter)
    }

    /// Create a board
    pub fn create_board(&self, board: &NewBoard) -> Result<Payload<Board>, Error> {
        let params = Params::merge([
            Params::new().set("name", board.name.as_str()),
            Params::new()
                .opt("desc", board.desc.as_deref())
                .opt("idOrganization", board.organization.as_deref())
                .opt("prefs_permissionLevel", board.permission_level.as_deref()),
            board.extra.clone(),
        ]);
        self.send(&Request::post("/boards").params(params))
    }

    /// Update a board
    pub fn update_board(&self, id: &str, params: Params) -> Result<Payload<Board>, Error> {
        self.send(&Request::put(format!("/boards/{id}")).params(params))
    }

    /// Delete a board permanently
    pub fn delete_board(&self, id: &str) -> Result<(), Error> {
        self.send_unit(&Request::delete(format!("/boards/{id}")))
    }

    /// Lists on a board
    pub fn board_lists(&self, board_id: &str, filter: Option<&str>) -> Result<Payload<Vec<BoardList>>, Error> {
        let params = Params::new().opt("filter", filter);
        self.send(&Request::get(format!("/boards/{board_id}/lists")).params(params))
    }

    /// Cards on a board
    pub fn board_cards(&self, board_id: &str, filter: Option<&str>) -> Result<Payload<Vec<Card>>, Error> {
        let params = Params::new().opt("filter", filter);
        self.send(&Request::get(format!("/boards/{board_id}/cards")).params(params))
    }

    /// Members of a board
    pub fn board_members(&self, board_id: &str) -> Result<Payload<Vec<Member>>, Error> {
        self.send(&Request::get(format!("/boards/{board_id}/members")))
    }

    /// Labels defined on a board
    pub fn board_labels(&self, board_id: &str) -> Result<Payload<Vec<Label>>, Error> {
        self.send(&Request::get(format!("/boards/{board_id}/labels")))
    }
}
