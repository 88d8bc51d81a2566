//! Member operations
//!
//! Every operation takes a member ID or username; `me` is the authenticated
//! member.

use super::{Board, Card, Client, Error, Member, Organization, Params, Payload, Request};

impl Client {
    /// Get a member profile
    pub fn get_member(&self, id_or_username: &str, params: Params) -> Result<Payload<Member>, Error> {
        self.send(&Request::get(format!("/members/{id_or_username}")).params(params))
    }

    /// Boards of a member
    pub fn member_boards(&self, id_or_username: &str, filter: Option<&str>) -> Result<Payload<Vec<Board>>, Error> {
        let params = Params::new().opt("filter", filter);
        self.send(&Request::get(format!("/members/{id_or_username}/boards")).params(params))
    }

    /// Cards assigned to a member
    pub fn member_cards(&self, id_or_username: &str, filter: Option<&str>) -> Result<Payload<Vec<Card>>, Error> {
        let params = Params::new().opt("filter", filter);
        self.send(&Request::get(format!("/members/{id_or_username}/cards")).params(params))
    }

    /// Workspaces of a member
    pub fn member_organizations(&self, id_or_username: &str) -> Result<Payload<Vec<Organization>>, Error> {
        self.send(&Request::get(format!("/members/{id_or_username}/organizations")))
    }
}
