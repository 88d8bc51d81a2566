//! Global search

use super::{Client, Error, Params, Payload, Request, SearchResult};

const CARD_FIELDS: &str = "id,name,idBoard,idList,shortUrl,labels,due,dueComplete";
const BOARD_FIELDS: &str = "id,name,shortUrl,closed";

/// A search request
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Search terms
    pub query: String,
    /// Model types to search (cards, boards, members). Empty means all.
    pub model_types: Vec<String>,
    /// Maximum results per type; 0 keeps the API default
    pub limit: u32,
}

impl SearchQuery {
    /// Build the query parameters for this search
    #[must_use]
    pub fn params(&self) -> Params {
        let model_types = if self.model_types.is_empty() {
            "all".to_string()
        } else {
            self.model_types.join(",")
        };

        let limits = if self.limit > 0 {
            let limit = self.limit.to_string();
            Params::new()
                .set("cards_limit", limit.as_str())
                .set("boards_limit", limit.as_str())
                .set("members_limit", limit)
        } else {
            Params::new()
        };

        Params::merge([
            Params::new().set("query", self.query.as_str()).set("modelTypes", model_types),
            limits,
            Params::new()
                .set("card_fields", CARD_FIELDS)
                .set("board_fields", BOARD_FIELDS),
        ])
    }
}

impl Client {
    /// Search cards, boards and members
    pub fn search(&self, query: &SearchQuery) -> Result<Payload<SearchResult>, Error> {
        self.send(&Request::get("/search").params(query.params()))
    }
}
