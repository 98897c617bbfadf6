//! Immutable search parameters and request-URL construction.
//!
//! A [`SearchParams`] value is built fresh from UI state each time a fetch
//! is issued and passed along explicitly — there is no module-level query
//! or filter state shared between handlers.

use url::Url;

/// The query and filter selections for one search request.
///
/// Empty `cost`/`power` vectors mean "no filter on that dimension"; the
/// server receives an empty string for that parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub cost: Vec<String>,
    pub power: Vec<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, cost: Vec<String>, power: Vec<String>) -> Self {
        Self { query: query.into(), cost, power }
    }

    /// Params with a query and no filters.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    /// Build the request URL for one page of results.
    ///
    /// All four parameters are always present, in the order the server
    /// documents them; `Url` percent-encodes every value, so queries
    /// containing `&`, `#`, or spaces survive intact.
    pub fn request_url(&self, base: &Url, page: u32) -> Result<Url, url::ParseError> {
        let mut url = base.join("search_dynamic")?;
        url.query_pairs_mut()
            .append_pair("query", &self.query)
            .append_pair("cost", &self.cost.join(","))
            .append_pair("power", &self.power.join(","))
            .append_pair("page", &page.to_string());
        Ok(url)
    }
}
