//! Query-string and form-body parameters.

use url::form_urlencoded;

/// Parameters shared by every list endpoint.
///
/// Unset fields are not sent. `include` takes a comma separated list of
/// relations (`"user,project"`) and `order_by` takes `"{field},[asc|desc]"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub include: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub(crate) fn append_to(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(include) = &self.include {
            query.push(("include", include.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(order_by) = &self.order_by {
            query.push(("order_by", order_by.clone()));
        }
    }

    /// Query pairs for a list endpoint, preceded by an optional
    /// endpoint-specific filter.
    pub(crate) fn query(&self, filter: Option<(&'static str, &str)>) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some((key, value)) = filter {
            query.push((key, value.to_string()));
        }
        self.append_to(&mut query);
        query
    }
}

/// Ordered `application/x-www-form-urlencoded` body.
///
/// Booleans are sent as `1`/`0` and lists as `key[0]=..&key[1]=..`, which is
/// how the API expects form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn optional<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn flag(self, key: &str, value: bool) -> Self {
        self.field(key, if value { "1" } else { "0" })
    }

    pub fn list<V: ToString>(mut self, key: &str, values: &[V]) -> Self {
        for (index, value) in values.iter().enumerate() {
            self.pairs.push((format!("{key}[{index}]"), value.to_string()));
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}
