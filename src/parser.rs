use crate::controller::error::SearchApiError;

/// Ordered key/value pairs decoded from the raw query string of an inbound
/// request.
///
/// The pairs keep their original order and duplicates, so the accessors can
/// tell a single value apart from a repeated key.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decodes a raw query string (`a=1&b=2`) into its ordered pairs. A
    /// segment without `=` becomes a key with an empty value.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = match segment.split_once('=') {
                    Some((key, value)) => (key, value),
                    None => (segment, ""),
                };
                (decode_component(key), decode_component(value))
            })
            .collect();

        QueryParams { pairs }
    }

    fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.values(key).next()
    }

    /// 1-based page number from `p`. Absent, malformed, or zero values fall
    /// back to the first page.
    pub fn page(&self) -> u32 {
        self.first("p")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    /// Mandatory `repoScope` list. The scope must arrive as exactly one
    /// comma-delimited value; a missing or repeated key is a client error.
    pub fn repo_scope(&self) -> Result<Vec<String>, SearchApiError> {
        let mut values = self.values("repoScope");
        match (values.next(), values.next()) {
            (Some(value), None) => Ok(split_csv(value)),
            _ => Err(SearchApiError::InvalidRepoScope),
        }
    }

    /// Optional `langs` filter list, empty when absent.
    pub fn lang_filters(&self) -> Vec<String> {
        self.first("langs").map(split_csv).unwrap_or_default()
    }

    /// Optional `repos` filter list. The value travels percent-encoded on
    /// top of the transport encoding, so it is decoded once more before
    /// splitting.
    pub fn repo_filters(&self) -> Vec<String> {
        self.first("repos")
            .map(|raw| split_csv(&decode_component(raw)))
            .unwrap_or_default()
    }

    /// Free-text query from `q`, passed through verbatim. The backend is the
    /// one that decides what to do with an empty query.
    pub fn query(&self) -> String {
        self.first("q").unwrap_or_default().to_string()
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // Keep the raw text when the escapes are not valid UTF-8.
        Err(_) => spaced,
    }
}
