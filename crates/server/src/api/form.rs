/// Decoded `application/x-www-form-urlencoded` pairs, used for both query
/// strings and POST bodies.
///
/// Keys may repeat; lookups return the first non-empty value so that
/// `?location=&location=Tucson, Arizona` resolves to the second entry.
pub(crate) struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub(crate) fn parse(input: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(input).into_owned().collect(),
        }
    }

    pub(crate) fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}
