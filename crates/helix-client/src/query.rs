//! Query-string assembly.
//!
//! Parameters are emitted in the order the caller iterates them. Absent
//! parameters (and empty values) contribute nothing; the first emitted
//! fragment is prefixed with `?`, every later one with `&`.

use std::fmt::Display;

/// Value of a single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    /// Emitted as one `name=value` pair per element.
    Multi(Vec<String>),
}

impl ParamValue {
    /// Empty scalars and zero-element lists are treated as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Scalar(v) => v.is_empty(),
            ParamValue::Multi(vs) => vs.is_empty(),
        }
    }

    fn push_fragment(&self, name: &str, out: &mut String) {
        match self {
            ParamValue::Scalar(v) => push_pair(out, name, v),
            ParamValue::Multi(vs) => {
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        out.push('&');
                    }
                    push_pair(out, name, v);
                }
            }
        }
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push('=');
    out.push_str(value);
}

/// Arguments supplied by an operation, keyed by wire name.
///
/// Insertion order is irrelevant: the endpoint registry decides the
/// emission order.
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    values: Vec<(&'static str, ParamValue)>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional scalar parameter. `None` leaves it absent.
    pub fn scalar(mut self, name: &'static str, value: Option<impl Display>) -> Self {
        if let Some(v) = value {
            self.insert(name, ParamValue::Scalar(v.to_string()));
        }
        self
    }

    /// Add a scalar parameter the operation always sends.
    pub fn required(self, name: &'static str, value: impl Display) -> Self {
        self.scalar(name, Some(value))
    }

    /// Add a multi-valued parameter. An empty slice leaves it absent.
    pub fn multi<S: AsRef<str>>(mut self, name: &'static str, values: &[S]) -> Self {
        if !values.is_empty() {
            let owned = values.iter().map(|v| v.as_ref().to_string()).collect();
            self.insert(name, ParamValue::Multi(owned));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Wire names of every supplied parameter.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(n, _)| *n)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &'static str, value: ParamValue) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }
}

/// Build a query-string suffix from parameters in emission order.
///
/// Returns an empty string when nothing is present, otherwise a string
/// starting with `?`. Values are assumed to be transport-safe already.
pub fn build_query<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a ParamValue>)>,
{
    let mut query = String::new();
    for (name, value) in params {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        query.push(if query.is_empty() { '?' } else { '&' });
        value.push_fragment(name, &mut query);
    }
    query
}
