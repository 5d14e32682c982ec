//! Relative path construction for facade methods.

use std::fmt::Display;

/// Builds `template?key=value&...` paths. Values are percent-encoded; flag
/// lists and id lists are comma-joined, and empty lists are skipped.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    path: String,
    params: Vec<(String, String)>,
}

impl PathBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn param_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Appends `key=a,b,c` unless `values` is empty.
    pub fn list<V: Display>(mut self, key: &str, values: &[V]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.params.push((key.to_string(), joined));
        }
        self
    }

    pub fn include<V: Display>(self, flags: &[V]) -> Self {
        self.list("include", flags)
    }

    pub fn exclude<V: Display>(self, flags: &[V]) -> Self {
        self.list("exclude", flags)
    }

    pub fn paginate(self, pagination: Option<&PaginationParameters>) -> Self {
        match pagination {
            Some(p) => p.apply(self),
            None => self,
        }
    }

    pub fn build(self) -> String {
        if self.params.is_empty() {
            return self.path;
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, separator, query)
    }
}

/// Paging controls for listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParameters {
    /// When set, the server ignores `page_size` and `page`.
    pub include_all: bool,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl PaginationParameters {
    pub fn all() -> Self {
        Self {
            include_all: true,
            ..Self::default()
        }
    }

    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            include_all: false,
            page_size: Some(page_size),
            page: Some(page),
        }
    }

    fn apply(&self, builder: PathBuilder) -> PathBuilder {
        if self.include_all {
            return builder.param("includeAll", true);
        }
        builder
            .param_opt("pageSize", self.page_size)
            .param_opt("page", self.page)
    }
}
