/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Router abstraction used by the login redirect.

use reqwest::Url;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

// Placeholder origin for query encoding; never requested.
const ROUTE_ORIGIN: &str = "http://route.local";

/// Application route: a path plus query pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route path, e.g. `/login`
    pub path: String,
    /// Query pairs in insertion order
    pub query: Vec<(String, String)>,
}

impl Route {
    /// Route without query
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parses a full path such as `/orders?page=2`
    ///
    /// Query values are percent-decoded.
    #[must_use]
    pub fn parse(full_path: &str) -> Self {
        let Some((path, query)) = full_path.split_once('?') else {
            return Self::new(full_path);
        };
        let query = match Url::parse(ROUTE_ORIGIN) {
            Ok(mut url) => {
                url.set_query(Some(query));
                url.query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            }
            Err(_) => Vec::new(),
        };
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Appends a query pair
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value of the query parameter `key`
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path followed by the encoded query string, if any
    #[must_use]
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let Ok(mut url) = Url::parse(ROUTE_ORIGIN) else {
            return self.path.clone();
        };
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        match url.query() {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Application router
pub trait Navigator: Send + Sync {
    /// Full path (path and query) of the current route
    fn current_full_path(&self) -> String;

    /// Navigates to `route` replacing the current history entry
    fn replace(&self, route: Route);

    /// Navigates to `route` adding a history entry
    fn push(&self, route: Route);
}

/// In-process [`Navigator`] keeping a history stack
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Route::new("/"))
    }
}

impl HistoryNavigator {
    /// Creates a navigator whose history starts at `initial`
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            history: Mutex::new(vec![initial]),
        }
    }

    /// Current route
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Copy of the whole history, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn current_full_path(&self) -> String {
        self.current()
            .map(|route| route.full_path())
            .unwrap_or_else(|| "/".to_string())
    }

    fn replace(&self, route: Route) {
        debug!("Navigation replace -> {}", route.full_path());
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        match history.last_mut() {
            Some(current) => *current = route,
            None => history.push(route),
        }
    }

    fn push(&self, route: Route) {
        debug!("Navigation push -> {}", route.full_path());
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
