//! Reporting API URLs for a resolved range.
//!
//! Only builds the URLs; issuing the requests belongs to the HTTP client.

use url::Url;

use crate::domain::ResolvedRange;
use crate::error::{Error, Result};

/// Endpoint builder rooted at the reporting API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEndpoints {
    base: Url,
}

impl ReportEndpoints {
    /// Parse the API base URL (e.g. `http://localhost:5000/api`).
    pub fn parse(base: &str) -> Result<Self> {
        let base = Url::parse(base.trim())?;
        if base.cannot_be_a_base() {
            return Err(Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Visit logs of one user: `/visitLogs?visitLogId=..&from=..&to=..`.
    #[must_use]
    pub fn visit_logs(&self, user_id: &str, range: &ResolvedRange) -> Url {
        self.endpoint(&["visitLogs"], Some(user_id), range)
    }

    /// CSV export of one user's visit logs.
    #[must_use]
    pub fn visit_logs_download(&self, user_id: &str, range: &ResolvedRange) -> Url {
        self.endpoint(&["visitLogs", "download"], Some(user_id), range)
    }

    /// CSV export of every user's visit logs.
    #[must_use]
    pub fn all_users_download(&self, range: &ResolvedRange) -> Url {
        self.endpoint(&["visitLogs", "all-users", "download"], None, range)
    }

    /// Attendance of every user.
    #[must_use]
    pub fn attendance(&self, range: &ResolvedRange) -> Url {
        self.endpoint(&["attendance", "date", "all"], None, range)
    }

    /// One visit-log URL per user, for the multi-user report.
    pub fn fan_out<'a, I>(&self, user_ids: I, range: &ResolvedRange) -> Vec<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        user_ids
            .into_iter()
            .map(|id| self.visit_logs(id, range))
            .collect()
    }

    fn endpoint(&self, path: &[&str], user_id: Option<&str>, range: &ResolvedRange) -> Url {
        let mut url = self.base.clone();
        // parse() rejected cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }

        {
            let mut query = url.query_pairs_mut();
            if let Some(id) = user_id {
                query.append_pair("visitLogId", id);
            }
            for (key, value) in range.query_pairs() {
                query.append_pair(key, &value);
            }
        }
        url
    }
}
