// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

// Remote endpoints exposed by the batch-processing service.

use std::fmt::Display;

use reqwest::Method;
use url::Url;

use super::error::ClientError;
use super::types::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    Process,
    Progress(&'a JobId),
    AllProgress,
    Status,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Process => Method::POST,
            Endpoint::Progress(_) | Endpoint::AllProgress | Endpoint::Status => Method::GET,
        }
    }

    fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Process => vec!["process"],
            Endpoint::Progress(job_id) => vec!["progress", job_id.as_str()],
            Endpoint::AllProgress => vec!["progress"],
            Endpoint::Status => vec!["status"],
        }
    }

    /// Resolves the endpoint against `base_url`, keeping the base path.
    ///
    /// Each segment is percent-encoded on its own, so a job id containing
    /// `/`, `?` or whitespace stays a single path segment.
    pub fn url(&self, base_url: &Url) -> Result<Url, ClientError> {
        let mut url = base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::local(format!("Base URL cannot carry a path: {base_url}")))?;
            path.pop_if_empty();
            path.extend(self.segments());
        }
        Ok(url)
    }
}

impl Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8080/api/movie-rating").unwrap()
    }

    #[test]
    fn methods_match_service_contract() {
        let id = JobId::new("abc123").unwrap();
        assert_eq!(Endpoint::Process.method(), Method::POST);
        assert_eq!(Endpoint::Progress(&id).method(), Method::GET);
        assert_eq!(Endpoint::AllProgress.method(), Method::GET);
        assert_eq!(Endpoint::Status.method(), Method::GET);
    }

    #[test]
    fn paths_are_appended_to_base_path() {
        let id = JobId::new("abc123").unwrap();
        assert_eq!(
            Endpoint::Progress(&id).url(&base()).unwrap().as_str(),
            "http://localhost:8080/api/movie-rating/progress/abc123"
        );
        assert_eq!(
            Endpoint::Process.url(&base()).unwrap().as_str(),
            "http://localhost:8080/api/movie-rating/process"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let base = Url::parse("http://localhost:8080/api/movie-rating/").unwrap();
        assert_eq!(
            Endpoint::Status.url(&base).unwrap().as_str(),
            "http://localhost:8080/api/movie-rating/status"
        );

        let root = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(Endpoint::AllProgress.url(&root).unwrap().as_str(), "http://localhost:8080/progress");
    }

    #[test]
    fn job_id_is_encoded_as_one_segment() {
        let id = JobId::new("a/b c?d").unwrap();
        let url = Endpoint::Progress(&id).url(&base()).unwrap();
        assert_eq!(url.path(), "/api/movie-rating/progress/a%2Fb%20c%3Fd");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn dotted_job_ids_keep_their_segment() {
        for raw in ["...", "a..b", ".x"] {
            let id = JobId::new(raw).unwrap();
            let url = Endpoint::Progress(&id).url(&base()).unwrap();
            let last = url.path_segments().unwrap().last().unwrap().to_string();
            assert_ne!(url.path(), "/api/movie-rating/progress", "id {raw}");
            assert_ne!(last, "progress", "id {raw}");
        }

        let id = JobId::new("...").unwrap();
        assert_eq!(
            Endpoint::Progress(&id).url(&base()).unwrap().path(),
            "/api/movie-rating/progress/..."
        );
    }

    #[test]
    fn dot_segment_job_ids_cannot_reach_another_endpoint() {
        assert!(JobId::new(".").unwrap_err().is_local());
        assert!(JobId::new("..").unwrap_err().is_local());
    }

    #[test]
    fn display_is_the_relative_path() {
        let id = JobId::new("abc123").unwrap();
        assert_eq!(Endpoint::Progress(&id).to_string(), "/progress/abc123");
        assert_eq!(Endpoint::AllProgress.to_string(), "/progress");
    }

    #[test]
    fn cannot_be_a_base_url_is_local_error() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        let err = Endpoint::Status.url(&base).unwrap_err();
        assert!(err.is_local());
    }
}
