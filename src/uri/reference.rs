//! Generic component form for URI references `url::Url` cannot hold.
//!
//! `url::Url` only represents absolute URLs, and special schemes additionally
//! need a host. The empty URI, scheme-less references such as `/a?b` or
//! `//host/p`, and special URLs still waiting for their host are kept here as
//! plain components until the `url` crate accepts them.

use url::{Host, ParseError, Url};

use crate::uri::encoding;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Authority {
    pub(crate) user_info: String,
    pub(crate) host: String,
    pub(crate) port: Option<u16>,
}

impl Authority {
    /// Split `userinfo@host:port`. The host goes through `url::Host::parse`.
    fn parse(input: &str) -> Result<Self, ParseError> {
        let (user_info, host_port) = match input.rsplit_once('@') {
            Some((user_info, rest)) => (encoding::encode(user_info, encoding::PATH), rest),
            None => (String::new(), input),
        };

        // The port separator is the last ':' outside of an IPv6 literal.
        let port_start = match host_port.rfind(']') {
            Some(end) => host_port[end..].find(':').map(|i| end + i),
            None => host_port.rfind(':'),
        };
        let (host, port) = match port_start {
            Some(i) => (&host_port[..i], &host_port[i + 1..]),
            None => (host_port, ""),
        };

        let port = if port.is_empty() {
            None
        } else {
            Some(port.parse::<u16>().map_err(|_| ParseError::InvalidPort)?)
        };

        Ok(Self {
            user_info,
            host: parse_host(host)?,
            port,
        })
    }
}

/// Normalize a host the way `url::Url` would; the empty host stays empty.
pub(crate) fn parse_host(host: &str) -> Result<String, ParseError> {
    if host.is_empty() {
        return Ok(String::new());
    }
    Ok(Host::parse(host)?.to_string())
}

/// A URI reference broken into RFC 3986 components.
///
/// Component strings are stored already percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Reference {
    pub(crate) scheme: Option<String>,
    pub(crate) authority: Option<Authority>,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Reference {
    /// Split a scheme-less reference (RFC 3986, appendix B).
    pub(crate) fn parse(input: &str) -> Result<Self, ParseError> {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(Authority::parse(&after[..end])?), &after[end..])
            }
            None => (None, rest),
        };

        Ok(Self {
            scheme: None,
            authority,
            path: encoding::encode(path, encoding::PATH),
            query: query.map(|q| encoding::encode(q, encoding::QUERY)),
            fragment: fragment.map(|f| encoding::encode(f, encoding::FRAGMENT)),
        }
        .normalized())
    }

    /// Decompose a parsed URL so a component the `url` crate will not change
    /// in place (the scheme) can be swapped and the whole value reparsed.
    pub(crate) fn from_url(url: &Url) -> Self {
        let authority = url.has_authority().then(|| Authority {
            user_info: user_info_of(url),
            host: url.host_str().unwrap_or("").to_owned(),
            port: url.port(),
        });

        Self {
            scheme: Some(url.scheme().to_owned()),
            authority,
            path: url.path().to_owned(),
            query: url.query().map(str::to_owned),
            fragment: url.fragment().map(str::to_owned),
        }
    }

    /// A path following an authority must start with `/`.
    pub(crate) fn normalized(mut self) -> Self {
        if self.authority.is_some() && !self.path.is_empty() && !self.path.starts_with('/') {
            self.path.insert(0, '/');
        }
        self
    }

    /// Whether `url::Url::parse` keeps every component of this reference.
    ///
    /// Special schemes other than `file` need a host, otherwise the first
    /// path segment would be read as one. Other schemes need an authority or
    /// a path, otherwise they parse as an opaque URL that can never get a
    /// host.
    pub(crate) fn is_promotable(&self) -> bool {
        let Some(scheme) = self.scheme.as_deref() else {
            return false;
        };
        let has_host = self
            .authority
            .as_ref()
            .is_some_and(|authority| !authority.host.is_empty());

        match scheme {
            "http" | "https" | "ws" | "wss" | "ftp" => has_host,
            "file" => true,
            _ => self.authority.is_some() || !self.path.is_empty(),
        }
    }

    pub(crate) fn serialize(&self) -> String {
        let mut out = String::new();

        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }

        if let Some(authority) = &self.authority {
            out.push_str("//");
            if !authority.user_info.is_empty() {
                out.push_str(&authority.user_info);
                out.push('@');
            }
            out.push_str(&authority.host);
            if let Some(port) = authority.port {
                out.push(':');
                out.push_str(&port.to_string());
            }
        }

        // Without an authority a leading `//` would read back as a host.
        if self.authority.is_none() && self.path.starts_with("//") {
            out.push_str("/.");
        }
        out.push_str(&self.path);

        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }

        out
    }

    /// Authority to write into, created empty when missing.
    pub(crate) fn authority_mut(&mut self) -> &mut Authority {
        self.authority.get_or_insert_with(Authority::default)
    }
}

pub(crate) fn user_info_of(url: &Url) -> String {
    match url.password() {
        Some(password) => format!("{}:{}", url.username(), password),
        None => url.username().to_owned(),
    }
}
