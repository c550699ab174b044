use super::compose_document::ComposeValue;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A host port number (1..=65535)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    pub fn new(value: u16) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The next port number, or `None` past 65535
    pub fn next(self) -> Option<Port> {
        self.0.checked_add(1).map(Port)
    }

    /// Normalizes one element of a `ports:` list into the host ports it publishes.
    ///
    /// Short syntax: only the text before the first `:` is the host part
    /// (`"3306:3306"` and `"3306"` are the same port). A `/tcp` or `/udp`
    /// suffix is dropped and a `3307-3309` range yields every port it covers.
    /// Long syntax: the `published` key is normalized the same way.
    pub fn from_entry(entry: &ComposeValue) -> Result<Vec<Port>, MalformedPort> {
        match entry {
            ComposeValue::Scalar(raw) => Self::from_short_syntax(raw),
            ComposeValue::Mapping(_) => match entry.get("published").and_then(|p| p.as_scalar()) {
                Some(published) => Self::from_short_syntax(published),
                None => Err(MalformedPort::new(
                    entry.to_string(),
                    "long syntax entry has no published port",
                )),
            },
            other => Err(MalformedPort::new(
                other.to_string(),
                "expected a port number or a host:container string",
            )),
        }
    }

    fn from_short_syntax(raw: &str) -> Result<Vec<Port>, MalformedPort> {
        let host = raw.split(':').next().unwrap_or_default();
        let host = host.split('/').next().unwrap_or_default().trim();

        let parse = |text: &str| -> Result<Port, MalformedPort> {
            let text = text.trim();
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MalformedPort::new(
                    raw,
                    format!("host port [{}] is not a number or a range", host),
                ));
            }
            text.parse::<u16>()
                .ok()
                .and_then(Port::new)
                .ok_or_else(|| MalformedPort::new(raw, "port must be between 1 and 65535"))
        };

        match host.split_once('-') {
            None => parse(host).map(|port| vec![port]),
            Some((first, last)) => {
                let (first, last) = (parse(first)?, parse(last)?);
                if first > last {
                    return Err(MalformedPort::new(
                        raw,
                        format!("port range [{}] ends before it starts", host),
                    ));
                }
                Ok((first.value()..=last.value()).map(Port).collect())
            }
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A port value that could not be normalized; reported and left out of the port set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPort {
    pub raw: String,
    pub reason: String,
}

impl MalformedPort {
    fn new(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MalformedPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed port value [{}]: {}", self.raw, self.reason)
    }
}

/// A port together with the compose file that declared it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    port: Port,
    file: PathBuf,
}

impl PortRecord {
    pub fn new(port: Port, file: PathBuf) -> Self {
        Self { port, file }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
