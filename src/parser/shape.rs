//! Recognized log line shapes.
//!
//! Two line layouts carry request timings:
//!
//! ```text
//! 2015-08-19 00:06:42,375 (http--0.0.0.0-28080-370) [] updateSubscriptionFromBackend 300109921258 in 243
//! 2015-08-19 05:06:39,679 (http--0.0.0.0-28080-297) [USER:300406591035] /mobilityServices.do?action=SERVICES&msisdn=300406591035 in 46
//! ```
//!
//! The first names the resource directly, the second carries it in the
//! `action=` query parameter of a request path. Every shape captures the same
//! three fields: timestamp, resource and duration.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Timestamp prefix shared by all shapes: `yyyy-MM-dd HH:mm:ss,SSS`.
const TIMESTAMP_PATTERN: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}";

/// Any character except a line terminator (`\n`, `\r`, NEL, LS, PS).
const ANY: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]";

/// Anything but ASCII whitespace. Non-ASCII spaces such as U+00A0 count as
/// part of a request path.
const NON_SPACE: &str = r"[^ \t\n\x0B\x0C\r]";

static RESOURCE_LINE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^({TIMESTAMP_PATTERN}) \({ANY}*\) \[{ANY}*\] ([a-z][A-Za-z0-9_]*) {ANY}*in ([0-9]+)$"
    ))
});

static ACTION_URI_LINE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^({TIMESTAMP_PATTERN}) \({ANY}*\) \[{ANY}+\] /{NON_SPACE}*action=([A-Za-z0-9_]+){NON_SPACE}* in ([0-9]+)$"
    ))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("line shape pattern must compile")
}

/// A line layout the parser understands.
///
/// Shapes are tried in [`LineShape::ALL`] order and the first one that
/// matches a line wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineShape {
    /// `<ts> (<thread>) [<context>] <resource> <free text> in <ms>`
    ///
    /// The resource must start with a lowercase letter. The context may be empty.
    Resource,
    /// `<ts> (<thread>) [<context>] /<path>?...action=<name>... in <ms>`
    ///
    /// The resource is the `action` query value. The context must not be empty.
    ActionUri,
}

impl LineShape {
    /// All shapes in match priority order.
    pub const ALL: [LineShape; 2] = [LineShape::Resource, LineShape::ActionUri];

    /// Short name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            LineShape::Resource => "resource",
            LineShape::ActionUri => "action-uri",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            LineShape::Resource => &RESOURCE_LINE,
            LineShape::ActionUri => &ACTION_URI_LINE,
        }
    }

    /// Match a line against this shape and return its raw captures.
    ///
    /// Returns `None` unless the whole line matches and all three captures
    /// are non-empty.
    pub fn extract(self, line: &str) -> Option<Extraction<'_>> {
        let caps = self.pattern().captures(line)?;
        let timestamp = caps.get(1)?.as_str();
        let resource = caps.get(2)?.as_str();
        let duration = caps.get(3)?.as_str();

        if timestamp.is_empty() || resource.is_empty() || duration.is_empty() {
            return None;
        }

        Some(Extraction {
            shape: self,
            timestamp,
            resource,
            duration,
        })
    }

    /// Try every shape in priority order and return the first extraction.
    pub fn classify(line: &str) -> Option<Extraction<'_>> {
        Self::ALL.iter().find_map(|shape| shape.extract(line))
    }
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, still unconverted captures of a matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub shape: LineShape,
    pub timestamp: &'a str,
    pub resource: &'a str,
    pub duration: &'a str,
}
