//! Extraction of the announced release from the forum thread.
//!
//! The thread is searched text node by text node in document order. Both lookups are anchored at
//! the start of a node: the release post starts a line with the version and another one with the
//! magnet link.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node};

use crate::{Error, VersionToken};

static MAGNET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^magnet:\?").expect("Invalid magnet pattern"));

/// A parsed document that can be walked text node by text node.
pub trait TextNodes {
    /// Iterates over all text nodes in document order.
    fn text_nodes(&self) -> impl Iterator<Item = &str>;

    /// Returns the first text node satisfying `predicate`.
    fn first_text_node<P>(&self, mut predicate: P) -> Option<&str>
    where
        P: FnMut(&str) -> bool,
    {
        self.text_nodes().find(|text| predicate(*text))
    }
}

impl TextNodes for Html {
    fn text_nodes(&self) -> impl Iterator<Item = &str> {
        self.tree.root().descendants().filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
    }
}

/// The release announced in the thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Announced version.
    pub version: VersionToken,
    /// Magnet link of the release torrent.
    pub magnet: String,
}

/// Parses the fetched thread HTML.
pub fn parse_thread(html: &str) -> Html {
    Html::parse_document(html)
}

/// Returns the version of the first text node that starts with `vNN.NN`.
pub fn thread_version<D: TextNodes>(document: &D) -> Option<VersionToken> {
    document
        .text_nodes()
        .find_map(VersionToken::leading)
}

/// Returns the first text node that starts with `magnet:?`, trimmed.
pub fn magnet_link<D: TextNodes>(document: &D) -> Option<String> {
    document
        .first_text_node(|text| MAGNET_PATTERN.is_match(text))
        .map(|text| text.trim().to_string())
}

/// Extracts version and magnet link; both are required.
pub fn release<D: TextNodes>(document: &D) -> Result<Release, Error> {
    let version = thread_version(document).ok_or(Error::MissingVersion)?;
    let magnet = magnet_link(document).ok_or(Error::MissingMagnet)?;
    Ok(Release { version, magnet })
}
