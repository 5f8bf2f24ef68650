use std::collections::HashSet;

use log::{debug, info};

use crate::models::Proxy;
use crate::parser::explodes::{explode, extract_links};

/// Outcome of parsing a batch of links
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub nodes: Vec<Proxy>,
    /// Lines that looked like links (contained `://`) but could not be parsed
    pub failed: usize,
}

impl ParseReport {
    pub fn parsed(&self) -> usize {
        self.nodes.len()
    }
}

/// Parse every link in order, keeping the ones that succeed
///
/// # Arguments
/// * `links` - Individual share links, usually from [`extract_links`]
///
/// # Returns
/// A [`ParseReport`] with the parsed nodes and the number of failures
pub fn parse_links<S: AsRef<str>>(links: &[S]) -> ParseReport {
    let mut report = ParseReport::default();
    for link in links {
        let link = link.as_ref();
        match explode(link) {
            Some(node) => report.nodes.push(node),
            None if link.contains("://") => report.failed += 1,
            None => debug!("Skipping non-link line: {}", link),
        }
    }
    report
}

/// Extract and parse all links in a raw subscription body
pub fn explode_content(content: &str) -> ParseReport {
    let links = extract_links(content);
    let report = parse_links(&links);
    info!(
        "Parsed {} of {} links ({} failed)",
        report.parsed(),
        links.len(),
        report.failed
    );
    report
}

/// Remove duplicate nodes
///
/// Two nodes are duplicates when their type, server, port and identity
/// (uuid or password) match. The first occurrence wins and order is kept.
///
/// # Arguments
/// * `nodes` - Nodes in subscription order
///
/// # Returns
/// The nodes with later duplicates removed
pub fn dedupe_nodes(nodes: Vec<Proxy>) -> Vec<Proxy> {
    let mut seen = HashSet::new();
    let before = nodes.len();
    let unique: Vec<Proxy> = nodes
        .into_iter()
        .filter(|node| seen.insert(node.fingerprint()))
        .collect();
    if unique.len() != before {
        debug!("Removed {} duplicate nodes", before - unique.len());
    }
    unique
}
