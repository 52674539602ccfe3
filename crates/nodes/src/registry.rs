//! Lookup of nodes by registry name.

use std::collections::HashMap;

use thiserror::Error;
use workflow::BaseUrl;

use crate::node::Node;
use crate::{
    analytics::{self, ConnectSafelyAnalytics},
    automation::{self, LinkedInAutomation},
    connect_safely::{self, ConnectSafely},
    connect_safely_linkedin::{self, ConnectSafelyLinkedIn},
    linkedin_actions::{self, LinkedInActions},
    linkedin_posts::{self, LinkedInPosts},
    linkedin_profiles::{self, LinkedInProfiles},
};

/// Registry names in catalogue order.
pub const NODE_NAMES: [&str; 7] = [
    connect_safely::NAME,
    connect_safely_linkedin::NAME,
    linkedin_posts::NAME,
    linkedin_actions::NAME,
    linkedin_profiles::NAME,
    analytics::NAME,
    automation::NAME,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown node '{0}'. Available nodes: {available}", available = NODE_NAMES.join(", "))]
    UnknownNode(String),
}

/// Every node in the catalogue, constructed once.
pub struct NodeRegistry {
    nodes: Vec<Box<dyn Node>>,
}

impl NodeRegistry {
    /// All nodes with their built-in base URLs.
    pub fn new() -> Self {
        Self::with_overrides(&HashMap::new())
    }

    /// All nodes; any node named in `overrides` uses the given base URL instead.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let nodes = vec![
            build(overrides, connect_safely::NAME, ConnectSafely::new, ConnectSafely::with_base_url),
            build(
                overrides,
                connect_safely_linkedin::NAME,
                ConnectSafelyLinkedIn::new,
                ConnectSafelyLinkedIn::with_base_url,
            ),
            build(overrides, linkedin_posts::NAME, LinkedInPosts::new, LinkedInPosts::with_base_url),
            build(overrides, linkedin_actions::NAME, LinkedInActions::new, LinkedInActions::with_base_url),
            build(
                overrides,
                linkedin_profiles::NAME,
                LinkedInProfiles::new,
                LinkedInProfiles::with_base_url,
            ),
            build(
                overrides,
                analytics::NAME,
                ConnectSafelyAnalytics::new,
                ConnectSafelyAnalytics::with_base_url,
            ),
            build(
                overrides,
                automation::NAME,
                LinkedInAutomation::new,
                LinkedInAutomation::with_base_url,
            ),
        ];
        Self { nodes }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Node, RegistryError> {
        self.nodes
            .iter()
            .find(|node| node.description().name == name)
            .map(|node| node.as_ref())
            .ok_or_else(|| RegistryError::UnknownNode(name.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Node> {
        self.nodes.iter().map(|node| node.as_ref())
    }
}

fn build<N: Node + 'static>(
    overrides: &HashMap<String, String>,
    name: &str,
    default: fn() -> N,
    with_base_url: fn(BaseUrl) -> N,
) -> Box<dyn Node> {
    match overrides.get(name) {
        Some(url) => Box::new(with_base_url(BaseUrl::Fixed(url.clone()))),
        None => Box::new(default()),
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_every_node_in_order() {
        let registry = NodeRegistry::new();
        let names: Vec<&str> = registry.iter().map(|n| n.description().name).collect();
        assert_eq!(names, NODE_NAMES.to_vec());
    }

    #[test]
    fn built_in_base_urls() {
        let registry = NodeRegistry::new();
        let base = |name| registry.get(name).unwrap().description().base_url.clone();
        assert_eq!(base("connectSafely"), BaseUrl::Credential);
        assert_eq!(base("connectSafelyAnalytics"), BaseUrl::Credential);
        assert_eq!(base("linkedInAutomation"), BaseUrl::Credential);
        assert_eq!(base("connectSafelyLinkedIn"), BaseUrl::Fixed("https://api.connectsafely.ai".into()));
        assert_eq!(base("linkedInActions"), BaseUrl::Fixed("https://api.connectsafely.ai".into()));
        assert_eq!(base("linkedInPosts"), BaseUrl::Fixed("http://localhost:3005".into()));
        assert_eq!(base("linkedInProfiles"), BaseUrl::Fixed("http://localhost:3005".into()));
    }

    #[test]
    fn overrides_replace_base_url() {
        let overrides = HashMap::from([("linkedInPosts".to_owned(), "https://posts.internal".to_owned())]);
        let registry = NodeRegistry::with_overrides(&overrides);
        assert_eq!(
            registry.get("linkedInPosts").unwrap().description().base_url,
            BaseUrl::Fixed("https://posts.internal".into())
        );
        assert!(registry.get("linkedInProfiles").unwrap().description().base_url.is_loopback());
    }

    #[test]
    fn unknown_node_lists_alternatives() {
        let registry = NodeRegistry::new();
        let err = registry.get("slack").err().unwrap();
        assert!(err.to_string().starts_with("Unknown node 'slack'. Available nodes: connectSafely, "));
    }
}
