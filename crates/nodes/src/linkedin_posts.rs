//! LinkedIn Posts: read and engage with posts.
//!
//! Ships pointing at a local development server. Production deployments set
//! `[nodes.linkedInPosts] base_url`.

use workflow::{ApiRequest, BaseUrl, NodeError};

use crate::linkedin::{self, fields, *};
use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "linkedInPosts";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3005";

const OPERATIONS: &[&str] = &[
    GET_LATEST_POSTS,
    REACT_TO_POST,
    COMMENT_ON_POST,
    GET_POST_COMMENTS,
    GET_ALL_POST_COMMENTS,
    SEARCH_POSTS,
    SCRAPE_POST,
];

#[derive(Debug, Clone)]
pub struct LinkedInPosts {
    description: NodeDescription,
}

impl LinkedInPosts {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Fixed(DEFAULT_BASE_URL.to_owned()))
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for LinkedInPosts {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for LinkedInPosts {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        linkedin::build_request(OPERATIONS, &self.description.base_url, parameters)
    }
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let operation = FieldSpec::options(
        "operation",
        "Operation",
        vec![
            OptionSpec::described("Comment on Post", COMMENT_ON_POST, "Comment on a LinkedIn post"),
            OptionSpec::described("Get All Post Comments", GET_ALL_POST_COMMENTS, "Get all comments from a LinkedIn post with automatic pagination"),
            OptionSpec::described("Get Latest Posts", GET_LATEST_POSTS, "Get the latest posts from a LinkedIn user"),
            OptionSpec::described("Get Post Comments", GET_POST_COMMENTS, "Get comments from a LinkedIn post with optional pagination"),
            OptionSpec::described("React to Post", REACT_TO_POST, "React to a LinkedIn post with various reaction types"),
            OptionSpec::described("Scrape Post Content", SCRAPE_POST, "Scrape LinkedIn post content without authentication (public posts only)"),
            OptionSpec::described("Search Posts", SEARCH_POSTS, "Search for LinkedIn posts by keywords"),
        ],
        GET_LATEST_POSTS,
    );
    let with_account: Vec<&'static str> = OPERATIONS
        .iter()
        .copied()
        .filter(|op| *op != SCRAPE_POST)
        .collect();

    let mut specs = vec![
        operation,
        fields::account_id(&with_account),
        fields::profile_id(&[GET_LATEST_POSTS]),
        fields::profile_urn(&[GET_LATEST_POSTS]),
    ];
    specs.extend(fields::latest_posts());
    specs.push(fields::post_url());
    specs.push(fields::reaction_type());
    specs.push(fields::comment());
    specs.extend(fields::comments());
    specs.extend(fields::search(10, "Number of posts to return (1-50, default: 10)"));

    NodeDescription {
        name: NAME,
        display_name: "LinkedIn Posts",
        description: "Interact with LinkedIn posts - get latest posts, react, comment, and more",
        base_url,
        fields: specs,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn plan(values: Value) -> Result<ApiRequest, NodeError> {
        let node = LinkedInPosts::new();
        let values = values.as_object().cloned().unwrap();
        node.build_request(&Parameters::new(node.description(), values))
    }

    #[test]
    fn targets_the_local_server_by_default() {
        let node = LinkedInPosts::new();
        assert!(node.description().base_url.is_loopback());
        let request = plan(json!({"operation": "reactToPost", "postUrl": "https://www.linkedin.com/posts/x"})).unwrap();
        assert_eq!(
            request.url("https://api.connectsafely.ai"),
            "http://localhost:3005/linkedin/posts/react"
        );
    }

    #[test]
    fn comment_on_post_sends_only_post_comment_and_account() {
        let request = plan(json!({
            "operation": "commentOnPost",
            "postUrl": "https://www.linkedin.com/posts/x",
            "comment": "Agreed",
            "accountId": "acc",
            "tagPostAuthor": true,
            "companyUrn": "urn:li:fsd_company:1"
        }))
        .unwrap();
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"postUrl": "https://www.linkedin.com/posts/x", "comment": "Agreed", "accountId": "acc"})
        );
    }

    #[test]
    fn search_posts_uses_node_defaults_and_no_job_titles() {
        let request = plan(json!({"operation": "searchPosts", "keywords": "hiring"})).unwrap();
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({
                "keywords": "hiring",
                "count": 10,
                "start": 0,
                "datePosted": "any-time",
                "sortBy": "relevance"
            })
        );
    }

    #[test]
    fn offers_no_profile_or_group_operations() {
        for operation in ["fetchProfile", "getGroupMembers", "followUser"] {
            let err = plan(json!({"operation": operation})).unwrap_err();
            assert!(matches!(err, NodeError::UnknownOperation { .. }));
        }
    }
}
