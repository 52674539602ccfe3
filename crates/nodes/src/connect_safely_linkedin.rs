//! ConnectSafely LinkedIn: every LinkedIn operation in one node.

use workflow::{ApiRequest, BaseUrl, NodeError, DEFAULT_BASE_URL};

use crate::linkedin::{self, fields, *};
use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "connectSafelyLinkedIn";

const OPERATIONS: &[&str] = &[
    FOLLOW_USER,
    SEND_MESSAGE,
    SEND_CONNECTION_REQUEST,
    CHECK_RELATIONSHIP,
    GET_LATEST_POSTS,
    REACT_TO_POST,
    COMMENT_ON_POST,
    GET_POST_COMMENTS,
    GET_ALL_POST_COMMENTS,
    SEARCH_POSTS,
    SCRAPE_POST,
    FETCH_PROFILE,
    GET_ORGANIZATIONS,
    GET_GROUP_MEMBERS,
    GET_GROUP_MEMBERS_BY_URL,
];

#[derive(Debug, Clone)]
pub struct ConnectSafelyLinkedIn {
    description: NodeDescription,
}

impl ConnectSafelyLinkedIn {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Fixed(DEFAULT_BASE_URL.to_owned()))
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for ConnectSafelyLinkedIn {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ConnectSafelyLinkedIn {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        linkedin::build_request(OPERATIONS, &self.description.base_url, parameters)
    }
}

fn operation_selector() -> FieldSpec {
    FieldSpec::options(
        "operation",
        "Operation",
        vec![
            OptionSpec::described("Check Relationship Status", CHECK_RELATIONSHIP, "Check relationship status with a LinkedIn user"),
            OptionSpec::described("Comment on Post", COMMENT_ON_POST, "Comment on a LinkedIn post"),
            OptionSpec::described("Fetch Profile", FETCH_PROFILE, "Fetch detailed information about a LinkedIn profile"),
            OptionSpec::described("Follow User", FOLLOW_USER, "Follow or unfollow a LinkedIn user"),
            OptionSpec::described("Get All Post Comments", GET_ALL_POST_COMMENTS, "Get all comments from a LinkedIn post with automatic pagination"),
            OptionSpec::described("Get Group Members", GET_GROUP_MEMBERS, "Fetch members of a LinkedIn group by group ID"),
            OptionSpec::described("Get Group Members by URL", GET_GROUP_MEMBERS_BY_URL, "Fetch members of a LinkedIn group using the group URL"),
            OptionSpec::described("Get Latest Posts", GET_LATEST_POSTS, "Get the latest posts from a LinkedIn user"),
            OptionSpec::described("Get Organizations", GET_ORGANIZATIONS, "Get all LinkedIn organizations/company pages that the user manages"),
            OptionSpec::described("Get Post Comments", GET_POST_COMMENTS, "Get comments from a LinkedIn post with optional pagination"),
            OptionSpec::described("React to Post", REACT_TO_POST, "React to a LinkedIn post with various reaction types"),
            OptionSpec::described("Scrape Post Content", SCRAPE_POST, "Scrape LinkedIn post content without authentication (public posts only)"),
            OptionSpec::described("Search Posts", SEARCH_POSTS, "Search for LinkedIn posts by keywords"),
            OptionSpec::described("Send Connection Request", SEND_CONNECTION_REQUEST, "Send a connection request to a LinkedIn user"),
            OptionSpec::described("Send Message", SEND_MESSAGE, "Send a message to a LinkedIn user"),
        ],
        GET_LATEST_POSTS,
    )
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let with_account: Vec<&'static str> = OPERATIONS
        .iter()
        .copied()
        .filter(|op| *op != SCRAPE_POST)
        .collect();

    let mut specs = vec![
        operation_selector(),
        fields::account_id(&with_account),
        fields::profile_id(&[
            FOLLOW_USER,
            SEND_CONNECTION_REQUEST,
            CHECK_RELATIONSHIP,
            GET_LATEST_POSTS,
            FETCH_PROFILE,
        ]),
        fields::profile_urn(&[FOLLOW_USER, SEND_CONNECTION_REQUEST, GET_LATEST_POSTS]),
    ];
    specs.extend(fields::actions());
    specs.extend(fields::latest_posts());
    specs.push(fields::post_url());
    specs.push(fields::reaction_type());
    specs.push(fields::comment());
    specs.extend(fields::comment_identity());
    specs.extend(fields::comments());
    specs.extend(fields::search(50, "Number of posts to return (1-500, default: 50)"));
    specs.push(fields::author_job_titles());
    specs.extend(fields::profile_details(&[FETCH_PROFILE]));
    specs.extend(fields::groups());

    NodeDescription {
        name: NAME,
        display_name: "ConnectSafely LinkedIn",
        description: "Comprehensive LinkedIn automation - actions, posts, profiles, organizations, and groups",
        base_url,
        fields: specs,
    }
}
