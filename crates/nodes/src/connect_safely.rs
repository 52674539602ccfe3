//! ConnectSafely: posts, comments, connections and profile analytics, chosen
//! by resource then operation. Requests go to the credential's base URL.

use serde_json::{Number, Value};
use workflow::{ApiRequest, BaseUrl, JsonBody, NodeError};

use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "connectSafely";

/// The resource/operation pairs this node understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectSafelyOperation {
    BoostPost {
        post_url: String,
        duration: Number,
        budget: Number,
    },
    PostAnalytics {
        post_url: String,
    },
    AutoComment {
        post_url: String,
        comment: String,
    },
    SendConnectionRequest {
        profile_url: String,
        message: Option<String>,
    },
    ProfileAnalytics {
        range: String,
    },
}

impl ConnectSafelyOperation {
    pub fn parse(p: &Parameters<'_>) -> Result<Self, NodeError> {
        let resource = p.string("resource")?;
        let operation = p.operation()?;
        let unknown = || NodeError::UnknownOperation {
            operation: operation.clone(),
        };

        match resource.as_str() {
            "post" => match operation.as_str() {
                "boost" => Ok(Self::BoostPost {
                    post_url: p.required_string("postUrl")?,
                    duration: p.number("boostDuration")?,
                    budget: p.number("boostBudget")?,
                }),
                "getAnalytics" => Ok(Self::PostAnalytics {
                    post_url: p.required_string("postUrl")?,
                }),
                _ => Err(unknown()),
            },
            "comment" => match operation.as_str() {
                "autoComment" => Ok(Self::AutoComment {
                    post_url: p.required_string("targetPostUrl")?,
                    comment: p.required_string("commentText")?,
                }),
                _ => Err(unknown()),
            },
            "connection" => match operation.as_str() {
                "sendRequest" => Ok(Self::SendConnectionRequest {
                    profile_url: p.required_string("profileUrl")?,
                    message: p.optional_string("connectionMessage")?,
                }),
                _ => Err(unknown()),
            },
            "analytics" => match operation.as_str() {
                "getProfileAnalytics" => Ok(Self::ProfileAnalytics {
                    range: p.string("dateRange")?,
                }),
                _ => Err(unknown()),
            },
            other => Err(NodeError::UnknownResource {
                resource: other.to_owned(),
            }),
        }
    }

    pub fn into_request(self, base: BaseUrl) -> ApiRequest {
        match self {
            Self::BoostPost {
                post_url,
                duration,
                budget,
            } => ApiRequest::post(
                base,
                "/v1/posts/boost",
                JsonBody::new()
                    .field("postUrl", post_url)
                    .field("duration", Value::Number(duration))
                    .field("budget", Value::Number(budget)),
            ),
            Self::PostAnalytics { post_url } => {
                ApiRequest::get(base, "/v1/posts/analytics").query("postUrl", post_url)
            }
            Self::AutoComment { post_url, comment } => ApiRequest::post(
                base,
                "/v1/comments/create",
                JsonBody::new()
                    .field("postUrl", post_url)
                    .field("comment", comment),
            ),
            Self::SendConnectionRequest {
                profile_url,
                message,
            } => ApiRequest::post(
                base,
                "/v1/connections/send",
                JsonBody::new()
                    .field("profileUrl", profile_url)
                    .optional("message", message),
            ),
            Self::ProfileAnalytics { range } => {
                ApiRequest::get(base, "/v1/analytics/profile").query("range", range)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectSafely {
    description: NodeDescription,
}

impl ConnectSafely {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Credential)
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for ConnectSafely {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ConnectSafely {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        let operation = ConnectSafelyOperation::parse(parameters)?;
        Ok(operation.into_request(self.description.base_url.clone()))
    }
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let fields = vec![
        FieldSpec::options(
            "resource",
            "Resource",
            vec![
                OptionSpec::new("Post", "post"),
                OptionSpec::new("Comment", "comment"),
                OptionSpec::new("Connection", "connection"),
                OptionSpec::new("Analytics", "analytics"),
            ],
            "post",
        ),
        // One operation selector per resource; exactly one is visible at a time.
        FieldSpec::options(
            "operation",
            "Operation",
            vec![
                OptionSpec::described("Boost Post", "boost", "Boost a LinkedIn post for more engagement"),
                OptionSpec::described("Get Post Analytics", "getAnalytics", "Get analytics for a specific post"),
            ],
            "boost",
        )
        .show_when("resource", &["post"]),
        FieldSpec::options(
            "operation",
            "Operation",
            vec![OptionSpec::described("Auto Comment", "autoComment", "Automatically comment on posts")],
            "autoComment",
        )
        .show_when("resource", &["comment"]),
        FieldSpec::options(
            "operation",
            "Operation",
            vec![OptionSpec::described(
                "Send Connection Request",
                "sendRequest",
                "Send a LinkedIn connection request",
            )],
            "sendRequest",
        )
        .show_when("resource", &["connection"]),
        FieldSpec::options(
            "operation",
            "Operation",
            vec![OptionSpec::described(
                "Get Profile Analytics",
                "getProfileAnalytics",
                "Get analytics for your LinkedIn profile",
            )],
            "getProfileAnalytics",
        )
        .show_when("resource", &["analytics"]),
        FieldSpec::string("postUrl", "Post URL")
            .required()
            .placeholder("https://www.linkedin.com/posts/...")
            .describe("The LinkedIn post URL to boost or get analytics for")
            .show_when("resource", &["post"])
            .for_operations(&["boost", "getAnalytics"]),
        FieldSpec::number("boostDuration", "Boost Duration (Hours)", 24)
            .describe("How long to boost the post in hours")
            .show_when("resource", &["post"])
            .for_operations(&["boost"]),
        FieldSpec::number("boostBudget", "Boost Budget", 10)
            .describe("Budget for boosting the post")
            .show_when("resource", &["post"])
            .for_operations(&["boost"]),
        FieldSpec::text("commentText", "Comment Text")
            .required()
            .describe("The comment text to post")
            .show_when("resource", &["comment"])
            .for_operations(&["autoComment"]),
        FieldSpec::string("targetPostUrl", "Target Post URL")
            .required()
            .placeholder("https://www.linkedin.com/posts/...")
            .describe("The LinkedIn post URL to comment on")
            .show_when("resource", &["comment"])
            .for_operations(&["autoComment"]),
        FieldSpec::string("profileUrl", "Profile URL")
            .required()
            .placeholder("https://www.linkedin.com/in/username")
            .describe("The LinkedIn profile URL to send connection request to")
            .show_when("resource", &["connection"])
            .for_operations(&["sendRequest"]),
        FieldSpec::text("connectionMessage", "Connection Message")
            .placeholder("Hi! I would like to connect with you.")
            .describe("Personal message to include with the connection request")
            .show_when("resource", &["connection"])
            .for_operations(&["sendRequest"]),
        FieldSpec::options(
            "dateRange",
            "Date Range",
            vec![
                OptionSpec::new("Last 7 Days", "7d"),
                OptionSpec::new("Last 30 Days", "30d"),
                OptionSpec::new("Last 90 Days", "90d"),
            ],
            "30d",
        )
        .describe("The date range for analytics")
        .show_when("resource", &["analytics"]),
    ];

    NodeDescription {
        name: NAME,
        display_name: "ConnectSafely",
        description: "Automate LinkedIn engagement with ConnectSafely",
        base_url,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};
    use workflow::HttpMethod;

    use super::*;

    fn plan(values: Value) -> Result<ApiRequest, NodeError> {
        let node = ConnectSafely::new();
        let values: Map<String, Value> = values.as_object().cloned().unwrap();
        node.build_request(&Parameters::new(node.description(), values))
    }

    #[test]
    fn boost_uses_defaults_for_duration_and_budget() {
        let request = plan(json!({"postUrl": "https://linkedin.com/posts/abc"})).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.base, BaseUrl::Credential);
        assert_eq!(request.path, "/v1/posts/boost");
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"postUrl": "https://linkedin.com/posts/abc", "duration": 24, "budget": 10})
        );
    }

    #[test]
    fn post_analytics_is_a_get_with_query() {
        let request = plan(json!({"operation": "getAnalytics", "postUrl": "https://linkedin.com/posts/abc"})).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.query,
            vec![("postUrl".to_owned(), "https://linkedin.com/posts/abc".to_owned())]
        );
    }

    #[test]
    fn operation_default_follows_resource() {
        let request = plan(json!({
            "resource": "comment",
            "targetPostUrl": "https://linkedin.com/posts/abc",
            "commentText": "Great post"
        }))
        .unwrap();
        assert_eq!(request.path, "/v1/comments/create");
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"postUrl": "https://linkedin.com/posts/abc", "comment": "Great post"})
        );

        let request = plan(json!({"resource": "analytics"})).unwrap();
        assert_eq!(request.path, "/v1/analytics/profile");
        assert_eq!(request.query, vec![("range".to_owned(), "30d".to_owned())]);
    }

    #[test]
    fn connection_message_is_omitted_when_blank() {
        let request = plan(json!({
            "resource": "connection",
            "profileUrl": "https://www.linkedin.com/in/jane"
        }))
        .unwrap();
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"profileUrl": "https://www.linkedin.com/in/jane"})
        );
    }

    #[test]
    fn mismatched_selectors_are_rejected() {
        let err = plan(json!({"resource": "comment", "operation": "boost"})).unwrap_err();
        assert_eq!(err, NodeError::UnknownOperation { operation: "boost".into() });

        let err = plan(json!({"resource": "campaign"})).unwrap_err();
        assert!(matches!(err, NodeError::UnknownResource { .. }));
    }

    #[test]
    fn visible_fields_track_resource() {
        let node = ConnectSafely::new();
        let values: Map<String, Value> = json!({"resource": "connection"}).as_object().cloned().unwrap();
        let names: Vec<&str> = node
            .description()
            .visible_fields(&values)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["resource", "operation", "profileUrl", "connectionMessage"]);
    }
}
