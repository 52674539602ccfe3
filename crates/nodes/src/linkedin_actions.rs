//! LinkedIn Actions: follow, message, connect, relationship lookup.

use workflow::{ApiRequest, BaseUrl, NodeError, DEFAULT_BASE_URL};

use crate::linkedin::{self, fields, *};
use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "linkedInActions";

const OPERATIONS: &[&str] = &[FOLLOW_USER, SEND_MESSAGE, SEND_CONNECTION_REQUEST, CHECK_RELATIONSHIP];

#[derive(Debug, Clone)]
pub struct LinkedInActions {
    description: NodeDescription,
}

impl LinkedInActions {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Fixed(DEFAULT_BASE_URL.to_owned()))
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for LinkedInActions {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for LinkedInActions {
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
            OptionSpec::described("Follow User", FOLLOW_USER, "Follow or unfollow a LinkedIn user"),
            OptionSpec::described("Send Message", SEND_MESSAGE, "Send a message to a LinkedIn user"),
            OptionSpec::described("Send Connection Request", SEND_CONNECTION_REQUEST, "Send a connection request to a LinkedIn user"),
            OptionSpec::described("Check Relationship Status", CHECK_RELATIONSHIP, "Check relationship status with a LinkedIn user"),
        ],
        FOLLOW_USER,
    );

    let mut specs = vec![
        operation,
        fields::account_id(&[]),
        fields::profile_id(&[FOLLOW_USER, SEND_CONNECTION_REQUEST, CHECK_RELATIONSHIP]),
        fields::profile_urn(&[FOLLOW_USER, SEND_CONNECTION_REQUEST]),
    ];
    specs.extend(fields::actions());

    NodeDescription {
        name: NAME,
        display_name: "LinkedIn Actions",
        description: "Perform LinkedIn actions like follow, message, and connect",
        base_url,
        fields: specs,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn plan(values: Value) -> Result<ApiRequest, NodeError> {
        let node = LinkedInActions::new();
        let values = values.as_object().cloned().unwrap();
        node.build_request(&Parameters::new(node.description(), values))
    }

    #[test]
    fn default_operation_follows() {
        let request = plan(json!({"profileUrn": "urn:li:fsd_profile:7"})).unwrap();
        assert_eq!(request.path, "/linkedin/follow");
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"action": "follow", "profileUrn": "urn:li:fsd_profile:7"})
        );
    }

    #[test]
    fn unfollow_with_account() {
        let request = plan(json!({"action": "unfollow", "profileId": "p", "accountId": "a"})).unwrap();
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"action": "unfollow", "profileId": "p", "accountId": "a"})
        );
    }

    #[test]
    fn connection_request_with_custom_message() {
        let request = plan(json!({
            "operation": "sendConnectionRequest",
            "profileId": "p",
            "customMessage": "Hi!"
        }))
        .unwrap();
        assert_eq!(request.path, "/linkedin/connect");
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({"profileId": "p", "customMessage": "Hi!"})
        );
    }

    #[test]
    fn connection_request_may_have_empty_body() {
        let request = plan(json!({"operation": "sendConnectionRequest"})).unwrap();
        assert_eq!(Value::Object(request.body.unwrap()), json!({}));
    }

    #[test]
    fn check_relationship_needs_a_profile() {
        let err = plan(json!({"operation": "checkRelationship"})).unwrap_err();
        assert_eq!(err, NodeError::MissingParameter { name: "profileId".into() });
    }

    #[test]
    fn posts_operations_are_not_offered() {
        let err = plan(json!({"operation": "searchPosts", "keywords": "x"})).unwrap_err();
        assert_eq!(err, NodeError::UnknownOperation { operation: "searchPosts".into() });
    }
}
