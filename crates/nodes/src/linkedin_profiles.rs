//! LinkedIn Profiles: fetch one profile.

use workflow::{ApiRequest, BaseUrl, NodeError};

use crate::linkedin::{self, fields, FETCH_PROFILE};
use crate::linkedin_posts::DEFAULT_BASE_URL;
use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "linkedInProfiles";

#[derive(Debug, Clone)]
pub struct LinkedInProfiles {
    description: NodeDescription,
}

impl LinkedInProfiles {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Fixed(DEFAULT_BASE_URL.to_owned()))
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for LinkedInProfiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for LinkedInProfiles {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        // profileId is mandatory here, unlike on the combined node.
        parameters.required_string("profileId")?;
        linkedin::build_request(&[FETCH_PROFILE], &self.description.base_url, parameters)
    }
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let mut specs = vec![
        FieldSpec::options(
            "operation",
            "Operation",
            vec![OptionSpec::described(
                "Fetch Profile",
                FETCH_PROFILE,
                "Fetch detailed information about a LinkedIn profile",
            )],
            FETCH_PROFILE,
        ),
        fields::account_id(&[]),
        FieldSpec::string("profileId", "Profile ID")
            .required()
            .describe("LinkedIn profile ID (username or URL)"),
    ];
    specs.extend(fields::profile_details(&[]));

    NodeDescription {
        name: NAME,
        display_name: "LinkedIn Profiles",
        description: "Fetch LinkedIn profile information",
        base_url,
        fields: specs,
    }
}
