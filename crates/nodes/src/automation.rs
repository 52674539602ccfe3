//! LinkedIn Automation: scheduled likes, shares and follows, plus user lookup.

use serde_json::{Number, Value};
use workflow::{ApiRequest, BaseUrl, JsonBody, NodeError};

use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "linkedInAutomation";

/// Which posts an auto-like campaign targets. Only the selected criterion is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTarget {
    Keywords(String),
    Hashtags(String),
    User(String),
}

/// Which users a follow campaign targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowTarget {
    Industry(String),
    Company(String),
    Location(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AutomationOperation {
    AutoLike {
        target: LikeTarget,
        max_likes_per_day: Number,
    },
    AutoShare {
        message: String,
        keywords: String,
    },
    FollowUsers {
        target: FollowTarget,
        max_actions_per_day: Number,
    },
    GetUserProfile {
        profile_url: String,
    },
    SearchUsers {
        query: String,
        location: String,
        limit: Number,
    },
}

impl AutomationOperation {
    pub fn parse(p: &Parameters<'_>) -> Result<Self, NodeError> {
        let operation = p.operation()?;
        match operation.as_str() {
            "autoLike" => {
                let target = match p.string("likeCriteria")?.as_str() {
                    "keywords" => LikeTarget::Keywords(p.string("keywords")?),
                    "hashtags" => LikeTarget::Hashtags(p.string("hashtags")?),
                    "user" => LikeTarget::User(p.string("targetUser")?),
                    _ => {
                        return Err(NodeError::InvalidParameter {
                            name: "likeCriteria".into(),
                            expected: "one of keywords, hashtags, user",
                        })
                    }
                };
                Ok(Self::AutoLike {
                    target,
                    max_likes_per_day: p.number("maxLikesPerDay")?,
                })
            }
            "autoShare" => Ok(Self::AutoShare {
                message: p.string("shareMessage")?,
                keywords: p.string("shareKeywords")?,
            }),
            "followUsers" => {
                let target = match p.string("followCriteria")?.as_str() {
                    "industry" => FollowTarget::Industry(p.string("targetIndustry")?),
                    "company" => FollowTarget::Company(p.string("targetCompany")?),
                    "location" => FollowTarget::Location(p.string("targetLocation")?),
                    _ => {
                        return Err(NodeError::InvalidParameter {
                            name: "followCriteria".into(),
                            expected: "one of industry, company, location",
                        })
                    }
                };
                Ok(Self::FollowUsers {
                    target,
                    max_actions_per_day: p.number("maxActionsPerDay")?,
                })
            }
            "getUserProfile" => Ok(Self::GetUserProfile {
                profile_url: p.required_string("profileUrl")?,
            }),
            "searchUsers" => Ok(Self::SearchUsers {
                query: p.string("searchQuery")?,
                location: p.string("searchLocation")?,
                limit: p.number("maxResults")?,
            }),
            _ => Err(NodeError::UnknownOperation { operation }),
        }
    }

    pub fn into_request(self, base: BaseUrl) -> ApiRequest {
        match self {
            Self::AutoLike {
                target,
                max_likes_per_day,
            } => {
                let body = JsonBody::new().field("maxLikesPerDay", Value::Number(max_likes_per_day));
                let body = match target {
                    LikeTarget::Keywords(keywords) => body.field("keywords", keywords),
                    LikeTarget::Hashtags(hashtags) => body.field("hashtags", hashtags),
                    LikeTarget::User(url) => body.field("userUrl", url),
                };
                ApiRequest::post(base, "/v1/automation/auto-like", body)
            }
            Self::AutoShare { message, keywords } => ApiRequest::post(
                base,
                "/v1/automation/auto-share",
                JsonBody::new()
                    .field("message", message)
                    .field("keywords", keywords),
            ),
            Self::FollowUsers {
                target,
                max_actions_per_day,
            } => {
                let body = JsonBody::new().field("maxActionsPerDay", Value::Number(max_actions_per_day));
                let body = match target {
                    FollowTarget::Industry(industry) => body.field("industry", industry),
                    FollowTarget::Company(company) => body.field("company", company),
                    FollowTarget::Location(location) => body.field("location", location),
                };
                ApiRequest::post(base, "/v1/automation/follow-users", body)
            }
            Self::GetUserProfile { profile_url } => {
                ApiRequest::get(base, "/v1/users/profile").query("profileUrl", profile_url)
            }
            Self::SearchUsers {
                query,
                location,
                limit,
            } => ApiRequest::get(base, "/v1/users/search")
                .query("query", query)
                .query("location", location)
                .query("limit", limit),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkedInAutomation {
    description: NodeDescription,
}

impl LinkedInAutomation {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Credential)
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for LinkedInAutomation {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for LinkedInAutomation {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        let operation = AutomationOperation::parse(parameters)?;
        Ok(operation.into_request(self.description.base_url.clone()))
    }
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let fields = vec![
        FieldSpec::options(
            "operation",
            "Operation",
            vec![
                OptionSpec::described("Auto Like Posts", "autoLike", "Automatically like posts based on criteria"),
                OptionSpec::described("Auto Share Posts", "autoShare", "Automatically share posts with comments"),
                OptionSpec::described("Follow Users", "followUsers", "Follow users based on targeting criteria"),
                OptionSpec::described("Get User Profile", "getUserProfile", "Get detailed user profile information"),
                OptionSpec::described("Search Users", "searchUsers", "Search for users by criteria"),
            ],
            "autoLike",
        ),
        FieldSpec::options(
            "likeCriteria",
            "Like Criteria",
            vec![
                OptionSpec::new("By Keywords", "keywords"),
                OptionSpec::new("By Hashtags", "hashtags"),
                OptionSpec::new("By User", "user"),
            ],
            "keywords",
        )
        .describe("Criteria for selecting posts to like")
        .for_operations(&["autoLike"]),
        FieldSpec::string("keywords", "Keywords")
            .placeholder("marketing, automation, linkedin")
            .describe("Comma-separated keywords to search for")
            .for_operations(&["autoLike"])
            .show_when("likeCriteria", &["keywords"]),
        FieldSpec::string("hashtags", "Hashtags")
            .placeholder("#marketing #automation #linkedin")
            .describe("Hashtags to search for (include #)")
            .for_operations(&["autoLike"])
            .show_when("likeCriteria", &["hashtags"]),
        FieldSpec::string("targetUser", "Target User")
            .placeholder("https://www.linkedin.com/in/username")
            .describe("LinkedIn profile URL to like posts from")
            .for_operations(&["autoLike"])
            .show_when("likeCriteria", &["user"]),
        FieldSpec::number("maxLikesPerDay", "Max Likes Per Day", 50)
            .describe("Maximum number of likes per day")
            .for_operations(&["autoLike"]),
        FieldSpec::text("shareMessage", "Share Message")
            .placeholder("Great insights! Thanks for sharing.")
            .describe("Message to include when sharing")
            .for_operations(&["autoShare"]),
        FieldSpec::string("shareKeywords", "Share Keywords")
            .placeholder("leadership, innovation, growth")
            .describe("Keywords to search for posts to share")
            .for_operations(&["autoShare"]),
        FieldSpec::options(
            "followCriteria",
            "Follow Criteria",
            vec![
                OptionSpec::new("By Industry", "industry"),
                OptionSpec::new("By Company", "company"),
                OptionSpec::new("By Location", "location"),
            ],
            "industry",
        )
        .for_operations(&["followUsers"]),
        FieldSpec::string("targetIndustry", "Target Industry")
            .placeholder("Technology, Marketing, Sales")
            .describe("Industry to target")
            .for_operations(&["followUsers"])
            .show_when("followCriteria", &["industry"]),
        FieldSpec::string("targetCompany", "Target Company")
            .placeholder("Google, Microsoft, Apple")
            .describe("Company to target")
            .for_operations(&["followUsers"])
            .show_when("followCriteria", &["company"]),
        FieldSpec::string("targetLocation", "Target Location")
            .placeholder("San Francisco, New York, London")
            .describe("Location to target")
            .for_operations(&["followUsers"])
            .show_when("followCriteria", &["location"]),
        FieldSpec::number("maxActionsPerDay", "Max Actions Per Day", 20)
            .describe("Maximum number of follow actions per day")
            .for_operations(&["followUsers"]),
        FieldSpec::string("profileUrl", "Profile URL")
            .required()
            .placeholder("https://www.linkedin.com/in/username")
            .describe("LinkedIn profile URL to get information for")
            .for_operations(&["getUserProfile"]),
        FieldSpec::string("searchQuery", "Search Query")
            .placeholder("marketing manager technology")
            .describe("Search query for users")
            .for_operations(&["searchUsers"]),
        FieldSpec::string("searchLocation", "Search Location")
            .placeholder("San Francisco Bay Area")
            .describe("Location to search in")
            .for_operations(&["searchUsers"]),
        FieldSpec::number("maxResults", "Max Results", 50)
            .describe("Maximum number of results to return")
            .for_operations(&["searchUsers"]),
    ];

    NodeDescription {
        name: NAME,
        display_name: "LinkedIn Automation",
        description: "Advanced LinkedIn automation and engagement tools",
        base_url,
        fields,
    }
}
