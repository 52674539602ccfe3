//! LinkedIn operations shared by the ConnectSafely LinkedIn, LinkedIn Posts,
//! LinkedIn Actions and LinkedIn Profiles nodes.
//!
//! Each node offers a subset of [`LinkedInOperation`] and declares its own
//! fields (defaults and visibility differ between nodes), but the request an
//! operation produces is the same everywhere. Parameters a node does not
//! declare resolve to nothing and are left out of the body.

use serde_json::{Number, Value};
use workflow::{
    AccountId, ApiRequest, BaseUrl, CompanyUrn, GroupId, JsonBody, NodeError, ProfileId,
    ProfileUrn,
};

use crate::parameters::Parameters;
use crate::schema::{FieldSpec, OptionSpec};

// ---------------------------------------------------------------------------
// Operation tags
// ---------------------------------------------------------------------------

pub const FOLLOW_USER: &str = "followUser";
pub const SEND_MESSAGE: &str = "sendMessage";
pub const SEND_CONNECTION_REQUEST: &str = "sendConnectionRequest";
pub const CHECK_RELATIONSHIP: &str = "checkRelationship";
pub const GET_LATEST_POSTS: &str = "getLatestPosts";
pub const REACT_TO_POST: &str = "reactToPost";
pub const COMMENT_ON_POST: &str = "commentOnPost";
pub const GET_POST_COMMENTS: &str = "getPostComments";
pub const GET_ALL_POST_COMMENTS: &str = "getAllPostComments";
pub const SEARCH_POSTS: &str = "searchPosts";
pub const SCRAPE_POST: &str = "scrapePost";
pub const FETCH_PROFILE: &str = "fetchProfile";
pub const GET_ORGANIZATIONS: &str = "getOrganizations";
pub const GET_GROUP_MEMBERS: &str = "getGroupMembers";
pub const GET_GROUP_MEMBERS_BY_URL: &str = "getGroupMembersByUrl";

/// Fragment every scrapeable post URL contains.
const POST_URL_MARKER: &str = "linkedin.com/posts/";

/// Upper bound on author job titles in a post search.
const MAX_AUTHOR_JOB_TITLES: usize = 5;

const DEFAULT_MEMBERSHIP_STATUSES: [&str; 3] = ["OWNER", "MANAGER", "MEMBER"];

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Who an operation is about. Either, both, or neither may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileTarget {
    /// Public profile id or vanity name.
    pub profile_id: Option<ProfileId>,
    /// Profile URN, the alternative to the id.
    pub profile_urn: Option<ProfileUrn>,
}

impl ProfileTarget {
    fn read(parameters: &Parameters<'_>, id_field: &str, urn_field: &str) -> Result<Self, NodeError> {
        Ok(Self {
            profile_id: parameters.optional_string(id_field)?.and_then(ProfileId::new),
            profile_urn: parameters.optional_string(urn_field)?.and_then(ProfileUrn::new),
        })
    }

    fn write(&self, body: JsonBody, id_key: &str, urn_key: &str) -> JsonBody {
        body.optional(id_key, self.profile_id.clone())
            .optional(urn_key, self.profile_urn.clone())
    }
}

/// Page selection for a single page of comments. Zero and empty mean
/// "let the API decide".
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    /// Comments per page.
    pub comment_count: Number,
    /// Offset of the first comment.
    pub start: Number,
    /// Token returned by a previous page.
    pub pagination_token: Option<String>,
}

/// Group identified either by id or by its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    /// Numeric group id, sent to `/linkedin/groups/members`.
    Id(GroupId),
    /// Group page URL, sent to `/linkedin/groups/members-by-url`.
    Url(String),
}

/// One page of group members.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupListing {
    pub group: GroupRef,
    /// Page size.
    pub count: Number,
    /// Offset of the first member.
    pub start: Number,
    /// Roles to include; defaults to owners, managers and members.
    pub membership_statuses: Vec<String>,
    /// Name prefix filter.
    pub typeahead_query: Option<String>,
}

/// Keyword search over posts.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSearch {
    pub keywords: String,
    /// Results per page.
    pub count: Number,
    /// Offset of the first result.
    pub start: Number,
    /// Recency window, e.g. `past-week`.
    pub date_posted: String,
    /// `relevance` or `date_posted`.
    pub sort_by: String,
    /// At most five non-blank titles; empty means no filter.
    pub author_job_titles: Vec<String>,
}

/// One LinkedIn operation with its parameters resolved and validated.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkedInOperation {
    FollowUser {
        action: String,
        target: ProfileTarget,
    },
    SendMessage {
        message: String,
        recipient: ProfileTarget,
        subject: Option<String>,
        message_type: Option<String>,
    },
    SendConnectionRequest {
        target: ProfileTarget,
        custom_message: Option<String>,
    },
    CheckRelationship {
        profile_id: ProfileId,
    },
    GetLatestPosts {
        target: ProfileTarget,
        count: Number,
        include_reposts: bool,
    },
    ReactToPost {
        post_url: String,
        reaction_type: String,
    },
    CommentOnPost {
        post_url: String,
        comment: String,
        tag_post_author: Option<bool>,
        company_urn: Option<CompanyUrn>,
    },
    GetPostComments {
        post_url: String,
        max_comments: Number,
        batch_size: Number,
        page: CommentPage,
    },
    GetAllPostComments {
        post_url: String,
        max_comments: Number,
        batch_size: Number,
    },
    SearchPosts(PostSearch),
    ScrapePost {
        post_url: String,
    },
    FetchProfile {
        profile_id: String,
        include_geo_location: bool,
        include_contact: bool,
    },
    GetOrganizations,
    GetGroupMembers(GroupListing),
}

impl LinkedInOperation {
    /// Reads and validates the parameters of the operation tagged `tag`.
    pub fn parse(tag: &str, p: &Parameters<'_>) -> Result<Self, NodeError> {
        let operation = match tag {
            FOLLOW_USER => Self::FollowUser {
                action: p.string("action")?,
                target: ProfileTarget::read(p, "profileId", "profileUrn")?,
            },
            SEND_MESSAGE => Self::SendMessage {
                message: p.required_string("message")?,
                recipient: ProfileTarget::read(p, "recipientProfileId", "recipientProfileUrn")?,
                subject: p.optional_string("subject")?,
                message_type: p.optional_string("messageType")?,
            },
            SEND_CONNECTION_REQUEST => Self::SendConnectionRequest {
                target: ProfileTarget::read(p, "profileId", "profileUrn")?,
                custom_message: p.optional_string("customMessage")?,
            },
            CHECK_RELATIONSHIP => Self::CheckRelationship {
                profile_id: ProfileId::new(p.required_string("profileId")?).ok_or_else(|| {
                    NodeError::MissingParameter {
                        name: "profileId".into(),
                    }
                })?,
            },
            GET_LATEST_POSTS => Self::GetLatestPosts {
                target: ProfileTarget::read(p, "profileId", "profileUrn")?,
                count: p.number("count")?,
                include_reposts: p.boolean("includeReposts")?,
            },
            REACT_TO_POST => Self::ReactToPost {
                post_url: p.required_string("postUrl")?,
                reaction_type: p.string("reactionType")?,
            },
            COMMENT_ON_POST => Self::CommentOnPost {
                post_url: p.required_string("postUrl")?,
                comment: p.required_string("comment")?,
                tag_post_author: p.optional_boolean("tagPostAuthor")?,
                company_urn: p.optional_string("companyUrn")?.and_then(CompanyUrn::new),
            },
            GET_POST_COMMENTS => Self::GetPostComments {
                post_url: p.required_string("postUrl")?,
                max_comments: p.number("maxComments")?,
                batch_size: p.number("batchSize")?,
                page: CommentPage {
                    comment_count: p.number("commentCount")?,
                    start: p.number("start")?,
                    pagination_token: p.optional_string("paginationToken")?,
                },
            },
            GET_ALL_POST_COMMENTS => Self::GetAllPostComments {
                post_url: p.required_string("postUrl")?,
                max_comments: p.number("maxComments")?,
                batch_size: p.number("batchSize")?,
            },
            SEARCH_POSTS => Self::SearchPosts(PostSearch {
                keywords: p.required_string("keywords")?,
                count: p.number("searchCount")?,
                start: p.number("searchStart")?,
                date_posted: p.string("datePosted")?,
                sort_by: p.string("sortBy")?,
                author_job_titles: clean_job_titles(p.string_list("authorJobTitles")?),
            }),
            SCRAPE_POST => Self::ScrapePost {
                post_url: validate_post_url(&p.string("postUrl")?)?,
            },
            FETCH_PROFILE => Self::FetchProfile {
                profile_id: p.string("profileId")?,
                include_geo_location: p.boolean("includeGeoLocation")?,
                include_contact: p.boolean("includeContact")?,
            },
            GET_ORGANIZATIONS => Self::GetOrganizations,
            GET_GROUP_MEMBERS | GET_GROUP_MEMBERS_BY_URL => {
                let group = if tag == GET_GROUP_MEMBERS {
                    let id = p.required_string("groupId")?;
                    GroupRef::Id(GroupId::new(id).ok_or_else(|| NodeError::MissingParameter {
                        name: "groupId".into(),
                    })?)
                } else {
                    GroupRef::Url(p.required_string("groupUrl")?)
                };
                let mut membership_statuses = p.string_list("membershipStatuses")?;
                if membership_statuses.is_empty() {
                    membership_statuses = DEFAULT_MEMBERSHIP_STATUSES.map(str::to_owned).to_vec();
                }
                Self::GetGroupMembers(GroupListing {
                    group,
                    count: p.number("groupCount")?,
                    start: p.number("groupStart")?,
                    membership_statuses,
                    typeahead_query: p.optional_string("typeaheadQuery")?,
                })
            }
            other => {
                return Err(NodeError::UnknownOperation {
                    operation: other.to_owned(),
                })
            }
        };
        Ok(operation)
    }

    /// `false` only for operations that never act on behalf of an account.
    pub fn uses_account(&self) -> bool {
        !matches!(self, Self::ScrapePost { .. })
    }

    /// Builds the request, adding `account` wherever the endpoint takes one.
    pub fn into_request(self, base: BaseUrl, account: Option<AccountId>) -> ApiRequest {
        let body = JsonBody::new().optional("accountId", account.clone());
        match self {
            Self::FollowUser { action, target } => ApiRequest::post(
                base,
                "/linkedin/follow",
                target.write(body.field("action", action), "profileId", "profileUrn"),
            ),
            Self::SendMessage {
                message,
                recipient,
                subject,
                message_type,
            } => ApiRequest::post(
                base,
                "/linkedin/message",
                recipient
                    .write(body.field("message", message), "recipientProfileId", "recipientProfileUrn")
                    .optional("subject", subject)
                    .optional("messageType", message_type),
            ),
            Self::SendConnectionRequest {
                target,
                custom_message,
            } => ApiRequest::post(
                base,
                "/linkedin/connect",
                target
                    .write(body, "profileId", "profileUrn")
                    .optional("customMessage", custom_message),
            ),
            Self::CheckRelationship { profile_id } => {
                let path = match account {
                    Some(account) => format!(
                        "/linkedin/relationship/{}/{}",
                        account.path_segment(),
                        profile_id.path_segment()
                    ),
                    None => format!("/linkedin/relationship/{}", profile_id.path_segment()),
                };
                ApiRequest::get(base, path)
            }
            Self::GetLatestPosts {
                target,
                count,
                include_reposts,
            } => ApiRequest::post(
                base,
                "/linkedin/posts/latest",
                target
                    .write(body, "profileId", "profileUrn")
                    .field("count", Value::Number(count))
                    .field("includeReposts", include_reposts),
            ),
            Self::ReactToPost {
                post_url,
                reaction_type,
            } => ApiRequest::post(
                base,
                "/linkedin/posts/react",
                body.field("postUrl", post_url)
                    .field("reactionType", reaction_type),
            ),
            Self::CommentOnPost {
                post_url,
                comment,
                tag_post_author,
                company_urn,
            } => ApiRequest::post(
                base,
                "/linkedin/posts/comment",
                body.field("postUrl", post_url)
                    .field("comment", comment)
                    .optional("tagPostAuthor", tag_post_author)
                    .optional("companyUrn", company_urn),
            ),
            Self::GetPostComments {
                post_url,
                max_comments,
                batch_size,
                page,
            } => ApiRequest::post(
                base,
                "/linkedin/posts/comments",
                body.field("postUrl", post_url)
                    .field("maxComments", Value::Number(max_comments))
                    .field("batchSize", Value::Number(batch_size))
                    .optional_nonzero("commentCount", &page.comment_count)
                    .optional_nonzero("start", &page.start)
                    .optional("paginationToken", page.pagination_token),
            ),
            Self::GetAllPostComments {
                post_url,
                max_comments,
                batch_size,
            } => ApiRequest::post(
                base,
                "/linkedin/posts/comments/all",
                body.field("postUrl", post_url)
                    .field("maxComments", Value::Number(max_comments))
                    .field("batchSize", Value::Number(batch_size)),
            ),
            Self::SearchPosts(search) => {
                let titles = (!search.author_job_titles.is_empty()).then_some(search.author_job_titles);
                ApiRequest::post(
                    base,
                    "/linkedin/posts/search",
                    body.field("keywords", search.keywords)
                        .field("count", Value::Number(search.count))
                        .field("start", Value::Number(search.start))
                        .field("datePosted", search.date_posted)
                        .field("sortBy", search.sort_by)
                        .optional("authorJobTitles", titles),
                )
            }
            Self::ScrapePost { post_url } => ApiRequest::post(
                base,
                "/linkedin/posts/scrape",
                JsonBody::new().field("postUrl", post_url),
            ),
            Self::FetchProfile {
                profile_id,
                include_geo_location,
                include_contact,
            } => ApiRequest::post(
                base,
                "/linkedin/profile",
                body.field("profileId", profile_id)
                    .field("includeGeoLocation", include_geo_location)
                    .field("includeContact", include_contact),
            ),
            Self::GetOrganizations => {
                ApiRequest::get(base, "/linkedin/organizations").optional_query("accountId", account)
            }
            Self::GetGroupMembers(listing) => {
                let (path, body) = match listing.group {
                    GroupRef::Id(id) => ("/linkedin/groups/members", body.field("groupId", id)),
                    GroupRef::Url(url) => ("/linkedin/groups/members-by-url", body.field("groupUrl", url)),
                };
                ApiRequest::post(
                    base,
                    path,
                    body.field("count", Value::Number(listing.count))
                        .field("start", Value::Number(listing.start))
                        .field("membershipStatuses", listing.membership_statuses)
                        .optional("typeaheadQuery", listing.typeahead_query),
                )
            }
        }
    }
}

/// Plans the request for one item of a node offering `offered` operations.
pub fn build_request(
    offered: &[&str],
    base: &BaseUrl,
    parameters: &Parameters<'_>,
) -> Result<ApiRequest, NodeError> {
    let tag = parameters.operation()?;
    if !offered.contains(&tag.as_str()) {
        return Err(NodeError::UnknownOperation { operation: tag });
    }
    let operation = LinkedInOperation::parse(&tag, parameters)?;
    let account = if operation.uses_account() {
        parameters.optional_string("accountId")?.and_then(AccountId::new)
    } else {
        None
    };
    Ok(operation.into_request(base.clone(), account))
}

fn validate_post_url(post_url: &str) -> Result<String, NodeError> {
    if post_url.trim().is_empty() {
        return Err(NodeError::validation("Post URL is required"));
    }
    if !post_url.contains(POST_URL_MARKER) {
        return Err(NodeError::validation(format!(
            "Invalid LinkedIn post URL format. Received: \"{post_url}\""
        )));
    }
    Ok(post_url.to_owned())
}

fn clean_job_titles(titles: Vec<String>) -> Vec<String> {
    titles
        .into_iter()
        .filter(|title| !title.trim().is_empty())
        .take(MAX_AUTHOR_JOB_TITLES)
        .collect()
}

// ---------------------------------------------------------------------------
// Field builders
// ---------------------------------------------------------------------------

/// Field constructors shared by the LinkedIn nodes. Each takes the operations
/// the field is shown for; an empty slice means "always shown".
pub mod fields {
    use super::*;

    fn scoped(field: FieldSpec, operations: &[&'static str]) -> FieldSpec {
        if operations.is_empty() {
            field
        } else {
            field.for_operations(operations)
        }
    }

    pub fn account_id(operations: &[&'static str]) -> FieldSpec {
        scoped(
            FieldSpec::string("accountId", "Account ID")
                .describe("LinkedIn account ID (uses default if not provided)"),
            operations,
        )
    }

    pub fn profile_id(operations: &[&'static str]) -> FieldSpec {
        scoped(
            FieldSpec::string("profileId", "Profile ID").describe("LinkedIn profile ID"),
            operations,
        )
    }

    pub fn profile_urn(operations: &[&'static str]) -> FieldSpec {
        scoped(
            FieldSpec::string("profileUrn", "Profile URN")
                .describe("LinkedIn profile URN (alternative to profileId)"),
            operations,
        )
    }

    /// Fields of followUser, sendMessage and sendConnectionRequest.
    pub fn actions() -> Vec<FieldSpec> {
        vec![
            FieldSpec::options(
                "action",
                "Action",
                vec![OptionSpec::new("Follow", "follow"), OptionSpec::new("Unfollow", "unfollow")],
                "follow",
            )
            .for_operations(&[FOLLOW_USER]),
            FieldSpec::string("recipientProfileId", "Recipient Profile ID")
                .describe("Recipient's LinkedIn profile ID")
                .for_operations(&[SEND_MESSAGE]),
            FieldSpec::string("recipientProfileUrn", "Recipient Profile URN")
                .describe("Recipient's LinkedIn profile URN")
                .for_operations(&[SEND_MESSAGE]),
            FieldSpec::text("message", "Message")
                .required()
                .placeholder("Hello! I would like to connect with you.")
                .describe("Message content")
                .for_operations(&[SEND_MESSAGE]),
            FieldSpec::string("subject", "Subject")
                .describe("Message subject")
                .for_operations(&[SEND_MESSAGE]),
            FieldSpec::options(
                "messageType",
                "Message Type",
                vec![OptionSpec::new("Normal", "normal"), OptionSpec::new("InMail", "inmail")],
                "normal",
            )
            .for_operations(&[SEND_MESSAGE]),
            FieldSpec::text("customMessage", "Custom Message")
                .placeholder("Hi! I would like to connect with you.")
                .describe("Custom connection message")
                .for_operations(&[SEND_CONNECTION_REQUEST]),
        ]
    }

    /// Fields of getLatestPosts.
    pub fn latest_posts() -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("count", "Count", 1)
                .describe("Number of posts to fetch (1-20, default: 1)")
                .for_operations(&[GET_LATEST_POSTS]),
            FieldSpec::boolean("includeReposts", "Include Reposts", true)
                .describe("Whether to include reposts/shares (default: true)")
                .for_operations(&[GET_LATEST_POSTS]),
        ]
    }

    pub fn post_url() -> FieldSpec {
        FieldSpec::string("postUrl", "Post URL")
            .required()
            .placeholder("https://www.linkedin.com/posts/john-doe-123_...")
            .describe("LinkedIn post URL")
            .for_operations(&[
                REACT_TO_POST,
                COMMENT_ON_POST,
                GET_POST_COMMENTS,
                GET_ALL_POST_COMMENTS,
                SCRAPE_POST,
            ])
    }

    pub fn reaction_type() -> FieldSpec {
        FieldSpec::options(
            "reactionType",
            "Reaction Type",
            vec![
                OptionSpec::new("Appreciation", "APPRECIATION"),
                OptionSpec::new("Empathy", "EMPATHY"),
                OptionSpec::new("Entertainment", "ENTERTAINMENT"),
                OptionSpec::new("Interest", "INTEREST"),
                OptionSpec::new("Like", "LIKE"),
                OptionSpec::new("Praise", "PRAISE"),
            ],
            "LIKE",
        )
        .for_operations(&[REACT_TO_POST])
    }

    pub fn comment() -> FieldSpec {
        FieldSpec::text("comment", "Comment")
            .required()
            .placeholder("Great insights! Thanks for sharing.")
            .describe("Comment text")
            .for_operations(&[COMMENT_ON_POST])
    }

    /// Options for commenting as someone other than the bare account.
    pub fn comment_identity() -> Vec<FieldSpec> {
        vec![
            FieldSpec::boolean("tagPostAuthor", "Tag Post Author", false)
                .describe("Whether to tag/mention the post author at the beginning of the comment (default: false)")
                .for_operations(&[COMMENT_ON_POST]),
            FieldSpec::string("companyUrn", "Company URN")
                .placeholder("urn:li:fsd_company:102246628")
                .describe("Company/organization URN to comment as a company page instead of personal account (optional)")
                .for_operations(&[COMMENT_ON_POST]),
        ]
    }

    /// Fields of getPostComments and getAllPostComments.
    pub fn comments() -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("commentCount", "Comment Count", 50)
                .describe("Number of comments per page for manual pagination (1-100)")
                .for_operations(&[GET_POST_COMMENTS]),
            FieldSpec::number("start", "Start Position", 0)
                .describe("Starting position for pagination (0-based)")
                .for_operations(&[GET_POST_COMMENTS]),
            FieldSpec::text("paginationToken", "Pagination Token")
                .describe("Pagination token from previous request")
                .for_operations(&[GET_POST_COMMENTS]),
            FieldSpec::number("maxComments", "Max Comments", 100)
                .describe("Maximum total comments when fetching all (10-5000)")
                .for_operations(&[GET_POST_COMMENTS, GET_ALL_POST_COMMENTS]),
            FieldSpec::number("batchSize", "Batch Size", 50)
                .describe("Batch size when fetching all comments (10-100, default: 50)")
                .for_operations(&[GET_POST_COMMENTS, GET_ALL_POST_COMMENTS]),
        ]
    }

    /// Fields of searchPosts. `default_count` differs between nodes.
    pub fn search(default_count: i64, count_description: &'static str) -> Vec<FieldSpec> {
        vec![
            FieldSpec::string("keywords", "Keywords")
                .required()
                .placeholder("artificial intelligence")
                .describe("Search keywords")
                .for_operations(&[SEARCH_POSTS]),
            FieldSpec::number("searchCount", "Count", default_count)
                .describe(count_description)
                .for_operations(&[SEARCH_POSTS]),
            FieldSpec::number("searchStart", "Start Position", 0)
                .describe("Starting position for pagination (default: 0)")
                .for_operations(&[SEARCH_POSTS]),
            FieldSpec::options(
                "datePosted",
                "Date Posted",
                vec![
                    OptionSpec::new("Past 24 Hours", "past-24h"),
                    OptionSpec::new("Past Week", "past-week"),
                    OptionSpec::new("Past Month", "past-month"),
                    OptionSpec::new("Any Time", "any-time"),
                ],
                "any-time",
            )
            .describe("Date filter")
            .for_operations(&[SEARCH_POSTS]),
            FieldSpec::options(
                "sortBy",
                "Sort By",
                vec![
                    OptionSpec::new("Relevance", "relevance"),
                    OptionSpec::new("Date Posted", "date_posted"),
                ],
                "relevance",
            )
            .describe("Sort order")
            .for_operations(&[SEARCH_POSTS]),
        ]
    }

    pub fn author_job_titles() -> FieldSpec {
        FieldSpec::string_list("authorJobTitles", "Author Job Titles")
            .placeholder("e.g. CEO")
            .describe("Job titles to filter posts by author (max 5). Examples: CEO, CTO, Founder, Director, VP.")
            .for_operations(&[SEARCH_POSTS])
    }

    /// includeGeoLocation and includeContact.
    pub fn profile_details(operations: &[&'static str]) -> Vec<FieldSpec> {
        vec![
            scoped(
                FieldSpec::boolean("includeGeoLocation", "Include Geo Location", false)
                    .describe("Whether to include geographical location data (default: false)"),
                operations,
            ),
            scoped(
                FieldSpec::boolean("includeContact", "Include Contact", false)
                    .describe("Whether to include contact information (default: false)"),
                operations,
            ),
        ]
    }

    /// Fields of getGroupMembers and getGroupMembersByUrl.
    pub fn groups() -> Vec<FieldSpec> {
        let both = &[GET_GROUP_MEMBERS, GET_GROUP_MEMBERS_BY_URL];
        vec![
            FieldSpec::string("groupId", "Group ID")
                .required()
                .describe("LinkedIn group ID")
                .for_operations(&[GET_GROUP_MEMBERS]),
            FieldSpec::string("groupUrl", "Group URL")
                .required()
                .placeholder("https://www.linkedin.com/groups/9357376/")
                .describe("Full LinkedIn group URL")
                .for_operations(&[GET_GROUP_MEMBERS_BY_URL]),
            FieldSpec::number("groupCount", "Count", 50)
                .describe("Number of members to fetch (1-100, default: 50)")
                .for_operations(both),
            FieldSpec::number("groupStart", "Start Position", 0)
                .describe("Starting index for pagination (default: 0)")
                .for_operations(both),
            FieldSpec::multi_options(
                "membershipStatuses",
                "Membership Statuses",
                vec![
                    OptionSpec::new("Owner", "OWNER"),
                    OptionSpec::new("Manager", "MANAGER"),
                    OptionSpec::new("Member", "MEMBER"),
                ],
                &DEFAULT_MEMBERSHIP_STATUSES,
            )
            .describe("Filter by membership status")
            .for_operations(both),
            FieldSpec::string("typeaheadQuery", "Search Query")
                .describe("Search query for member names")
                .for_operations(both),
        ]
    }
}
