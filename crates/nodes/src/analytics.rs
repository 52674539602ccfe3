//! ConnectSafely Analytics: campaign, engagement, connection, post and
//! audience reporting plus data export.
//!
//! Every operation carries the selected date range as `range`, in the query
//! for reads and in the body for the two POST operations. List-valued query
//! parameters go out as repeated keys.

use workflow::{ApiRequest, BaseUrl, CampaignId, JsonBody, NodeError};

use crate::node::Node;
use crate::parameters::Parameters;
use crate::schema::{FieldSpec, NodeDescription, OptionSpec};

pub const NAME: &str = "connectSafelyAnalytics";

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsOperation {
    CampaignPerformance {
        campaign_id: CampaignId,
        include_sub_campaigns: bool,
    },
    Engagement {
        engagement_types: Vec<String>,
    },
    Connections,
    PostPerformance {
        post_urls: Vec<String>,
    },
    AudienceInsights {
        insight_types: Vec<String>,
    },
    Export {
        format: String,
        data_types: Vec<String>,
    },
}

impl AnalyticsOperation {
    pub fn parse(p: &Parameters<'_>) -> Result<Self, NodeError> {
        let operation = p.operation()?;
        match operation.as_str() {
            "getCampaignPerformance" => {
                let id = p.required_string("campaignId")?;
                Ok(Self::CampaignPerformance {
                    campaign_id: CampaignId::new(id).ok_or_else(|| NodeError::MissingParameter {
                        name: "campaignId".into(),
                    })?,
                    include_sub_campaigns: p.boolean("includeSubCampaigns")?,
                })
            }
            "getEngagementAnalytics" => Ok(Self::Engagement {
                engagement_types: p.string_list("engagementType")?,
            }),
            "getConnectionAnalytics" => Ok(Self::Connections),
            "getPostPerformance" => Ok(Self::PostPerformance {
                post_urls: split_lines(&p.string("postUrls")?),
            }),
            "getAudienceInsights" => Ok(Self::AudienceInsights {
                insight_types: p.string_list("insightType")?,
            }),
            "exportAnalyticsData" => Ok(Self::Export {
                format: p.string("exportFormat")?,
                data_types: p.string_list("dataType")?,
            }),
            _ => Err(NodeError::UnknownOperation { operation }),
        }
    }

    pub fn into_request(self, base: BaseUrl, range: &str) -> ApiRequest {
        match self {
            Self::CampaignPerformance {
                campaign_id,
                include_sub_campaigns,
            } => ApiRequest::get(
                base,
                format!("/v1/analytics/campaigns/{}/performance", campaign_id.path_segment()),
            )
                .query("range", range)
                .query("includeSubCampaigns", include_sub_campaigns),
            Self::Engagement { engagement_types } => {
                ApiRequest::get(base, "/v1/analytics/engagement")
                    .query("range", range)
                    .query_list("engagementTypes", engagement_types)
            }
            Self::Connections => {
                ApiRequest::get(base, "/v1/analytics/connections").query("range", range)
            }
            Self::PostPerformance { post_urls } => ApiRequest::post(
                base,
                "/v1/analytics/posts/performance",
                JsonBody::new()
                    .field("range", range)
                    .field("postUrls", post_urls),
            ),
            Self::AudienceInsights { insight_types } => ApiRequest::get(base, "/v1/analytics/audience")
                .query("range", range)
                .query_list("insightTypes", insight_types),
            Self::Export { format, data_types } => ApiRequest::post(
                base,
                "/v1/analytics/export",
                JsonBody::new()
                    .field("range", range)
                    .field("format", format)
                    .field("dataTypes", data_types),
            ),
        }
    }
}

/// One URL per line, each trimmed.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim().to_owned()).collect()
}

#[derive(Debug, Clone)]
pub struct ConnectSafelyAnalytics {
    description: NodeDescription,
}

impl ConnectSafelyAnalytics {
    pub fn new() -> Self {
        Self::with_base_url(BaseUrl::Credential)
    }

    pub fn with_base_url(base_url: BaseUrl) -> Self {
        Self {
            description: describe(base_url),
        }
    }
}

impl Default for ConnectSafelyAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ConnectSafelyAnalytics {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError> {
        let operation = AnalyticsOperation::parse(parameters)?;
        let range = parameters.string("dateRange")?;
        Ok(operation.into_request(self.description.base_url.clone(), &range))
    }
}

fn describe(base_url: BaseUrl) -> NodeDescription {
    let fields = vec![
        FieldSpec::options(
            "operation",
            "Operation",
            vec![
                OptionSpec::described("Export Analytics Data", "exportAnalyticsData", "Export analytics data in various formats"),
                OptionSpec::described("Get Audience Insights", "getAudienceInsights", "Get insights about your audience demographics"),
                OptionSpec::described("Get Campaign Performance", "getCampaignPerformance", "Get detailed performance metrics for a campaign"),
                OptionSpec::described("Get Connection Analytics", "getConnectionAnalytics", "Get connection growth and quality metrics"),
                OptionSpec::described("Get Engagement Analytics", "getEngagementAnalytics", "Get engagement metrics and trends"),
                OptionSpec::described("Get Post Performance", "getPostPerformance", "Get performance metrics for specific posts"),
            ],
            "getCampaignPerformance",
        ),
        FieldSpec::options(
            "dateRange",
            "Date Range",
            vec![
                OptionSpec::new("Last 30 Days", "30d"),
                OptionSpec::new("Last 6 Months", "6m"),
                OptionSpec::new("Last 7 Days", "7d"),
                OptionSpec::new("Last 90 Days", "90d"),
                OptionSpec::new("Last Year", "1y"),
            ],
            "30d",
        )
        .describe("Time period for analytics data"),
        FieldSpec::string("campaignId", "Campaign ID")
            .required()
            .describe("Campaign ID to get performance for")
            .for_operations(&["getCampaignPerformance"]),
        FieldSpec::boolean("includeSubCampaigns", "Include Sub-Campaigns", false)
            .describe("Whether to include sub-campaign performance data")
            .for_operations(&["getCampaignPerformance"]),
        FieldSpec::multi_options(
            "engagementType",
            "Engagement Type",
            vec![
                OptionSpec::new("Likes", "likes"),
                OptionSpec::new("Comments", "comments"),
                OptionSpec::new("Shares", "shares"),
                OptionSpec::new("Connections", "connections"),
            ],
            &["likes", "comments", "shares"],
        )
        .describe("Types of engagement to analyze")
        .for_operations(&["getEngagementAnalytics"]),
        FieldSpec::text("postUrls", "Post URLs")
            .placeholder("https://www.linkedin.com/posts/post1\nhttps://www.linkedin.com/posts/post2")
            .describe("LinkedIn post URLs to analyze (one per line)")
            .for_operations(&["getPostPerformance"]),
        FieldSpec::multi_options(
            "insightType",
            "Insight Type",
            vec![
                OptionSpec::new("Demographics", "demographics"),
                OptionSpec::new("Industry", "industry"),
                OptionSpec::new("Job Titles", "jobTitles"),
                OptionSpec::new("Location", "location"),
            ],
            &["demographics", "industry", "jobTitles"],
        )
        .describe("Types of audience insights to retrieve")
        .for_operations(&["getAudienceInsights"]),
        FieldSpec::options(
            "exportFormat",
            "Export Format",
            vec![
                OptionSpec::new("CSV", "csv"),
                OptionSpec::new("JSON", "json"),
                OptionSpec::new("Excel", "excel"),
                OptionSpec::new("PDF Report", "pdf"),
            ],
            "csv",
        )
        .describe("Format to export the analytics data")
        .for_operations(&["exportAnalyticsData"]),
        FieldSpec::multi_options(
            "dataType",
            "Data Type",
            vec![
                OptionSpec::new("Campaign Performance", "campaignPerformance"),
                OptionSpec::new("Engagement Data", "engagementData"),
                OptionSpec::new("Connection Data", "connectionData"),
                OptionSpec::new("Post Performance", "postPerformance"),
            ],
            &["campaignPerformance", "engagementData"],
        )
        .describe("Types of data to include in export")
        .for_operations(&["exportAnalyticsData"]),
    ];

    NodeDescription {
        name: NAME,
        display_name: "ConnectSafely Analytics",
        description: "Get detailed analytics and insights from ConnectSafely campaigns",
        base_url,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use workflow::HttpMethod;

    use super::*;

    fn plan(values: Value) -> Result<ApiRequest, NodeError> {
        let node = ConnectSafelyAnalytics::new();
        let values = values.as_object().cloned().unwrap();
        node.build_request(&Parameters::new(node.description(), values))
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn campaign_id_is_a_single_path_segment() {
        let request = plan(json!({"campaignId": "../users?x=1"})).unwrap();
        assert_eq!(request.path, "/v1/analytics/campaigns/..%2Fusers%3Fx%3D1/performance");
    }

    #[test]
    fn campaign_performance_path_and_query() {
        let request = plan(json!({"campaignId": "cmp-1", "dateRange": "90d"})).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/analytics/campaigns/cmp-1/performance");
        assert_eq!(
            request.query,
            pairs(&[("range", "90d"), ("includeSubCampaigns", "false")])
        );
    }

    #[test]
    fn campaign_id_is_required() {
        let err = plan(json!({})).unwrap_err();
        assert_eq!(err, NodeError::MissingParameter { name: "campaignId".into() });
    }

    #[test]
    fn engagement_types_repeat_in_query() {
        let request = plan(json!({"operation": "getEngagementAnalytics"})).unwrap();
        assert_eq!(
            request.query,
            pairs(&[
                ("range", "30d"),
                ("engagementTypes", "likes"),
                ("engagementTypes", "comments"),
                ("engagementTypes", "shares"),
            ])
        );
    }

    #[test]
    fn audience_insights_default_types() {
        let request = plan(json!({"operation": "getAudienceInsights", "dateRange": "1y"})).unwrap();
        assert_eq!(request.path, "/v1/analytics/audience");
        assert_eq!(
            request.query,
            pairs(&[
                ("range", "1y"),
                ("insightTypes", "demographics"),
                ("insightTypes", "industry"),
                ("insightTypes", "jobTitles"),
            ])
        );
    }

    #[test]
    fn post_performance_splits_and_trims_urls() {
        let request = plan(json!({
            "operation": "getPostPerformance",
            "postUrls": "https://www.linkedin.com/posts/a \n  https://www.linkedin.com/posts/b"
        }))
        .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({
                "range": "30d",
                "postUrls": ["https://www.linkedin.com/posts/a", "https://www.linkedin.com/posts/b"]
            })
        );
    }

    #[test]
    fn export_body() {
        let request = plan(json!({"operation": "exportAnalyticsData", "exportFormat": "pdf"})).unwrap();
        assert_eq!(request.path, "/v1/analytics/export");
        assert_eq!(
            Value::Object(request.body.unwrap()),
            json!({
                "range": "30d",
                "format": "pdf",
                "dataTypes": ["campaignPerformance", "engagementData"]
            })
        );
    }

    #[test]
    fn connections_only_carry_range() {
        let request = plan(json!({"operation": "getConnectionAnalytics", "dateRange": "7d"})).unwrap();
        assert_eq!(request.path, "/v1/analytics/connections");
        assert_eq!(request.query, pairs(&[("range", "7d")]));
    }
}
