use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Professional area a volunteer offers to contribute in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaOfExpertise {
    WebDevelopment,
    MobileDevelopment,
    IotEmbedded,
    AiForCreatives,
    DataAnalysis,
    GraphicDesign,
    PhotographyVideo,
    DigitalMarketing,
    ContentWriting,
    Mentorship,
    CharacterBuilding,
    LifeSkills,
    ProjectManagement,
    CareerGuidance,
    BusinessDevelopment,
    FinanceAccounting,
    Communications,
    Other,
}

impl AreaOfExpertise {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaOfExpertise::WebDevelopment => "web-development",
            AreaOfExpertise::MobileDevelopment => "mobile-development",
            AreaOfExpertise::IotEmbedded => "iot-embedded",
            AreaOfExpertise::AiForCreatives => "ai-for-creatives",
            AreaOfExpertise::DataAnalysis => "data-analysis",
            AreaOfExpertise::GraphicDesign => "graphic-design",
            AreaOfExpertise::PhotographyVideo => "photography-video",
            AreaOfExpertise::DigitalMarketing => "digital-marketing",
            AreaOfExpertise::ContentWriting => "content-writing",
            AreaOfExpertise::Mentorship => "mentorship",
            AreaOfExpertise::CharacterBuilding => "character-building",
            AreaOfExpertise::LifeSkills => "life-skills",
            AreaOfExpertise::ProjectManagement => "project-management",
            AreaOfExpertise::CareerGuidance => "career-guidance",
            AreaOfExpertise::BusinessDevelopment => "business-development",
            AreaOfExpertise::FinanceAccounting => "finance-accounting",
            AreaOfExpertise::Communications => "communications",
            AreaOfExpertise::Other => "other",
        }
    }
}

/// Time commitment a volunteer can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolunteerAvailability {
    Weekdays,
    Weekends,
    Flexible,
    Evenings,
    PartTime,
    FullTime,
}

impl VolunteerAvailability {
    pub fn as_str(self) -> &'static str {
        match self {
            VolunteerAvailability::Weekdays => "weekdays",
            VolunteerAvailability::Weekends => "weekends",
            VolunteerAvailability::Flexible => "flexible",
            VolunteerAvailability::Evenings => "evenings",
            VolunteerAvailability::PartTime => "part-time",
            VolunteerAvailability::FullTime => "full-time",
        }
    }
}

/// Text fields of a volunteer application. The CV travels as a separate
/// multipart file part, so it is not represented here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteerApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub area_of_expertise: AreaOfExpertise,
    pub short_bio: String,
    pub availability: VolunteerAvailability,
    pub experience: String,
    pub motivation: String,
}

/// Volunteer application as stored by the backend. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplicationRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub area_of_expertise: AreaOfExpertise,
    pub short_bio: String,
    #[serde(default)]
    pub cv_url: Option<String>,
    pub availability: VolunteerAvailability,
    pub experience: String,
    pub motivation: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub application_id: i64,
}

/// One admin page of volunteer applications plus the collection-wide total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerPage {
    pub volunteers: Vec<VolunteerApplicationRecord>,
    pub total: u64,
}
