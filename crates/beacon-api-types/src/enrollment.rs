use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Self-reported gender on the enrollment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Program track an applicant wants to enroll in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillInterest {
    WebDevelopment,
    MobileDevelopment,
    IotEmbedded,
    GraphicDesign,
    DigitalMarketing,
    PhotographyVideo,
    General,
}

impl SkillInterest {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillInterest::WebDevelopment => "web-development",
            SkillInterest::MobileDevelopment => "mobile-development",
            SkillInterest::IotEmbedded => "iot-embedded",
            SkillInterest::GraphicDesign => "graphic-design",
            SkillInterest::DigitalMarketing => "digital-marketing",
            SkillInterest::PhotographyVideo => "photography-video",
            SkillInterest::General => "general",
        }
    }
}

/// Availability confirmation for the training schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentAvailability {
    YesFullTime,
    YesPartTime,
    Unsure,
}

impl EnrollmentAvailability {
    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentAvailability::YesFullTime => "yes-full-time",
            EnrollmentAvailability::YesPartTime => "yes-part-time",
            EnrollmentAvailability::Unsure => "unsure",
        }
    }
}

/// Payload for a public enrollment submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
    pub skill_interest: SkillInterest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub motivation: String,
    pub availability: EnrollmentAvailability,
    pub how_did_you_hear: String,
}

/// Enrollment as stored by the backend. Append-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
    pub skill_interest: SkillInterest,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    pub motivation: String,
    pub availability: EnrollmentAvailability,
    #[serde(default)]
    pub how_did_you_hear: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentReceipt {
    pub enrollment_id: i64,
}

/// One admin page of enrollments plus the collection-wide total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentPage {
    pub enrollments: Vec<EnrollmentRecord>,
    pub total: u64,
}
