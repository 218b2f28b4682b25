//! Command-line surface for `beacon-cli`.
//! Kept in a shared file so tests can reuse the same definitions as the
//! binary itself.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use beacon_api_types::{
    AreaOfExpertise, EnrollmentAvailability, Gender, PostStatus, SkillInterest,
    VolunteerAvailability,
};

#[derive(Parser, Debug)]
#[command(name = "beacon-cli", version, about = "Beacon backend API CLI", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <https://api.example.org>
    #[arg(long, env = "BEACON_API_URL")]
    pub api_url: Option<String>,

    /// Path to file containing the admin token (takes precedence over env)
    #[arg(long, env = "BEACON_ADMIN_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Admin token, normally supplied via env (the flag stays hidden so
    /// tokens are not invited into shell history). A long flag rather than
    /// a bare positional: a positional would silently swallow a mistyped
    /// subcommand as the token.
    #[arg(long = "admin-token", hide = true, env = "BEACON_ADMIN_TOKEN")]
    pub admin_token_env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enrollment submission and admin listing/export
    Enrollments(EnrollmentsArgs),
    /// Volunteer applications and admin listing/export
    Volunteers(VolunteersArgs),
    /// Contact form submission
    Contact(ContactArgs),
    /// Blog reads and admin post management
    Blog(BlogArgs),
    /// Admission mailer workflow (upload, filter, preview, send)
    Mailer(MailerArgs),
    /// Newsletter, donation, and volunteer-interest submissions
    Engage(EngageArgs),
    /// Admin authentication
    Admin(AdminArgs),
}

#[derive(Parser, Debug)]
pub struct EnrollmentsArgs {
    #[command(subcommand)]
    pub action: EnrollmentsCmd,
}

#[derive(Subcommand, Debug)]
pub enum EnrollmentsCmd {
    /// Submit a public enrollment
    Submit {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: GenderArg,
        #[arg(long)]
        location: String,
        #[arg(long)]
        skill_interest: SkillInterestArg,
        #[arg(long)]
        education: Option<String>,
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        motivation: String,
        #[arg(long)]
        availability: EnrollAvailabilityArg,
        #[arg(long, default_value = "")]
        how_did_you_hear: String,
    },
    /// List an admin page of enrollments
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Filter the fetched page (name, email, skill interest)
        #[arg(long)]
        search: Option<String>,
    },
    /// Download the CSV export into a directory
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct VolunteersArgs {
    #[command(subcommand)]
    pub action: VolunteersCmd,
}

#[derive(Subcommand, Debug)]
pub enum VolunteersCmd {
    /// Submit a volunteer application with a CV file
    Submit {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        area_of_expertise: ExpertiseArg,
        #[arg(long)]
        short_bio: String,
        #[arg(long)]
        cv: PathBuf,
        #[arg(long)]
        availability: VolunteerAvailabilityArg,
        #[arg(long)]
        experience: String,
        #[arg(long)]
        motivation: String,
    },
    /// List an admin page of volunteer applications
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Filter the fetched page (name, email, expertise)
        #[arg(long)]
        search: Option<String>,
    },
    /// Download the CSV export into a directory
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct ContactArgs {
    #[command(subcommand)]
    pub action: ContactCmd,
}

#[derive(Subcommand, Debug)]
pub enum ContactCmd {
    /// Send a contact message
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        message_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub action: BlogCmd,
}

#[derive(Subcommand, Debug)]
pub enum BlogCmd {
    /// Public listing (published posts only; placeholders on failure)
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Public single-post lookup by slug
    Get { slug: String },
    /// Admin listing, drafts included
    AdminList {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Filter the fetched page (title, content)
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        excerpt: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
        #[arg(long, default_value_t = PostStatusArg::Draft)]
        status: PostStatusArg,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update an existing post (unset flags keep their current value)
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
        #[arg(long)]
        status: Option<PostStatusArg>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a post (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct MailerArgs {
    #[command(subcommand)]
    pub action: MailerCmd,
}

#[derive(Subcommand, Debug)]
pub enum MailerCmd {
    /// Print the sample CSV expected by the upload endpoint
    Sample,
    /// Upload a candidates CSV and show the parsed set
    Upload {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Upload, filter, and render the preview for the first candidate
    Preview {
        #[arg(long)]
        csv: PathBuf,
        /// Exact course name; omit for all courses
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        message_file: Option<PathBuf>,
        #[arg(long)]
        cta_text: Option<String>,
        #[arg(long)]
        cta_link: Option<String>,
    },
    /// Upload, filter, and send the batch
    Send {
        #[arg(long)]
        csv: PathBuf,
        /// Exact course name; omit for all courses
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        message_file: Option<PathBuf>,
        #[arg(long)]
        cta_text: Option<String>,
        #[arg(long)]
        cta_link: Option<String>,
    },
}

#[derive(Parser, Debug)]
pub struct EngageArgs {
    #[command(subcommand)]
    pub action: EngageCmd,
}

#[derive(Subcommand, Debug)]
pub enum EngageCmd {
    /// Subscribe an address to the newsletter
    Subscribe {
        #[arg(long)]
        email: String,
    },
    /// Start a donation and print the payment URL
    Donate {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Register volunteer/partner interest
    Interest {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        interest: String,
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub action: AdminCmd,
}

#[derive(Subcommand, Debug)]
pub enum AdminCmd {
    /// Exchange credentials for a bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SkillInterestArg {
    WebDevelopment,
    MobileDevelopment,
    IotEmbedded,
    GraphicDesign,
    DigitalMarketing,
    PhotographyVideo,
    General,
}

impl From<SkillInterestArg> for SkillInterest {
    fn from(value: SkillInterestArg) -> Self {
        match value {
            SkillInterestArg::WebDevelopment => SkillInterest::WebDevelopment,
            SkillInterestArg::MobileDevelopment => SkillInterest::MobileDevelopment,
            SkillInterestArg::IotEmbedded => SkillInterest::IotEmbedded,
            SkillInterestArg::GraphicDesign => SkillInterest::GraphicDesign,
            SkillInterestArg::DigitalMarketing => SkillInterest::DigitalMarketing,
            SkillInterestArg::PhotographyVideo => SkillInterest::PhotographyVideo,
            SkillInterestArg::General => SkillInterest::General,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EnrollAvailabilityArg {
    YesFullTime,
    YesPartTime,
    Unsure,
}

impl From<EnrollAvailabilityArg> for EnrollmentAvailability {
    fn from(value: EnrollAvailabilityArg) -> Self {
        match value {
            EnrollAvailabilityArg::YesFullTime => EnrollmentAvailability::YesFullTime,
            EnrollAvailabilityArg::YesPartTime => EnrollmentAvailability::YesPartTime,
            EnrollAvailabilityArg::Unsure => EnrollmentAvailability::Unsure,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExpertiseArg {
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

impl From<ExpertiseArg> for AreaOfExpertise {
    fn from(value: ExpertiseArg) -> Self {
        match value {
            ExpertiseArg::WebDevelopment => AreaOfExpertise::WebDevelopment,
            ExpertiseArg::MobileDevelopment => AreaOfExpertise::MobileDevelopment,
            ExpertiseArg::IotEmbedded => AreaOfExpertise::IotEmbedded,
            ExpertiseArg::AiForCreatives => AreaOfExpertise::AiForCreatives,
            ExpertiseArg::DataAnalysis => AreaOfExpertise::DataAnalysis,
            ExpertiseArg::GraphicDesign => AreaOfExpertise::GraphicDesign,
            ExpertiseArg::PhotographyVideo => AreaOfExpertise::PhotographyVideo,
            ExpertiseArg::DigitalMarketing => AreaOfExpertise::DigitalMarketing,
            ExpertiseArg::ContentWriting => AreaOfExpertise::ContentWriting,
            ExpertiseArg::Mentorship => AreaOfExpertise::Mentorship,
            ExpertiseArg::CharacterBuilding => AreaOfExpertise::CharacterBuilding,
            ExpertiseArg::LifeSkills => AreaOfExpertise::LifeSkills,
            ExpertiseArg::ProjectManagement => AreaOfExpertise::ProjectManagement,
            ExpertiseArg::CareerGuidance => AreaOfExpertise::CareerGuidance,
            ExpertiseArg::BusinessDevelopment => AreaOfExpertise::BusinessDevelopment,
            ExpertiseArg::FinanceAccounting => AreaOfExpertise::FinanceAccounting,
            ExpertiseArg::Communications => AreaOfExpertise::Communications,
            ExpertiseArg::Other => AreaOfExpertise::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VolunteerAvailabilityArg {
    Weekdays,
    Weekends,
    Flexible,
    Evenings,
    PartTime,
    FullTime,
}

impl From<VolunteerAvailabilityArg> for VolunteerAvailability {
    fn from(value: VolunteerAvailabilityArg) -> Self {
        match value {
            VolunteerAvailabilityArg::Weekdays => VolunteerAvailability::Weekdays,
            VolunteerAvailabilityArg::Weekends => VolunteerAvailability::Weekends,
            VolunteerAvailabilityArg::Flexible => VolunteerAvailability::Flexible,
            VolunteerAvailabilityArg::Evenings => VolunteerAvailability::Evenings,
            VolunteerAvailabilityArg::PartTime => VolunteerAvailability::PartTime,
            VolunteerAvailabilityArg::FullTime => VolunteerAvailability::FullTime,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PostStatusArg {
    Draft,
    Published,
}

impl PostStatusArg {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatusArg::Draft => "draft",
            PostStatusArg::Published => "published",
        }
    }
}

impl fmt::Display for PostStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PostStatusArg> for PostStatus {
    fn from(value: PostStatusArg) -> Self {
        match value {
            PostStatusArg::Draft => PostStatus::Draft,
            PostStatusArg::Published => PostStatus::Published,
        }
    }
}
