//! Shared request and response types for the Beacon backend API.
//!
//! Every payload crosses the wire in camelCase JSON wrapped in an
//! [`Envelope`]. The types here are the single source of truth for record
//! shapes on both the SDK and any other consumer of the API.

mod admin;
mod blog;
mod contact;
mod enrollment;
mod envelope;
mod mailer;
mod volunteer;

pub use admin::{AdminProfile, LoginRequest, LoginSession};
pub use blog::{BlogPage, BlogPost, BlogPostUpdate, NewBlogPost, PostStatus};
pub use contact::{
    ContactReceipt, DonationReceipt, InterestReceipt, NewContact, NewDonation,
    NewVolunteerInterest, NewsletterSignup,
};
pub use enrollment::{
    EnrollmentAvailability, EnrollmentPage, EnrollmentReceipt, EnrollmentRecord, Gender,
    NewEnrollment, SkillInterest,
};
pub use envelope::Envelope;
pub use mailer::{AdmissionMailing, Candidate, CandidateBatch, SendReport};
pub use volunteer::{
    ApplicationReceipt, AreaOfExpertise, NewVolunteerApplication, VolunteerApplicationRecord,
    VolunteerAvailability, VolunteerPage,
};
