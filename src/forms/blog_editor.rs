//! Admin blog editor controller.
//!
//! Draft and publish share one submit path; the caller sets the status
//! immediately before invoking [`BlogEditor::save`]. Unlike the public
//! forms, saving again after a success is allowed, so the editor returns to
//! `Idle` rather than parking in `Submitted`.

use time::OffsetDateTime;

use beacon_api_types::{BlogPost, BlogPostUpdate, NewBlogPost, PostStatus};

use super::rules::{self, FieldErrors};
use super::{SubmitOutcome, SubmitState};
use crate::client::{AdminSession, ApiClient};

/// Derive a URL-safe slug from a post title.
pub fn derive_slug(title: &str) -> String {
    slug::slugify(title)
}

#[derive(Debug)]
pub struct BlogEditor {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub image_url: String,
    pub status: PostStatus,
    editing: Option<BlogPost>,
    state: SubmitState,
    errors: FieldErrors,
}

impl Default for BlogEditor {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            author: String::new(),
            image_url: String::new(),
            status: PostStatus::Draft,
            editing: None,
            state: SubmitState::Idle,
            errors: FieldErrors::new(),
        }
    }
}

impl BlogEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the editor from an existing post fetched by id.
    pub async fn load(
        api: &ApiClient,
        session: &AdminSession,
        id: i64,
    ) -> Result<Self, crate::error::ApiError> {
        let post = api.get_blog_post_by_id(session, id).await?;
        Ok(Self::for_post(post))
    }

    pub fn for_post(post: BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
            status: post.status,
            editing: Some(post),
            ..Self::default()
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "title", &self.title, "Title is required");
        rules::require(&mut errors, "author", &self.author, "Author is required");
        rules::require(&mut errors, "excerpt", &self.excerpt, "Excerpt is required");
        rules::require(&mut errors, "content", &self.content, "Content is required");
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Set the status flag and save, the shared handler behind both the
    /// "save as draft" and "publish" affordances.
    pub async fn save_as(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        status: PostStatus,
    ) -> SubmitOutcome {
        self.status = status;
        self.save(api, session).await
    }

    /// Create or update depending on whether the editor was seeded from an
    /// existing post. Resubmission is allowed; only an in-flight save blocks.
    pub async fn save(&mut self, api: &ApiClient, session: &AdminSession) -> SubmitOutcome {
        if self.state == SubmitState::Submitting {
            return SubmitOutcome::AlreadySubmitted;
        }
        if !self.validate() {
            return SubmitOutcome::Blocked;
        }

        let slug = derive_slug(&self.title);
        let published_at = match self.status {
            PostStatus::Published => OffsetDateTime::now_utc(),
            PostStatus::Draft => self
                .editing
                .as_ref()
                .and_then(|post| post.published_at)
                .unwrap_or_else(OffsetDateTime::now_utc),
        };
        let image_url = {
            let trimmed = self.image_url.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        self.state = SubmitState::Submitting;
        let result = if let Some(existing) = &self.editing {
            let update = BlogPostUpdate {
                title: Some(self.title.trim().to_string()),
                content: Some(self.content.clone()),
                excerpt: Some(self.excerpt.trim().to_string()),
                author: Some(self.author.trim().to_string()),
                slug: Some(slug),
                status: Some(self.status),
                published_at: Some(published_at),
                image_url,
            };
            api.update_blog_post(session, existing.id, &update).await
        } else {
            let post = NewBlogPost {
                title: self.title.trim().to_string(),
                content: self.content.clone(),
                excerpt: self.excerpt.trim().to_string(),
                author: self.author.trim().to_string(),
                slug,
                status: self.status,
                published_at,
                image_url,
            };
            api.create_blog_post(session, &post).await
        };

        match result {
            Ok(saved) => {
                self.state = SubmitState::Idle;
                self.errors.clear();
                let verb = match self.status {
                    PostStatus::Published => "published",
                    PostStatus::Draft => "saved as draft",
                };
                let confirmation = format!("Blog post has been {verb} successfully.");
                self.editing = Some(saved);
                SubmitOutcome::Accepted { confirmation }
            }
            Err(err) => {
                self.state = SubmitState::Idle;
                SubmitOutcome::Failed {
                    message: err.user_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;

    fn filled_editor() -> BlogEditor {
        BlogEditor {
            title: "Graduation Day 2026".into(),
            content: "It was a great day.".into(),
            excerpt: "Our first cohort graduates.".into(),
            author: "Beacon Team".into(),
            ..BlogEditor::default()
        }
    }

    #[test]
    fn slug_is_derived_from_title() {
        assert_eq!(derive_slug("Graduation Day 2026!"), "graduation-day-2026");
        assert_eq!(derive_slug("  Hello,   World  "), "hello-world");
    }

    #[tokio::test]
    async fn missing_fields_block_the_save() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/admin/blog/posts");
            then.status(200).body("{}");
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let session = AdminSession::new("tok").expect("session");
        let mut editor = BlogEditor::new();

        let outcome = editor.save_as(&api, &session, PostStatus::Draft).await;
        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert_eq!(editor.errors().len(), 4);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn publish_creates_with_derived_slug_and_allows_resave() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method("POST")
                .path("/api/admin/blog/posts")
                .header("authorization", "Bearer tok")
                .json_body_includes(
                    r#"{"slug":"graduation-day-2026","status":"published"}"#,
                );
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"success":true,"data":{"id":3,"title":"Graduation Day 2026","content":"It was a great day.","excerpt":"Our first cohort graduates.","author":"Beacon Team","slug":"graduation-day-2026","status":"published","publishedAt":"2026-08-26T10:00:00Z"},"message":""}"#,
                );
        });
        let update = server.mock(|when, then| {
            when.method("PUT")
                .path("/api/admin/blog/posts/3")
                .json_body_includes(r#"{"status":"draft"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"success":true,"data":{"id":3,"title":"Graduation Day 2026","content":"It was a great day.","excerpt":"Our first cohort graduates.","author":"Beacon Team","slug":"graduation-day-2026","status":"draft","publishedAt":"2026-08-26T10:00:00Z"},"message":""}"#,
                );
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let session = AdminSession::new("tok").expect("session");
        let mut editor = filled_editor();

        let outcome = editor.save_as(&api, &session, PostStatus::Published).await;
        assert!(outcome.is_accepted());
        assert!(editor.is_editing());
        create.assert();

        // The editor may save again; the second save updates in place.
        let outcome = editor.save_as(&api, &session, PostStatus::Draft).await;
        assert!(outcome.is_accepted());
        update.assert();
    }
}
