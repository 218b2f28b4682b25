use reqwest::Method;

use beacon_api_types::{BlogPage, BlogPost, BlogPostUpdate, NewBlogPost};

use super::{AdminSession, ApiClient, page_query};
use crate::error::ApiError;

impl ApiClient {
    /// Public page of posts. The backend returns drafts too; public views
    /// filter to published (see [`crate::content`]).
    pub async fn get_blog_posts(&self, page: u32, limit: u32) -> Result<BlogPage, ApiError> {
        self.request(
            Method::GET,
            "api/blog/posts",
            &page_query(page, limit),
            None::<&()>,
            None,
        )
        .await
    }

    /// Public single-post lookup by slug.
    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPost, ApiError> {
        let path = format!("api/blog/posts/{slug}");
        self.request(Method::GET, &path, &[], None::<&()>, None)
            .await
    }

    /// Admin page of posts, drafts included.
    pub async fn list_admin_blog_posts(
        &self,
        session: &AdminSession,
        page: u32,
        limit: u32,
    ) -> Result<BlogPage, ApiError> {
        self.request(
            Method::GET,
            "api/admin/blog/posts",
            &page_query(page, limit),
            None::<&()>,
            Some(session),
        )
        .await
    }

    /// Admin single-post lookup by id, used to seed the editor.
    pub async fn get_blog_post_by_id(
        &self,
        session: &AdminSession,
        id: i64,
    ) -> Result<BlogPost, ApiError> {
        let path = format!("api/admin/blog/posts/{id}");
        self.request(Method::GET, &path, &[], None::<&()>, Some(session))
            .await
    }

    pub async fn create_blog_post(
        &self,
        session: &AdminSession,
        post: &NewBlogPost,
    ) -> Result<BlogPost, ApiError> {
        self.request(
            Method::POST,
            "api/admin/blog/posts",
            &[],
            Some(post),
            Some(session),
        )
        .await
    }

    pub async fn update_blog_post(
        &self,
        session: &AdminSession,
        id: i64,
        update: &BlogPostUpdate,
    ) -> Result<BlogPost, ApiError> {
        let path = format!("api/admin/blog/posts/{id}");
        self.request(Method::PUT, &path, &[], Some(update), Some(session))
            .await
    }

    /// Delete a post; the envelope carries no data on success.
    pub async fn delete_blog_post(&self, session: &AdminSession, id: i64) -> Result<(), ApiError> {
        let path = format!("api/admin/blog/posts/{id}");
        self.request_unit(Method::DELETE, &path, None::<&()>, Some(session))
            .await
    }
}
