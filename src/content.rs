//! Public content views: the blog listing and single-post lookup.
//!
//! Public views never hard-fail: when the backend is unreachable the
//! listing degrades to built-in placeholder posts so the page still
//! renders.

use tracing::warn;

use beacon_api_types::{BlogPost, PostStatus};

use crate::client::ApiClient;

/// A loaded public blog page. `placeholder` marks content that came from
/// the built-in fallback rather than the backend.
#[derive(Debug)]
pub struct BlogListing {
    pub posts: Vec<BlogPost>,
    pub total: u64,
    pub placeholder: bool,
}

/// Fetch a public page of posts, keeping only published ones. On any fetch
/// failure the listing falls back to placeholder content.
pub async fn load_blog_listing(api: &ApiClient, page: u32, limit: u32) -> BlogListing {
    match api.get_blog_posts(page, limit).await {
        Ok(result) => {
            let posts = only_published(result.posts);
            BlogListing {
                posts,
                total: result.total,
                placeholder: false,
            }
        }
        Err(err) => {
            warn!(error = %err, "blog listing fetch failed, using placeholder content");
            let posts = placeholder_posts();
            let total = posts.len() as u64;
            BlogListing {
                posts,
                total,
                placeholder: true,
            }
        }
    }
}

/// Fetch a single public post by slug. Drafts and fetch failures both read
/// as "not there" to the public.
pub async fn load_blog_post(api: &ApiClient, slug: &str) -> Option<BlogPost> {
    match api.get_blog_post(slug).await {
        Ok(post) if post.status == PostStatus::Published => Some(post),
        Ok(_) => None,
        Err(err) => {
            warn!(error = %err, slug, "blog post fetch failed");
            None
        }
    }
}

pub fn only_published(posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts
        .into_iter()
        .filter(|post| post.status == PostStatus::Published)
        .collect()
}

/// Static stand-in posts shown when the backend cannot be reached.
pub fn placeholder_posts() -> Vec<BlogPost> {
    use time::macros::datetime;

    let entries = [
        (
            1,
            "Empowering Youth Through Technology",
            "How our training program helps young people build careers in tech.",
            datetime!(2024-12-01 0:00 UTC),
        ),
        (
            2,
            "Success Stories from Our First Cohort",
            "Graduates share how the program changed their paths.",
            datetime!(2024-12-05 0:00 UTC),
        ),
        (
            3,
            "Volunteers Make the Difference",
            "Meet the mentors behind our weekend workshops.",
            datetime!(2024-12-10 0:00 UTC),
        ),
    ];

    entries
        .into_iter()
        .map(|(id, title, excerpt, published_at)| BlogPost {
            id,
            title: title.to_string(),
            content: excerpt.to_string(),
            excerpt: excerpt.to_string(),
            author: "Beacon Team".to_string(),
            slug: crate::forms::blog_editor::derive_slug(title),
            status: PostStatus::Published,
            published_at: Some(published_at),
            image_url: Some("/placeholder.svg".to_string()),
        })
        .collect()
}
