#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use beacon_api_types::BlogPost;
use beacon_client::content::{load_blog_listing, load_blog_post};
use beacon_client::forms::blog_editor::BlogEditor;
use beacon_client::listing::{DeleteOutcome, ListController};

use crate::args::{BlogCmd, PostStatusArg};
use crate::context::{CliError, Ctx};
use crate::handlers::finish_submit;
use crate::io::read_value;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: BlogCmd) -> Result<(), CliError> {
    match cmd {
        BlogCmd::List { page, limit } => list(ctx, page, limit).await,
        BlogCmd::Get { slug } => get(ctx, slug).await,
        BlogCmd::AdminList {
            page,
            limit,
            search,
        } => admin_list(ctx, page, limit, search).await,
        BlogCmd::Create {
            title,
            excerpt,
            author,
            content,
            content_file,
            status,
            image_url,
        } => {
            let input = CreateInput {
                title,
                excerpt,
                author,
                content,
                content_file,
                status,
                image_url,
            };
            create(ctx, input).await
        }
        BlogCmd::Update {
            id,
            title,
            excerpt,
            author,
            content,
            content_file,
            status,
            image_url,
        } => {
            let input = UpdateInput {
                id,
                title,
                excerpt,
                author,
                content,
                content_file,
                status,
                image_url,
            };
            update(ctx, input).await
        }
        BlogCmd::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

struct CreateInput {
    title: String,
    excerpt: String,
    author: String,
    content: Option<String>,
    content_file: Option<PathBuf>,
    status: PostStatusArg,
    image_url: Option<String>,
}

struct UpdateInput {
    id: i64,
    title: Option<String>,
    excerpt: Option<String>,
    author: Option<String>,
    content: Option<String>,
    content_file: Option<PathBuf>,
    status: Option<PostStatusArg>,
    image_url: Option<String>,
}

async fn list(ctx: &Ctx, page: u32, limit: u32) -> Result<(), CliError> {
    let listing = load_blog_listing(&ctx.api, page, limit).await;
    if listing.placeholder {
        eprintln!("backend unreachable; showing placeholder content");
    }
    print_json(&listing.posts)?;
    Ok(())
}

async fn get(ctx: &Ctx, slug: String) -> Result<(), CliError> {
    match load_blog_post(&ctx.api, &slug).await {
        Some(post) => print_json(&post),
        None => Err(CliError::InvalidInput(format!(
            "no published post with slug {slug}"
        ))),
    }
}

async fn admin_list(
    ctx: &Ctx,
    page: u32,
    limit: u32,
    search: Option<String>,
) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut ctrl: ListController<BlogPost> = ListController::new(limit);
    ctrl.fetch_page(&ctx.api, session, page).await?;
    if let Some(term) = search {
        ctrl.set_search(term);
    }

    print_json(&ctrl.visible())?;
    println!(
        "page {} of {} ({} total)",
        ctrl.page(),
        ctrl.total_pages(),
        ctrl.total()
    );
    Ok(())
}

async fn create(ctx: &Ctx, input: CreateInput) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut editor = BlogEditor::new();
    editor.title = input.title;
    editor.content = read_value(input.content, input.content_file)?;
    editor.excerpt = input.excerpt;
    editor.author = input.author;
    editor.image_url = input.image_url.unwrap_or_default();

    let outcome = editor.save_as(&ctx.api, session, input.status.into()).await;
    finish_submit(outcome, editor.errors())
}

async fn update(ctx: &Ctx, input: UpdateInput) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut editor = BlogEditor::load(&ctx.api, session, input.id).await?;

    if let Some(title) = input.title {
        editor.title = title;
    }
    if let Some(excerpt) = input.excerpt {
        editor.excerpt = excerpt;
    }
    if let Some(author) = input.author {
        editor.author = author;
    }
    if input.content.is_some() || input.content_file.is_some() {
        editor.content = read_value(input.content, input.content_file)?;
    }
    if let Some(image_url) = input.image_url {
        editor.image_url = image_url;
    }

    let outcome = match input.status {
        Some(status) => editor.save_as(&ctx.api, session, status.into()).await,
        None => editor.save(&ctx.api, session).await,
    };
    finish_submit(outcome, editor.errors())
}

async fn delete(ctx: &Ctx, id: i64, yes: bool) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut ctrl: ListController<BlogPost> = ListController::default();

    match ctrl.delete_post(&ctx.api, session, id, || yes).await {
        DeleteOutcome::Canceled => {
            println!("delete aborted (pass --yes to confirm)");
            Ok(())
        }
        DeleteOutcome::Deleted => {
            println!("deleted post {id}");
            Ok(())
        }
        DeleteOutcome::Failed { message } => Err(CliError::Submission(message)),
    }
}
