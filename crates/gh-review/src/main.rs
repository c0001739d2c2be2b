use anyhow::Result;
use clap::Parser;
use gh_client::{ClientManager, GitHubClient};
use gh_review_config::ReviewConfig;
use gh_review_core::github::{describe_load_error, GitHubCommentSource};
use gh_review_core::{
    CommentAuthor, CommentSource, FileChange, FileSelection, LoadTarget, PrRef, ThreadStore,
};

mod logger;
mod render;

#[derive(Parser, Debug)]
#[command(name = "gh-review")]
#[command(about = "Print a GitHub pull request diff with its review threads")]
#[command(version)]
struct Args {
    /// Pull request URL or `owner/repo#number`
    pr: String,

    /// Only print this file
    #[arg(short, long)]
    file: Option<String>,

    /// GitHub host (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ReviewConfig::load();
    let log_file = logger::init(config.log_level_filter())?;

    log::info!("Starting gh-review, logging to {}", log_file.display());

    let pr_ref: PrRef = args.pr.parse()?;
    let host = args.host.as_deref().unwrap_or(&config.host);

    let mut clients = ClientManager::new();
    let client = clients.client_for(Some(host)).await?;
    let source = GitHubCommentSource::new(client.clone());

    let current_user = CommentAuthor {
        login: config.current_user_login.clone(),
        ..CommentAuthor::local_user()
    };
    let mut store = ThreadStore::new().with_current_user(current_user);

    let PrRef {
        owner,
        repo,
        number,
    } = &pr_ref;

    store.start_load();
    let (pr, files, comments) = tokio::join!(
        client.fetch_pull_request(owner, repo, *number),
        client.fetch_pull_request_files(owner, repo, *number),
        source.fetch_review_comments(owner, repo, *number),
    );
    store.finish_load(owner, repo, *number, comments);

    let pr = pr.map_err(|err| load_failure(LoadTarget::PullRequest, err))?;
    let files: Vec<FileChange> = files
        .map_err(|err| load_failure(LoadTarget::Files, err))?
        .into_iter()
        .map(FileChange::from)
        .collect();
    let mut selection = FileSelection::new(files);

    println!("{}", render::header(&pr));
    println!();
    println!("{}", render::description(&pr));
    if let Some(err) = store.error() {
        eprintln!("{}", err);
    }

    let shown: Vec<&FileChange> = match args.file.as_deref() {
        Some(path) => {
            if !selection.select_path(path) {
                anyhow::bail!("{} does not change {}", pr_ref, path);
            }
            selection.selected().into_iter().collect()
        }
        None => selection.files().iter().collect(),
    };

    for file in shown {
        println!();
        print!(
            "{}",
            render::file(file, store.threads(), config.show_resolved)
        );
    }

    log::info!(
        "Printed {} with {} threads",
        pr_ref,
        store.threads().len()
    );
    Ok(())
}

fn load_failure(target: LoadTarget, err: anyhow::Error) -> anyhow::Error {
    log::error!("Loading {:?} failed: {:#}", target, err);
    anyhow::anyhow!(describe_load_error(target, &err))
}
