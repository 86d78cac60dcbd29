use clap::{Parser, Subcommand};
use forum_client::ForumClient;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "forum", about = "Command-line client for the forum server")]
struct Cli {
    #[clap(short, long, env = "FORUM_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a page of root posts, newest first
    Feed {
        #[clap(long)]
        page: Option<u32>,
        #[clap(long)]
        page_size: Option<u32>,
    },
    /// Create a root post, or a reply with --parent
    Post {
        content: String,
        #[clap(long)]
        parent: Option<Uuid>,
    },
    /// Show a post with its direct replies
    Show { id: Uuid },
    /// List the comments of a post
    Comments { id: Uuid },
    /// Comment on a post
    Comment { id: Uuid, content: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let client = ForumClient::connect(&args.server)?;

    match args.command {
        Command::Feed { page, page_size } => {
            let feed = client.list_root_posts(page, page_size).await?;
            println!(
                "Page {}/{} ({} posts)",
                feed.page, feed.total_pages, feed.total
            );
            for post in feed.posts {
                println!("{}", post);
            }
        }
        Command::Post { content, parent } => {
            let post = client.create_post(content, parent).await?;
            println!("Post created! ID: {}", post.id);
        }
        Command::Show { id } => {
            let thread = client.get_post(id).await?;
            println!("{}", thread.post);
            for reply in thread.replies {
                println!("  {}", reply);
            }
        }
        Command::Comments { id } => {
            let comments = client.list_comments(id).await?;
            if comments.is_empty() {
                println!("No comments yet");
            }
            for comment in comments {
                println!("{}", comment);
            }
        }
        Command::Comment { id, content } => {
            let comment = client.create_comment(id, content).await?;
            println!("Comment created! ID: {}", comment.id);
        }
    }

    Ok(())
}
