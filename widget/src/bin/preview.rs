//! Headless host for the widget: renders the page against a running API and
//! optionally submits one signup.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;
use widget::{HttpApi, Page, SubmitEvent, Widget, WidgetConfig};

#[derive(Parser)]
#[command(name = "activities-preview", about = "Render the activities page headlessly")]
struct Args {
    /// Base URL of the activities API, overrides ACTIVITIES_API_URL.
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in the signup form and submit it.
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = WidgetConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    config.log();

    let widget = Widget::mount(HttpApi::new(config.api_url.clone()), Page::new(), &config);

    // Failures are already rendered into the page.
    let _ = widget.start().await;

    if let Some(Command::Signup { activity, email }) = args.command {
        widget.surface().lock().fill_signup_form(&email, &activity);

        let outcome = widget.submit(&mut SubmitEvent::new()).await;
        info!("signup outcome: {:?}", outcome);

        widget.refreshed().await;
    }

    println!("{}", widget.surface().lock().to_html());

    Ok(())
}
