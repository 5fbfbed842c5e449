use anyhow::Context;
use clap::Parser;
use sendgrid_client::{
    json::stringify, HttpV3MessageSender, Message, MessageBody, MessageBuilder, MessageEndPoint,
    SenderConfig,
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Build an email message and send it through the SendGrid v3 API
#[derive(Parser, Debug)]
#[command(name = "sendgrid", version, about)]
struct Args {
    /// Sender address
    #[arg(long)]
    from: String,

    /// Sender display name
    #[arg(long)]
    from_name: Option<String>,

    /// Main recipient, may be repeated
    #[arg(long, required = true)]
    to: Vec<String>,

    /// Carbon copy recipient, may be repeated
    #[arg(long)]
    cc: Vec<String>,

    /// Blind carbon copy recipient, may be repeated
    #[arg(long)]
    bcc: Vec<String>,

    #[arg(long)]
    subject: Option<String>,

    /// Plain text body
    #[arg(long)]
    text: Option<String>,

    /// HTML body
    #[arg(long)]
    html: Option<String>,

    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the v3 mail endpoint
    #[arg(long, env = "SENDGRID_ENDPOINT")]
    endpoint: Option<Url>,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Indent the request body
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn to_message(&self) -> anyhow::Result<Message> {
        let from = match &self.from_name {
            Some(name) => MessageEndPoint::new(name.as_str(), self.from.as_str()),
            None => MessageEndPoint::from(self.from.as_str()),
        };

        let mut builder = MessageBuilder::new()
            .set_from(from)
            .add_tos(self.to.iter().map(String::as_str))
            .add_ccs(self.cc.iter().map(String::as_str))
            .add_bccs(self.bcc.iter().map(String::as_str));

        if let Some(subject) = &self.subject {
            builder = builder.set_subject(subject.as_str());
        }
        if let Some(text) = &self.text {
            builder = builder.add_body(MessageBody::text(text.as_str()));
        }
        if let Some(html) = &self.html {
            builder = builder.add_body(MessageBody::html(html.as_str()));
        }

        builder.build().context("invalid message")
    }

    fn sender_config(&self) -> anyhow::Result<SenderConfig> {
        let api_key = self
            .api_key
            .clone()
            .context("an API key is required: pass --api-key or set SENDGRID_API_KEY")?;

        let mut config = SenderConfig::new(api_key).with_minified(!self.pretty);
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let message = args.to_message()?;
    tracing::debug!(
        "built message from {} for {} recipient(s)",
        message.from(),
        message.to().len()
    );

    if args.dry_run {
        print!("{}", stringify(&message.to_payload(), !args.pretty));
        if !args.pretty {
            println!();
        }
        return Ok(());
    }

    let sender = HttpV3MessageSender::from_config(args.sender_config()?)?;
    let result = sender.send(&message).await?;
    println!("{}", result);

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
