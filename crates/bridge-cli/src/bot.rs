//! Discord gateway client and message handling.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use bridge_core::command::issue_request;
use bridge_core::{Command, DiscordConfig, Settings, reply};
use bridge_github::GitHubClient;
use secrecy::ExposeSecret;
use serenity::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};

/// Answers bridge commands posted in Discord.
pub struct Handler {
    github: Arc<GitHubClient>,
    settings: Settings,
}

impl Handler {
    pub const fn new(github: Arc<GitHubClient>, settings: Settings) -> Self {
        Self { github, settings }
    }

    /// Reply to a message, or `None` if it is not a bridge command.
    pub async fn respond(&self, content: &str) -> Option<String> {
        let prefix = &self.settings.prefix;
        match Command::parse(content, prefix) {
            Ok(Some(command)) => Some(self.execute(&command).await),
            Ok(None) => None,
            Err(e) => Some(reply::error(&format!("{e}. Try `{prefix}help`."))),
        }
    }

    async fn execute(&self, command: &Command) -> String {
        tracing::info!(?command, "dispatching command");

        let result = match command {
            Command::Help => Ok(reply::help(&self.settings.prefix)),
            Command::Issues => self
                .github
                .list_issues()
                .await
                .map(|issues| reply::issue_list(&self.repo_slug(), &issues)),
            Command::CreateIssue {
                title,
                body,
                labels,
            } => {
                let request = issue_request(title, body, labels, &self.settings.default_labels);
                self.github
                    .create_issue(&request)
                    .await
                    .map(|created| reply::issue_created(&created))
            }
            Command::Comment { number, body } => self
                .github
                .create_issue_comment(*number, body.as_str())
                .await
                .map(|()| reply::comment_created(*number)),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "github request failed");
            reply::error(&e.to_string())
        })
    }

    fn repo_slug(&self) -> String {
        let config = self.github.config();
        format!("{}/{}", config.author(), config.repo())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || !self.settings.allows_channel(msg.channel_id.get()) {
            return;
        }

        let Some(text) = self.respond(&msg.content).await else {
            return;
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
            tracing::warn!(error = %e, channel = msg.channel_id.get(), "failed to send reply");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, guilds = ready.guilds.len(), "connected to Discord");
    }
}

/// Connect to the Discord gateway and process events until the connection ends.
pub async fn start(config: &DiscordConfig, handler: Handler) -> Result<()> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(config.token().expose_secret(), intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")?;

    client
        .start()
        .await
        .context("Discord gateway connection failed")
}
