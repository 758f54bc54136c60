use anyhow::Result;
use log::{error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use birthday::commands::{create_all_modules, CommandContext, CommandRegistry, Dispatcher, Requester};
use birthday::core::Config;
use birthday::features::{get_bot_version, DefaultAnnouncements};
use birthday::gateway::{GatewayStatus, GuildTextChannel};

struct Handler {
    dispatcher: Dispatcher,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        // Commands are guild-scoped; direct messages are ignored
        let Some(guild_id) = msg.guild_id else {
            return;
        };

        let channel = Arc::new(GuildTextChannel::new(
            ctx.http.clone(),
            msg.channel_id,
            Some(guild_id),
        ));
        let user = Requester {
            id: msg.author.id.0,
            name: msg.author.name.clone(),
        };

        // Runs detached; the dispatcher logs the outcome
        let _ = self.dispatcher.dispatch(&msg.content, channel, user);
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "🤖 {} is connected! Shard: {:?} | Guilds: {}",
            ready.user.name,
            ready.shard,
            ready.guilds.len()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Birthday Bot v{}...", get_bot_version());

    let status = Arc::new(GatewayStatus::new(config.shard_count));
    let command_context = CommandContext::new(
        config.command_prefix.clone(),
        Arc::new(DefaultAnnouncements::default()),
        status.clone(),
    );

    let modules = create_all_modules(&command_context);
    let registry = CommandRegistry::build(&config.command_prefix, &modules)?;
    info!(
        "📚 Commands: {}",
        registry.command_names().collect::<Vec<_>>().join(", ")
    );
    let dispatcher = Dispatcher::new(Arc::new(registry));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler { dispatcher })
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    status.attach(client.cache_and_http.cache.clone());

    info!(
        "Establishing WebSocket connection to Discord gateway with {} shard(s)...",
        config.shard_count
    );

    if let Err(why) = client.start_shards(config.shard_count).await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
