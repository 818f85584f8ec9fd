use clap::Parser;
use serde_json::json;

/// Register the bot's slash commands for one guild.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Bot token used for the Authorization header
    #[arg(long, env = "DISCORD_TOKEN")]
    token: String,
    /// Application (client) id owning the commands
    #[arg(long, env = "CLIENT_ID")]
    client_id: String,
    /// Guild to register the commands in
    #[arg(long, env = "GUILD_ID")]
    guild_id: String,
    /// Base URL of the platform REST API
    #[arg(long, env = "DISCORD_API", default_value = "https://discord.com/api/v10")]
    api_base: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Option type 3 is a string argument.
    let commands = json!([
        {
            "name": "chat",
            "description": "Ask the assistant",
            "options": [{
                "type": 3,
                "name": "prompt",
                "description": "What should I answer?",
                "required": true
            }]
        },
        {
            "name": "reset",
            "description": "Reset your conversation memory"
        }
    ]);

    let url = format!(
        "{}/applications/{}/guilds/{}/commands",
        args.api_base, args.client_id, args.guild_id
    );
    println!("Refreshing guild commands…");
    reqwest::Client::new()
        .put(&url)
        .header("Authorization", format!("Bot {}", args.token))
        .json(&commands)
        .send()
        .await?
        .error_for_status()?;
    println!("Slash commands registered to guild {}.", args.guild_id);
    Ok(())
}
