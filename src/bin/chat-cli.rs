use clap::{Parser, Subcommand};
use reqwest::Method;

use chat_endpoint::chat::{ChatReply, ErrorBody};

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Client for the mock LLM chat endpoint", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a chat message and print the reply
    Send {
        /// Message text
        message: String,
    },
    /// Issue a CORS preflight and print the allowed origins, methods and headers
    Preflight,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Send { message } => {
            let res = client
                .post(&cli.url)
                .json(&serde_json::json!({ "message": message }))
                .send()
                .await?;
            let status = res.status();
            let text = res.text().await?;

            if status.is_success() {
                let reply: ChatReply = serde_json::from_str(&text)?;
                println!("{}", reply.response);
                println!();
                println!("model: {} | tokens used: {}", reply.model, reply.tokens_used);
            } else {
                let detail = match serde_json::from_str::<ErrorBody>(&text) {
                    Ok(body) => body.error,
                    Err(_) => text,
                };
                return Err(format!("request failed ({}): {}", status, detail).into());
            }
        }
        Commands::Preflight => {
            let res = client.request(Method::OPTIONS, &cli.url).send().await?;
            println!("Status: {}", res.status());
            for (name, value) in res.headers() {
                if name.as_str().starts_with("access-control-") {
                    println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
                }
            }
        }
    }

    Ok(())
}
