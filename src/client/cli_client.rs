use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use emotion_docs::client::config::ClientConfig;
use emotion_docs::client::models::prediction::render_json;
use emotion_docs::client::services::prediction_service::PredictionService;

/// Prints the prediction for one sentence; returns false on failure.
async fn predict_and_print(service: &PredictionService, sentence: &str) -> bool {
    match service.predict(sentence).await {
        Ok(value) => {
            println!("{}", render_json(&value));
            true
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            false
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();
    config.apply_log_level();
    env_logger::init();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid prediction endpoint '{}': {}", config.predict_url(), e))?;
    let service = PredictionService::new(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let sentence = args.join(" ");
        if !predict_and_print(&service, &sentence).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("[CLIENT] Using {}. Type a sentence per line, Ctrl-D to quit.", service.predict_url());
    let mut input = BufReader::new(stdin());
    let mut line = String::new();
    loop {
        line.clear();
        print!("> ");
        use std::io::Write;
        std::io::stdout().flush()?;
        let n = input.read_line(&mut line).await?;
        if n == 0 {
            break;
        }
        let sentence = line.trim_end_matches(['\r', '\n']);
        if sentence.is_empty() {
            continue;
        }
        predict_and_print(&service, sentence).await;
    }
    Ok(())
}
