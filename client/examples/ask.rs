use claire_client::{normalize, AnswersClient, ApiConfig, Documents};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ApiConfig::from_env()?;
    let client = AnswersClient::new(config);

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/policy.pdf".to_string());
    let questions = vec![
        "What is the grace period for premium payment?".to_string(),
        "Does this policy cover knee surgery?".to_string(),
    ];

    println!("🔍 Querying answer service for {}", url);
    let raw = client
        .get_answers(Documents::Single(url), questions.clone())
        .await?;
    println!("Raw response: {}", serde_json::to_string_pretty(&raw)?);

    println!("\n📋 Normalized answers:");
    for entry in normalize(&raw, &questions) {
        println!("\nQ: {}", entry.question);
        println!("A: {}", entry.answer);
    }

    println!("\n✅ Done");
    Ok(())
}
