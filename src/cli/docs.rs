use super::{build_client, effective_config, spinner};
use crate::agents::{DocsAgent, DocsContext};
use crate::Result;

/// Answer a documentation query and print the markdown response
pub async fn run(
    query: &str,
    current_file: Option<String>,
    endpoint: Option<String>,
    server: Option<String>,
) -> Result<()> {
    let config = effective_config(endpoint, server)?;
    let client = build_client(&config)?;

    let context = DocsContext { current_file };

    let pb = spinner("Querying ADK documentation...");
    let agent = DocsAgent::new(&client);
    let markdown = agent.answer(query, &context).await;
    pb.finish_and_clear();

    println!("{}", markdown);
    Ok(())
}
