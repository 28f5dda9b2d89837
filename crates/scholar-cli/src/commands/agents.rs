use anyhow::Result;
use scholar_config::AgentBinding;

pub fn execute(binding: &AgentBinding, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(binding)?);
    } else {
        println!("{}  {}", binding.name, binding.url);
        if !binding.description.is_empty() {
            println!("  {}", binding.description);
        }
    }
    Ok(())
}
