/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Text Layout Configuration ===\n");

    println!("Text Settings:");
    println!("  Family: {:?}", config.text.family);
    println!("  Weight: {}", config.text.weight);
    println!("  Size: {}", config.text.size);
    println!("  Monospace: {}", config.text.monospace);
    println!("  Fallback Char: {:?}", config.text.fallback_char);
    println!("  Letter Spacing: {}", config.text.letter_spacing);
    println!("  Line Spacing: {}", config.text.line_spacing);
    println!("  Font Size Line Height: {}", config.text.font_size_line_height);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
