//! The `judgebeer init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create judgebeer.toml
    if std::path::Path::new("judgebeer.toml").exists() {
        println!("judgebeer.toml already exists, skipping.");
    } else {
        std::fs::write("judgebeer.toml", SAMPLE_CONFIG)?;
        println!("Created judgebeer.toml");
    }

    // Create example sheet
    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: judgebeer taste");
    println!("  2. Or fill in a sheet and run: judgebeer score --sheet sheets/example.toml");
    println!("  3. Check sheets with: judgebeer validate --sheet sheets");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# judgebeer configuration

# Label language: "zh" or "en"
locale = "zh"

# Overlay between wizard steps
show_transitions = true
transition_ms = 2000

# "extended" averages every attribute; "classic" only the core ones
schema = "extended"

output_dir = "./judgebeer-reports"
"#;

const EXAMPLE_SHEET: &str = r#"# Scores run from 1 to 5. Anything left out counts as 3.

[beer]
name = "Example IPA"
style = "IPA"
brewery = "Example Brewing"
drink_date = "2024-06-01"
package_date = "2024-05-15"

[appearance]
color = 3.5
clarity = 2.4
head = 4
headColor = 2
headTexture = 4
headRetention = 3.5
viscosity = 2.5
hasHopSediment = false

[aroma]
malt = 3
hops = 5
yeast = 2
fruity = 4
floral = 4
oxidized = 1
skunky = 1

[taste]
sweet = 2
bitter = 4
maltFlavor = 3
hopFlavor = 5

[mouthfeel]
body = 3
carbonation = 4
finish = 4

[overall]
balance = 4
complexity = 3
enjoyment = 4
"#;
