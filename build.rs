use std::path::Path;

const CONFIG_PATH: &str = "configs/reference_costs.json";

fn main() {
    let config_path = Path::new(CONFIG_PATH);
    validate_config_file(config_path);
    set_build_dependencies();
}

fn validate_config_file(config_path: &Path) {
    // Ensure the embedded configuration exists at build time
    assert!(
        config_path.exists(),
        "\n\nCOST CONFIG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the cost configuration before building.\n",
        config_path.display()
    );

    let contents = std::fs::read_to_string(config_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCOST CONFIG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            config_path.display()
        );
    });

    // Parse and validate JSON
    let config: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCOST CONFIG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            config_path.display()
        );
    });

    validate_config_structure(&config);
}

fn validate_config_structure(config: &serde_json::Value) {
    assert!(
        config.is_object(),
        "\n\nCOST CONFIG BUILD ERROR: Root must be a JSON object\n\
         Got: {config}\n"
    );
    assert!(
        config.get("version").and_then(serde_json::Value::as_str).is_some(),
        "\n\nCOST CONFIG BUILD ERROR: Missing string 'version' field\n"
    );

    let gap = config
        .get("gap")
        .and_then(serde_json::Value::as_object)
        .unwrap_or_else(|| {
            panic!("\n\nCOST CONFIG BUILD ERROR: 'gap' must be an object of symbol -> cost\n");
        });

    let substitution = config
        .get("substitution")
        .and_then(serde_json::Value::as_object)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCOST CONFIG BUILD ERROR: 'substitution' must be an object of symbol -> row\n"
            );
        });

    for (symbol, cost) in gap {
        validate_symbol(symbol);
        assert!(
            cost.is_i64(),
            "\n\nCOST CONFIG BUILD ERROR: Gap cost for '{symbol}' must be an integer\n"
        );
    }

    // Every ordered pair over the alphabet needs a cost
    for a in gap.keys() {
        let row = substitution
            .get(a)
            .and_then(serde_json::Value::as_object)
            .unwrap_or_else(|| {
                panic!("\n\nCOST CONFIG BUILD ERROR: Missing substitution row for '{a}'\n");
            });
        for b in gap.keys() {
            assert!(
                row.get(b).is_some_and(serde_json::Value::is_i64),
                "\n\nCOST CONFIG BUILD ERROR: Missing integer substitution cost for ('{a}', '{b}')\n"
            );
        }
    }

    println!(
        "cargo:warning=Validated cost configuration: {} symbols",
        gap.len()
    );
}

fn validate_symbol(symbol: &str) {
    assert!(
        symbol.len() == 1 && symbol.is_ascii() && symbol != "-",
        "\n\nCOST CONFIG BUILD ERROR: Invalid symbol '{symbol}'\n\
         Symbols must be single ASCII characters other than the gap marker '-'.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the configuration changes
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
