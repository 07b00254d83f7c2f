use std::{env, fs, process};

use layer_reconcile::{ImpactLevel, JsonFragments, reconcile_layer};

/// Reconciles a layer with an edit of its base text: prints a hint for each
/// fragment, then the layer with every automatic patch applied.
///
/// The layer is a JSON array of fragments, each with a `location` such as
/// `"1.2"` (second token of the first line) or `"1.2-3.1"`.
///
/// Run it with:
/// `cargo run --example layer-hints old.txt new.txt layer.json [output.json]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        eprintln!("Usage: layer-hints <old text> <new text> <layer> [output]");
        process::exit(1);
    }

    let old_text = read(&args[1]);
    let new_text = read(&args[2]);
    let mut layer: JsonFragments = read(&args[3]).parse().unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {e}", args[3]);
        process::exit(1);
    });

    let hints = reconcile_layer(&mut layer, &old_text, &new_text);

    for hint in &hints {
        let verdict = match (hint.impact_level, hint.patch) {
            (ImpactLevel::Unaffected, _) => "ok",
            (ImpactLevel::Patchable, Some(patch)) if patch.source() == hint.location => "patched",
            _ => "review",
        };
        let location = hint.location.to_string();
        let description = hint.description.as_deref().unwrap_or_default();

        match hint.patch {
            Some(patch) => eprintln!("{location:<12} {verdict:<8} {description} ({patch})"),
            None => eprintln!("{location:<12} {verdict:<8} {description}"),
        }
    }

    let patched = serde_json::to_string_pretty(&layer.into_value()).unwrap_or_else(|e| {
        eprintln!("Error serializing the layer: {e}");
        process::exit(1);
    });

    if let Some(output_path) = args.get(4) {
        if let Err(e) = fs::write(output_path, patched) {
            eprintln!("Error writing to {output_path}: {e}");
            process::exit(1);
        }
    } else {
        println!("{patched}");
    }
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}
