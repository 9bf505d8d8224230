//! Chevron CLI
//!
//! Normalizes generic-bracket spacing in Java, C# and C++ sources.

use chevronc::commands::{lex_file, run_format};

fn main() {
    chevronc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => {
            let code = run_format(&args[2..]);
            if code != 0 {
                std::process::exit(code);
            }
        }
        "lex" => {
            let mut lang = None;
            let mut file_path = None;

            let mut rest = args.iter().skip(2);
            while let Some(arg) = rest.next() {
                if let Some(name) = arg.strip_prefix("--lang=") {
                    lang = Some(name.to_string());
                } else if arg == "--lang" {
                    lang = rest.next().cloned();
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("Usage: chevron lex <file> [--lang java|cs|cpp]");
                std::process::exit(1);
            };

            if !lex_file(path, lang.as_deref()) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("chevron {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("chevron: generic-bracket spacing for Java, C# and C++");
    println!();
    println!("Usage: chevron <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt [paths...]       Normalize spacing in source files");
    println!("  lex <file>           Tokenize and display tokens with bracket roles");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Format options:");
    println!("  --check              Check if files are formatted (exit 1 if not)");
    println!("  --diff               Show diff output instead of modifying files");
    println!("  --stdin              Read from stdin, write to stdout");
    println!("  --no-ignore          Ignore .chevronignore files");
    println!("  --config <file>      Read spacing options from a file");
    println!("  --lang <name>        Force the language: java, cs, cpp");
    println!();
    println!("Examples:");
    println!("  chevron fmt                      # Format all files in .");
    println!("  chevron fmt --check src/         # Check formatting (for CI)");
    println!("  chevron fmt --diff Main.java     # Preview changes");
    println!("  chevron lex Main.java            # Show tokens and bracket roles");
}
