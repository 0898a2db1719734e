use std::fs;
use std::io::{self, Read};

use ratatui::{backend::CrosstermBackend, Terminal};

use tokenexplorer::print::render_print;
use tokenexplorer::ui::{App, TerminalGuard};
use tokenexplorer::{Encoding, Explorer, TiktokenTokenizer};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_INPUT: &str = "Testy testy woo";

struct Args {
    encoding: String,
    vocab: Option<String>,
    print: bool,
    json: bool,
    help: bool,
    version: bool,
    texts: Vec<String>,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        encoding: Encoding::default().name().to_string(),
        vocab: std::env::var("TOKEN_EXPLORER_VOCAB").ok(),
        print: false,
        json: false,
        help: false,
        version: false,
        texts: Vec::new(),
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-V" | "--version" => args.version = true,
            "-h" | "--help" => args.help = true,
            "-p" | "--print" => args.print = true,
            "--json" => args.json = true,
            "-e" | "--encoding" => {
                i += 1;
                if i >= argv.len() {
                    eprintln!("Error: --encoding requires a value");
                    std::process::exit(1);
                }
                args.encoding = argv[i].clone();
            }
            "--vocab" => {
                i += 1;
                if i >= argv.len() {
                    eprintln!("Error: --vocab requires a value");
                    std::process::exit(1);
                }
                args.vocab = Some(argv[i].clone());
            }
            "--" => {
                args.texts.extend(argv[i + 1..].iter().cloned());
                break;
            }
            s if s.starts_with('-') && s.len() > 1 => {
                eprintln!("Error: unknown option: {}", s);
                std::process::exit(1);
            }
            _ => args.texts.push(argv[i].clone()),
        }
        i += 1;
    }
    args
}

fn print_help() {
    let names: Vec<&str> = Encoding::ALL.iter().map(|e| e.name()).collect();
    println!(
        "Usage: tokenexplorer [options] [text...]\n\
         \n\
         Explore how text splits into tokens and what each bit of a token ID does.\n\
         \n\
         Options:\n\
         \x20 -e, --encoding <name>  Encoding (default: {})\n\
         \x20 --vocab <file>         Load ranks from a .tiktoken file\n\
         \x20 -p, --print            Print tokens instead of opening the explorer\n\
         \x20 --json                 With --print, emit one JSON object per input\n\
         \x20 -V, --version          Show version\n\
         \x20 -h, --help             Show this help\n\
         \n\
         Encodings: {}\n\
         \n\
         Without --print the words given form the initial text (default: \"{}\").\n\
         With --print each argument is tokenized separately; stdin is read when\n\
         there are none.\n\
         \n\
         The vocabulary comes from --vocab, then TOKEN_EXPLORER_VOCAB, then the\n\
         copy embedded at build time from TOKEN_EXPLORER_MODELS.",
        Encoding::default().name(),
        names.join(", "),
        DEFAULT_INPUT
    );
}

fn load_tokenizer(encoding: Encoding, vocab: Option<&str>) -> TiktokenTokenizer {
    let loaded = match vocab {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            });
            TiktokenTokenizer::from_tiktoken(encoding, &text)
        }
        None => TiktokenTokenizer::from_embedded(encoding),
    };
    match loaded {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error loading {}: {}", encoding.name(), e);
            std::process::exit(1);
        }
    }
}

fn run_print(tok: &TiktokenTokenizer, texts: Vec<String>, json: bool) {
    let inputs = if texts.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
        vec![buf]
    } else {
        texts
    };

    print!("{}", render_print(tok, inputs, json));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    if args.version {
        println!("tokenexplorer {}", VERSION);
        return Ok(());
    }
    if args.help {
        print_help();
        return Ok(());
    }

    let Some(encoding) = Encoding::from_name(&args.encoding) else {
        let names: Vec<&str> = Encoding::ALL.iter().map(|e| e.name()).collect();
        eprintln!(
            "Error: unknown encoding '{}'\nAvailable: {}",
            args.encoding,
            names.join(", ")
        );
        std::process::exit(1);
    };

    let tok = load_tokenizer(encoding, args.vocab.as_deref());

    if args.print {
        run_print(&tok, args.texts, args.json);
        return Ok(());
    }

    let input = if args.texts.is_empty() {
        DEFAULT_INPUT.to_string()
    } else {
        args.texts.join(" ")
    };
    eprintln!(
        "Loaded {} ({} tokens in vocabulary)",
        encoding.name(),
        tok.vocab_size()
    );

    // Set up terminal; the guard restores it on return or panic
    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Explorer::new(&tok, input));
    let res = app.run(&mut terminal);
    drop(guard);

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
