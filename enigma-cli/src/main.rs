#![deny(missing_docs)]
//! A command-line interface for the Enigma machine simulator.

use clap::{Parser, Subcommand, ValueEnum};
use enigma_core::alphabet::Letter;
use enigma_core::catalog;
use enigma_core::error::{ConfigError, EnigmaError};
use enigma_core::key_generator;
use enigma_core::machine::{Machine, ROTOR_COUNT, Stepping};
use enigma_core::session::Session;
use enigma_core::settings::{self, MachineSettings};
use log::{error, info};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a new key sheet\nenigma-cli --key ./key.json key generate\n\n# Show the current machine settings\nenigma-cli --key ./key.json key show\n\n# Encrypt a file, advancing the key sheet\nenigma-cli --key ./key.json encrypt ./message.txt\n\n# Decrypt using a metadata file\nenigma-cli --key ./key.json decrypt --metadata ./message.txt.enc.metadata.json --input ./message.txt.enc --output ./message.txt\n\n# Decrypt with the key sheet at its current positions\nenigma-cli --key ./key.json decrypt --input ./message.txt.enc --output ./message.txt\n\n# Type interactively, showing the signal path\nenigma-cli --key ./key.json type --trace"
)]
struct Cli {
    /// The path to the key sheet.
    #[arg(long, global = true)]
    key: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage key sheets
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// List the rotors and reflectors that key sheets can name
    Catalog,
    /// Encrypt a text file starting at the key sheet's rotor positions
    Encrypt {
        /// Path to the input file to encrypt
        #[arg()]
        input: PathBuf,

        /// Path to the output file. If omitted, uses the input filename with a .enc extension.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt a text file
    Decrypt {
        /// Path to the input file to decrypt
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the output file to save the decrypted content
        #[arg(short, long)]
        output: PathBuf,

        /// Path to the ciphertext metadata file. Its starting positions are applied to the key sheet's machine. If omitted, the key sheet's current positions are used.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Type on the machine: every line read from stdin is enciphered in one session
    Type {
        /// Print the signal path of every letter
        #[arg(long)]
        trace: bool,
    },
}

#[derive(Subcommand)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a key sheet with 10 plugboard cables\nenigma-cli --key ./key.json key generate\n\n# Generate a key sheet with the fast rotor on the left\nenigma-cli --key ./key.json key generate --stepping left-fast --pairs 6"
)]
enum KeyCommands {
    /// Generate a random key sheet
    Generate {
        /// The number of plugboard cables
        #[arg(short, long, default_value_t = 10)]
        pairs: usize,
        /// Which end of the rotor stack steps on every keypress
        #[arg(long, value_enum, default_value_t = SteppingArg::RightFast)]
        stepping: SteppingArg,
        /// Overwrite an existing key sheet
        #[arg(long)]
        force: bool,
    },
    /// Show the key sheet
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum SteppingArg {
    RightFast,
    LeftFast,
}

impl From<SteppingArg> for Stepping {
    fn from(arg: SteppingArg) -> Self {
        match arg {
            SteppingArg::RightFast => Self::RightFast,
            SteppingArg::LeftFast => Self::LeftFast,
        }
    }
}

/// Metadata stored alongside the ciphertext to enable correct decryption.
///
/// It names the key sheet and the starting rotor positions; the wiring and
/// cables stay in the key sheet.
#[derive(serde::Serialize, serde::Deserialize)]
struct CiphertextMetadata {
    key_id: String,
    start_positions: String,
    length: usize,
    ciphertext_hash: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Key { command } => {
            let key_path = require_key(cli.key.as_deref());
            match command {
                KeyCommands::Generate {
                    pairs,
                    stepping,
                    force,
                } => {
                    if key_path.exists() && !force {
                        error!(
                            "Key sheet '{}' already exists. Use --force to overwrite it.",
                            key_path.display()
                        );
                        std::process::exit(1);
                    }
                    let key = key_generator::generate_settings(*pairs, (*stepping).into());
                    if let Err(e) = settings::save_settings(&key_path, &key) {
                        error!("Failed to save key sheet: {e}");
                        std::process::exit(1);
                    }
                    info!("Generated key sheet at '{}'", key_path.display());
                    println!("{}", key.id);
                }
                KeyCommands::Show => {
                    let key = load_key(&key_path);
                    let machine = build_machine(&key);
                    let names: Vec<&str> = key.rotors.iter().map(|r| r.name.as_str()).collect();
                    let positions: Vec<String> = machine
                        .positions()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    let cables: Vec<String> = machine
                        .plugboard()
                        .pairs()
                        .iter()
                        .map(|(a, b)| format!("{a}{b}"))
                        .collect();

                    println!("Key Sheet: {}", key.id);
                    println!("{:-<40}", "");
                    println!("Rotors: {}", names.join(" "));
                    for (name, rotor) in names.iter().zip(machine.rotors()) {
                        println!("  {name:<4} {}  notch {}", rotor.wiring(), rotor.notch());
                    }
                    println!("Positions: {}", positions.join(" "));
                    println!(
                        "Reflector: {} {}",
                        key.reflector,
                        machine.reflector().wiring()
                    );
                    println!("Plugboard: {}", cables.join(" "));
                    println!("Stepping: {}", machine.stepping());
                }
            }
        }
        Commands::Catalog => {
            println!("Rotors:");
            for model in &catalog::ROTORS {
                println!("  {:<4} {}  notch {}", model.name, model.wiring, model.notch);
            }
            println!("Reflectors:");
            for model in &catalog::REFLECTORS {
                println!("  {:<4} {}", model.name, model.wiring);
            }
        }
        Commands::Encrypt { input, output } => {
            let key_path = require_key(cli.key.as_deref());
            let mut key = load_key(&key_path);
            let plaintext = read_text(input);
            let mut machine = build_machine(&key);

            let output = output.clone().unwrap_or_else(|| {
                let mut new_path = input.as_os_str().to_owned();
                new_path.push(".enc");
                PathBuf::from(new_path)
            });

            info!(
                "Encrypting '{}' with key sheet '{}' starting at {}.",
                input.display(),
                key.id,
                machine.position_string()
            );
            let ciphertext = machine.encrypt_sequence(&plaintext);
            if let Err(e) = fs::write(&output, &ciphertext) {
                error!("Failed to write output file: {e}");
                std::process::exit(1);
            }

            let metadata = CiphertextMetadata {
                key_id: key.id.clone(),
                start_positions: key.position_string(),
                length: ciphertext.chars().count(),
                ciphertext_hash: hash_text(&ciphertext),
            };
            let metadata_path = format!("{}.metadata.json", output.display());
            let metadata_str = serde_json::to_string_pretty(&metadata).unwrap_or_else(|e| {
                error!("Failed to serialize metadata: {e}");
                std::process::exit(1);
            });
            if let Err(e) = fs::write(&metadata_path, metadata_str) {
                error!("Failed to write metadata file: {e}");
                std::process::exit(1);
            }

            key.record_positions(&machine);
            if let Err(e) = settings::save_settings(&key_path, &key) {
                error!("Failed to save key sheet after encryption: {e}");
            }

            println!("Rotor positions are now {}", machine.position_string());
            println!(
                "Successfully encrypted file '{}' to '{}'",
                input.display(),
                output.display()
            );
            println!("Decryption metadata saved to '{metadata_path}'");
        }
        Commands::Decrypt {
            input,
            output,
            metadata,
        } => {
            let ciphertext = read_text(input);

            let key_path = require_key(cli.key.as_deref());
            let mut key = load_key(&key_path);
            let mut machine = build_machine(&key);

            let plaintext = if let Some(meta_path) = metadata {
                let metadata_str = fs::read_to_string(meta_path).unwrap_or_else(|e| {
                    error!("Failed to read metadata file: {e}");
                    std::process::exit(1);
                });
                let meta: CiphertextMetadata =
                    serde_json::from_str(&metadata_str).unwrap_or_else(|e| {
                        error!("Failed to parse metadata file: {e}");
                        std::process::exit(1);
                    });

                if meta.key_id != key.id {
                    error!(
                        "Ciphertext was encrypted with key sheet '{}', but '{}' holds key sheet '{}'. Aborting.",
                        meta.key_id,
                        key_path.display(),
                        key.id
                    );
                    std::process::exit(1);
                }
                if ciphertext.chars().count() != meta.length {
                    error!(
                        "Ciphertext length {} does not match metadata length {}. Aborting.",
                        ciphertext.chars().count(),
                        meta.length
                    );
                    std::process::exit(1);
                }
                if hash_text(&ciphertext) != meta.ciphertext_hash {
                    error!("Ciphertext hash does not match metadata hash. The file may be corrupt or tampered with. Aborting.");
                    std::process::exit(1);
                }
                let start = parse_positions(&meta.start_positions).unwrap_or_else(|e| {
                    error!("Invalid start positions in metadata: {e}");
                    std::process::exit(1);
                });
                machine.set_positions(start);
                info!(
                    "Decrypting with key sheet '{}' from {}.",
                    meta.key_id,
                    machine.position_string()
                );
                machine.encrypt_sequence(&ciphertext)
            } else {
                info!(
                    "Decrypting with key sheet '{}' at {}.",
                    key.id,
                    machine.position_string()
                );
                let plaintext = machine.encrypt_sequence(&ciphertext);
                key.record_positions(&machine);
                if let Err(e) = settings::save_settings(&key_path, &key) {
                    error!("Failed to save key sheet after decryption: {e}");
                }
                plaintext
            };

            if let Err(e) = fs::write(output, plaintext) {
                error!("Failed to write output file: {e}");
                std::process::exit(1);
            }
            println!(
                "Successfully decrypted file '{}' to '{}'",
                input.display(),
                output.display()
            );
        }
        Commands::Type { trace } => {
            let key_path = require_key(cli.key.as_deref());
            let key = load_key(&key_path);
            let mut session = Session::new();
            if let Err(e) = session.configure(&key) {
                error!("Invalid key sheet '{}': {e}", key_path.display());
                std::process::exit(1);
            }

            for line in io::stdin().lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    error!("Failed to read from stdin: {e}");
                    std::process::exit(1);
                });
                if let Err(e) = type_line(&mut session, &line, *trace) {
                    error!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Enciphers one line through the session and prints it with the rotor positions.
fn type_line(session: &mut Session, line: &str, trace: bool) -> Result<(), EnigmaError> {
    let ciphertext = if trace {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            match session.press_traced(c)? {
                Some(step) => {
                    println!("{step}");
                    out.push(step.output.to_char());
                }
                None => out.push(c),
            }
        }
        out
    } else {
        session.encrypt(line)?.ciphertext
    };
    println!("{ciphertext} [{}]", session.machine()?.position_string());
    Ok(())
}

/// Parses recorded rotor positions such as `"AAB"`, left to right.
fn parse_positions(text: &str) -> Result<[Letter; ROTOR_COUNT], ConfigError> {
    let letters = text
        .chars()
        .map(|c| Letter::parse("rotor position", &c.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    letters
        .try_into()
        .map_err(|given: Vec<Letter>| ConfigError::RotorCount(given.len()))
}

fn require_key(key: Option<&Path>) -> PathBuf {
    key.map_or_else(
        || {
            error!("A --key path is required for this command.");
            std::process::exit(1);
        },
        Path::to_path_buf,
    )
}

fn load_key(path: &Path) -> MachineSettings {
    settings::load_settings(path).unwrap_or_else(|e| {
        error!("Failed to load key sheet '{}': {e}", path.display());
        std::process::exit(1);
    })
}

fn build_machine(key: &MachineSettings) -> Machine {
    key.build().unwrap_or_else(|e| {
        error!("Invalid key sheet: {e}");
        std::process::exit(1);
    })
}

fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        error!("Failed to read '{}': {e}", path.display());
        std::process::exit(1);
    })
}

fn hash_text(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
