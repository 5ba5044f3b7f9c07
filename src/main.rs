use std::fs;
use std::path::PathBuf;
use std::process;

use chordsheet::song::render_text;
use chordsheet::{chord_on_keyboard, format_chord, parse_song, ChordSheetError, ChordSymbol, NameStyle};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chordsheet", version, about = "Parse chord sheets and inspect chords")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a chord sheet and print it (or its structure as JSON)
    Song {
        file: PathBuf,
        /// Semitones to transpose by, added to the song's own `transpose` setting
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        transpose: i32,
        /// Print the parsed song as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show names, pitches and keyboard range of one chord
    Chord {
        symbol: String,
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        transpose: i32,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Song { file, transpose, json } => run_song(file, transpose, json),
        Command::Chord { symbol, transpose } => run_chord(&symbol, transpose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_song(path: PathBuf, transpose: i32, json: bool) -> Result<(), ChordSheetError> {
    let source = fs::read_to_string(&path).map_err(|source| ChordSheetError::Io { path, source })?;
    let mut song = parse_song(&source);
    song.assign_ids(1);

    let offset = song.metadata.transpose + transpose;
    if json {
        let song = chordsheet::transpose_song(&song, offset);
        println!("{}", serde_json::to_string_pretty(&song)?);
    } else {
        if let Some(title) = &song.metadata.title {
            println!("{}", title);
            println!();
        }
        print!("{}", render_text(&song, offset));
    }
    Ok(())
}

fn run_chord(symbol: &str, transpose: i32) -> Result<(), ChordSheetError> {
    let chord: ChordSymbol = symbol.parse()?;
    let (tones, range) = chord_on_keyboard(&chord, transpose);

    println!("{}", format_chord(&chord, NameStyle::Short, transpose));
    println!("{}", format_chord(&chord, NameStyle::Long, transpose));
    println!("pressed:  {:?}", tones.pressed);
    if let Some(bass) = tones.bass {
        println!("bass:     {}", bass);
    }
    println!("keyboard: {}..={}", range.start, range.end);
    Ok(())
}
