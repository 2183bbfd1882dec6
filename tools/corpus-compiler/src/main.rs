use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use bridge_protocol::{Lexicon, Timeline};
use rkyv::ser::{serializers::AllocSerializer, Serializer};

#[derive(Parser)]
#[command(author, version, about = "Compiles the JSON corpus to rkyv binaries for the site")]
struct Cli {
    /// JSON lexicon file; the built-in seed lexicon is compiled when omitted
    #[arg(short, long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// JSON timeline file; the built-in seed timeline is compiled when omitted
    #[arg(short, long, value_name = "FILE")]
    timeline: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let lexicon: Lexicon = match &cli.lexicon {
        Some(path) => {
            println!("📖 Reading lexicon JSON from {:?}...", path);
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => {
            println!("📖 Using the built-in seed lexicon...");
            bridge_lookup::seed::seed_lexicon()
        }
    };
    lexicon.validate()?;

    let timeline: Timeline = match &cli.timeline {
        Some(path) => {
            println!("📖 Reading timeline JSON from {:?}...", path);
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => {
            println!("📖 Using the built-in seed timeline...");
            bridge_timeline::seed::seed_timeline()
        }
    };
    timeline.validate()?;

    fs::create_dir_all(&cli.out_dir)?;

    println!(
        "⚙️  Compiling lexicon version {} with {} entries...",
        lexicon.version,
        lexicon.entries.len()
    );
    write_archive(&lexicon, &cli.out_dir.join("lexicon.rkyv"))?;

    println!(
        "⚙️  Compiling timeline version {} with {} events...",
        timeline.version,
        timeline.events.len()
    );
    write_archive(&timeline, &cli.out_dir.join("timeline.rkyv"))?;

    println!("✅ Success! Binaries written to {:?}", cli.out_dir);
    Ok(())
}

fn write_archive<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: rkyv::Serialize<AllocSerializer<256>>,
{
    let mut serializer = AllocSerializer::<256>::default();
    serializer.serialize_value(value).expect("Failed to rkyv serialize");
    let bytes = serializer.into_serializer().into_inner();

    fs::write(path, bytes)?;
    Ok(())
}
