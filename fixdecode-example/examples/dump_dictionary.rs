//! Writes the embedded FIX 4.4 dictionary as a JSON document.
//!
//! The output can be edited and loaded back with `FIXDECODE_DICTIONARY`.

use fixdecode::dictionary::Dictionary;
use tracing::info;

use fixdecode_example::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();
    let dictionary = Dictionary::fix44();
    info!(
        fields = dictionary.len(),
        system_fields = dictionary.system_fields().count(),
        "dumping {}",
        dictionary.begin_string
    );
    println!("{}", dictionary.to_json()?);
    Ok(())
}
