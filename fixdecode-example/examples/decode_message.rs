//! Decodes one FIX message and prints it as JSON lines.
//!
//! ```text
//! FIXDECODE_MESSAGE='8=FIX.4.4|9=5|35=0|10=163|' cargo run --example decode_message
//! ```

use fixdecode::prelude::*;
use tracing::{info, warn};

use fixdecode_example::{ExampleConfig, init_logging};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();
    let dictionary = cfg.load_dictionary()?;

    let raw = normalize_delimiter(&cfg.message, &cfg.delimiter);
    let decoder = Decoder::new(&dictionary);
    let message = decoder.try_decode(&raw)?;

    info!(
        fields = message.len(),
        msg_type = message.msg_type_label().unwrap_or("unknown"),
        "decoded"
    );
    let report = message.report();
    if !report.body_length {
        warn!("BodyLength mismatch");
    }
    if !report.checksum {
        warn!("CheckSum mismatch");
    }

    println!("{}", render(&message)?);
    Ok(())
}
