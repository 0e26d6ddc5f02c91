//! Create a label track and mark a few sections on it.
//!
//! Start Audacity with mod-script-pipe enabled, then run:
//!   cargo run --example label-track
//!
//! Set AUDPIPE_TO_PIPE / AUDPIPE_FROM_PIPE to use non-default pipe paths.

use audpipe::client::{LabelInterval, ScriptClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = ScriptClient::connect_default()?;

    let track = client.create_label_track()?;
    eprintln!("Created label track {track}");

    let sections = [
        LabelInterval::new(0.0, 8.0, "intro"),
        LabelInterval::new(8.0, 40.0, "verse"),
        LabelInterval::new(40.0, 56.0, "chorus"),
    ];
    client.add_labels(track, &sections)?;

    for label_track in client.label_tracks()? {
        eprintln!("Track {}:", label_track.index);
        for label in label_track.labels {
            eprintln!("  {:>8.3} {:>8.3}  {}", label.start, label.end, label.text);
        }
    }

    Ok(())
}
