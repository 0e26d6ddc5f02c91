use audpipe_client::{LabelInterval, LabelRange};
use serde::Serialize;

use crate::cmd::{AddLabelArgs, Context, LabelsArgs};
use crate::exit::{client_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_json, print_label_tracks, OutputFormat};

#[derive(Serialize)]
struct AddLabelOutput<'a> {
    track: usize,
    label: &'a LabelInterval,
    range: Option<LabelRange>,
}

pub fn run_list(args: LabelsArgs, ctx: &Context) -> CliResult<i32> {
    let mut client = ctx.connect()?;
    let mut tracks = client
        .label_tracks()
        .map_err(|err| client_error("label listing failed", err))?;

    if let Some(track) = args.track {
        tracks.retain(|t| t.index == track);
        if tracks.is_empty() {
            return Err(CliError::new(
                USAGE,
                format!("track {track} is not a label track"),
            ));
        }
    }

    print_label_tracks(&tracks, ctx.format);
    Ok(SUCCESS)
}

pub fn run_add(args: AddLabelArgs, ctx: &Context) -> CliResult<i32> {
    if args.start.is_nan() || args.start < 0.0 {
        return Err(CliError::new(USAGE, "start time must be zero or positive"));
    }

    let label = LabelInterval::new(args.start, args.end, args.text);
    let mut client = ctx.connect()?;
    client
        .add_label(args.track, &label)
        .map_err(|err| client_error("add label failed", err))?;

    let range = client
        .label_range(args.track)
        .map_err(|err| client_error("label listing failed", err))?;

    match ctx.format {
        OutputFormat::Json => print_json(&AddLabelOutput {
            track: args.track,
            label: &label,
            range,
        }),
        _ => match range {
            Some(range) => println!(
                "track {} now has {} labels (first index {})",
                args.track, range.count, range.first
            ),
            None => println!("label added to track {}", args.track),
        },
    }
    Ok(SUCCESS)
}
