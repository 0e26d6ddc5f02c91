use serde::Serialize;

use crate::cmd::{Context, NewTrackArgs, TracksArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, print_tracks, OutputFormat};

#[derive(Serialize)]
struct CountOutput {
    tracks: usize,
}

#[derive(Serialize)]
struct NewTrackOutput {
    kind: &'static str,
    index: usize,
}

pub fn run(args: TracksArgs, ctx: &Context) -> CliResult<i32> {
    let mut client = ctx.connect()?;

    if args.count {
        let tracks = client
            .track_count()
            .map_err(|err| client_error("track count failed", err))?;
        match ctx.format {
            OutputFormat::Json => print_json(&CountOutput { tracks }),
            _ => println!("{tracks}"),
        }
        return Ok(SUCCESS);
    }

    let tracks = client
        .tracks()
        .map_err(|err| client_error("track listing failed", err))?;
    print_tracks(&tracks, ctx.format);
    Ok(SUCCESS)
}

pub fn run_new(args: NewTrackArgs, ctx: &Context) -> CliResult<i32> {
    let mut client = ctx.connect()?;
    let index = client
        .create_track(args.kind)
        .map_err(|err| client_error("track creation failed", err))?;

    match ctx.format {
        OutputFormat::Json => print_json(&NewTrackOutput {
            kind: args.kind.as_str(),
            index,
        }),
        _ => println!("{index}"),
    }
    Ok(SUCCESS)
}
