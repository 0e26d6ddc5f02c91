use audpipe_client::{InfoFormat, InfoType, PipeConnection, ScriptClient, TrackKind};
use audpipe_transport::PipeEndpoints;
use clap::{Args, Subcommand};

use crate::exit::{client_error, CliResult};
use crate::output::OutputFormat;

pub mod call;
pub mod doctor;
pub mod info;
pub mod labels;
pub mod tracks;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one raw scripting command and print the reply.
    Call(CallArgs),
    /// Fetch GetInfo data for a category.
    Info(InfoArgs),
    /// List tracks.
    Tracks(TracksArgs),
    /// List label tracks and their labels.
    Labels(LabelsArgs),
    /// Append a label to a label track.
    AddLabel(AddLabelArgs),
    /// Create a new track and print its index.
    NewTrack(NewTrackArgs),
    /// Check that the script pipes are present.
    Doctor(DoctorArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Settings shared by every subcommand.
pub struct Context {
    pub endpoints: PipeEndpoints,
    pub format: OutputFormat,
}

impl Context {
    pub fn connect(&self) -> CliResult<ScriptClient<PipeConnection>> {
        ScriptClient::connect(self.endpoints.clone())
            .map_err(|err| client_error("connect failed", err))
    }
}

pub fn run(command: Command, ctx: &Context) -> CliResult<i32> {
    match command {
        Command::Call(args) => call::run(args, ctx),
        Command::Info(args) => info::run(args, ctx),
        Command::Tracks(args) => tracks::run(args, ctx),
        Command::Labels(args) => labels::run_list(args, ctx),
        Command::AddLabel(args) => labels::run_add(args, ctx),
        Command::NewTrack(args) => tracks::run_new(args, ctx),
        Command::Doctor(args) => doctor::run(args, ctx),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Command text, e.g. "Help: Command=Help".
    pub command: String,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Commands, Menus, Preferences, Tracks, Clips, Envelopes, Labels or Boxes.
    pub info_type: InfoType,
    /// Format requested from Audacity: JSON, LISP or Brief.
    #[arg(long, default_value = "JSON")]
    pub info_format: InfoFormat,
}

#[derive(Args, Debug, Default)]
pub struct TracksArgs {
    /// Print only the number of tracks.
    #[arg(long)]
    pub count: bool,
}

#[derive(Args, Debug, Default)]
pub struct LabelsArgs {
    /// Only show this track.
    #[arg(long)]
    pub track: Option<usize>,
}

#[derive(Args, Debug)]
pub struct AddLabelArgs {
    /// Index of the label track.
    pub track: usize,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Label text.
    pub text: String,
}

#[derive(Args, Debug)]
pub struct NewTrackArgs {
    /// Mono, Stereo, Label or Time.
    pub kind: TrackKind,
}

#[derive(Args, Debug, Default)]
pub struct DoctorArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
