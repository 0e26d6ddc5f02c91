use std::io::IsTerminal;

use audpipe_client::{InfoReply, LabelTrack, Reply, Status, TrackInfo};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

#[derive(Serialize)]
struct ReplyOutput<'a> {
    command: &'a str,
    status: &'a str,
    body: &'a str,
}

pub fn status_text(status: &Status) -> &str {
    match status {
        Status::Success => "OK",
        Status::Failure => "Failed!",
        Status::Unrecognized(token) => token,
    }
}

pub fn print_reply(command: &str, reply: &Reply, format: OutputFormat) {
    let status = status_text(&reply.status);
    match format {
        OutputFormat::Json => print_json(&ReplyOutput {
            command,
            status,
            body: &reply.body,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["COMMAND", "STATUS", "BODY"]);
            table.add_row(vec![command, status, reply.body.as_str()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if !reply.body.is_empty() {
                println!("{}", reply.body);
            }
            println!("status={status}");
        }
        OutputFormat::Raw => println!("{}", reply.body),
    }
}

pub fn print_info(reply: &InfoReply, format: OutputFormat) {
    match (reply, format) {
        (InfoReply::Json(value), OutputFormat::Table | OutputFormat::Pretty) => println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        ),
        (InfoReply::Json(value), _) => println!("{value}"),
        (InfoReply::Text(text), OutputFormat::Json) => print_json(text),
        (InfoReply::Text(text), _) => println!("{text}"),
    }
}

#[derive(Serialize)]
struct TrackRow<'a> {
    index: usize,
    #[serde(flatten)]
    track: &'a TrackInfo,
}

pub fn print_tracks(tracks: &[TrackInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let rows: Vec<TrackRow<'_>> = tracks
                .iter()
                .enumerate()
                .map(|(index, track)| TrackRow { index, track })
                .collect();
            print_json(&rows);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "NAME", "KIND", "SELECTED", "START", "END"]);
            for (index, track) in tracks.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    track.name.clone(),
                    track.kind.clone(),
                    yes_no(track.selected).to_string(),
                    seconds(track.start),
                    seconds(track.end),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, track) in tracks.iter().enumerate() {
                println!("{index:>3}  {:<8} {}", track.kind, track.name);
            }
        }
        OutputFormat::Raw => {
            for track in tracks {
                println!("{}", track.name);
            }
        }
    }
}

pub fn print_label_tracks(tracks: &[LabelTrack], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&tracks),
        OutputFormat::Table => {
            let mut table = new_table(vec!["TRACK", "LABEL", "START", "END", "TEXT"]);
            let mut label_index = 0usize;
            for track in tracks {
                for label in &track.labels {
                    table.add_row(vec![
                        track.index.to_string(),
                        label_index.to_string(),
                        format!("{:.6}", label.start),
                        format!("{:.6}", label.end),
                        label.text.clone(),
                    ]);
                    label_index += 1;
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for track in tracks {
                println!("track {} ({} labels)", track.index, track.labels.len());
                for label in &track.labels {
                    println!("  {:>10.3} {:>10.3}  {}", label.start, label.end, label.text);
                }
            }
        }
        OutputFormat::Raw => {
            for track in tracks {
                for label in &track.labels {
                    println!("{}\t{}\t{}", label.start, label.end, label.text);
                }
            }
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn seconds(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_else(|| "-".to_string())
}
