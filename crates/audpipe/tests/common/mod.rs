//! In-process stand-in for Audacity's mod-script-pipe.
//!
//! Serves the command vocabulary audpipe emits over real FIFOs and keeps
//! just enough project state (tracks, selection, labels) to answer it the
//! way Audacity does.

#![allow(dead_code)]

use std::collections::HashMap;
use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use audpipe::transport::PipeEndpoints;
use serde_json::{json, Value};

pub type Label = (f64, f64, String);

#[derive(Debug, Clone)]
struct FakeTrack {
    name: String,
    kind: &'static str,
    selected: bool,
    labels: Vec<Label>,
}

#[derive(Debug, Default)]
struct HostState {
    tracks: Vec<FakeTrack>,
    selection: (f64, f64),
    received: Vec<String>,
}

pub struct FakeAudacity {
    dir: PathBuf,
    endpoints: PipeEndpoints,
    state: Arc<Mutex<HostState>>,
}

impl FakeAudacity {
    /// Create the FIFOs and start serving sessions on a background thread.
    ///
    /// Each client session runs until the client closes its command pipe;
    /// the host then waits for the next one.
    pub fn start(tag: &str) -> Self {
        let dir = unique_temp_dir(tag);
        let to_host = dir.join("to");
        let from_host = dir.join("from");
        make_fifo(&to_host);
        make_fifo(&from_host);

        let state = Arc::new(Mutex::new(HostState::default()));
        let served = Arc::clone(&state);
        let (to, from) = (to_host.clone(), from_host.clone());
        thread::spawn(move || serve(&to, &from, &served));

        Self {
            dir,
            endpoints: PipeEndpoints::new(to_host, from_host),
            state,
        }
    }

    pub fn endpoints(&self) -> PipeEndpoints {
        self.endpoints.clone()
    }

    pub fn to_pipe(&self) -> &Path {
        self.endpoints.to_host()
    }

    pub fn from_pipe(&self) -> &Path {
        self.endpoints.from_host()
    }

    /// Seed a track without going through the pipe.
    pub fn add_track(&self, kind: &'static str, labels: Vec<Label>) -> usize {
        let mut state = self.state.lock().expect("host state lock");
        state.push_track(kind);
        let index = state.tracks.len() - 1;
        state.tracks[index].labels = labels;
        index
    }

    /// Labels of `track` in host order.
    pub fn labels(&self, track: usize) -> Vec<Label> {
        let state = self.state.lock().expect("host state lock");
        state.tracks[track].labels.clone()
    }

    pub fn track_count(&self) -> usize {
        self.state.lock().expect("host state lock").tracks.len()
    }

    /// Every command received so far, without terminators.
    pub fn received(&self) -> Vec<String> {
        self.state.lock().expect("host state lock").received.clone()
    }
}

impl Drop for FakeAudacity {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn serve(to_host: &Path, from_host: &Path, state: &Mutex<HostState>) {
    loop {
        let Ok(commands) = File::open(to_host) else {
            return;
        };
        let Ok(mut replies) = OpenOptions::new().write(true).open(from_host) else {
            return;
        };
        let mut commands = BufReader::new(commands);

        let mut line = String::new();
        loop {
            line.clear();
            match commands.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }

            let command = line.trim_end_matches(['\r', '\n', '\0']);
            let reply = match state.lock() {
                Ok(mut state) => state.handle(command),
                Err(_) => return,
            };
            if replies.write_all(reply.as_bytes()).is_err() {
                break;
            }
        }
    }
}

impl HostState {
    fn handle(&mut self, command: &str) -> String {
        self.received.push(command.to_string());

        let (name, params) = match command.split_once(':') {
            Some((name, rest)) => (name, parse_params(rest)),
            None => (command, HashMap::new()),
        };

        let outcome = match name {
            "GetInfo" => self.get_info(&params),
            "NewMonoTrack" => Ok(self.push_track("wave")),
            "NewStereoTrack" => Ok(self.push_track("wave")),
            "NewLabelTrack" => Ok(self.push_track("label")),
            "NewTimeTrack" => Ok(self.push_track("time")),
            "SelectTracks" => self.select_tracks(&params),
            "SelectTime" => self.select_time(&params),
            "AddLabel" => self.add_label(),
            "SetLabel" => self.set_label(&params),
            _ => Err(format!("Your batch command of {name} was not recognized.")),
        };

        match outcome {
            Ok(body) => reply(&body, "OK"),
            Err(body) => reply(&body, "Failed!"),
        }
    }

    fn push_track(&mut self, kind: &'static str) -> String {
        let name = match kind {
            "label" => "Label",
            "time" => "Time Track",
            _ => "Audio",
        };
        self.tracks.push(FakeTrack {
            name: format!("{name} {}", self.tracks.len() + 1),
            kind,
            selected: false,
            labels: Vec::new(),
        });
        String::new()
    }

    fn get_info(&self, params: &HashMap<String, String>) -> Result<String, String> {
        let kind = params.get("Type").map(String::as_str).unwrap_or("Commands");
        let format = params.get("Format").map(String::as_str).unwrap_or("JSON");

        match (kind, format) {
            ("Tracks", "Brief") => Ok(self
                .tracks
                .iter()
                .map(|t| format!("\"{}\" {}", t.name, t.kind))
                .collect::<Vec<_>>()
                .join("\n")),
            ("Tracks", "JSON") => {
                let tracks: Vec<Value> = self
                    .tracks
                    .iter()
                    .map(|t| {
                        let mut value = json!({
                            "name": t.name,
                            "focused": 0,
                            "selected": u8::from(t.selected),
                            "kind": t.kind,
                        });
                        if t.kind == "wave" {
                            value["start"] = json!(0.0);
                            value["end"] = json!(0.0);
                            value["channels"] = json!(1);
                        }
                        value
                    })
                    .collect();
                Ok(Value::Array(tracks).to_string())
            }
            ("Labels", "JSON") => {
                let tracks: Vec<Value> = self
                    .tracks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.kind == "label")
                    .map(|(index, t)| {
                        let labels: Vec<Value> = t
                            .labels
                            .iter()
                            .map(|(start, end, text)| json!([start, end, text]))
                            .collect();
                        json!([index, labels])
                    })
                    .collect();
                Ok(Value::Array(tracks).to_string())
            }
            _ => Err(format!("GetInfo Type={kind} Format={format} not supported")),
        }
    }

    fn select_tracks(&mut self, params: &HashMap<String, String>) -> Result<String, String> {
        let track: usize = parse_number(params, "Track")?;
        if track >= self.tracks.len() {
            return Err(format!("Track {track} does not exist"));
        }
        for (index, t) in self.tracks.iter_mut().enumerate() {
            t.selected = index == track;
        }
        Ok(String::new())
    }

    fn select_time(&mut self, params: &HashMap<String, String>) -> Result<String, String> {
        let start: f64 = parse_number(params, "Start")?;
        let stop: f64 = parse_number(params, "Stop")?;
        self.selection = (start, stop);
        Ok(String::new())
    }

    fn add_label(&mut self) -> Result<String, String> {
        let (start, end) = self.selection;
        let track = self
            .tracks
            .iter_mut()
            .find(|t| t.selected && t.kind == "label")
            .ok_or_else(|| "No label track selected".to_string())?;
        let at = track.labels.partition_point(|(s, _, _)| *s < start);
        track.labels.insert(at, (start, end, String::new()));
        Ok(String::new())
    }

    fn set_label(&mut self, params: &HashMap<String, String>) -> Result<String, String> {
        let mut index: usize = parse_number(params, "Label")?;
        for track in self.tracks.iter_mut().filter(|t| t.kind == "label") {
            if index < track.labels.len() {
                let label = &mut track.labels[index];
                if let Some(text) = params.get("Text") {
                    label.2 = text.clone();
                }
                if params.contains_key("Start") {
                    label.0 = parse_number(params, "Start")?;
                }
                if params.contains_key("End") {
                    label.1 = parse_number(params, "End")?;
                }
                track
                    .labels
                    .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
                return Ok(String::new());
            }
            index -= track.labels.len();
        }
        Err("Label not found".to_string())
    }
}

fn reply(body: &str, status: &str) -> String {
    format!("{body}\nBatchCommand finished: {status}\n\n")
}

/// `Key=value Key="quoted value"` pairs.
fn parse_params(input: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut rest = input.trim_start();

    while let Some(eq) = rest.find('=') {
        let key = rest[..eq].trim().to_string();
        let after = &rest[eq + 1..];
        let (value, remainder) = match after.strip_prefix('"') {
            Some(quoted) => match quoted.find('"') {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                None => (quoted, ""),
            },
            None => match after.find(' ') {
                Some(end) => (&after[..end], &after[end..]),
                None => (after, ""),
            },
        };
        params.insert(key, value.to_string());
        rest = remainder.trim_start();
    }
    params
}

fn parse_number<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<T, String> {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("missing or invalid {key}"))
}

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/audpipe-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn make_fifo(path: &Path) {
    let c_path = CString::new(path.as_os_str().as_bytes()).expect("path has no NUL");
    // SAFETY: `c_path` is a valid NUL-terminated string for the call's duration.
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o600) };
    assert_eq!(rc, 0, "mkfifo {} failed", path.display());
}
